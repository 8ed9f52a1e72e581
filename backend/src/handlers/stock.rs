//! HTTP handlers for single-unit stock adjustments

use axum::{
    extract::{Path, State},
    response::Redirect,
};
use axum_extra::extract::WithRejection;
use serde::Deserialize;
use shared::{parse_id, StockAdjustment};

use super::views;
use crate::error::{AppError, AppResult};
use crate::services::inventory::InventoryService;
use crate::AppState;

/// Path of `/add/:product_id` and `/reduce/:product_id`
///
/// The stock buttons may append the view they were pressed from; the
/// redirect always lands on the summary, so that segment is not read.
#[derive(Debug, Deserialize)]
pub struct StockPath {
    pub product_id: String,
}

impl StockPath {
    fn product_id(&self) -> AppResult<i64> {
        parse_id(Some(self.product_id.as_str()))
            .map_err(|msg| AppError::validation("product_id", msg))
    }
}

/// Increase a product's stock by one
pub async fn add_stock(
    State(state): State<AppState>,
    WithRejection(Path(path), _): WithRejection<Path<StockPath>, AppError>,
) -> AppResult<Redirect> {
    let product_id = path.product_id()?;
    let service = InventoryService::new(state.db);
    service
        .adjust_quantity(product_id, StockAdjustment::Add)
        .await?;
    Ok(Redirect::to(views::SUMMARY))
}

/// Decrease a product's stock by one
pub async fn reduce_stock(
    State(state): State<AppState>,
    WithRejection(Path(path), _): WithRejection<Path<StockPath>, AppError>,
) -> AppResult<Redirect> {
    let product_id = path.product_id()?;
    let service = InventoryService::new(state.db);
    service
        .adjust_quantity(product_id, StockAdjustment::Reduce)
        .await?;
    Ok(Redirect::to(views::SUMMARY))
}
