//! HTTP handlers for the stock (product) view

use axum::{extract::State, response::Redirect, Form, Json};
use axum_extra::extract::WithRejection;
use shared::InventoryOverview;

use super::views;
use crate::error::{AppError, AppResult};
use crate::services::inventory::{AddProductInput, InventoryService};
use crate::AppState;

/// Every product and location, backing both the summary and stock views
pub async fn inventory_overview(
    State(state): State<AppState>,
) -> AppResult<Json<InventoryOverview>> {
    let service = InventoryService::new(state.db);
    let overview = service.overview().await?;
    Ok(Json(overview))
}

/// Add a product from a form post
pub async fn create_product(
    State(state): State<AppState>,
    WithRejection(Form(input), _): WithRejection<Form<AddProductInput>, AppError>,
) -> AppResult<Redirect> {
    let service = InventoryService::new(state.db);
    service.add_product(input).await?;
    Ok(Redirect::to(views::STOCK))
}
