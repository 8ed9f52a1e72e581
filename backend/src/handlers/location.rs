//! HTTP handlers for the locations view

use axum::{
    extract::{Path, Query, State},
    response::Redirect,
    Form, Json,
};
use axum_extra::extract::WithRejection;
use serde::{Deserialize, Serialize};
use shared::{parse_id, Location, LocationInventory, ProductSummary};

use super::views;
use crate::error::{AppError, AppResult};
use crate::services::inventory::{AddLocationInput, InventoryService};
use crate::AppState;

/// List all locations
pub async fn list_locations(State(state): State<AppState>) -> AppResult<Json<Vec<Location>>> {
    let service = InventoryService::new(state.db);
    let locations = service.list_locations().await?;
    Ok(Json(locations))
}

/// Add a location from a form post
pub async fn create_location(
    State(state): State<AppState>,
    WithRejection(Form(input), _): WithRejection<Form<AddLocationInput>, AppError>,
) -> AppResult<Redirect> {
    let service = InventoryService::new(state.db);
    service.add_location(input).await?;
    Ok(Redirect::to(views::LOCATIONS))
}

/// Products stored at one location
pub async fn get_location_inventory(
    State(state): State<AppState>,
    WithRejection(Path(location_id), _): WithRejection<Path<String>, AppError>,
) -> AppResult<Json<LocationInventory>> {
    let location_id = parse_id(Some(location_id.as_str()))
        .map_err(|msg| AppError::validation("location_id", msg))?;
    let service = InventoryService::new(state.db);
    let inventory = service.list_by_location(location_id).await?;
    Ok(Json(inventory))
}

#[derive(Debug, Deserialize)]
pub struct LocationFilter {
    #[serde(alias = "loc_id")]
    pub location_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProductsByLocationResponse {
    pub products: Vec<ProductSummary>,
}

/// Structured product list for refreshing the UI without a page load
pub async fn get_products_by_location(
    State(state): State<AppState>,
    WithRejection(Query(filter), _): WithRejection<Query<LocationFilter>, AppError>,
) -> AppResult<Json<ProductsByLocationResponse>> {
    let service = InventoryService::new(state.db);
    let products = service
        .products_at_location(filter.location_id.as_deref())
        .await?;
    Ok(Json(ProductsByLocationResponse { products }))
}
