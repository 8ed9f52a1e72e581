//! Route definitions for the Stockroom server

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create the inventory routes
pub fn inventory_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::inventory_overview))
        .route(
            "/product",
            get(handlers::inventory_overview).post(handlers::create_product),
        )
        .route(
            "/location",
            get(handlers::list_locations).post(handlers::create_location),
        )
        .route("/location/:location_id", get(handlers::get_location_inventory))
        .route(
            "/get-products-by-location",
            get(handlers::get_products_by_location),
        )
        .route("/delete", get(handlers::delete_record))
        .route("/edit", post(handlers::edit_record))
        .route("/add/:product_id", post(handlers::add_stock))
        .route("/add/:product_id/:view", post(handlers::add_stock))
        .route("/reduce/:product_id", post(handlers::reduce_stock))
        .route("/reduce/:product_id/:view", post(handlers::reduce_stock))
        .route("/health", get(handlers::health_check))
}
