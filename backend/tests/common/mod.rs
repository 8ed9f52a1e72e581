//! Shared helpers for integration tests

#![allow(dead_code)]

use std::sync::Arc;

use sqlx::SqlitePool;
use stockroom_backend::{
    config::{Config, DatabaseConfig},
    create_app, db,
    services::inventory::{AddLocationInput, AddProductInput, InventoryService},
    AppState,
};

/// Fresh in-memory database with the schema applied
pub async fn test_pool() -> SqlitePool {
    db::setup(&Config::in_memory().database)
        .await
        .expect("in-memory database should open")
}

/// Database file in a scratch directory, shared by a pool of `connections`
///
/// Keep the returned directory alive for as long as the pool is used.
pub async fn file_pool(connections: u32) -> (SqlitePool, tempfile::TempDir) {
    let dir = tempfile::tempdir().expect("scratch directory should be created");
    let config = DatabaseConfig {
        url: format!("sqlite://{}", dir.path().join("stockroom.db").display()),
        max_connections: connections,
        min_connections: 1,
    };
    let pool = db::setup(&config)
        .await
        .expect("file database should open");
    (pool, dir)
}

pub async fn test_service() -> InventoryService {
    InventoryService::new(test_pool().await)
}

/// Router wired to its own in-memory database, plus a handle on that database
pub async fn test_app() -> (axum::Router, SqlitePool) {
    let pool = test_pool().await;
    let state = AppState {
        db: pool.clone(),
        config: Arc::new(Config::in_memory()),
    };
    (create_app(state), pool)
}

pub fn product_input(name: &str, quantity: &str, location_id: Option<i64>) -> AddProductInput {
    AddProductInput {
        name: Some(name.to_string()),
        quantity: Some(quantity.to_string()),
        location_id: location_id.map(|id| id.to_string()),
    }
}

pub fn location_input(name: &str) -> AddLocationInput {
    AddLocationInput {
        name: Some(name.to_string()),
    }
}

pub async fn count_rows(pool: &SqlitePool, table: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(pool)
        .await
        .expect("count query should succeed")
}
