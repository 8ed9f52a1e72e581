//! Database pool construction and schema bootstrap

use std::{str::FromStr, time::Duration};

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::config::DatabaseConfig;

/// Statements are idempotent so they can run on every startup
const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS locations (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT UNIQUE NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS products (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT UNIQUE NOT NULL,
        quantity INTEGER NOT NULL CHECK (quantity BETWEEN 0 AND 1000000000),
        location_id INTEGER REFERENCES locations (id)
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_products_location_id ON products (location_id)",
];

/// Open a pool for the configured database, creating the file if needed
pub async fn connect(config: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.url)?
        .create_if_missing(true)
        .foreign_keys(true);

    // Each in-memory connection is its own database, so keep exactly one alive
    let pool_options = if config.is_in_memory() {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
    };

    pool_options
        .acquire_timeout(Duration::from_secs(30))
        .connect_with(options)
        .await
}

/// Create tables and indexes that do not exist yet
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for &statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }
    tracing::debug!("Database schema ready");
    Ok(())
}

/// Connect and bootstrap the schema in one step
pub async fn setup(config: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    let pool = connect(config).await?;
    init_schema(&pool).await?;
    Ok(pool)
}
