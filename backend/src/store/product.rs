//! Product records

use shared::{Product, MAX_QUANTITY};
use sqlx::{FromRow, SqliteConnection};

use super::{violation, Entity, StoreError, StoreResult, Violation};

const PRODUCT_COLUMNS: &str = "id, name, quantity, location_id";

#[derive(Debug, FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    quantity: i64,
    location_id: Option<i64>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: row.id,
            name: row.name,
            quantity: row.quantity,
            location_id: row.location_id,
        }
    }
}

/// Validated values for a new product
#[derive(Debug, Clone)]
pub struct NewProduct<'a> {
    pub name: &'a str,
    pub quantity: i64,
    pub location_id: Option<i64>,
}

/// Field updates for an existing product; `None` leaves a column unchanged
#[derive(Debug, Clone, Default)]
pub struct ProductChanges<'a> {
    pub name: Option<&'a str>,
    pub quantity: Option<i64>,
    pub location_id: Option<i64>,
}

/// Map a failed product write onto the store taxonomy.
///
/// The schema's unique index and foreign key are the only checks on these
/// writes, so a transaction that starts with one never reads first.
fn product_write_error(err: sqlx::Error, location_id: Option<i64>) -> StoreError {
    match violation(&err) {
        Some(Violation::Unique) => StoreError::Duplicate(Entity::Product),
        Some(Violation::ForeignKey) => StoreError::InvalidLocation(location_id.unwrap_or_default()),
        None => StoreError::Database(err),
    }
}

pub async fn create_product(
    conn: &mut SqliteConnection,
    new: &NewProduct<'_>,
) -> StoreResult<Product> {
    let row = sqlx::query_as::<_, ProductRow>(&format!(
        "INSERT INTO products (name, quantity, location_id) VALUES (?, ?, ?) RETURNING {}",
        PRODUCT_COLUMNS
    ))
    .bind(new.name)
    .bind(new.quantity)
    .bind(new.location_id)
    .fetch_one(&mut *conn)
    .await
    .map_err(|e| product_write_error(e, new.location_id))?;

    Ok(row.into())
}

pub async fn get_product(conn: &mut SqliteConnection, id: i64) -> StoreResult<Product> {
    sqlx::query_as::<_, ProductRow>(&format!(
        "SELECT {} FROM products WHERE id = ?",
        PRODUCT_COLUMNS
    ))
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?
    .map(Product::from)
    .ok_or(StoreError::NotFound(Entity::Product))
}

pub async fn product_exists(conn: &mut SqliteConnection, id: i64) -> StoreResult<bool> {
    let exists =
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM products WHERE id = ?)")
            .bind(id)
            .fetch_one(&mut *conn)
            .await?;
    Ok(exists)
}

/// All products in insertion order
pub async fn list_products(conn: &mut SqliteConnection) -> StoreResult<Vec<Product>> {
    let rows = sqlx::query_as::<_, ProductRow>(&format!(
        "SELECT {} FROM products ORDER BY id",
        PRODUCT_COLUMNS
    ))
    .fetch_all(&mut *conn)
    .await?;
    Ok(rows.into_iter().map(Product::from).collect())
}

pub async fn list_products_by_location(
    conn: &mut SqliteConnection,
    location_id: i64,
) -> StoreResult<Vec<Product>> {
    let rows = sqlx::query_as::<_, ProductRow>(&format!(
        "SELECT {} FROM products WHERE location_id = ? ORDER BY id",
        PRODUCT_COLUMNS
    ))
    .bind(location_id)
    .fetch_all(&mut *conn)
    .await?;
    Ok(rows.into_iter().map(Product::from).collect())
}

/// Apply field changes in one statement
pub async fn update_product(
    conn: &mut SqliteConnection,
    id: i64,
    changes: &ProductChanges<'_>,
) -> StoreResult<Product> {
    sqlx::query_as::<_, ProductRow>(&format!(
        r#"
        UPDATE products
        SET name = COALESCE(?, name),
            quantity = COALESCE(?, quantity),
            location_id = COALESCE(?, location_id)
        WHERE id = ?
        RETURNING {}
        "#,
        PRODUCT_COLUMNS
    ))
    .bind(changes.name)
    .bind(changes.quantity)
    .bind(changes.location_id)
    .bind(id)
    .fetch_optional(&mut *conn)
    .await
    .map_err(|e| product_write_error(e, changes.location_id))?
    .map(Product::from)
    .ok_or(StoreError::NotFound(Entity::Product))
}

/// Add `delta` to a product's quantity unless the result would leave
/// `0..=MAX_QUANTITY`.
///
/// Returns the new quantity, or `None` when no row was changed: either the
/// product does not exist or the guard refused the update.
pub async fn apply_quantity_delta(
    conn: &mut SqliteConnection,
    id: i64,
    delta: i64,
) -> StoreResult<Option<i64>> {
    let quantity = sqlx::query_scalar::<_, i64>(
        r#"
        UPDATE products SET quantity = quantity + ?
        WHERE id = ? AND quantity + ? BETWEEN 0 AND ?
        RETURNING quantity
        "#,
    )
    .bind(delta)
    .bind(id)
    .bind(delta)
    .bind(MAX_QUANTITY)
    .fetch_optional(&mut *conn)
    .await?;
    Ok(quantity)
}

pub async fn delete_product(conn: &mut SqliteConnection, id: i64) -> StoreResult<()> {
    let result = sqlx::query("DELETE FROM products WHERE id = ?")
        .bind(id)
        .execute(&mut *conn)
        .await?;

    if result.rows_affected() == 0 {
        return Err(StoreError::NotFound(Entity::Product));
    }
    Ok(())
}
