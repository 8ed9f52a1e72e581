//! Location records

use shared::Location;
use sqlx::{FromRow, SqliteConnection};

use super::{violation, Entity, StoreError, StoreResult, Violation};

#[derive(Debug, FromRow)]
struct LocationRow {
    id: i64,
    name: String,
}

impl From<LocationRow> for Location {
    fn from(row: LocationRow) -> Self {
        Location::new(row.id, row.name)
    }
}

pub async fn create_location(conn: &mut SqliteConnection, name: &str) -> StoreResult<Location> {
    let row = sqlx::query_as::<_, LocationRow>(
        "INSERT INTO locations (name) VALUES (?) RETURNING id, name",
    )
    .bind(name)
    .fetch_one(&mut *conn)
    .await
    .map_err(|e| match violation(&e) {
        Some(Violation::Unique) => StoreError::Duplicate(Entity::Location),
        _ => StoreError::Database(e),
    })?;

    Ok(row.into())
}

pub async fn get_location(conn: &mut SqliteConnection, id: i64) -> StoreResult<Location> {
    sqlx::query_as::<_, LocationRow>("SELECT id, name FROM locations WHERE id = ?")
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?
        .map(Location::from)
        .ok_or(StoreError::NotFound(Entity::Location))
}

/// All locations in insertion order
pub async fn list_locations(conn: &mut SqliteConnection) -> StoreResult<Vec<Location>> {
    let rows = sqlx::query_as::<_, LocationRow>("SELECT id, name FROM locations ORDER BY id")
        .fetch_all(&mut *conn)
        .await?;
    Ok(rows.into_iter().map(Location::from).collect())
}

pub async fn rename_location(
    conn: &mut SqliteConnection,
    id: i64,
    new_name: &str,
) -> StoreResult<()> {
    let result = sqlx::query("UPDATE locations SET name = ? WHERE id = ?")
        .bind(new_name)
        .bind(id)
        .execute(&mut *conn)
        .await
        .map_err(|e| match violation(&e) {
            Some(Violation::Unique) => StoreError::Duplicate(Entity::Location),
            _ => StoreError::Database(e),
        })?;

    if result.rows_affected() == 0 {
        return Err(StoreError::NotFound(Entity::Location));
    }
    Ok(())
}

/// Delete a location nothing references; the products foreign key refuses the rest
pub async fn delete_location(conn: &mut SqliteConnection, id: i64) -> StoreResult<()> {
    let result = sqlx::query("DELETE FROM locations WHERE id = ?")
        .bind(id)
        .execute(&mut *conn)
        .await
        .map_err(|e| match violation(&e) {
            Some(Violation::ForeignKey) => StoreError::InUse(Entity::Location),
            _ => StoreError::Database(e),
        })?;

    if result.rows_affected() == 0 {
        return Err(StoreError::NotFound(Entity::Location));
    }
    Ok(())
}
