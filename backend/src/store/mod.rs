//! Persistence layer for locations and products
//!
//! Every function takes an explicit connection so callers decide the
//! transaction boundary. Constraint violations reported by SQLite are
//! classified into [`StoreError`] here and never leave this module raw.

pub mod location;
pub mod product;

use thiserror::Error;

pub use location::*;
pub use product::*;

/// Kind of record a store error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Product,
    Location,
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Entity::Product => write!(f, "Product"),
            Entity::Location => write!(f, "Location"),
        }
    }
}

/// Store-level failures
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{0} name already exists")]
    Duplicate(Entity),

    #[error("location {0} does not exist")]
    InvalidLocation(i64),

    #[error("{0} is still referenced")]
    InUse(Entity),

    #[error("{0} not found")]
    NotFound(Entity),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Constraint that a failed write tripped, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Violation {
    Unique,
    ForeignKey,
}

fn violation(err: &sqlx::Error) -> Option<Violation> {
    match err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => Some(Violation::Unique),
        sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
            Some(Violation::ForeignKey)
        }
        _ => None,
    }
}
