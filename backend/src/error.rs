//! Error handling for the Stockroom server
//!
//! Every inventory operation reports failure through [`AppError`]; the HTTP
//! boundary maps each kind to a status code and a JSON body.

use axum::{
    extract::rejection::{FormRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Input errors
    #[error("Validation error on {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Duplicate entry: {0}")]
    DuplicateEntry(String),

    #[error("Invalid location ID")]
    InvalidLocation,

    // Business rule errors
    #[error("{0} is in use and cannot be deleted")]
    InUse(String),

    #[error("Not enough stock available for product {0}")]
    InsufficientStock(i64),

    #[error("Resource not found: {0}")]
    NotFound(String),

    // Database errors
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    // Internal errors
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn validation(field: &str, message: &str) -> Self {
        AppError::Validation {
            field: field.to_string(),
            message: message.to_string(),
        }
    }

    /// Stable machine-readable code for this error kind
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation { .. } => "VALIDATION_ERROR",
            AppError::DuplicateEntry(_) => "DUPLICATE_ENTRY",
            AppError::InvalidLocation => "INVALID_LOCATION",
            AppError::InUse(_) => "IN_USE",
            AppError::InsufficientStock(_) => "INSUFFICIENT_STOCK",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::DatabaseError(_) => "DATABASE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } | AppError::InvalidLocation => StatusCode::BAD_REQUEST,
            AppError::DuplicateEntry(_) | AppError::InUse(_) => StatusCode::CONFLICT,
            AppError::InsufficientStock(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DatabaseError(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Duplicate(entity) => AppError::DuplicateEntry(entity.to_string()),
            StoreError::InvalidLocation(_) => AppError::InvalidLocation,
            StoreError::InUse(entity) => AppError::InUse(entity.to_string()),
            StoreError::NotFound(entity) => AppError::NotFound(entity.to_string()),
            StoreError::Database(e) => AppError::DatabaseError(e),
        }
    }
}

// Extractor rejections carry axum's own explanation; keep it, but in our body

impl From<FormRejection> for AppError {
    fn from(rejection: FormRejection) -> Self {
        AppError::Validation {
            field: "form".to_string(),
            message: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Validation {
            field: "query".to_string(),
            message: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Validation {
            field: "path".to_string(),
            message: rejection.body_text(),
        }
    }
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            AppError::Validation { message, .. } => message.clone(),
            AppError::DuplicateEntry(entity) => format!("{} name must be unique", entity),
            AppError::InvalidLocation => "Invalid location ID".to_string(),
            AppError::InUse(entity) => format!("{} is in use and cannot be deleted", entity),
            AppError::InsufficientStock(_) => "Not enough stock available".to_string(),
            AppError::NotFound(entity) => format!("{} not found", entity),
            AppError::DatabaseError(_) => "A database error occurred".to_string(),
            AppError::Internal(_) => "An internal server error occurred".to_string(),
        };
        let field = match &self {
            AppError::Validation { field, .. } => Some(field.clone()),
            AppError::InvalidLocation => Some("location_id".to_string()),
            _ => None,
        };
        let status = self.status();

        // Log the error for debugging
        if status.is_server_error() {
            tracing::error!("Error: {:?}", self);
        } else {
            tracing::debug!("Rejected request: {}", self);
        }

        let detail = ErrorDetail {
            code: self.code().to_string(),
            message,
            field,
        };

        (status, Json(ErrorResponse { error: detail })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
