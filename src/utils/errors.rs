//! Error handling for the Lotte service
//!
//! This module defines the main error types used throughout the application
//! and maps each of them onto an HTTP outcome.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Main error type for the Lotte service
#[derive(Error, Debug)]
pub enum LotteError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Login required")]
    LoginRequired { next: String },

    #[error("Project not found: {slug}")]
    ProjectNotFound { slug: String },

    #[error("Resource not found: {slug}")]
    ResourceNotFound { slug: String },

    #[error("Source entity not found: {entity_id}")]
    UnknownSourceEntity { entity_id: i64 },

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for Lotte operations
pub type Result<T> = std::result::Result<T, LotteError>;

impl LotteError {
    /// HTTP status this error surfaces as
    pub fn status(&self) -> StatusCode {
        match self {
            LotteError::LoginRequired { .. } => StatusCode::FOUND,
            LotteError::PermissionDenied(_) => StatusCode::FORBIDDEN,
            LotteError::ProjectNotFound { .. }
            | LotteError::ResourceNotFound { .. }
            | LotteError::UnknownSourceEntity { .. } => StatusCode::NOT_FOUND,
            LotteError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            LotteError::Authentication(_) => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for LotteError {
    fn into_response(self) -> Response {
        match self {
            LotteError::LoginRequired { next } => {
                let location = format!("/accounts/login/?next={}", urlencoding::encode(&next));
                (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
            }
            other => {
                let status = other.status();
                if status == StatusCode::INTERNAL_SERVER_ERROR {
                    tracing::error!(error = %other, "Request failed");
                }
                (status, Json(json!({ "error": other.to_string() }))).into_response()
            }
        }
    }
}
