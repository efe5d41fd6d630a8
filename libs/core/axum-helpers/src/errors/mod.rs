pub mod handlers;
pub mod messages;
pub mod responses;

use crate::validation::ValidationErrors;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Body of every non-validation error response.
///
/// ```json
/// { "error": "Producto no encontrado" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable message
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Outcome of a failed request, mapped to exactly one status code.
///
/// | Variant | Status | Body |
/// |---|---|---|
/// | `Validation` | 400 | `{"errors": [...]}` |
/// | `MalformedJson` | 400 | `{"error": ...}` |
/// | `NotFound` | 404 | `{"error": ...}` |
/// | `Database`, `InternalServerError` | 500 | `{"error": "Hubo un error en el servidor"}` |
///
/// Internal details are logged, never sent to the client.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Malformed JSON body: {0}")]
    MalformedJson(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::MalformedJson(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database(_) | AppError::InternalServerError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            AppError::Validation(errors) => return errors.into_response(),
            AppError::MalformedJson(details) => {
                tracing::info!("Malformed JSON body: {}", details);
                messages::MALFORMED_JSON.to_string()
            }
            AppError::NotFound(msg) => {
                tracing::debug!("Not found: {}", msg);
                msg
            }
            AppError::Database(e) => {
                tracing::error!(error = ?e, "Database error while handling request");
                messages::INTERNAL_ERROR.to_string()
            }
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal server error: {}", msg);
                messages::INTERNAL_ERROR.to_string()
            }
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

/// Helper for handlers that need a plain `{"error": ...}` response.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorResponse::new(message))).into_response()
}
