use axum::response::{IntoResponse, Response};
use axum_helpers::{AppError, ValidationErrors};
use sea_orm::DbErr;
use thiserror::Error;

use crate::messages;

/// Outcome of a failed product operation
#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Product not found: {0}")]
    NotFound(i64),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

impl From<DbErr> for ProductError {
    fn from(err: DbErr) -> Self {
        ProductError::Internal(format!("Database error: {}", err))
    }
}

impl From<validator::ValidationErrors> for ProductError {
    fn from(err: validator::ValidationErrors) -> Self {
        ProductError::Validation(err.into())
    }
}

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::Validation(errors) => AppError::Validation(errors),
            ProductError::NotFound(id) => {
                tracing::debug!(product_id = id, "Product not found");
                AppError::NotFound(messages::PRODUCT_NOT_FOUND.to_string())
            }
            ProductError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_status_codes() {
        let not_found = ProductError::NotFound(9).into_response();
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);

        let internal = ProductError::from(DbErr::Custom("connection reset".into())).into_response();
        assert_eq!(internal.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let validation = ProductError::Validation(ValidationErrors::default()).into_response();
        assert_eq!(validation.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_database_errors_become_internal() {
        let err = ProductError::from(DbErr::Custom("timeout".into()));
        assert!(matches!(err, ProductError::Internal(msg) if msg.contains("timeout")));
    }
}
