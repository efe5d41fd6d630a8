use axum::{http::StatusCode, response::Response};

use super::{error_response, messages};

/// Router fallback for unknown paths.
pub async fn not_found() -> Response {
    error_response(StatusCode::NOT_FOUND, messages::ROUTE_NOT_FOUND)
}

