//! # Axum Helpers
//!
//! Shared building blocks for the HTTP services in this workspace.
//!
//! ## Modules
//!
//! - **[`validation`]**: field validation chains and the `{"errors": [...]}` envelope
//! - **[`extractors`]**: [`Validated`] runs a route's rule set before the handler
//! - **[`errors`]**: [`AppError`] and the `{"error": ...}` responses
//! - **[`http`]**: CORS and security header middleware
//! - **[`server`]**: router assembly, API docs, health checks, graceful shutdown
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum_helpers::server::{create_app, create_router};
//! use axum_helpers::http::cors_layer_from_config;
//!
//! let router = create_router::<ApiDoc>(api_routes, cors_layer_from_config(&config.cors));
//! create_app(router, &config.server).await?;
//! ```

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;
pub mod validation;

pub use errors::{AppError, ErrorResponse};
pub use extractors::{RuleSet, Validated};
pub use http::{cors_layer_from_config, create_cors_layer, security_headers};
pub use server::{
    HealthCheckFuture, HealthResponse, create_app, create_production_app, create_router,
    health_router, run_health_checks, shutdown_signal,
};
pub use validation::{FieldChain, FieldError, Location, RequestInput, ValidationErrors};
