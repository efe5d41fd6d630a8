//! Products API
//!
//! Composes the products domain router with documentation, middleware and the
//! health endpoints:
//!
//! - `/api/products` - products CRUD
//! - `/docs`, `/redoc`, `/rapidoc`, `/scalar` - API documentation
//! - `/health` - liveness, `/ready` - database readiness

pub mod api;
pub mod config;
pub mod openapi;
pub mod state;

use axum::Router;
use axum_helpers::{cors_layer_from_config, create_router, health_router};

pub use config::Config;
pub use state::AppState;

/// Full application router for the given state
pub fn build_app(state: &AppState) -> Router {
    let cors = cors_layer_from_config(&state.config.cors);
    let router = create_router::<openapi::ApiDoc>(api::routes(state), cors);

    router
        .merge(health_router(state.config.app))
        .merge(api::ready_router(state.clone()))
}
