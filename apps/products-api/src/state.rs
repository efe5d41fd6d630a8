//! Application state management

use database::postgres::DatabaseConnection;

/// Shared application state.
///
/// Cloned into every router that needs it; the connection is a pooled handle.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// Database connection pool
    pub db: DatabaseConnection,
}
