//! Configuration for Products API

use core_config::{AppInfo, FromEnv, app_info, cors::CorsConfig, server::ServerConfig};
use database::common::RetryConfig;
use database::postgres::PostgresConfig;

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub database: PostgresConfig,
    pub retry: RetryConfig,
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        Ok(Self {
            app: app_info!(),
            database: PostgresConfig::from_env()?,
            retry: RetryConfig::from_env()?,
            server: ServerConfig::from_env()?,
            cors: CorsConfig::from_env()?,
            environment: Environment::from_env(),
        })
    }

    /// Configuration for a given database URL with every other setting at its default
    pub fn with_database_url(url: impl Into<String>) -> Self {
        Self {
            app: app_info!(),
            database: PostgresConfig::new(url),
            retry: RetryConfig::default(),
            server: ServerConfig::default(),
            cors: CorsConfig::default(),
            environment: Environment::Development,
        }
    }
}
