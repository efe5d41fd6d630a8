//! Database connection plumbing for the products service.
//!
//! # Features
//!
//! - `postgres` (default) - SeaORM connection pool, migrations and health checks
//! - `config` - `core_config::FromEnv` implementations for the config types
//! - `all` - everything above
//!
//! # Example
//!
//! ```ignore
//! use database::common::RetryConfig;
//! use database::postgres::{self, PostgresConfig};
//! use migration::Migrator;
//!
//! let db = postgres::connect_with_retry(PostgresConfig::from_env()?, RetryConfig::from_env()?).await?;
//! postgres::run_migrations::<Migrator>(&db, "products_api").await?;
//! ```

pub mod common;

#[cfg(feature = "postgres")]
pub mod postgres;

pub use common::{DatabaseError, DatabaseResult};
