use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use tracing::info;

use super::PostgresConfig;
use crate::common::{DatabaseError, RetryConfig, retry_with_backoff};

/// Open a pool with the given options.
pub async fn connect_with_options(options: ConnectOptions) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(options).await?;
    info!(backend = ?db.get_database_backend(), "Connected to database");
    Ok(db)
}

/// Open a pool from a [`PostgresConfig`] with a single attempt.
pub async fn connect_from_config(config: PostgresConfig) -> Result<DatabaseConnection, DbErr> {
    connect_with_options(config.into_connect_options()).await
}

/// Open a pool, retrying with backoff, and verify it answers a ping.
///
/// Returns [`DatabaseError::ConnectionFailed`] once the retry budget is spent, the
/// caller decides whether that is fatal.
///
/// ```ignore
/// use database::common::RetryConfig;
/// use database::postgres::{PostgresConfig, connect_with_retry};
///
/// let db = connect_with_retry(PostgresConfig::from_env()?, &RetryConfig::new()).await?;
/// ```
pub async fn connect_with_retry(
    config: PostgresConfig,
    retry: &RetryConfig,
) -> Result<DatabaseConnection, DatabaseError> {
    info!(url = %config.redacted_url(), max_attempts = retry.max_attempts(), "Connecting to database");
    let options = config.into_connect_options();

    retry_with_backoff(
        || {
            let options = options.clone();
            async move {
                let db = connect_with_options(options).await?;
                db.ping().await?;
                Ok::<_, DbErr>(db)
            }
        },
        retry,
    )
    .await
    .map_err(|e| DatabaseError::ConnectionFailed {
        attempts: retry.max_attempts(),
        reason: e.to_string(),
    })
}

/// Apply pending migrations of `M`.
///
/// ```ignore
/// use database::postgres::run_migrations;
/// use migration::Migrator;
///
/// run_migrations::<Migrator>(&db, "products_api").await?;
/// ```
pub async fn run_migrations<M: MigratorTrait>(
    db: &DatabaseConnection,
    app_name: &str,
) -> Result<(), DatabaseError> {
    info!("Running {} database migrations...", app_name);
    M::up(db, None)
        .await
        .map_err(|e| DatabaseError::MigrationError(e.to_string()))?;
    info!("Migrations completed successfully for {}", app_name);
    Ok(())
}

/// Drop every table and re-apply all migrations of `M`, leaving an empty schema.
pub async fn reset_schema<M: MigratorTrait>(db: &DatabaseConnection) -> Result<(), DatabaseError> {
    info!("Dropping all tables and re-applying migrations");
    M::fresh(db)
        .await
        .map_err(|e| DatabaseError::MigrationError(e.to_string()))?;
    info!("Schema reset complete");
    Ok(())
}
