use axum_helpers::server::create_production_app;
use clap::Parser;
use core_config::tracing::{init_tracing, install_color_eyre};
use database::postgres::{connect_with_retry, reset_schema, run_migrations};
use migration::Migrator;
use products_api::{AppState, Config, build_app};
use std::time::Duration;
use tracing::info;

#[derive(Parser)]
#[command(name = "products-api")]
#[command(about = "REST API for managing products")]
struct Cli {
    /// Drop every table, re-apply migrations and exit
    #[arg(long)]
    clear: bool,

    /// Serve without applying pending migrations
    #[arg(long, env = "SKIP_MIGRATIONS")]
    skip_migrations: bool,
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    let cli = Cli::parse();
    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let db = connect_with_retry(config.database.clone(), &config.retry)
        .await
        .map_err(|e| eyre::eyre!("Database connection failed: {}", e))?;

    if cli.clear {
        reset_schema::<Migrator>(&db).await?;
        db.close().await?;
        info!("Database cleared");
        return Ok(());
    }

    if cli.skip_migrations {
        info!("Skipping migrations");
    } else {
        run_migrations::<Migrator>(&db, config.app.name).await?;
    }

    let state = AppState {
        config,
        db: db.clone(),
    };
    let app = build_app(&state);

    info!(
        "Starting {} v{} on {}",
        state.config.app.name,
        state.config.app.version,
        state.config.server.address()
    );

    create_production_app(
        app,
        &state.config.server,
        Duration::from_secs(30),
        async move {
            info!("Shutting down: closing database connections");
            match db.close().await {
                Ok(_) => info!("Database connection closed successfully"),
                Err(e) => tracing::error!("Error closing database: {}", e),
            }
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Products API shutdown complete");
    Ok(())
}
