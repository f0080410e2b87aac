//! Server binary for the Histolinea record service.
//!
//! This is the entry point that wires together configuration, the
//! `PostgreSQL` pool, migrations, and the HTTP API. It loads
//! configuration, initializes all subsystems, and serves requests until
//! the process is terminated.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `histolinea-config.yaml`
//! 2. Initialize structured logging (tracing)
//! 3. Connect the `PostgreSQL` pool
//! 4. Run pending migrations
//! 5. Serve the HTTP API

mod error;

use std::path::Path;
use std::sync::Arc;

use histolinea_api::{AppState, ServerConfig, start_server};
use histolinea_core::ServiceConfig;
use histolinea_db::{PostgresConfig, PostgresPool};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::StartupError;

/// Application entry point for the record service.
///
/// # Errors
///
/// Returns an error if any initialization step or the server itself
/// fails.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration. Read before logging init so the configured
    //    filter can seed the subscriber.
    let config = load_config()?;

    // 2. Initialize structured logging. RUST_LOG wins over the config
    //    file's filter when both are set.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .with_target(true)
        .init();

    info!("histolinea-server starting");
    info!(
        host = config.http.host,
        port = config.http.port,
        max_connections = config.database.max_connections,
        "Configuration loaded"
    );

    // 3. Connect the PostgreSQL pool.
    let pg_config = PostgresConfig::new(&config.database.url)
        .with_max_connections(config.database.max_connections);
    let pool = PostgresPool::connect(&pg_config)
        .await
        .map_err(StartupError::from)?;

    // 4. Run pending migrations.
    pool.run_migrations().await.map_err(StartupError::from)?;

    // 5. Serve the HTTP API until terminated.
    let state = Arc::new(AppState::new(pool));
    let server_config = ServerConfig {
        host: config.http.host.clone(),
        port: config.http.port,
    };
    start_server(&server_config, state)
        .await
        .map_err(StartupError::from)?;

    info!("histolinea-server shutdown complete");
    Ok(())
}

/// Load the service configuration from `histolinea-config.yaml`.
///
/// Looks for the config file relative to the current working directory.
/// When the file is absent, defaults (plus environment overrides) are
/// used.
fn load_config() -> Result<ServiceConfig, StartupError> {
    let config_path = Path::new("histolinea-config.yaml");
    if config_path.exists() {
        let config = ServiceConfig::from_file(config_path)?;
        Ok(config)
    } else {
        let mut config = ServiceConfig::default();
        config.database.apply_env_overrides();
        Ok(config)
    }
}
