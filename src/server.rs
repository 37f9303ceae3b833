//! HTTP server initialization and runtime setup.
//!
//! Handles the database pool, migrations, service wiring and the Axum
//! server lifecycle.

use crate::application::services::LinkService;
use crate::config::Config;
use crate::infrastructure::persistence::{self, SqliteUrlRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Builds the application state from configuration.
///
/// Opens the SQLite pool and applies pending migrations before wiring the
/// repository into the link service.
///
/// # Errors
///
/// Returns an error if the database cannot be opened or migrated.
pub async fn build_state(config: &Config) -> Result<AppState> {
    let pool = persistence::connect(
        &config.database_url,
        config.db_max_connections,
        Duration::from_secs(config.db_connect_timeout),
    )
    .await
    .context("Failed to open database")?;
    tracing::info!("Connected to database");

    persistence::migrate(&pool)
        .await
        .context("Failed to apply migrations")?;
    tracing::info!("Database migrations applied");

    let repository = Arc::new(SqliteUrlRepository::new(
        Arc::new(pool),
        config.short_code_length,
    ));
    let link_service = Arc::new(LinkService::new(repository, config.base_url.clone()));

    Ok(AppState::new(link_service))
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - Database setup fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config).await?;
    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
