//! HTTP server initialization and runtime setup.
//!
//! Handles database connection, worker spawning, and Axum server lifecycle.

use crate::application::services::RedirectService;
use crate::config::Config;
use crate::domain::allowlist::Allowlist;
use crate::domain::click_event::ClickEvent;
use crate::domain::click_worker::run_click_worker;
use crate::domain::repositories::ClickRepository;
use crate::infrastructure::persistence::PgClickRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool and migrations (only with click logging on)
/// - Background click worker
/// - Axum HTTP server with graceful ctrl-c shutdown
///
/// # Errors
///
/// Returns an error if the database connection, migration run, or server
/// bind fails.
pub async fn run(config: Config) -> Result<()> {
    let allowlist = Allowlist::new(config.allowed_hosts.iter().cloned());
    let redirect_service = Arc::new(RedirectService::new(
        allowlist,
        config.default_tag.clone(),
    ));

    let click_sender = if config.click_logging {
        Some(start_click_pipeline(&config).await?)
    } else {
        tracing::info!("Click logging disabled");
        None
    };

    let state = AppState::new(redirect_service, click_sender, config.behind_proxy);
    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

/// Connects the pool, applies migrations, and spawns the click worker.
async fn start_click_pipeline(config: &Config) -> Result<mpsc::Sender<ClickEvent>> {
    let database_url = config
        .database_url
        .as_deref()
        .context("DATABASE_URL is required when click logging is enabled")?;

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect(database_url)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to migrate")?;

    let repository: Arc<dyn ClickRepository> = Arc::new(PgClickRepository::new(Arc::new(pool)));

    let (click_tx, click_rx) = mpsc::channel(config.click_queue_capacity);
    tokio::spawn(run_click_worker(click_rx, repository));
    tracing::info!("Click worker started");

    Ok(click_tx)
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install ctrl-c handler");
    tracing::info!("Shutdown signal received");
}
