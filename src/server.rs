//! HTTP server initialization and runtime setup.
//!
//! Builds the course store, seeds it, and drives the Axum server until a
//! shutdown signal arrives.

use crate::application::services::CourseService;
use crate::config::{Config, SEED_TITLES};
use crate::domain::id_generator::SequentialIdGenerator;
use crate::infrastructure::persistence::InMemoryCourseRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds the application state described by `config`.
///
/// Creates the id generator and store, then loads the demo courses when
/// seeding is enabled.
///
/// # Errors
///
/// Returns an error if seeding fails.
pub async fn build_state(config: &Config) -> Result<AppState> {
    let ids = Arc::new(SequentialIdGenerator::new(config.id_start));
    let repository = Arc::new(InMemoryCourseRepository::new(ids));
    let course_service = Arc::new(CourseService::new(repository));

    if config.seed_courses {
        course_service
            .seed(SEED_TITLES)
            .await
            .context("Failed to seed course store")?;
    }

    Ok(AppState::new(course_service))
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The listen address is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config).await?;
    let app = app_router(state, config.test_routes);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C, or on SIGTERM on Unix.
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
