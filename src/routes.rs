//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`        - Health check (store reachability)
//! - `/courses*`           - Course CRUD, see [`crate::api::routes::course_routes`]
//! - `/__test__/*`         - Test harness endpoints, only when enabled
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with all routes and the tracing layer.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `test_routes` - when `true`, mounts `DELETE /__test__/data`
pub fn router(state: AppState, test_routes: bool) -> Router {
    let mut router = Router::new()
        .route("/health", get(health_handler))
        .merge(api::routes::course_routes());

    if test_routes {
        router = router.merge(api::routes::test_routes());
    }

    router.with_state(state).layer(tracing::layer())
}

/// Constructs the application service: [`router`] wrapped in trailing-slash
/// normalization.
pub fn app_router(state: AppState, test_routes: bool) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, test_routes))
}
