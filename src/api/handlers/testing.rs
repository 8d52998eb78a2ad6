//! Handlers reserved for end-to-end test harnesses.

use axum::{extract::State, http::StatusCode};

use crate::error::AppError;
use crate::state::AppState;

/// Clears the whole course store.
///
/// # Endpoint
///
/// `DELETE /__test__/data`
///
/// Only routed when test routes are enabled in the configuration.
pub async fn reset_data_handler(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.course_service.reset().await?;
    Ok(StatusCode::NO_CONTENT)
}
