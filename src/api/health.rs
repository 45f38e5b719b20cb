use crate::api::AppState;
use crate::api::schemas::health::HealthResponse;
use crate::error::{AppError, Result};
use axum::{Json, extract::State};

/// Readiness probe: performs a database round-trip on a fresh connection.
///
/// # Errors
/// Returns `AppError::Unavailable` carrying the database error text when the round-trip fails.
pub async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>> {
    state.health_service.check_db().await.map_err(AppError::Unavailable)?;

    Ok(Json(HealthResponse::healthy()))
}
