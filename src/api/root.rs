use crate::api::AppState;
use crate::api::schemas::root::RootResponse;
use axum::{Json, extract::State};

/// Static service banner.
pub async fn root(State(state): State<AppState>) -> Json<RootResponse> {
    Json(RootResponse {
        message: "Hello from Message Board!".to_string(),
        environment: state.config.environment.clone(),
        status: "running".to_string(),
    })
}
