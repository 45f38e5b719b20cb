use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Service unavailable: {0}")]
    Unavailable(String),
    #[error("Invalid request body: {0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Database(e) => {
                tracing::error!(error = %e, "Database error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
            Self::Unavailable(detail) => {
                tracing::warn!(detail = %detail, "Service unavailable");
                (StatusCode::SERVICE_UNAVAILABLE, detail)
            }
            Self::Validation(detail) => {
                tracing::debug!(detail = %detail, "Request body rejected");
                (StatusCode::UNPROCESSABLE_ENTITY, detail)
            }
        };

        let body = Json(json!({
            "detail": message
        }));

        (status, body).into_response()
    }
}
