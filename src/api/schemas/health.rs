use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
}

impl HealthResponse {
    #[must_use]
    pub fn healthy() -> Self {
        Self { status: "healthy".to_string(), database: "connected".to_string() }
    }
}
