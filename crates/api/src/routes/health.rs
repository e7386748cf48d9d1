//! Health check endpoints.

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    pub success: bool,
    pub status: &'static str,
    pub message: &'static str,
    pub timestamp: String,
}

/// GET / — plain-text liveness line for browsers poking the bare host.
pub async fn root() -> &'static str {
    "Mirror-It backend is running."
}

/// GET /api/health — returns backend health status.
pub async fn check() -> Json<HealthResponse> {
    Json(HealthResponse {
        success: true,
        status: "Running",
        message: "Backend is working!",
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
