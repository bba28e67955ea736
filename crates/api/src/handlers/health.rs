use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

/// Health check response payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// Current time as ISO-8601 UTC with millisecond precision.
    pub timestamp: String,
}

/// GET /api/health -- liveness only; the database is not consulted.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}
