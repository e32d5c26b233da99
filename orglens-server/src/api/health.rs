//! Liveness probe

use axum::{http::StatusCode, response::IntoResponse};

/// GET /health
/// Answers as long as the process serves requests; never calls upstream
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
