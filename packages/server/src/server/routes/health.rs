use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    service: String,
}

/// Health check endpoint
///
/// The gateway holds no state of its own, so this reports process
/// liveness only. Downstream reachability is not probed here; it surfaces
/// per-request as typed upstream errors.
pub async fn health_handler() -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            service: env!("CARGO_PKG_NAME").to_string(),
        }),
    )
}
