//! Health Routes
//!
//! Health check endpoints for monitoring and Kubernetes probes.
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (frontend assets are present)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;

/// GET /health/live
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Not ready until the compiled frontend can be served.
pub async fn readiness(State(state): State<Arc<AppState>>) -> StatusCode {
    if state.assets_available() {
        StatusCode::OK
    } else {
        tracing::warn!(assets_dir = ?state.server.assets_dir, "Frontend assets missing");
        StatusCode::SERVICE_UNAVAILABLE
    }
}

/// GET /health
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let assets_ok = state.assets_available();

    Json(HealthResponse {
        status: if assets_ok { "healthy" } else { "degraded" }.to_string(),
        assets: if assets_ok { "ok" } else { "missing" }.to_string(),
        uptime_seconds: state.uptime_seconds(),
        started_at: state.started_at.to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
