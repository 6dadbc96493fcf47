//! Health check endpoint

use std::sync::Arc;
use std::time::Instant;

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::notifications::SharedEventBus;

/// Health check state
#[derive(Clone)]
pub struct HealthState {
    pub event_bus: SharedEventBus,
    pub started_at: Arc<Instant>,
}

/// Service health response
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// `ok` while the process is serving requests
    pub status: String,
    /// Version from Cargo.toml
    pub version: String,
    /// Seconds since process start
    pub uptime_seconds: u64,
    /// Connected notification WebSocket clients
    pub notification_subscribers: u32,
}

/// Liveness probe: no dependencies are checked, only the process itself.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<HealthState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
        notification_subscribers: state.event_bus.subscriber_count() as u32,
    })
}
