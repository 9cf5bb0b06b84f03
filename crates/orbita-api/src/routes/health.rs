use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub services: HashMap<String, String>,
}

/// Health check endpoint
///
/// Probes MongoDB with a lightweight load of a reserved thread id; the agent
/// service and the NASA APIs are not probed to keep the check cheap.
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let mut services = HashMap::new();

    let storage_ok = state.history.load("_health_check").await.is_ok();
    let mongodb_status = if storage_ok { "connected" } else { "disconnected" };
    services.insert("mongodb".to_string(), mongodb_status.to_string());
    services.insert("agent".to_string(), "configured".to_string());

    let status = if storage_ok { "healthy" } else { "degraded" };

    Json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        services,
    })
}
