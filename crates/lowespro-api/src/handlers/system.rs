//! /api/health and /api/debug

use axum::extract::State;
use axum::Json;
use lowespro_storage::DebugInfo;
use serde_json::{json, Value};

use crate::{ApiError, AppState};

/// Liveness probe: proves the database answers queries.
pub async fn health(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    state.store.ping()?;
    let vendors = state.store.count_vendors()?;
    Ok(Json(json!({
        "status": "ok",
        "database": "reachable",
        "vendors": vendors,
    })))
}

/// Schema version and per-table row counts, for troubleshooting.
pub async fn debug(State(state): State<AppState>) -> Result<Json<DebugInfo>, ApiError> {
    Ok(Json(state.store.debug_info()?))
}
