//! Liveness probe.

use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::error::AppError;
use crate::state::AppState;

pub fn create_system_router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health_check))
}

async fn health_check(State(state): State<Arc<AppState>>) -> Result<Json<Value>, AppError> {
    state.store.health_check().await?;
    Ok(Json(json!({ "status": "ok" })))
}
