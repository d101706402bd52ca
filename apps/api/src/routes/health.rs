use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service status, version, and which optional features are enabled.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "resume-api",
        "categories": state.catalog.categories().collect::<Vec<_>>(),
        "roles": state.catalog.role_count(),
        "ai_analyzer": state.llm.is_some()
    }))
}
