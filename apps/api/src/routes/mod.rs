pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analyzer::handlers as analyzer;
use crate::persistence::handlers as analyses;
use crate::roles::handlers as roles;
use crate::scoring::handlers as scoring;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Role catalog
        .route("/api/v1/roles", get(roles::handle_list_roles))
        .route("/api/v1/roles/:category", get(roles::handle_category_roles))
        // Analyzers
        .route("/api/v1/analyze", post(scoring::handle_analyze))
        .route("/api/v1/analyze/upload", post(scoring::handle_analyze_upload))
        .route("/api/v1/analyze/ai", post(analyzer::handle_ai_analyze))
        // Stored analyses
        .route(
            "/api/v1/analyses/recent",
            get(analyses::handle_recent_analyses),
        )
        .with_state(state)
}
