use std::collections::BTreeMap;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::errors::AppError;
use crate::roles::RoleCatalog;
use crate::scoring::models::RoleProfile;
use crate::state::AppState;

/// GET /api/v1/roles
pub async fn handle_list_roles(State(state): State<AppState>) -> Json<RoleCatalog> {
    Json(state.catalog.as_ref().clone())
}

/// GET /api/v1/roles/:category
pub async fn handle_category_roles(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<BTreeMap<String, RoleProfile>>, AppError> {
    state
        .catalog
        .roles(&category)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Category '{category}' not found")))
}
