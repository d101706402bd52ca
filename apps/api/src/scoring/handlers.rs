//! Axum route handlers for the standard (keyword) analyzer.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::extraction::upload::ResumeUpload;
use crate::persistence::{save_best_effort, NewAnalysis};
use crate::scoring::engine::score;
use crate::scoring::models::{ResumeText, RoleProfile, ScoreReport};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub category: String,
    pub role: String,
    pub resume_text: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis_id: Option<Uuid>,
    /// False when the report could not be stored; the report is still valid.
    pub saved: bool,
    pub category: String,
    pub role: String,
    pub report: ScoreReport,
}

/// POST /api/v1/analyze
///
/// Scores already-extracted resume text. Empty text is scored, not rejected.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let profile = lookup_role(&state, &request.category, &request.role)?;
    let report = score(&ResumeText::from(request.resume_text), profile)?;

    Ok(Json(
        persist_report(&state, request.category, request.role, report).await,
    ))
}

/// POST /api/v1/analyze/upload
///
/// Multipart: `file` (PDF or plain text), `category`, `role`.
/// Flow: extract text → score → persist (best effort).
pub async fn handle_analyze_upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let upload = ResumeUpload::from_multipart(multipart).await?;
    let category = upload.require("category")?.to_string();
    let role = upload.require("role")?.to_string();

    // Validate the role before paying for extraction.
    let profile = lookup_role(&state, &category, &role)?;
    let resume = upload.extract_text().await?;
    let report = score(&resume, profile)?;

    Ok(Json(persist_report(&state, category, role, report).await))
}

fn lookup_role<'a>(
    state: &'a AppState,
    category: &str,
    role: &str,
) -> Result<&'a RoleProfile, AppError> {
    if category.trim().is_empty() || role.trim().is_empty() {
        return Err(AppError::Validation(
            "category and role cannot be empty".to_string(),
        ));
    }
    state
        .catalog
        .get(category, role)
        .ok_or_else(|| AppError::NotFound(format!("Role '{role}' not found in '{category}'")))
}

async fn persist_report(
    state: &AppState,
    category: String,
    role: String,
    report: ScoreReport,
) -> AnalyzeResponse {
    let analysis_id = save_best_effort(
        state.store.as_ref(),
        NewAnalysis::from_score_report(&category, &role, &report),
    )
    .await;

    AnalyzeResponse {
        analysis_id,
        saved: analysis_id.is_some(),
        category,
        role,
        report,
    }
}
