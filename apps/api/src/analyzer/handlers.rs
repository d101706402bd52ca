use axum::{extract::Multipart, extract::State, Json};
use serde::Serialize;
use uuid::Uuid;

use crate::analyzer::{analyze_with_llm, AiAnalysis};
use crate::errors::AppError;
use crate::extraction::upload::ResumeUpload;
use crate::persistence::{save_best_effort, NewAnalysis};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AiAnalyzeResponse {
    pub analysis_id: Option<Uuid>,
    pub saved: bool,
    pub role: String,
    pub model: String,
    pub analysis: AiAnalysis,
}

/// POST /api/v1/analyze/ai
///
/// Multipart: `file`, `role`, optional `job_description`. Roles outside the
/// catalog are accepted; the prompt then carries no skill list.
pub async fn handle_ai_analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AiAnalyzeResponse>, AppError> {
    let llm = state
        .llm
        .as_ref()
        .ok_or_else(|| AppError::Unavailable("AI analyzer is not configured".to_string()))?;

    let upload = ResumeUpload::from_multipart(multipart).await?;
    let role = upload.require("role")?.to_string();
    let job_description = upload.field("job_description").map(str::to_string);
    let resume = upload.extract_text().await?;

    let profile = state.catalog.find_role(&role).map(|(_, p)| p);
    let analysis =
        analyze_with_llm(llm, &resume, &role, profile, job_description.as_deref()).await?;

    let analysis_id = save_best_effort(
        state.store.as_ref(),
        NewAnalysis::from_ai_analysis(&role, llm.model(), &analysis),
    )
    .await;

    Ok(Json(AiAnalyzeResponse {
        analysis_id,
        saved: analysis_id.is_some(),
        role,
        model: llm.model().to_string(),
        analysis,
    }))
}
