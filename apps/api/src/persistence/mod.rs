//! Analysis persistence: stores serialized reports with their metadata.
//!
//! Saving is best-effort from the caller's point of view: a report that was
//! computed stays valid and is returned even when the write fails.

pub mod handlers;

use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;
use tracing::{info, warn};
use uuid::Uuid;

use crate::analyzer::AiAnalysis;
use crate::errors::AppError;
use crate::models::analysis::{AnalysisKind, AnalysisRow};
use crate::scoring::models::ScoreReport;

/// A serialized analysis ready to be written.
#[derive(Debug, Clone)]
pub struct NewAnalysis {
    pub kind: AnalysisKind,
    pub category: Option<String>,
    pub role: String,
    pub overall_score: i32,
    pub report: Value,
}

impl NewAnalysis {
    pub fn from_score_report(
        category: &str,
        role: &str,
        report: &ScoreReport,
    ) -> Result<Self, serde_json::Error> {
        Ok(Self {
            kind: AnalysisKind::Keyword,
            category: Some(category.to_string()),
            role: role.to_string(),
            overall_score: report.overall_score as i32,
            report: serde_json::to_value(report)?,
        })
    }

    pub fn from_ai_analysis(
        role: &str,
        model: &str,
        analysis: &AiAnalysis,
    ) -> Result<Self, serde_json::Error> {
        let mut report = serde_json::to_value(analysis)?;
        if let Value::Object(map) = &mut report {
            map.insert("model_used".to_string(), Value::String(model.to_string()));
        }
        Ok(Self {
            kind: AnalysisKind::Ai,
            category: None,
            role: role.to_string(),
            overall_score: analysis.resume_score as i32,
            report,
        })
    }
}

/// Storage backend for analyses. Carried in `AppState` as `Arc<dyn AnalysisStore>`.
#[async_trait]
pub trait AnalysisStore: Send + Sync {
    async fn save(&self, analysis: NewAnalysis) -> Result<Uuid, AppError>;

    /// Most recent analyses first.
    async fn recent(&self, limit: i64) -> Result<Vec<AnalysisRow>, AppError>;
}

pub struct PgAnalysisStore {
    pool: PgPool,
}

impl PgAnalysisStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AnalysisStore for PgAnalysisStore {
    async fn save(&self, analysis: NewAnalysis) -> Result<Uuid, AppError> {
        let id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO analyses (id, kind, category, role, overall_score, report)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(analysis.kind.as_str())
        .bind(&analysis.category)
        .bind(&analysis.role)
        .bind(analysis.overall_score)
        .bind(&analysis.report)
        .fetch_one(&self.pool)
        .await?;

        info!(
            "Stored {} analysis {id} for role '{}'",
            analysis.kind.as_str(),
            analysis.role
        );
        Ok(id)
    }

    async fn recent(&self, limit: i64) -> Result<Vec<AnalysisRow>, AppError> {
        let rows = sqlx::query_as::<_, AnalysisRow>(
            "SELECT * FROM analyses ORDER BY created_at DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}

/// Saves an analysis, logging instead of failing. Returns the stored id, or
/// `None` when serialization or the write failed.
pub async fn save_best_effort(
    store: &dyn AnalysisStore,
    analysis: Result<NewAnalysis, serde_json::Error>,
) -> Option<Uuid> {
    let analysis = match analysis {
        Ok(a) => a,
        Err(e) => {
            warn!("Failed to serialize analysis, not persisting: {e}");
            return None;
        }
    };

    match store.save(analysis).await {
        Ok(id) => Some(id),
        Err(e) => {
            warn!("Failed to persist analysis: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::engine::score;
    use crate::scoring::models::{ResumeText, RoleProfile};
    use crate::test_support::{FailingStore, MemoryStore};

    fn sample_report() -> ScoreReport {
        let profile =
            RoleProfile::new("Data Analyst", "", vec!["sql".to_string(), "excel".to_string()])
                .unwrap();
        score(&ResumeText::from("SQL dashboards"), &profile).unwrap()
    }

    #[test]
    fn test_new_analysis_from_score_report() {
        let report = sample_report();
        let analysis = NewAnalysis::from_score_report("Data", "Data Analyst", &report).unwrap();
        assert_eq!(analysis.kind, AnalysisKind::Keyword);
        assert_eq!(analysis.category.as_deref(), Some("Data"));
        assert_eq!(analysis.overall_score, report.overall_score as i32);
        assert_eq!(analysis.report["keyword_match"]["score"], 50.0);
    }

    #[test]
    fn test_new_analysis_from_ai_analysis_records_model() {
        let ai = AiAnalysis {
            resume_score: 72,
            ats_score: 65,
            summary: "Solid".to_string(),
            strengths: vec![],
            weaknesses: vec![],
            suggestions: vec![],
            missing_keywords: vec![],
        };
        let analysis = NewAnalysis::from_ai_analysis("Data Analyst", "claude-test", &ai).unwrap();
        assert_eq!(analysis.kind, AnalysisKind::Ai);
        assert_eq!(analysis.overall_score, 72);
        assert_eq!(analysis.report["model_used"], "claude-test");
        assert!(analysis.category.is_none());
    }

    #[tokio::test]
    async fn test_save_best_effort_returns_id() {
        let store = MemoryStore::default();
        let analysis = NewAnalysis::from_score_report("Data", "Data Analyst", &sample_report());
        let id = save_best_effort(&store, analysis).await;
        assert!(id.is_some());
        assert_eq!(store.recent(10).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_save_best_effort_swallows_store_failure() {
        let analysis = NewAnalysis::from_score_report("Data", "Data Analyst", &sample_report());
        assert!(save_best_effort(&FailingStore, analysis).await.is_none());
    }
}
