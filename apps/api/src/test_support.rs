//! In-memory collaborators for handler and router tests.

use std::sync::{Arc, Mutex};

use anyhow::anyhow;
use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::analysis::AnalysisRow;
use crate::persistence::{AnalysisStore, NewAnalysis};
use crate::roles::RoleCatalog;
use crate::state::AppState;

#[derive(Default)]
pub struct MemoryStore {
    rows: Mutex<Vec<AnalysisRow>>,
}

#[async_trait]
impl AnalysisStore for MemoryStore {
    async fn save(&self, analysis: NewAnalysis) -> Result<Uuid, AppError> {
        let id = Uuid::new_v4();
        let mut rows = self.rows.lock().map_err(|e| AppError::Internal(anyhow!("{e}")))?;
        rows.push(AnalysisRow {
            id,
            kind: analysis.kind.as_str().to_string(),
            category: analysis.category,
            role: analysis.role,
            overall_score: analysis.overall_score,
            report: analysis.report,
            created_at: Utc::now(),
        });
        Ok(id)
    }

    async fn recent(&self, limit: i64) -> Result<Vec<AnalysisRow>, AppError> {
        let rows = self.rows.lock().map_err(|e| AppError::Internal(anyhow!("{e}")))?;
        Ok(rows.iter().rev().take(limit as usize).cloned().collect())
    }
}

/// Store whose every write fails, as an unreachable database would.
pub struct FailingStore;

#[async_trait]
impl AnalysisStore for FailingStore {
    async fn save(&self, _analysis: NewAnalysis) -> Result<Uuid, AppError> {
        Err(AppError::Internal(anyhow!("database is down")))
    }

    async fn recent(&self, _limit: i64) -> Result<Vec<AnalysisRow>, AppError> {
        Err(AppError::Internal(anyhow!("database is down")))
    }
}

/// State with the embedded catalog and no LLM.
pub fn test_state(store: Arc<dyn AnalysisStore>) -> AppState {
    AppState {
        catalog: Arc::new(RoleCatalog::load(None).expect("embedded catalog")),
        store,
        llm: None,
    }
}
