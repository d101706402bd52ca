use std::collections::HashMap;

use anyhow::anyhow;
use axum::extract::Multipart;

use crate::errors::AppError;
use crate::extraction::{extract_text, DocumentKind};
use crate::scoring::models::ResumeText;

/// Multipart field carrying the resume document.
pub const FILE_FIELD: &str = "file";

/// A resume upload read from a multipart form: the document plus any text
/// fields sent alongside it (category, role, job description…).
#[derive(Debug)]
pub struct ResumeUpload {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub data: Vec<u8>,
    fields: HashMap<String, String>,
}

impl ResumeUpload {
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut file = None;
        let mut fields = HashMap::new();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
        {
            let name = field.name().unwrap_or_default().to_string();
            if name == FILE_FIELD {
                let file_name = field.file_name().map(str::to_string);
                let content_type = field.content_type().map(str::to_string);
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
                file = Some((file_name, content_type, data.to_vec()));
            } else {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read field '{name}': {e}")))?;
                fields.insert(name, value);
            }
        }

        let (file_name, content_type, data) = file.ok_or_else(|| {
            AppError::Validation(format!("multipart field '{FILE_FIELD}' is required"))
        })?;

        Ok(Self {
            file_name,
            content_type,
            data,
            fields,
        })
    }

    /// A text field, trimmed; blank values count as absent.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    pub fn require(&self, name: &str) -> Result<&str, AppError> {
        self.field(name)
            .ok_or_else(|| AppError::Validation(format!("{name} cannot be empty")))
    }

    /// Extracts the document text on the blocking pool.
    pub async fn extract_text(self) -> Result<ResumeText, AppError> {
        let kind = DocumentKind::detect(self.content_type.as_deref(), self.file_name.as_deref())?;
        let data = self.data;

        let text = tokio::task::spawn_blocking(move || extract_text(&data, kind))
            .await
            .map_err(|e| AppError::Internal(anyhow!("extraction task failed: {e}")))??;
        Ok(text)
    }
}
