//! AI Analyzer: one LLM review of a resume for a target role.
//!
//! The resume (and job description) are sliced to a fixed character budget
//! before templating. Scores in the answer are clamped to 0 – 100.

pub mod handlers;
pub mod prompts;

use serde::{Deserialize, Deserializer, Serialize};
use tracing::info;

use crate::analyzer::prompts::{
    ANALYZER_PROMPT_TEMPLATE, ANALYZER_SYSTEM, NO_JOB_DESCRIPTION, NO_ROLE_CONTEXT,
    ROLE_CONTEXT_TEMPLATE,
};
use crate::errors::AppError;
use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;
use crate::llm_client::LlmClient;
use crate::scoring::models::{ResumeText, RoleProfile};

/// Resume characters sent to the model.
pub const MAX_RESUME_CHARS: usize = 8000;
/// Job description characters sent to the model.
pub const MAX_JOB_DESCRIPTION_CHARS: usize = 4000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiAnalysis {
    #[serde(deserialize_with = "deserialize_score")]
    pub resume_score: u32,
    #[serde(deserialize_with = "deserialize_score")]
    pub ats_score: u32,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    #[serde(default)]
    pub suggestions: Vec<String>,
    #[serde(default)]
    pub missing_keywords: Vec<String>,
}

/// Accepts any JSON number and clamps it into 0 – 100.
fn deserialize_score<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let raw = f64::deserialize(deserializer)?;
    if raw.is_nan() {
        return Ok(0);
    }
    Ok(raw.round().clamp(0.0, 100.0) as u32)
}

/// First `max_chars` characters of `text`, cut on a char boundary.
pub fn slice_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Fills `{key}` placeholders in one left-to-right pass. Substituted values
/// are copied verbatim and never scanned again; unknown braces (the JSON
/// schema in the template) are kept as they are.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        rest = &rest[open..];

        let hit = values.iter().find(|(key, _)| {
            rest[1..]
                .strip_prefix(*key)
                .is_some_and(|after| after.starts_with('}'))
        });
        match hit {
            Some((key, value)) => {
                out.push_str(value);
                rest = &rest[key.len() + 2..];
            }
            None => {
                out.push('{');
                rest = &rest[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

pub fn build_prompt(
    job_role: &str,
    profile: Option<&RoleProfile>,
    job_description: Option<&str>,
    resume: &ResumeText,
) -> String {
    let role_context = match profile {
        Some(p) => {
            let skills = p.required_skills.join(", ");
            fill_template(
                ROLE_CONTEXT_TEMPLATE,
                &[("description", p.description.as_str()), ("skills", skills.as_str())],
            )
        }
        None => NO_ROLE_CONTEXT.to_string(),
    };
    let job_description = job_description
        .map(|jd| slice_chars(jd.trim(), MAX_JOB_DESCRIPTION_CHARS))
        .filter(|jd| !jd.is_empty())
        .unwrap_or(NO_JOB_DESCRIPTION);

    fill_template(
        ANALYZER_PROMPT_TEMPLATE,
        &[
            ("job_role", job_role),
            ("role_context", role_context.as_str()),
            ("job_description", job_description),
            ("resume_text", slice_chars(resume.as_str(), MAX_RESUME_CHARS)),
        ],
    )
}

pub async fn analyze_with_llm(
    llm: &LlmClient,
    resume: &ResumeText,
    job_role: &str,
    profile: Option<&RoleProfile>,
    job_description: Option<&str>,
) -> Result<AiAnalysis, AppError> {
    let prompt = build_prompt(job_role, profile, job_description, resume);
    let system = format!("{ANALYZER_SYSTEM} {JSON_ONLY_INSTRUCTION}");

    let analysis: AiAnalysis = llm
        .call_json(&prompt, &system)
        .await
        .map_err(|e| AppError::Llm(format!("Resume analysis failed: {e}")))?;

    info!(
        "AI analysis for '{job_role}': resume_score={} ats_score={}",
        analysis.resume_score, analysis.ats_score
    );
    Ok(analysis)
}
