/// Persona for resume review. `JSON_ONLY_INSTRUCTION` is appended at call time.
pub const ANALYZER_SYSTEM: &str = "You are an experienced technical recruiter and \
    Applicant Tracking System (ATS) specialist. You review resumes honestly and \
    give concrete, actionable feedback.";

/// Analysis prompt. Replace `{job_role}`, `{role_context}`, `{job_description}`
/// and `{resume_text}` before sending.
pub const ANALYZER_PROMPT_TEMPLATE: &str = r#"Review the resume below for the target role "{job_role}".

{role_context}

Job description (may be empty):
{job_description}

Return a JSON object with this EXACT schema (no extra fields):
{
  "resume_score": 0,
  "ats_score": 0,
  "summary": "two or three sentences on overall fit",
  "strengths": ["..."],
  "weaknesses": ["..."],
  "suggestions": ["..."],
  "missing_keywords": ["..."]
}

Scoring rules:
- resume_score (0-100): overall quality and fit for the role.
- ats_score (0-100): how well an ATS would parse and rank it: standard section
  headers, keyword coverage, simple layout, quantified achievements.
- missing_keywords: role-relevant skills or terms absent from the resume.
- suggestions: specific edits, each one sentence.

RESUME:
{resume_text}"#;

/// Role context line used when the role is in the catalog.
pub const ROLE_CONTEXT_TEMPLATE: &str =
    "Role description: {description}\nRequired skills: {skills}";

pub const NO_ROLE_CONTEXT: &str = "No catalog profile is available for this role.";

pub const NO_JOB_DESCRIPTION: &str = "(none provided)";
