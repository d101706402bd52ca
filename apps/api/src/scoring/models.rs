use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Contract violations on the scoring inputs. Never produced for empty text or
/// an empty skill list; those are scored as defined zeros.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

// ────────────────────────────────────────────────────────────────────────────
// Inputs
// ────────────────────────────────────────────────────────────────────────────

/// A target job role used as the scoring rubric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleProfile {
    pub name: String,
    pub description: String,
    /// Ordered; compared case-insensitively.
    pub required_skills: Vec<String>,
}

impl RoleProfile {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        required_skills: Vec<String>,
    ) -> Result<Self, ScoringError> {
        let profile = Self {
            name: name.into(),
            description: description.into(),
            required_skills,
        };
        profile.validate()?;
        Ok(profile)
    }

    pub fn validate(&self) -> Result<(), ScoringError> {
        if self.name.trim().is_empty() {
            return Err(ScoringError::InvalidInput(
                "role profile name cannot be blank".to_string(),
            ));
        }
        if let Some(pos) = self.required_skills.iter().position(|s| s.trim().is_empty()) {
            return Err(ScoringError::InvalidInput(format!(
                "role '{}' has a blank required skill at position {pos}",
                self.name
            )));
        }
        Ok(())
    }

    /// Trimmed, lower-cased skills in declaration order. Case-insensitive
    /// duplicates collapse to their first occurrence.
    pub fn canonical_skills(&self) -> Vec<String> {
        let mut skills: Vec<String> = Vec::with_capacity(self.required_skills.len());
        for skill in &self.required_skills {
            let canonical = skill.trim().to_lowercase();
            if !skills.contains(&canonical) {
                skills.push(canonical);
            }
        }
        skills
    }
}

/// Raw text extracted from one uploaded resume.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResumeText(String);

impl ResumeText {
    /// Rejects byte sequences that are not UTF-8 text.
    pub fn from_utf8(bytes: Vec<u8>) -> Result<Self, ScoringError> {
        String::from_utf8(bytes).map(Self).map_err(|e| {
            ScoringError::InvalidInput(format!(
                "resume text is not valid UTF-8 (byte offset {})",
                e.utf8_error().valid_up_to()
            ))
        })
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<String> for ResumeText {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<&str> for ResumeText {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Output
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordMatch {
    /// 0 – 100, rounded to a whole number.
    pub score: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionCheck {
    pub section: String,
    pub found: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormattingRule {
    ContactEmail,
    PhoneNumber,
    BulletPoints,
    WordCount,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattingCheck {
    pub rule: FormattingRule,
    pub passed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    Excellent,
    Good,
    NeedsImprovement,
}

impl Rating {
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 80 => Rating::Excellent,
            s if s >= 60 => Rating::Good,
            _ => Rating::NeedsImprovement,
        }
    }
}

/// Result of scoring one resume against one role. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub overall_score: u32, // 0 – 100
    pub keyword_match: KeywordMatch,
    pub section_score: f64,
    pub formatting_score: f64,
    pub sections: Vec<SectionCheck>,
    pub formatting_checks: Vec<FormattingCheck>,
    /// Share of resume tokens that are matched skill occurrences, in percent.
    pub keyword_density: f64,
    pub rating: Rating,
    pub recommendation: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_profile_rejects_blank_name() {
        let err = RoleProfile::new("  ", "desc", vec!["rust".to_string()]).unwrap_err();
        assert!(matches!(err, ScoringError::InvalidInput(_)));
    }

    #[test]
    fn test_role_profile_rejects_blank_skill() {
        let err = RoleProfile::new(
            "Backend Developer",
            "",
            vec!["rust".to_string(), " ".to_string()],
        )
        .unwrap_err();
        assert!(err.to_string().contains("position 1"));
    }

    #[test]
    fn test_canonical_skills_lowercases_and_dedups() {
        let profile = RoleProfile::new(
            "Data Analyst",
            "",
            vec![
                "SQL".to_string(),
                " Python ".to_string(),
                "sql".to_string(),
                "Tableau".to_string(),
            ],
        )
        .unwrap();
        assert_eq!(profile.canonical_skills(), vec!["sql", "python", "tableau"]);
    }

    #[test]
    fn test_resume_text_from_utf8_rejects_binary() {
        let err = ResumeText::from_utf8(vec![0x66, 0x6f, 0xff, 0xfe]).unwrap_err();
        assert_eq!(
            err,
            ScoringError::InvalidInput("resume text is not valid UTF-8 (byte offset 2)".to_string())
        );
    }

    #[test]
    fn test_resume_text_from_utf8_accepts_text() {
        let text = ResumeText::from_utf8("Résumé".as_bytes().to_vec()).unwrap();
        assert_eq!(text.as_str(), "Résumé");
        assert!(!text.is_blank());
    }

    #[test]
    fn test_rating_thresholds() {
        assert_eq!(Rating::from_score(100), Rating::Excellent);
        assert_eq!(Rating::from_score(80), Rating::Excellent);
        assert_eq!(Rating::from_score(79), Rating::Good);
        assert_eq!(Rating::from_score(60), Rating::Good);
        assert_eq!(Rating::from_score(59), Rating::NeedsImprovement);
        assert_eq!(Rating::from_score(0), Rating::NeedsImprovement);
    }

    #[test]
    fn test_formatting_rule_serializes_snake_case() {
        let json = serde_json::to_string(&FormattingRule::ContactEmail).unwrap();
        assert_eq!(json, r#""contact_email""#);
    }
}
