//! Resume Scoring Engine: pure, deterministic scoring of resume text against a
//! role profile.
//!
//! Algorithm:
//! 1. Lower-case the text and tokenize it.
//! 2. Keyword match: each canonical required skill is matched iff it occurs at a
//!    word boundary. score = round(100 × matched / required), 0 when the role
//!    has no skills.
//! 3. Section score: equal share per expected section header found.
//! 4. Formatting score: equal share per passed formatting rule.
//! 5. overall = round(KEYWORD_WEIGHT × keyword + SECTION_WEIGHT × section
//!    + FORMATTING_WEIGHT × formatting), clamped to 0 – 100.
//!
//! Known limitations:
//! - Abbreviations are not reconciled: a role asking for "javascript" is not
//!   satisfied by "JS".
//! - Case folding is `str::to_lowercase`, which is not a full Unicode case
//!   fold. Text whose upper-casing changes length (`straße` → `STRASSE`) no
//!   longer matches the original skill once upper-cased.

use tracing::debug;

use crate::scoring::formatting::{check_formatting, formatting_score};
use crate::scoring::matcher::{contains_phrase, tokenize};
use crate::scoring::models::{
    KeywordMatch, Rating, ResumeText, RoleProfile, ScoreReport, ScoringError,
};
use crate::scoring::sections::{check_sections, missing_sections, section_score};

/// Weight of the keyword-match score in the overall score.
pub const KEYWORD_WEIGHT: f64 = 0.5;
/// Weight of the section-completeness score in the overall score.
pub const SECTION_WEIGHT: f64 = 0.3;
/// Weight of the formatting score in the overall score.
pub const FORMATTING_WEIGHT: f64 = 0.2;

/// Scores one resume against one role profile.
///
/// Empty text and an empty skill list are valid and score as zeros; only a
/// malformed profile is rejected.
pub fn score(resume: &ResumeText, profile: &RoleProfile) -> Result<ScoreReport, ScoringError> {
    profile.validate()?;

    let text_lower = resume.as_str().to_lowercase();
    let tokens = tokenize(&text_lower);

    let keyword_match = match_keywords(&text_lower, &profile.canonical_skills());
    let keyword_density = keyword_density(&text_lower, &keyword_match.matched_skills);

    let sections = check_sections(&text_lower);
    let section_score = section_score(&sections);

    let formatting_checks = check_formatting(resume.as_str(), tokens.len());
    let formatting_score = formatting_score(&formatting_checks);

    let overall_score = combine_scores(keyword_match.score, section_score, formatting_score);
    let recommendation = build_recommendation(
        overall_score,
        &keyword_match.missing_skills,
        &missing_sections(&sections),
    );

    debug!(
        role = %profile.name,
        overall_score,
        keyword = keyword_match.score,
        section = section_score,
        formatting = formatting_score,
        "Scored resume"
    );

    Ok(ScoreReport {
        overall_score,
        keyword_match,
        section_score,
        formatting_score,
        sections,
        formatting_checks,
        keyword_density,
        rating: Rating::from_score(overall_score),
        recommendation,
    })
}

/// Partitions `skills` into matched and missing. `skills` must already be
/// canonical (lower-cased, de-duplicated).
fn match_keywords(text_lower: &str, skills: &[String]) -> KeywordMatch {
    if skills.is_empty() {
        return KeywordMatch {
            score: 0.0,
            matched_skills: vec![],
            missing_skills: vec![],
        };
    }

    let (matched_skills, missing_skills): (Vec<String>, Vec<String>) = skills
        .iter()
        .cloned()
        .partition(|skill| contains_phrase(text_lower, skill));

    let score = (100.0 * matched_skills.len() as f64 / skills.len() as f64).round();

    KeywordMatch {
        score,
        matched_skills,
        missing_skills,
    }
}

/// Percentage of whitespace-separated words that hold a matched single-word
/// skill, to one decimal place. A word counts once however many skills it
/// holds (`c++` satisfies both `c` and `c++`), so the value stays in 0 – 100.
/// Multi-word skills are left out.
fn keyword_density(text_lower: &str, matched: &[String]) -> f64 {
    let single_word: Vec<&str> = matched
        .iter()
        .map(String::as_str)
        .filter(|skill| !skill.contains(char::is_whitespace))
        .collect();

    let mut words = 0usize;
    let mut hits = 0usize;
    for word in text_lower.split_whitespace() {
        words += 1;
        if single_word.iter().any(|skill| contains_phrase(word, skill)) {
            hits += 1;
        }
    }

    if words == 0 {
        return 0.0;
    }
    (1000.0 * hits as f64 / words as f64).round() / 10.0
}

pub fn combine_scores(keyword: f64, section: f64, formatting: f64) -> u32 {
    let weighted =
        KEYWORD_WEIGHT * keyword + SECTION_WEIGHT * section + FORMATTING_WEIGHT * formatting;
    weighted.round().clamp(0.0, 100.0) as u32
}

fn build_recommendation(score: u32, missing_skills: &[String], missing_sections: &[&str]) -> String {
    let top_skills: Vec<&str> = missing_skills.iter().take(3).map(String::as_str).collect();

    let mut advice = Vec::new();
    if !top_skills.is_empty() {
        advice.push(format!("add evidence of {}", top_skills.join(", ")));
    }
    if !missing_sections.is_empty() {
        advice.push(format!("add sections for {}", missing_sections.join(", ")));
    }

    let advice = advice.join("; ");
    match (score, advice.is_empty()) {
        (s, true) if s >= 80 => {
            "Excellent match. Your resume covers the role's requirements.".to_string()
        }
        (s, false) if s >= 80 => {
            format!("Excellent match ({s}/100). To polish it further, {advice}.")
        }
        (s, true) => format!("Score {s}/100. Tighten formatting: contact details, bullets, length."),
        (s, false) if s >= 60 => format!("Good match ({s}/100). Consider: {advice}."),
        (s, false) => format!("Needs improvement ({s}/100). Priorities: {advice}."),
    }
}
