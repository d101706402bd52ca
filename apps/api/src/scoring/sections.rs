use crate::scoring::matcher::contains_phrase;
use crate::scoring::models::SectionCheck;

/// Sections an ATS expects to find, each with the header spellings accepted
/// for it. Every section carries an equal share of the section score.
pub const EXPECTED_SECTIONS: &[(&str, &[&str])] = &[
    (
        "experience",
        &["experience", "work history", "employment", "internship"],
    ),
    ("education", &["education", "academic", "qualifications"]),
    ("skills", &["skills", "competencies", "technologies"]),
    ("projects", &["projects", "project", "portfolio"]),
];

/// Checks each expected section against lower-cased resume text.
pub fn check_sections(text_lower: &str) -> Vec<SectionCheck> {
    EXPECTED_SECTIONS
        .iter()
        .map(|(section, aliases)| SectionCheck {
            section: section.to_string(),
            found: aliases.iter().any(|alias| contains_phrase(text_lower, alias)),
        })
        .collect()
}

/// 0 – 100, equal share per found section.
pub fn section_score(checks: &[SectionCheck]) -> f64 {
    if checks.is_empty() {
        return 0.0;
    }
    let found = checks.iter().filter(|c| c.found).count();
    100.0 * found as f64 / checks.len() as f64
}

pub fn missing_sections(checks: &[SectionCheck]) -> Vec<&str> {
    checks
        .iter()
        .filter(|c| !c.found)
        .map(|c| c.section.as_str())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_sections_present() {
        let text = "summary\nwork experience\neducation\ntechnical skills\nprojects";
        let checks = check_sections(text);
        assert!(checks.iter().all(|c| c.found));
        assert_eq!(section_score(&checks), 100.0);
        assert!(missing_sections(&checks).is_empty());
    }

    #[test]
    fn test_alias_headers_count() {
        let checks = check_sections("employment\nacademic background\ncompetencies\nportfolio");
        assert_eq!(section_score(&checks), 100.0);
    }

    #[test]
    fn test_each_section_is_an_equal_share() {
        let checks = check_sections("experience\neducation");
        assert_eq!(section_score(&checks), 50.0);
        assert_eq!(missing_sections(&checks), vec!["skills", "projects"]);
    }

    #[test]
    fn test_empty_text_scores_zero() {
        let checks = check_sections("");
        assert_eq!(checks.len(), EXPECTED_SECTIONS.len());
        assert_eq!(section_score(&checks), 0.0);
    }

    #[test]
    fn test_header_inside_other_word_is_ignored() {
        // "reskills" / "inexperienced" must not satisfy the header check.
        let checks = check_sections("inexperienced reskills");
        assert_eq!(section_score(&checks), 0.0);
    }

    #[test]
    fn test_section_score_of_no_checks_is_zero() {
        assert_eq!(section_score(&[]), 0.0);
    }
}
