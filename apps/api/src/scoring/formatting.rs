use std::sync::LazyLock;

use regex::Regex;

use crate::scoring::models::{FormattingCheck, FormattingRule};

/// Word-count window an ATS-friendly resume should fall into.
pub const MIN_WORDS: usize = 150;
pub const MAX_WORDS: usize = 1200;

/// Lines needed before a resume counts as bullet-structured.
const MIN_BULLET_LINES: usize = 2;

const BULLET_MARKERS: &[char] = &['•', '●', '▪', '◦', '‣', '➢', '✓', '-', '*', '–'];

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b[a-z0-9._%+-]+@[a-z0-9-]+(?:\.[a-z0-9-]+)*\.[a-z]{2,}\b")
        .expect("email pattern is valid")
});

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:^|[^\w.])(?:\+\d{1,3}[ .-]?)?(?:\(\d{2,4}\)|\d{2,5})[ .-]?\d{2,5}[ .-]?\d{3,5}(?:$|[^\w])",
    )
    .expect("phone pattern is valid")
});

/// Runs every formatting rule. `word_count` is the token count of the text.
pub fn check_formatting(text: &str, word_count: usize) -> Vec<FormattingCheck> {
    [
        (FormattingRule::ContactEmail, has_email(text)),
        (FormattingRule::PhoneNumber, has_phone_number(text)),
        (FormattingRule::BulletPoints, has_bullets(text)),
        (
            FormattingRule::WordCount,
            (MIN_WORDS..=MAX_WORDS).contains(&word_count),
        ),
    ]
    .into_iter()
    .map(|(rule, passed)| FormattingCheck { rule, passed })
    .collect()
}

/// 0 – 100, equal share per passed rule.
pub fn formatting_score(checks: &[FormattingCheck]) -> f64 {
    if checks.is_empty() {
        return 0.0;
    }
    let passed = checks.iter().filter(|c| c.passed).count();
    100.0 * passed as f64 / checks.len() as f64
}

fn has_email(text: &str) -> bool {
    EMAIL_RE.is_match(text)
}

/// A phone-shaped run: optional `+` country code, then three digit groups
/// (the first optionally parenthesized) with at most one space, dot or hyphen
/// between them, holding 10 to 13 digits in total. The run must not start
/// right after a decimal point, so `3.8 (2016 - 2020)` is not a number.
fn has_phone_number(text: &str) -> bool {
    PHONE_RE.find_iter(text).any(|m| {
        let digits = m.as_str().chars().filter(char::is_ascii_digit).count();
        (10..=13).contains(&digits)
    })
}

fn has_bullets(text: &str) -> bool {
    text.lines()
        .filter(|line| line.trim_start().starts_with(BULLET_MARKERS))
        .count()
        >= MIN_BULLET_LINES
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passed(checks: &[FormattingCheck], rule: FormattingRule) -> bool {
        checks.iter().find(|c| c.rule == rule).map(|c| c.passed).unwrap()
    }

    #[test]
    fn test_email_detection() {
        assert!(has_email("Contact: jane.doe@example.com"));
        assert!(has_email("<jane@mail.co>"));
        assert!(!has_email("follow @jane on socials"));
        assert!(!has_email("jane@localhost"));
        assert!(has_email("Email:j.doe+jobs@mail.example.co.uk;"));
        assert!(!has_email(""));
    }

    #[test]
    fn test_phone_detection() {
        assert!(has_phone_number("Phone: +1 (555) 123-4567"));
        assert!(has_phone_number("9876543210"));
        assert!(has_phone_number("Mobile: +91 98765 43210"));
        assert!(has_phone_number("555.123.4567."));
        assert!(!has_phone_number("2019 - 2021"));
        assert!(!has_phone_number("2016-2020"));
        assert!(!has_phone_number("no digits here"));
        assert!(!has_phone_number("12345"));
    }

    #[test]
    fn test_education_dates_are_not_a_phone_number() {
        let checks = check_formatting("Education\nB.Sc. Computer Science, GPA 3.8 (2016 - 2020)", 10);
        assert!(!passed(&checks, FormattingRule::PhoneNumber));
        assert!(!passed(&checks, FormattingRule::ContactEmail));
    }

    #[test]
    fn test_bullet_detection_needs_two_lines() {
        assert!(has_bullets("• built APIs\n• shipped features"));
        assert!(has_bullets("  - one\n  * two"));
        assert!(!has_bullets("• lonely bullet\nplain line"));
    }

    #[test]
    fn test_word_count_window() {
        let checks = check_formatting("", MIN_WORDS);
        assert!(passed(&checks, FormattingRule::WordCount));
        let checks = check_formatting("", MIN_WORDS - 1);
        assert!(!passed(&checks, FormattingRule::WordCount));
        let checks = check_formatting("", MAX_WORDS + 1);
        assert!(!passed(&checks, FormattingRule::WordCount));
    }

    #[test]
    fn test_formatting_score_equal_shares() {
        let text = "jane@example.com\n555-123-4567\n• one\n• two";
        let checks = check_formatting(text, 10);
        assert_eq!(checks.len(), 4);
        assert_eq!(formatting_score(&checks), 75.0);
    }

    #[test]
    fn test_empty_text_scores_zero() {
        let checks = check_formatting("", 0);
        assert_eq!(formatting_score(&checks), 0.0);
    }
}
