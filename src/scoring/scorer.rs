//! Keyword-coverage answer scoring
//!
//! Each question carries expected keywords; the score is simply how many of
//! them show up in the normalized answer. Admissions of uncertainty
//! short-circuit to "unknown" before any keyword matching.

use crate::core::config::{CORRECT_COVERAGE, PARTIAL_COVERAGE};
use crate::core::types::EvalLabel;

/// Phrases that mean "I don't know" and bypass keyword matching
const UNCERTAINTY_PATTERNS: &[&str] = &["не знаю", "не уверен", "затрудняюсь", "без понятия"];

/// Result of scoring one answer
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerScore {
    pub label: EvalLabel,
    /// Fraction of expected keywords found, 0.0..=1.0
    pub coverage: f64,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

/// Collapse whitespace and lowercase for substring checks
fn normalize(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Score an answer against the expected keyword set.
///
/// An empty keyword set yields coverage 0.0 and label wrong rather than an
/// error; a malformed bank entry should not crash a session.
pub fn score_answer(answer: &str, expected_keywords: &[&str]) -> AnswerScore {
    let text = normalize(answer);

    if UNCERTAINTY_PATTERNS.iter().any(|p| text.contains(p)) {
        return AnswerScore {
            label: EvalLabel::Unknown,
            coverage: 0.0,
            matched: Vec::new(),
            missing: expected_keywords.iter().map(|k| k.to_string()).collect(),
        };
    }

    let matched: Vec<String> = expected_keywords
        .iter()
        .filter(|k| text.contains(&k.to_lowercase()))
        .map(|k| k.to_string())
        .collect();

    let coverage = if expected_keywords.is_empty() {
        0.0
    } else {
        matched.len() as f64 / expected_keywords.len() as f64
    };

    let label = if coverage >= CORRECT_COVERAGE {
        EvalLabel::Correct
    } else if coverage >= PARTIAL_COVERAGE {
        EvalLabel::Partial
    } else {
        EvalLabel::Wrong
    };

    let missing: Vec<String> = expected_keywords
        .iter()
        .filter(|k| !matched.iter().any(|m| m == *k))
        .map(|k| k.to_string())
        .collect();

    AnswerScore {
        label,
        coverage,
        matched,
        missing,
    }
}
