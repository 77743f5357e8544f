//! Relevance: keyword density, technical content signals, type-specific fit.

use crate::keywords::{self, HIGH_RELEVANCE_KEYWORDS, MEDIUM_RELEVANCE_KEYWORDS};

/// Score how relevant content is to the engineering domain.
///
/// Returns the score (0.0–1.0) and an explanation naming each signal that
/// fired, or `"No relevant signals"` when none did.
pub fn score(content: &str, kind: &str) -> (f64, String) {
    let mut score = 0.0;
    let mut factors: Vec<String> = Vec::new();
    let lower = content.to_lowercase();

    // Keyword density (0–0.4).
    let high_matches = keywords::count_contained(&lower, HIGH_RELEVANCE_KEYWORDS);
    let medium_matches = keywords::count_contained(&lower, MEDIUM_RELEVANCE_KEYWORDS);
    score += (high_matches as f64 * 0.08 + medium_matches as f64 * 0.04).min(0.4);
    if high_matches > 0 {
        factors.push(format!("Found {high_matches} high-relevance keywords"));
    }
    if medium_matches > 0 {
        factors.push(format!("Found {medium_matches} medium-relevance keywords"));
    }

    // Technical content signals (0–0.3). Code fences or indent runs count as
    // code; "at " is a deliberately loose frame-line heuristic.
    let has_code_block = content.contains("```") || content.contains("    ");
    let has_stack_trace = lower.contains("traceback") || lower.contains("at ");
    let has_error_pattern =
        keywords::any_contained(&lower, &["error:", "exception:", "fatal", "error "]);
    if has_code_block {
        score += 0.15;
        factors.push("Contains code blocks".to_string());
    }
    if has_stack_trace {
        score += 0.10;
        factors.push("Contains stack trace".to_string());
    }
    if has_error_pattern {
        score += 0.05;
        factors.push("Contains error patterns".to_string());
    }

    // Type-specific bonus: 0.1 baseline, more when the content backs the
    // declared type up.
    let bonus = type_bonus(&lower, kind);
    score += bonus;
    if bonus > 0.1 {
        factors.push(format!("Type-specific content detected for {kind}"));
    }

    let explanation = if factors.is_empty() {
        "No relevant signals".to_string()
    } else {
        factors.join("; ")
    };
    (score.min(1.0), explanation)
}

/// Bonus for content that shows the signals its declared type implies.
/// Types without an entry get the baseline.
fn type_bonus(lower: &str, kind: &str) -> f64 {
    let (strong, markers): (f64, &[&str]) = match kind {
        "bug" => (0.2, &["error", "traceback", "fix"]),
        "feature" => (0.2, &["implement", "```", "feature"]),
        "incident" => (0.25, &["rca", "root cause", "timeline"]),
        "debugging" => (0.2, &["traceback", "debug", "stack"]),
        "architecture" => (0.2, &["diagram", "service", "component"]),
        "error" => (0.25, &["error:", "exception", "fatal"]),
        _ => return 0.1,
    };
    if keywords::any_contained(lower, markers) {
        strong
    } else {
        0.1
    }
}
