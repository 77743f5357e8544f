//! Completeness: length band, narrative structure, actionable steps.

use crate::keywords::{self, ACTIONABLE_MARKERS, STRUCTURE_SECTIONS};

/// Score how complete an entry is.
///
/// Returns the score (0.0–1.0) and a `Present: … Missing: …` explanation
/// built from the length band, the structure sections found, and the
/// actionable-element count.
pub fn score(content: &str) -> (f64, String) {
    let mut score = 0.0;
    let mut present: Vec<String> = Vec::new();
    let mut missing: Vec<String> = Vec::new();
    let lower = content.to_lowercase();

    // Length band (0–0.25).
    let word_count = content.split_whitespace().count();
    if word_count < 20 {
        score += 0.05;
        missing.push("Very short content (<20 words)".to_string());
    } else if word_count < 50 {
        score += 0.15;
        missing.push("Brief content (20-50 words)".to_string());
    } else if word_count < 150 {
        score += 0.20;
        present.push("Moderate detail (50-150 words)".to_string());
    } else {
        score += 0.25;
        present.push("Detailed content (150+ words)".to_string());
    }

    // Narrative structure: 0.35 split evenly across the four sections.
    let mut sections_found = 0;
    for &(section, markers) in STRUCTURE_SECTIONS {
        if keywords::any_contained(&lower, markers) {
            sections_found += 1;
            present.push(format!("Has {section}"));
        } else {
            missing.push(format!("Missing {section}"));
        }
    }
    score += sections_found as f64 * 0.0875;

    // Actionability (0–0.40).
    let actionable_count = keywords::count_contained(&lower, ACTIONABLE_MARKERS);
    score += (actionable_count as f64 * 0.08).min(0.40);
    if actionable_count > 0 {
        present.push(format!("Contains {actionable_count} actionable elements"));
    } else {
        missing.push("No actionable steps found".to_string());
    }

    let explanation = format!(
        "Present: {}. Missing: {}",
        present.join(", "),
        missing.join(", ")
    );
    (score.min(1.0), explanation)
}
