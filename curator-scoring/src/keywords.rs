//! Keyword tables behind the relevance and completeness dimensions.
//!
//! Matching is plain case-insensitive substring containment over the
//! lowercased content; each table entry counts at most once.

/// Count how many table entries occur in the haystack.
pub fn count_contained(haystack: &str, needles: &[&str]) -> usize {
    needles
        .iter()
        .filter(|needle| haystack.contains(**needle))
        .count()
}

/// True when any table entry occurs in the haystack.
pub fn any_contained(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(*needle))
}

// ── Relevance ──────────────────────────────────────────────────────────────

/// Strong engineering-domain signals, worth 0.08 each toward the keyword score.
pub static HIGH_RELEVANCE_KEYWORDS: &[&str] = &[
    "bug",
    "fix",
    "error",
    "exception",
    "stack trace",
    "traceback",
    "implementation",
    "feature",
    "refactor",
    "optimization",
    "incident",
    "outage",
    "rca",
    "root cause",
    "architecture",
    "design",
    "pattern",
    "service",
    "api",
    "database",
    "performance",
];

/// Weaker operational signals, worth 0.04 each.
pub static MEDIUM_RELEVANCE_KEYWORDS: &[&str] = &[
    "configuration",
    "deploy",
    "test",
    "review",
    "documentation",
    "setup",
    "migration",
    "update",
    "change",
];

// ── Completeness ───────────────────────────────────────────────────────────

/// Narrative sections a complete entry covers, with the markers that count
/// as evidence for each. Explanations list sections in this order.
pub static STRUCTURE_SECTIONS: &[(&str, &[&str])] = &[
    (
        "problem",
        &["problem", "issue", "error", "bug", "symptom", "failing"],
    ),
    (
        "cause",
        &["cause", "reason", "because", "due to", "root cause", "rca"],
    ),
    (
        "solution",
        &["solution", "fix", "resolved", "fixed by", "workaround", "fixed"],
    ),
    (
        "context",
        &["context", "background", "when", "environment", "version", "affect"],
    ),
];

/// Markers of actionable content: numbered steps, imperative verbs, and
/// code examples.
pub static ACTIONABLE_MARKERS: &[&str] = &[
    "step",
    "1.",
    "2.",
    "3.",
    "first",
    "then",
    "finally",
    "run",
    "execute",
    "add",
    "remove",
    "change",
    "update",
    "```",
];
