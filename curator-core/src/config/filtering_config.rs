use serde::{Deserialize, Serialize};

use super::defaults;

/// Content filtering rules applied before scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilteringConfig {
    /// Substrings that reject content outright (matched case-insensitively).
    pub excluded_patterns: Vec<String>,
    /// Minimum content length in whitespace-delimited words.
    pub min_content_length: usize,
    /// Maximum content length in whitespace-delimited words.
    pub max_content_length: usize,
}

impl Default for FilteringConfig {
    fn default() -> Self {
        Self {
            excluded_patterns: defaults::DEFAULT_EXCLUDED_PATTERNS
                .iter()
                .map(|p| p.to_string())
                .collect(),
            min_content_length: defaults::DEFAULT_MIN_CONTENT_WORDS,
            max_content_length: defaults::DEFAULT_MAX_CONTENT_WORDS,
        }
    }
}
