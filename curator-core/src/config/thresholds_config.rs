use serde::{Deserialize, Serialize};

use super::defaults;

/// Quality score thresholds for the three-tier routing decision.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdsConfig {
    /// Global minimum composite score; below this a submission is rejected.
    pub min_quality_score: f64,
    /// Composite score at or above which a submission is stored without confirmation.
    pub auto_approve_score: f64,
    /// Similarity floor for flagging near-duplicates.
    pub duplicate_similarity: f64,
}

impl Default for ThresholdsConfig {
    fn default() -> Self {
        Self {
            min_quality_score: defaults::DEFAULT_MIN_QUALITY_SCORE,
            auto_approve_score: defaults::DEFAULT_AUTO_APPROVE_SCORE,
            duplicate_similarity: defaults::DEFAULT_DUPLICATE_SIMILARITY,
        }
    }
}
