use serde::{Deserialize, Serialize};

use crate::constants::WEIGHT_SUM_TOLERANCE;
use crate::errors::{CuratorError, CuratorResult};

use super::defaults;

/// Quality scoring configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub weights: ScoreWeights,
}

/// Weights for the three quality dimensions. Must sum to 1.0.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    pub relevance: f64,
    pub completeness: f64,
    pub credibility: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            relevance: defaults::DEFAULT_RELEVANCE_WEIGHT,
            completeness: defaults::DEFAULT_COMPLETENESS_WEIGHT,
            credibility: defaults::DEFAULT_CREDIBILITY_WEIGHT,
        }
    }
}

impl ScoreWeights {
    pub fn sum(&self) -> f64 {
        self.relevance + self.completeness + self.credibility
    }
}

impl ScoringConfig {
    /// Reject weight sets that do not sum to 1.0 within tolerance.
    pub fn validate(&self) -> CuratorResult<()> {
        let sum = self.weights.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(CuratorError::InvalidWeights { sum });
        }
        Ok(())
    }
}
