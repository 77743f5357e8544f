use serde::{Deserialize, Serialize};

/// Result of quality analysis for a knowledge entry.
///
/// Produced once per scoring call and never mutated afterwards; pending
/// items and response payloads embed it verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityAnalysis {
    pub relevance_score: f64,
    pub completeness_score: f64,
    pub credibility_score: f64,
    /// Weighted sum of the three sub-scores, rounded to two decimals.
    pub composite_score: f64,
    /// Which relevance signals fired, semicolon-joined.
    pub relevance_details: String,
    /// Present/missing breakdown of sections and signals.
    pub completeness_details: String,
    /// Remediation hints, generated whether or not the composite passed.
    #[serde(default)]
    pub recommendations: Vec<String>,
}

/// The three sub-scores, embedded in rejection and pending responses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub relevance: f64,
    pub completeness: f64,
    pub credibility: f64,
}

impl QualityAnalysis {
    /// Sub-score triple for response payloads.
    pub fn breakdown(&self) -> ScoreBreakdown {
        ScoreBreakdown {
            relevance: self.relevance_score,
            completeness: self.completeness_score,
            credibility: self.credibility_score,
        }
    }
}
