//! Composite quality scoring engine.

use tracing::debug;

use curator_core::config::{CuratorConfig, ScoreWeights, SourcesConfig};
use curator_core::models::{QualityAnalysis, Submission};

use crate::dimensions::{completeness, credibility, relevance};

/// Multi-factor quality assessment for engineering knowledge.
///
/// Holds the pieces of configuration scoring depends on, so it can be built
/// once and shared for the life of the gate.
#[derive(Debug, Clone)]
pub struct QualityScorer {
    weights: ScoreWeights,
    sources: SourcesConfig,
}

impl QualityScorer {
    /// Build a scorer from gate configuration.
    pub fn new(config: &CuratorConfig) -> Self {
        Self {
            weights: config.scoring.weights.clone(),
            sources: config.sources.clone(),
        }
    }

    /// Score a submission across all three dimensions.
    ///
    /// Pure and deterministic: equal submissions under an equal config
    /// produce equal analyses.
    pub fn score(&self, submission: &Submission) -> QualityAnalysis {
        let (relevance, relevance_details) =
            relevance::score(&submission.content, &submission.kind);
        let (completeness, completeness_details) = completeness::score(&submission.content);
        let (credibility, credibility_details) =
            credibility::score(&submission.source, &self.sources);

        // The composite is weighted from the raw sub-scores; rounding only
        // happens at the presentation edge below.
        let composite = relevance * self.weights.relevance
            + completeness * self.weights.completeness
            + credibility * self.weights.credibility;

        debug!(
            source = %submission.source,
            credibility,
            judgement = %credibility_details,
            "source credibility assessed"
        );

        let mut recommendations = Vec::new();
        if relevance < 0.6 {
            recommendations
                .push("Add more technical details (code, error messages, stack traces)".to_string());
        }
        if completeness < 0.6 {
            recommendations.push("Include problem, cause, and solution sections".to_string());
        }
        if credibility < 0.7 {
            recommendations
                .push("Consider adding references to GitHub PRs or documentation".to_string());
        }
        if submission.word_count() < 50 {
            recommendations.push("Expand content with more context and details".to_string());
        }

        QualityAnalysis {
            relevance_score: round2(relevance),
            completeness_score: round2(completeness),
            credibility_score: round2(credibility),
            composite_score: round2(composite),
            relevance_details,
            completeness_details,
            recommendations,
        }
    }
}

/// Round to two decimals for stable presentation.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
