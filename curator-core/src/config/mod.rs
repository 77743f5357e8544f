//! Policy configuration for the ingestion gate.
//!
//! Every section deserializes with serde defaults, so a partial TOML
//! document (or an empty one) yields a fully usable config. File discovery
//! and reading belong to the caller; this module only parses strings.

pub mod defaults;

mod embedding_config;
mod filtering_config;
mod pending_config;
mod scoring_config;
mod sources_config;
mod thresholds_config;
mod types_config;

pub use embedding_config::EmbeddingConfig;
pub use filtering_config::FilteringConfig;
pub use pending_config::PendingConfig;
pub use scoring_config::{ScoreWeights, ScoringConfig};
pub use sources_config::SourcesConfig;
pub use thresholds_config::ThresholdsConfig;
pub use types_config::{TypeOverride, TypesConfig};

use serde::{Deserialize, Serialize};

use crate::errors::CuratorResult;

/// Top-level Curator configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CuratorConfig {
    pub thresholds: ThresholdsConfig,
    pub pending: PendingConfig,
    pub types: TypesConfig,
    pub filtering: FilteringConfig,
    pub sources: SourcesConfig,
    pub scoring: ScoringConfig,
    pub embedding: EmbeddingConfig,
}

impl CuratorConfig {
    /// Parse from a TOML string; missing sections and keys fall back to defaults.
    pub fn from_toml(raw: &str) -> CuratorResult<Self> {
        let config: Self = toml::from_str(raw)?;
        config.scoring.validate()?;
        Ok(config)
    }

    /// Minimum quality score for a type, honoring per-type overrides.
    pub fn min_score_for_type(&self, kind: &str) -> f64 {
        self.types
            .overrides
            .get(kind)
            .and_then(|o| o.min_quality_score)
            .unwrap_or(self.thresholds.min_quality_score)
    }

    /// Credibility score for a source, defaulting for unknown sources.
    pub fn source_credibility(&self, source: &str) -> f64 {
        self.sources.credibility_for(source)
    }
}
