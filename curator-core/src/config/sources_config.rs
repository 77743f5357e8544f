use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Source credibility table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    /// Credibility score per known source name, each in [0, 1].
    pub credibility: HashMap<String, f64>,
    /// Credibility assigned to sources missing from the table.
    pub default_credibility: f64,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            credibility: defaults::DEFAULT_CREDIBILITY_TABLE
                .iter()
                .map(|(name, score)| (name.to_string(), *score))
                .collect(),
            default_credibility: defaults::DEFAULT_SOURCE_CREDIBILITY,
        }
    }
}

impl SourcesConfig {
    /// Credibility for a source, falling back to the default for unknown names.
    pub fn credibility_for(&self, source: &str) -> f64 {
        self.credibility
            .get(source)
            .copied()
            .unwrap_or(self.default_credibility)
    }
}
