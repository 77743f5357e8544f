use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Allowed knowledge types and per-type threshold overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TypesConfig {
    /// Types accepted by the validator (case-sensitive).
    pub allowed: Vec<String>,
    /// Per-type overrides keyed by type name.
    pub overrides: HashMap<String, TypeOverride>,
}

/// Override block for a single knowledge type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeOverride {
    /// Replaces the global minimum quality score for this type.
    pub min_quality_score: Option<f64>,
}

impl Default for TypesConfig {
    fn default() -> Self {
        Self {
            allowed: defaults::DEFAULT_ALLOWED_TYPES
                .iter()
                .map(|t| t.to_string())
                .collect(),
            overrides: HashMap::new(),
        }
    }
}

impl TypesConfig {
    /// Whether the given type is in the allowed set.
    pub fn is_allowed(&self, kind: &str) -> bool {
        self.allowed.iter().any(|t| t == kind)
    }
}
