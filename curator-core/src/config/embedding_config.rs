use serde::{Deserialize, Serialize};

use super::defaults;

/// Embedding collaborator configuration.
///
/// The gate never computes embeddings itself; it hands these values to the
/// provider and checks returned vectors against `dimensions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Model identifier for the provider.
    pub model: String,
    /// Expected vector dimensionality.
    pub dimensions: usize,
    /// Batch size hint for bulk embedding.
    pub batch_size: usize,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            model: defaults::DEFAULT_EMBEDDING_MODEL.to_string(),
            dimensions: defaults::DEFAULT_EMBEDDING_DIMENSIONS,
            batch_size: defaults::DEFAULT_EMBEDDING_BATCH_SIZE,
        }
    }
}
