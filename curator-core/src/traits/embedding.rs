use crate::errors::CuratorResult;

/// Embedding generation provider.
///
/// External collaborator; the gate only consumes its vectors and never
/// computes embeddings itself.
#[allow(async_fn_in_trait)]
pub trait IEmbeddingProvider: Send + Sync {
    /// Embed a single text, returning a vector of floats.
    async fn embed(&self, text: &str) -> CuratorResult<Vec<f32>>;

    /// The dimensionality of embeddings produced by this provider.
    fn dimensions(&self) -> usize;
}
