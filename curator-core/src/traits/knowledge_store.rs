use crate::errors::CuratorResult;
use crate::models::{DuplicateCandidate, Submission};

/// Persistent knowledge store with nearest-neighbor lookup.
///
/// External collaborator; persistence and vector search live behind this
/// trait, never inside the gate.
#[allow(async_fn_in_trait)]
pub trait IKnowledgeStore: Send + Sync {
    /// Persist an entry with its embedding, returning the stored id.
    async fn store(&self, submission: &Submission, embedding: &[f32]) -> CuratorResult<String>;

    /// Existing entries with similarity at or above `threshold`.
    async fn find_duplicates(
        &self,
        embedding: &[f32],
        threshold: f64,
    ) -> CuratorResult<Vec<DuplicateCandidate>>;
}
