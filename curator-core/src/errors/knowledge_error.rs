/// Collaborator faults from the embedding provider or the knowledge store.
///
/// These always propagate to the caller; the gate never retries and leaves
/// the submission in no persisted state when one occurs.
#[derive(Debug, thiserror::Error)]
pub enum KnowledgeError {
    #[error("embedding failed: {reason}")]
    EmbeddingFailed { reason: String },

    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("duplicate lookup failed: {reason}")]
    LookupFailed { reason: String },

    #[error("knowledge store write failed: {reason}")]
    StoreFailed { reason: String },

    #[error("collaborator unavailable: {service}")]
    Unavailable { service: String },
}
