//! Error types for the Curator workspace.
//!
//! Collaborator faults get their own enum; everything else callers can hit
//! is a direct variant on the aggregate [`CuratorError`]. Policy rejections
//! and below-threshold scores are *outcomes*, not errors, and never appear
//! here.

mod knowledge_error;

pub use knowledge_error::KnowledgeError;

/// Aggregate error for all Curator operations.
#[derive(Debug, thiserror::Error)]
pub enum CuratorError {
    #[error("Pending item '{id}' not found or expired")]
    PendingNotFound { id: String },

    #[error("scoring weights must sum to 1.0, got {sum}")]
    InvalidWeights { sum: f64 },

    #[error(transparent)]
    KnowledgeError(#[from] KnowledgeError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("config parse error: {0}")]
    ConfigError(#[from] toml::de::Error),
}

pub type CuratorResult<T> = Result<T, CuratorError>;
