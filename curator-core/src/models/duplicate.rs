use serde::{Deserialize, Serialize};

/// Advisory record for a near-duplicate already in the knowledge store.
///
/// Advisory only: a near-duplicate never blocks a store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuplicateCandidate {
    /// Id of the existing stored record.
    pub id: String,
    /// Similarity against the submitted content, in [0, 1].
    pub similarity_score: f64,
    /// Leading characters of the stored content.
    pub content_preview: String,
    /// Remaining fields of the stored record, passed through untouched.
    #[serde(flatten)]
    pub payload: serde_json::Map<String, serde_json::Value>,
}
