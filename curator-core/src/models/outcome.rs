use serde::{Deserialize, Serialize};

use super::duplicate::DuplicateCandidate;
use super::quality_analysis::ScoreBreakdown;

/// Terminal result of one ingest call.
///
/// Serialized as a tagged payload so the command layer can pass it through
/// unchanged. Policy rejections land here, not in the error channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status")]
#[serde(rename_all = "snake_case")]
pub enum IngestOutcome {
    /// Validation or quality policy turned the submission away.
    Rejected {
        message: String,
        /// Present only for below-threshold rejections.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        quality_score: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        quality_analysis: Option<ScoreBreakdown>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        recommendations: Vec<String>,
    },
    /// Auto-approved and written to the knowledge store.
    Stored {
        id: String,
        quality_score: f64,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        duplicates: Vec<DuplicateCandidate>,
    },
    /// Held in the pending store until confirmed.
    Pending {
        pending_id: String,
        quality_score: f64,
        quality_analysis: ScoreBreakdown,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        recommendations: Vec<String>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        duplicates: Vec<DuplicateCandidate>,
    },
}

impl IngestOutcome {
    /// The status tag as serialized.
    pub fn status(&self) -> &'static str {
        match self {
            Self::Rejected { .. } => "rejected",
            Self::Stored { .. } => "stored",
            Self::Pending { .. } => "pending",
        }
    }
}

/// Terminal result of one confirm call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status")]
#[serde(rename_all = "snake_case")]
pub enum ConfirmOutcome {
    /// Approved and written to the knowledge store.
    Stored { id: String },
    /// Discarded without storing.
    Rejected { message: String },
}

impl ConfirmOutcome {
    /// The status tag as serialized.
    pub fn status(&self) -> &'static str {
        match self {
            Self::Stored { .. } => "stored",
            Self::Rejected { .. } => "rejected",
        }
    }
}
