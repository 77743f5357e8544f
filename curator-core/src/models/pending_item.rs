use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::CONTENT_PREVIEW_CHARS;

use super::duplicate::DuplicateCandidate;
use super::quality_analysis::QualityAnalysis;
use super::submission::Submission;

/// A knowledge entry awaiting user confirmation.
///
/// Constructed without an id; `PendingStore::add` assigns one and returns
/// it. `created_at` is set once here and never updated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingItem {
    pub id: String,
    #[serde(flatten)]
    pub submission: Submission,
    pub embedding: Vec<f32>,
    #[serde(rename = "quality_analysis")]
    pub quality: QualityAnalysis,
    /// Most similar existing record, if any was above the duplicate floor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duplicate_info: Option<DuplicateCandidate>,
    pub created_at: DateTime<Utc>,
}

impl PendingItem {
    pub fn new(
        submission: Submission,
        embedding: Vec<f32>,
        quality: QualityAnalysis,
        duplicate_info: Option<DuplicateCandidate>,
    ) -> Self {
        Self {
            id: String::new(),
            submission,
            embedding,
            quality,
            duplicate_info,
            created_at: Utc::now(),
        }
    }

    /// Whether this item is past its TTL.
    pub fn is_expired(&self, ttl_minutes: i64) -> bool {
        Utc::now() > self.created_at + Duration::minutes(ttl_minutes)
    }

    /// Summary row for pending enumeration.
    pub fn summary(&self) -> PendingSummary {
        PendingSummary {
            id: self.id.clone(),
            kind: self.submission.kind.clone(),
            content_preview: preview(&self.submission.content),
            quality_score: self.quality.composite_score,
            created_at: self.created_at,
        }
    }
}

/// Caller-facing summary of one pending item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingSummary {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub content_preview: String,
    pub quality_score: f64,
    pub created_at: DateTime<Utc>,
}

/// First `CONTENT_PREVIEW_CHARS` characters, with an ellipsis when truncated.
fn preview(content: &str) -> String {
    if content.chars().count() > CONTENT_PREVIEW_CHARS {
        let head: String = content.chars().take(CONTENT_PREVIEW_CHARS).collect();
        format!("{head}...")
    } else {
        content.to_string()
    }
}
