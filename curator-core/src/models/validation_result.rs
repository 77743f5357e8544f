use serde::{Deserialize, Serialize};

/// Result of a single validation check.
///
/// Produced and consumed within one validation pass; the first failing
/// check short-circuits the rest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValidationResult {
    /// A passing check.
    pub fn pass() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    /// A failing check with a human-readable message.
    pub fn fail(error: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(error.into()),
        }
    }
}
