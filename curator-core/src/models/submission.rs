use serde::{Deserialize, Serialize};

use crate::config::defaults::DEFAULT_SUBMISSION_SOURCE;

/// A candidate knowledge entry handed to the gate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    /// The knowledge content itself.
    pub content: String,
    /// Declared knowledge type (bug, feature, incident, ...).
    #[serde(rename = "type")]
    pub kind: String,
    /// Tags for categorization.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Where the content came from (github, slack, ...).
    pub source: String,
    /// Related file paths, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_paths: Option<Vec<String>>,
}

impl Submission {
    /// New submission with the default source and no tags or files.
    pub fn new(content: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            kind: kind.into(),
            tags: Vec::new(),
            source: DEFAULT_SUBMISSION_SOURCE.to_string(),
            file_paths: None,
        }
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub fn with_file_paths(mut self, file_paths: Vec<String>) -> Self {
        self.file_paths = Some(file_paths);
        self
    }

    /// Whitespace-delimited word count of the content.
    pub fn word_count(&self) -> usize {
        self.content.split_whitespace().count()
    }
}
