//! Policy validation — three ordered checks, first failure wins.

use curator_core::config::{CuratorConfig, FilteringConfig, TypesConfig};
use curator_core::models::{Submission, ValidationResult};

/// Stateless policy checks run before any collaborator call.
///
/// Checks run cheapest and highest-signal first: type membership, then
/// excluded content patterns, then word-count bounds. The pattern check
/// is a conservative substring scan, not context-aware secret detection.
pub struct Validator {
    types: TypesConfig,
    filtering: FilteringConfig,
}

impl Validator {
    pub fn new(config: &CuratorConfig) -> Self {
        Self {
            types: config.types.clone(),
            filtering: config.filtering.clone(),
        }
    }

    /// Run all checks in order, stopping at the first failure.
    pub fn validate(&self, submission: &Submission) -> ValidationResult {
        let type_check = self.validate_type(&submission.kind);
        if !type_check.is_valid {
            return type_check;
        }

        let content_check = self.validate_content(&submission.content);
        if !content_check.is_valid {
            return content_check;
        }

        self.validate_length(&submission.content)
    }

    /// The declared type must be in the allowed set (case-sensitive).
    pub fn validate_type(&self, kind: &str) -> ValidationResult {
        if self.types.is_allowed(kind) {
            return ValidationResult::pass();
        }
        ValidationResult::fail(format!(
            "Invalid type '{kind}'. Allowed types: {}",
            self.types.allowed.join(", ")
        ))
    }

    /// Content must not contain any excluded pattern. Matching is
    /// case-insensitive on both sides; the first match wins.
    pub fn validate_content(&self, content: &str) -> ValidationResult {
        let content_lower = content.to_lowercase();
        for pattern in &self.filtering.excluded_patterns {
            if content_lower.contains(&pattern.to_lowercase()) {
                return ValidationResult::fail(format!(
                    "Content contains excluded pattern: '{pattern}'"
                ));
            }
        }
        ValidationResult::pass()
    }

    /// Whitespace-delimited word count must lie within the configured
    /// bounds, both ends inclusive.
    pub fn validate_length(&self, content: &str) -> ValidationResult {
        let word_count = content.split_whitespace().count();

        if word_count < self.filtering.min_content_length {
            return ValidationResult::fail(format!(
                "Content too short ({word_count} words). Minimum: {}",
                self.filtering.min_content_length
            ));
        }

        if word_count > self.filtering.max_content_length {
            return ValidationResult::fail(format!(
                "Content too long ({word_count} words). Maximum: {}",
                self.filtering.max_content_length
            ));
        }

        ValidationResult::pass()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_validator() -> Validator {
        Validator::new(&CuratorConfig::default())
    }

    #[test]
    fn allowed_type_passes() {
        let validator = default_validator();
        assert!(validator.validate_type("bug").is_valid);
        assert!(validator.validate_type("incident").is_valid);
    }

    #[test]
    fn unknown_type_names_itself_and_the_allowed_set() {
        let validator = default_validator();
        let result = validator.validate_type("gossip");

        assert!(!result.is_valid);
        let error = result.error.unwrap();
        assert!(error.contains("Invalid type 'gossip'"));
        assert!(error.contains("bug"), "allowed set should be listed: {error}");
    }

    #[test]
    fn type_check_is_case_sensitive() {
        let validator = default_validator();
        assert!(!validator.validate_type("Bug").is_valid);
    }

    #[test]
    fn pattern_check_matches_case_insensitively() {
        let validator = default_validator();
        let result = validator.validate_content("the PASSWORD is hunter2");

        assert!(!result.is_valid);
        assert_eq!(
            result.error.unwrap(),
            "Content contains excluded pattern: 'password'"
        );
    }

    #[test]
    fn clean_content_passes_the_pattern_check() {
        let validator = default_validator();
        let result = validator.validate_content("retry loop exits after three attempts");
        assert!(result.is_valid);
    }

    #[test]
    fn short_content_reports_count_and_minimum() {
        let validator = default_validator();
        let result = validator.validate_length("Fixed bug");

        assert!(!result.is_valid);
        assert_eq!(
            result.error.unwrap(),
            "Content too short (2 words). Minimum: 15"
        );
    }

    #[test]
    fn long_content_reports_count_and_maximum() {
        let validator = default_validator();
        let content = vec!["word"; 5001].join(" ");
        let result = validator.validate_length(&content);

        assert!(!result.is_valid);
        assert_eq!(
            result.error.unwrap(),
            "Content too long (5001 words). Maximum: 5000"
        );
    }

    #[test]
    fn length_bounds_are_inclusive() {
        let validator = default_validator();
        assert!(validator.validate_length(&vec!["word"; 15].join(" ")).is_valid);
        assert!(validator.validate_length(&vec!["word"; 5000].join(" ")).is_valid);
    }

    #[test]
    fn combined_validation_stops_at_the_first_failure() {
        let validator = default_validator();
        // Both the type and the length are bad; the type error must win.
        let submission = Submission::new("too short", "gossip");
        let result = validator.validate(&submission);

        assert!(!result.is_valid);
        assert!(result.error.unwrap().starts_with("Invalid type"));
    }
}
