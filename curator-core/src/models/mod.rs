pub mod duplicate;
pub mod outcome;
pub mod pending_item;
pub mod quality_analysis;
pub mod submission;
pub mod validation_result;

pub use duplicate::DuplicateCandidate;
pub use outcome::{ConfirmOutcome, IngestOutcome};
pub use pending_item::{PendingItem, PendingSummary};
pub use quality_analysis::{QualityAnalysis, ScoreBreakdown};
pub use submission::Submission;
pub use validation_result::ValidationResult;
