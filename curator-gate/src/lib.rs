//! # curator-gate
//!
//! The ingestion gate: policy validation, tiered quality routing, and the
//! confirmation workflow.
//!
//! One [`QualityGate`] owns the validator, the scorer, and the pending
//! registry; the embedding provider and the knowledge store are injected
//! at construction. Per-submission flow:
//!
//! `validate → embed → duplicate lookup → score → rejected | stored | pending`
//!
//! Policy rejections and below-threshold scores are outcomes, not errors;
//! only collaborator faults surface as `Err`.

pub mod engine;
pub mod validator;

pub use engine::QualityGate;
pub use validator::Validator;
