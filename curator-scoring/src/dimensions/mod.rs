//! 3-dimension scoring framework.
//!
//! Each dimension produces a score (0.0–1.0) and a human-readable
//! explanation. The engine weights these into a composite.

pub mod completeness;
pub mod credibility;
pub mod relevance;
