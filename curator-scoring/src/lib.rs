//! # curator-scoring
//!
//! Multi-factor quality assessment for engineering knowledge submissions.
//!
//! ## Dimensions
//! 1. **Relevance** (40% by default) — domain keyword density plus technical
//!    signals such as code blocks and stack traces
//! 2. **Completeness** (35%) — length band, narrative structure, actionability
//! 3. **Credibility** (25%) — source reputation table
//!
//! The composite is the weighted sum of the three, rounded to two decimals.
//! Whichever dimensions fall short also produce improvement recommendations,
//! so callers can surface them alongside a rejection or a confirmation
//! request.

pub mod dimensions;
pub mod engine;
pub mod keywords;

pub use engine::QualityScorer;
