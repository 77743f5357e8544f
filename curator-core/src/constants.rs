/// Curator system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Hard fallback TTL for pending items when configuration supplies none.
pub const FALLBACK_PENDING_TTL_MINUTES: i64 = 30;

/// Number of hex characters taken from a fresh UUID for a pending id.
pub const PENDING_ID_HEX_LEN: usize = 12;

/// Prefix for store-generated pending ids.
pub const PENDING_ID_PREFIX: &str = "pending-";

/// Maximum near-duplicate candidates surfaced in a response.
pub const MAX_DUPLICATE_ADVISORIES: usize = 5;

/// Character length of content previews in summaries and duplicate advisories.
pub const CONTENT_PREVIEW_CHARS: usize = 100;

/// Tolerance when checking that scoring weights sum to 1.0.
pub const WEIGHT_SUM_TOLERANCE: f64 = 0.01;
