// Single source of truth for all default values.

// --- Thresholds ---
pub const DEFAULT_MIN_QUALITY_SCORE: f64 = 0.65;
pub const DEFAULT_AUTO_APPROVE_SCORE: f64 = 0.85;
pub const DEFAULT_DUPLICATE_SIMILARITY: f64 = 0.90;

// --- Pending ---
pub const DEFAULT_PENDING_TTL_MINUTES: i64 = 30;
pub const DEFAULT_CLEANUP_INTERVAL_SECS: u64 = 60;

// --- Types ---
pub const DEFAULT_ALLOWED_TYPES: &[&str] = &[
    "bug",
    "feature",
    "incident",
    "debugging",
    "architecture",
    "error",
    "investigation",
];

// --- Filtering ---
pub const DEFAULT_EXCLUDED_PATTERNS: &[&str] = &[
    "password",
    "api_key",
    "api-key",
    "secret",
    "token",
    "credential",
    "private_key",
    "private-key",
];
pub const DEFAULT_MIN_CONTENT_WORDS: usize = 15;
pub const DEFAULT_MAX_CONTENT_WORDS: usize = 5000;

// --- Sources ---
pub const DEFAULT_SUBMISSION_SOURCE: &str = "claude_session";
pub const DEFAULT_SOURCE_CREDIBILITY: f64 = 0.50;
pub const DEFAULT_CREDIBILITY_TABLE: &[(&str, f64)] = &[
    ("github", 0.95),
    ("confluence", 0.85),
    ("jira", 0.80),
    ("claude_session", 0.70),
    ("slack", 0.60),
];

// --- Scoring weights ---
pub const DEFAULT_RELEVANCE_WEIGHT: f64 = 0.40;
pub const DEFAULT_COMPLETENESS_WEIGHT: f64 = 0.35;
pub const DEFAULT_CREDIBILITY_WEIGHT: f64 = 0.25;

// --- Embedding ---
pub const DEFAULT_EMBEDDING_MODEL: &str = "BAAI/bge-small-en-v1.5";
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 384;
pub const DEFAULT_EMBEDDING_BATCH_SIZE: usize = 100;
