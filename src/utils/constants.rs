//! Shared constants for the resource validator
//!
//! Scoring weights, thresholds and fetch defaults live here so the validator,
//! the fetcher and the tool layer agree on the same numbers.

/// Weight of the keyword overlap score in the combined score
pub const KEYWORDS_WEIGHT: f64 = 0.4;

/// Weight of the sequence similarity score in the combined score
pub const SIMILARITY_WEIGHT: f64 = 0.4;

/// Weight of the length adequacy score in the combined score
pub const LENGTH_WEIGHT: f64 = 0.2;

/// Combined score strictly above this is `OK`
pub const OK_THRESHOLD: f64 = 0.75;

/// Combined score strictly above this (and not `OK`) is `NEEDS_UPDATE`
pub const NEEDS_UPDATE_THRESHOLD: f64 = 0.50;

/// Score used when a sub-score has nothing to judge
pub const NEUTRAL_SCORE: f64 = 0.5;

/// Tokens must be longer than this (in characters) to count as keywords
pub const MIN_KEYWORD_CHARS: usize = 3;

/// Similarity is computed on at most this many leading characters of each side
pub const SIMILARITY_PREFIX_CHARS: usize = 500;

/// Sentences must be longer than this to be used in a suggestion
pub const SUGGESTION_MIN_SENTENCE_CHARS: usize = 20;

/// Stop collecting sentences once this many characters are gathered
pub const SUGGESTION_TARGET_CHARS: usize = 100;

/// Sentences are only accepted while fewer than this many characters are gathered
pub const SUGGESTION_SOFT_LIMIT_CHARS: usize = 150;

/// Hard cap on the length of a suggested description
pub const SUGGESTION_MAX_CHARS: usize = 200;

/// Default character cap for fetched page text
pub const DEFAULT_MAX_CHARS: usize = 3000;

/// Default number of fetch attempts before giving up
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Default per-request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Default `Accept-Language` header; the tracked resources are Russian-language sites
pub const DEFAULT_ACCEPT_LANGUAGE: &str = "ru-RU,ru;q=0.9";

/// `Accept` header sent with every page request
pub const HTML_ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";

/// Desktop user agents rotated across fetch attempts
pub const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36",
];

/// Fields every persisted resource record must carry as non-empty strings
pub const REQUIRED_RESOURCE_FIELDS: &[&str] = &["id", "name", "description", "website", "type"];

/// Suffix of the sibling file written before a record file is overwritten
pub const BACKUP_EXTENSION: &str = "json.backup";
