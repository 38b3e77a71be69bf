//! Algorithm constants and runtime configuration defaults

/// Tolerance below which incrementally tracked weight sums clamp to zero
pub const WEIGHT_EPSILON: f64 = 1e-9;

/// Tie-breaking noise scale for the scanning min-entropy heuristic
pub const ENTROPY_NOISE_SCAN: f64 = 1e-4;

/// Tie-breaking noise scale for the heap and bucket heuristics
pub const ENTROPY_NOISE_HEAP: f64 = 1e-6;

/// Tolerance when matching a popped score against a cell's live score
pub const SCORE_MATCH_EPSILON: f64 = 1e-9;

/// Number of discretized entropy buckets in the bucket heuristic
pub const ENTROPY_BUCKET_COUNT: usize = 64;

/// Default sweep limit for the naive full-grid propagator
pub const DEFAULT_SWEEP_LIMIT: usize = 64;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default output width in cells
pub const DEFAULT_OUTPUT_WIDTH: usize = 40;

/// Default output height in cells
pub const DEFAULT_OUTPUT_HEIGHT: usize = 24;

/// Default N×N window side length for pattern extraction
pub const DEFAULT_PATTERN_SIZE: usize = 3;

/// Default retry cap for generate-until-collapsed (0 means unbounded)
pub const DEFAULT_MAX_ATTEMPTS: usize = 100;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_result";

/// Sentinel symbol for unresolved cells in text samples
pub const UNKNOWN_CHAR: char = '?';
