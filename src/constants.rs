use crate::models::JaroWinklerConfig;
use crate::types::SimilarityScore;

/// Bonus weighting for strings starting with the same characters.
pub const PREFIX_SCALING_FACTOR: f64 = 0.1;

/// Winkler's common prefix never counts past this many characters.
pub const MAX_WINKLER_PREFIX_LENGTH: usize = 4;

/// Score returned by every algorithm when both inputs are empty.
pub const EMPTY_STRINGS_SIMILARITY: SimilarityScore = 1.0;

pub const DEFAULT_JARO_WINKLER_CONFIG: JaroWinklerConfig = JaroWinklerConfig {
    prefix_scaling_factor: PREFIX_SCALING_FACTOR,
};
