use crate::constants::{
    DEFAULT_JARO_WINKLER_CONFIG, EMPTY_STRINGS_SIMILARITY, MAX_WINKLER_PREFIX_LENGTH,
};
use crate::models::{Error, JaroWinklerConfig, SimilarityCalculator};
use crate::types::SimilarityScore;
use log::{debug, warn};

/// Matches and transposes found in a single scan, since transposes fall out of matching.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct MatchResults {
    /// In-position matches plus out-of-position matches found within the window.
    pub number_of_matches: usize,
    /// Half the number of out-of-position matches.
    pub number_of_transposes: usize,
}

/// Jaro-Winkler similarity: the Jaro distance, boosted for strings sharing a prefix.
///
/// ```rust
/// use char_similarity::{JaroWinklerSimilarity, SimilarityCalculator};
///
/// let score = JaroWinklerSimilarity::new().calculate("martha", "marhta").unwrap();
/// assert!((score - 0.961).abs() < 0.001);
/// ```
///
/// The scan keeps no record of which characters of the longer string were already
/// matched, and strings of equal length are always scanned from the first argument. The
/// score is therefore symmetric only for strings of different lengths; for equal lengths,
/// swapping the arguments can change it, and distinct strings can score `1.0`:
///
/// ```rust
/// use char_similarity::{JaroWinklerSimilarity, SimilarityCalculator};
///
/// let jaro_winkler = JaroWinklerSimilarity::new();
/// assert_eq!(jaro_winkler.calculate("aaaa", "baaa").unwrap(), 1.0);
/// assert!((jaro_winkler.calculate("baaa", "aaaa").unwrap() - 0.8333).abs() < 0.001);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct JaroWinklerSimilarity {
    config: JaroWinklerConfig,
}

impl Default for JaroWinklerSimilarity {
    fn default() -> Self {
        Self::new()
    }
}

impl JaroWinklerSimilarity {
    pub fn new() -> Self {
        Self {
            config: DEFAULT_JARO_WINKLER_CONFIG,
        }
    }

    pub fn with_config(config: JaroWinklerConfig) -> Self {
        if !(0.0..=0.25).contains(&config.prefix_scaling_factor) {
            warn!(
                "Prefix scaling factor {} is outside [0, 0.25]; scores may leave [0, 1]",
                config.prefix_scaling_factor
            );
        }

        Self { config }
    }

    pub fn config(&self) -> JaroWinklerConfig {
        self.config
    }

    /// How far left and right of a position to look for a match: `max(|A|, |B|) / 2 - 1`,
    /// never below zero.
    pub fn matching_window(string_one: &str, string_two: &str) -> usize {
        let longest = string_one.chars().count().max(string_two.chars().count());

        (longest / 2).saturating_sub(1)
    }

    /// Find all of the matching and transposed characters in two strings.
    ///
    /// Iterates over the shorter string (the first one on a length tie). A character
    /// matches when the longer string holds the same character at the same index, or,
    /// failing that, anywhere within the matching window; only the first in-window
    /// occurrence is counted. Swapped neighbours register two out-of-position matches,
    /// hence transposes are half the out-of-position count.
    pub fn determine_matches_and_transposes(string_one: &str, string_two: &str) -> MatchResults {
        let window = Self::matching_window(string_one, string_two);

        let chars_one: Vec<char> = string_one.chars().collect();
        let chars_two: Vec<char> = string_two.chars().collect();

        let (shortest, longest) = if chars_one.len() <= chars_two.len() {
            (chars_one, chars_two)
        } else {
            (chars_two, chars_one)
        };

        let mut number_of_matches = 0;
        let mut matched_out_of_position = 0;

        for (i, &c) in shortest.iter().enumerate() {
            if longest[i] == c {
                number_of_matches += 1;
                continue;
            }

            let backward_boundary = i.saturating_sub(window);
            let forward_boundary = (i + window).min(longest.len() - 1);

            if longest[backward_boundary..=forward_boundary].contains(&c) {
                number_of_matches += 1;
                matched_out_of_position += 1;
            }
        }

        MatchResults {
            number_of_matches,
            number_of_transposes: matched_out_of_position / 2,
        }
    }

    /// `1/3 * (m / |A| + m / |B| + (m - t) / m)`, or `0.0` when nothing matched.
    pub fn jaro_distance(
        number_of_matches: usize,
        number_of_transposes: usize,
        string_one_length: usize,
        string_two_length: usize,
    ) -> f64 {
        if number_of_matches == 0 {
            return 0.0;
        }

        let matches = number_of_matches as f64;

        let string_one_norm = matches / string_one_length as f64;
        let string_two_norm = matches / string_two_length as f64;
        let match_transpose_norm = (matches - number_of_transposes as f64) / matches;

        (string_one_norm + string_two_norm + match_transpose_norm) / 3.0
    }

    /// Number of identical leading characters, capped at `MAX_WINKLER_PREFIX_LENGTH`.
    pub fn winkler_common_prefix(string_one: &str, string_two: &str) -> usize {
        string_one
            .chars()
            .zip(string_two.chars())
            .take(MAX_WINKLER_PREFIX_LENGTH)
            .take_while(|(a, b)| a == b)
            .count()
    }
}

impl SimilarityCalculator for JaroWinklerSimilarity {
    fn calculate(&self, string_one: &str, string_two: &str) -> Result<SimilarityScore, Error> {
        if string_one.is_empty() && string_two.is_empty() {
            return Ok(EMPTY_STRINGS_SIMILARITY);
        }

        let match_results = Self::determine_matches_and_transposes(string_one, string_two);

        let jaro_distance = Self::jaro_distance(
            match_results.number_of_matches,
            match_results.number_of_transposes,
            string_one.chars().count(),
            string_two.chars().count(),
        );

        let common_prefix = Self::winkler_common_prefix(string_one, string_two);

        debug!(
            "Jaro-Winkler {:?}: jaro distance {}, common prefix {}",
            match_results, jaro_distance, common_prefix
        );

        Ok(jaro_distance
            + (common_prefix as f64 * self.config.prefix_scaling_factor) * (1.0 - jaro_distance))
    }

    fn name(&self) -> &'static str {
        "JaroWinkler"
    }
}
