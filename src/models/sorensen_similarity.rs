use crate::constants::EMPTY_STRINGS_SIMILARITY;
use crate::models::{Error, SimilarityCalculator};
use crate::types::SimilarityScore;
use crate::utils::intersect;

/// Sørensen similarity: twice the number of shared distinct characters, divided by the
/// combined length of both strings.
///
/// The denominator counts every character (repeats included), so a string with repeated
/// characters scores below `1.0` against itself:
///
/// ```rust
/// use char_similarity::{SimilarityCalculator, SorensenSimilarity};
///
/// let sorensen = SorensenSimilarity::new();
/// assert_eq!(sorensen.calculate("abc", "cab").unwrap(), 1.0);
/// assert_eq!(sorensen.calculate("aab", "aab").unwrap(), 4.0 / 6.0);
/// ```
#[derive(Debug, Copy, Clone, Default)]
pub struct SorensenSimilarity;

impl SorensenSimilarity {
    pub fn new() -> Self {
        Self
    }
}

impl SimilarityCalculator for SorensenSimilarity {
    fn calculate(&self, string_one: &str, string_two: &str) -> Result<SimilarityScore, Error> {
        let total_length = string_one.chars().count() + string_two.chars().count();

        if total_length == 0 {
            return Ok(EMPTY_STRINGS_SIMILARITY);
        }

        let shared = intersect(string_one, string_two).len();

        Ok((2 * shared) as f64 / total_length as f64)
    }

    fn name(&self) -> &'static str {
        "Sorensen"
    }
}
