use crate::constants::EMPTY_STRINGS_SIMILARITY;
use crate::models::{Error, SimilarityCalculator};
use crate::types::SimilarityScore;
use crate::utils::{intersect, union};

/// Jaccard similarity of two strings' character sets: `|A ∩ B| / |A ∪ B|`.
#[derive(Debug, Copy, Clone, Default)]
pub struct JaccardSimilarity;

impl JaccardSimilarity {
    pub fn new() -> Self {
        Self
    }
}

impl SimilarityCalculator for JaccardSimilarity {
    fn calculate(&self, string_one: &str, string_two: &str) -> Result<SimilarityScore, Error> {
        let union_size = union(string_one, string_two).len();

        // Only two empty strings have an empty union
        if union_size == 0 {
            return Ok(EMPTY_STRINGS_SIMILARITY);
        }

        let intersection_size = intersect(string_one, string_two).len();

        Ok(intersection_size as f64 / union_size as f64)
    }

    fn name(&self) -> &'static str {
        "Jaccard"
    }
}
