use crate::constants::EMPTY_STRINGS_SIMILARITY;
use crate::models::{Error, SimilarityCalculator};
use crate::types::SimilarityScore;
use crate::utils::{cosine_of_vectors, create_frequency_of_occurrence_vector, union};
use log::{debug, error};

/// Cosine of the angle between the character frequency-of-occurrence vectors of two
/// strings, with the union of their characters as the dimension space.
#[derive(Debug, Copy, Clone, Default)]
pub struct CosineSimilarity;

impl CosineSimilarity {
    pub fn new() -> Self {
        Self
    }
}

impl SimilarityCalculator for CosineSimilarity {
    fn calculate(&self, string_one: &str, string_two: &str) -> Result<SimilarityScore, Error> {
        if string_one.is_empty() && string_two.is_empty() {
            return Ok(EMPTY_STRINGS_SIMILARITY);
        }

        let dimensions = union(string_one, string_two);
        debug!("Cosine dimension space has {} characters", dimensions.len());

        let string_one_occurrences = create_frequency_of_occurrence_vector(string_one, &dimensions);
        let string_two_occurrences = create_frequency_of_occurrence_vector(string_two, &dimensions);

        // Both vectors share one dimension space, so a mismatch here is a bug
        cosine_of_vectors(&string_one_occurrences, &string_two_occurrences).map_err(|err| {
            error!(
                "{} ({:?} vs {:?})",
                err, string_one_occurrences, string_two_occurrences
            );
            err
        })
    }

    fn name(&self) -> &'static str {
        "Cosine"
    }
}
