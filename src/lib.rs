mod constants;
pub mod models;
pub use constants::{
    DEFAULT_JARO_WINKLER_CONFIG, EMPTY_STRINGS_SIMILARITY, MAX_WINKLER_PREFIX_LENGTH,
    PREFIX_SCALING_FACTOR,
};
pub use models::{
    CosineSimilarity, Error, JaccardSimilarity, JaroWinklerConfig, JaroWinklerSimilarity,
    MatchResults, SimilarityAlgorithm, SimilarityCalculator, SorensenSimilarity,
};
pub mod types;
pub mod utils;
pub use types::{CharacterSet, FrequencyVector, SimilarityScore, SortedCharacterSet};
pub use utils::{
    character_array_to_set, cosine_of_vectors, count_character,
    create_frequency_of_occurrence_vector, dot_product, intersect, magnitude, magnitude_squared,
    sort_alphabetically, string_to_character_set, union, unique_characters, VectorElement,
};

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// Score two strings with a single algorithm, using its default configuration.
pub fn calculate_similarity(
    algorithm: SimilarityAlgorithm,
    string_one: &str,
    string_two: &str,
) -> Result<SimilarityScore, Error> {
    algorithm.calculator().calculate(string_one, string_two)
}

/// Score two strings with every algorithm, in `SimilarityAlgorithm::ALL` order.
pub fn calculate_all_similarities(
    string_one: &str,
    string_two: &str,
) -> Result<Vec<(SimilarityAlgorithm, SimilarityScore)>, Error> {
    SimilarityAlgorithm::ALL
        .iter()
        .map(|&algorithm| {
            calculate_similarity(algorithm, string_one, string_two).map(|score| (algorithm, score))
        })
        .collect()
}

/// Score two strings with Jaro-Winkler, using a custom prefix scaling factor.
pub fn calculate_jaro_winkler_with_custom_config(
    string_one: &str,
    string_two: &str,
    config: JaroWinklerConfig,
) -> Result<SimilarityScore, Error> {
    JaroWinklerSimilarity::with_config(config).calculate(string_one, string_two)
}
