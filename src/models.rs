pub mod config;
pub use config::JaroWinklerConfig;

pub mod cosine_similarity;
pub use cosine_similarity::CosineSimilarity;

pub mod error;
pub use error::Error;

pub mod jaccard_similarity;
pub use jaccard_similarity::JaccardSimilarity;

pub mod jaro_winkler_similarity;
pub use jaro_winkler_similarity::{JaroWinklerSimilarity, MatchResults};

pub mod similarity_algorithm;
pub use similarity_algorithm::SimilarityAlgorithm;

pub mod similarity_calculator;
pub use similarity_calculator::SimilarityCalculator;

pub mod sorensen_similarity;
pub use sorensen_similarity::SorensenSimilarity;
