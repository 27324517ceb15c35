use crate::models::{
    CosineSimilarity, Error, JaccardSimilarity, JaroWinklerSimilarity, SimilarityCalculator,
    SorensenSimilarity,
};
use std::fmt;
use std::str::FromStr;

/// The similarity metrics provided by this crate.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SimilarityAlgorithm {
    Cosine,
    Jaccard,
    Sorensen,
    JaroWinkler,
}

impl SimilarityAlgorithm {
    pub const ALL: [SimilarityAlgorithm; 4] = [
        SimilarityAlgorithm::Cosine,
        SimilarityAlgorithm::Jaccard,
        SimilarityAlgorithm::Sorensen,
        SimilarityAlgorithm::JaroWinkler,
    ];

    /// A default-configured calculator for this algorithm.
    pub fn calculator(self) -> Box<dyn SimilarityCalculator> {
        match self {
            SimilarityAlgorithm::Cosine => Box::new(CosineSimilarity::new()),
            SimilarityAlgorithm::Jaccard => Box::new(JaccardSimilarity::new()),
            SimilarityAlgorithm::Sorensen => Box::new(SorensenSimilarity::new()),
            SimilarityAlgorithm::JaroWinkler => Box::new(JaroWinklerSimilarity::new()),
        }
    }
}

impl fmt::Display for SimilarityAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SimilarityAlgorithm::Cosine => "Cosine",
            SimilarityAlgorithm::Jaccard => "Jaccard",
            SimilarityAlgorithm::Sorensen => "Sorensen",
            SimilarityAlgorithm::JaroWinkler => "JaroWinkler",
        };

        write!(f, "{}", name)
    }
}

impl FromStr for SimilarityAlgorithm {
    type Err = Error;

    /// Parses an algorithm name, ignoring case.
    ///
    /// ```rust
    /// use char_similarity::SimilarityAlgorithm;
    ///
    /// let algorithm: SimilarityAlgorithm = "Jaro-Winkler".parse().unwrap();
    /// assert_eq!(algorithm, SimilarityAlgorithm::JaroWinkler);
    ///
    /// assert!("levenshtein".parse::<SimilarityAlgorithm>().is_err());
    /// ```
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_lowercase().as_str() {
            "cosine" => Ok(SimilarityAlgorithm::Cosine),
            "jaccard" => Ok(SimilarityAlgorithm::Jaccard),
            "sorensen" | "sørensen" | "dice" => Ok(SimilarityAlgorithm::Sorensen),
            "jaro-winkler" | "jaro_winkler" | "jarowinkler" => {
                Ok(SimilarityAlgorithm::JaroWinkler)
            }
            _ => Err(Error::UnknownAlgorithm(name.to_string())),
        }
    }
}
