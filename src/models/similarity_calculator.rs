use crate::models::Error;
use crate::types::SimilarityScore;

/// A metric scoring how similar two strings are.
///
/// Implementations are stateless apart from their configuration, so a single instance can
/// be shared across threads.
pub trait SimilarityCalculator: Send + Sync {
    fn calculate(&self, string_one: &str, string_two: &str)
        -> Result<SimilarityScore, Error>;

    /// Human-readable name of the metric.
    fn name(&self) -> &'static str;
}
