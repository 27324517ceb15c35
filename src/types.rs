use std::collections::{BTreeSet, HashSet};

// Types listed here are either shared across multiple files and/or exposed via the library.

/// An unordered set of the distinct characters appearing in a string.
pub type CharacterSet = HashSet<char>;

/// A set of distinct characters, iterated in ascending code-point order.
///
/// This is the dimension space used when building frequency-of-occurrence vectors, so two
/// vectors built against the same `SortedCharacterSet` are always co-indexed.
pub type SortedCharacterSet = BTreeSet<char>;

/// A frequency-of-occurrence vector: one count per character of a dimension space.
pub type FrequencyVector = Vec<u64>;

/// A similarity score. Under the default configuration, always within `[0.0, 1.0]`.
pub type SimilarityScore = f64;
