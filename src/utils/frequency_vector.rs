use crate::types::{FrequencyVector, SortedCharacterSet};
use std::collections::HashMap;

/// Count the number of times a character occurs in a string.
pub fn count_character(string: &str, character: char) -> u64 {
    string.chars().filter(|&c| c == character).count() as u64
}

/// Build the frequency-of-occurrence vector of `string` against a dimension space.
///
/// The vector has one entry per character of `dimensions`, in the set's iteration order;
/// characters of `string` outside the dimension space are ignored.
///
/// ```rust
/// use char_similarity::{create_frequency_of_occurrence_vector, union};
///
/// let dimensions = union("hello", "help");
/// assert_eq!(
///     create_frequency_of_occurrence_vector("hello", &dimensions),
///     vec![1, 1, 2, 1, 0]
/// );
/// ```
pub fn create_frequency_of_occurrence_vector(
    string: &str,
    dimensions: &SortedCharacterSet,
) -> FrequencyVector {
    let mut frequencies: HashMap<char, u64> = HashMap::new();
    for c in string.chars() {
        *frequencies.entry(c).or_insert(0) += 1;
    }

    dimensions
        .iter()
        .map(|c| frequencies.get(c).copied().unwrap_or(0))
        .collect()
}
