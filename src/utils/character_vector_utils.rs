use crate::types::{CharacterSet, SortedCharacterSet};

/// Convert a string to the set of distinct characters it contains.
///
/// Characters are compared raw: no case folding, no Unicode normalization.
pub fn string_to_character_set(string: &str) -> CharacterSet {
    string.chars().collect()
}

/// Convert a slice of characters into a set.
pub fn character_array_to_set(chars: &[char]) -> CharacterSet {
    chars.iter().copied().collect()
}

/// Remove duplicates from an arbitrary collection of characters.
pub fn unique_characters<I>(chars: I) -> CharacterSet
where
    I: IntoIterator<Item = char>,
{
    chars.into_iter().collect()
}

/// Order characters by ascending code point, dropping duplicates.
pub fn sort_alphabetically<I>(chars: I) -> SortedCharacterSet
where
    I: IntoIterator<Item = char>,
{
    chars.into_iter().collect()
}

/// Union of the character sets of two strings, sorted alphabetically.
///
/// ```rust
/// use char_similarity::union;
///
/// let merged: String = union("abc", "cbd").into_iter().collect();
/// assert_eq!(merged, "abcd");
/// ```
pub fn union(string_one: &str, string_two: &str) -> SortedCharacterSet {
    string_one.chars().chain(string_two.chars()).collect()
}

/// Characters present in both strings, sorted alphabetically.
///
/// ```rust
/// use char_similarity::intersect;
///
/// let shared: String = intersect("martha", "marhta").into_iter().collect();
/// assert_eq!(shared, "ahmrt");
///
/// assert!(intersect("abc", "xyz").is_empty());
/// ```
pub fn intersect(string_one: &str, string_two: &str) -> SortedCharacterSet {
    let set_one = string_to_character_set(string_one);
    let set_two = string_to_character_set(string_two);

    set_one.intersection(&set_two).copied().collect()
}
