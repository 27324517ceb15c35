use char_similarity::{
    CosineSimilarity, JaccardSimilarity, SimilarityCalculator, SorensenSimilarity,
};
use test_utils::{assert_approx_eq, SCORE_TOLERANCE};

#[cfg(test)]
mod jaccard_similarity_tests {
    use super::*;

    #[test]
    fn test_jaccard_similarity() {
        let jaccard = JaccardSimilarity::new();

        assert_eq!(jaccard.calculate("martha", "marhta").unwrap(), 1.0);
        assert_eq!(jaccard.calculate("dixon", "dicksonx").unwrap(), 5.0 / 8.0);
        assert_eq!(
            jaccard.calculate("unicorn giggles", "clown shoe").unwrap(),
            7.0 / 13.0
        );
    }

    #[test]
    fn test_jaccard_disjoint_sets() {
        assert_eq!(JaccardSimilarity::new().calculate("abc", "xyz").unwrap(), 0.0);
    }

    #[test]
    fn test_jaccard_is_case_sensitive() {
        assert_eq!(JaccardSimilarity::new().calculate("ABC", "abc").unwrap(), 0.0);
    }

    #[test]
    fn test_jaccard_empty_inputs() {
        let jaccard = JaccardSimilarity::new();

        assert_eq!(jaccard.calculate("", "").unwrap(), 1.0);
        assert_eq!(jaccard.calculate("", "abc").unwrap(), 0.0);
    }
}

#[cfg(test)]
mod sorensen_similarity_tests {
    use super::*;

    #[test]
    fn test_sorensen_similarity() {
        let sorensen = SorensenSimilarity::new();

        assert_eq!(sorensen.calculate("dixon", "dicksonx").unwrap(), 10.0 / 13.0);
        assert_eq!(sorensen.calculate("joe", "joseph").unwrap(), 6.0 / 9.0);
    }

    #[test]
    fn test_sorensen_counts_raw_string_length() {
        // 5 distinct shared characters, 12 characters in total
        assert_eq!(
            SorensenSimilarity::new().calculate("martha", "marhta").unwrap(),
            10.0 / 12.0
        );
    }

    #[test]
    fn test_sorensen_disjoint_sets() {
        assert_eq!(SorensenSimilarity::new().calculate("abc", "xyz").unwrap(), 0.0);
    }

    #[test]
    fn test_sorensen_empty_inputs() {
        let sorensen = SorensenSimilarity::new();

        assert_eq!(sorensen.calculate("", "").unwrap(), 1.0);
        assert_eq!(sorensen.calculate("abc", "").unwrap(), 0.0);
    }

    #[test]
    fn test_sorensen_counts_characters_not_bytes() {
        // "ß" is two bytes; 4 shared characters over 6 + 6 characters
        assert_eq!(
            SorensenSimilarity::new().calculate("Straße", "strase").unwrap(),
            8.0 / 12.0
        );
    }
}

#[cfg(test)]
mod cosine_similarity_tests {
    use super::*;

    #[test]
    fn test_cosine_similarity() {
        let cosine = CosineSimilarity::new();

        assert_approx_eq(
            cosine.calculate("joe", "joseph").unwrap(),
            1.0 / 2f64.sqrt(),
            SCORE_TOLERANCE,
        );
        assert_approx_eq(
            cosine.calculate("hello", "hallo").unwrap(),
            6.0 / 7.0,
            SCORE_TOLERANCE,
        );
        assert_approx_eq(cosine.calculate("aab", "abb").unwrap(), 0.8, SCORE_TOLERANCE);
    }

    #[test]
    fn test_cosine_ignores_character_order() {
        let cosine = CosineSimilarity::new();

        assert_eq!(cosine.calculate("string", "gnirts").unwrap(), 1.0);
        assert_eq!(cosine.calculate("ab", "ba").unwrap(), 1.0);
    }

    #[test]
    fn test_cosine_disjoint_sets() {
        assert_eq!(CosineSimilarity::new().calculate("abc", "xyz").unwrap(), 0.0);
    }

    #[test]
    fn test_cosine_empty_inputs() {
        let cosine = CosineSimilarity::new();

        assert_eq!(cosine.calculate("", "").unwrap(), 1.0);
        assert_eq!(cosine.calculate("", "abc").unwrap(), 0.0);
        assert_eq!(cosine.calculate("abc", "").unwrap(), 0.0);
    }

    #[test]
    fn test_cosine_long_repeated_strings() {
        let cosine = CosineSimilarity::new();
        let long_string = "a".repeat(70_000);

        assert_approx_eq(
            cosine.calculate(&long_string, &long_string).unwrap(),
            1.0,
            SCORE_TOLERANCE,
        );

        // [70_000, 0] vs [70_000, 1]
        let with_b = format!("{}b", long_string);
        let expected = 70_000f64 / (70_000f64 * 70_000f64 + 1.0).sqrt();
        assert_approx_eq(
            cosine.calculate(&long_string, &with_b).unwrap(),
            expected,
            SCORE_TOLERANCE,
        );
    }
}
