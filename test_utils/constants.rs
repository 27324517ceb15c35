/// Default tolerance for comparing similarity scores.
pub const SCORE_TOLERANCE: f64 = 1e-9;

/// String pairs exercising repeats, transpositions, unequal lengths, and disjoint sets.
pub const SAMPLE_STRING_PAIRS: &[(&str, &str)] = &[
    ("martha", "marhta"),
    ("dixon", "dicksonx"),
    ("dwayne", "duane"),
    ("string", "gnirts"),
    ("joe", "joseph"),
    ("abc", "xyz"),
    ("night", "nacht"),
    ("hello", "hallo"),
    ("aab", "abb"),
    ("abcd", "abdc"),
    ("unicorn giggles", "clown shoe"),
    ("a", "b"),
    ("", "abc"),
    ("Straße", "strasse"),
];
