pub mod constants;
pub use constants::{SAMPLE_STRING_PAIRS, SCORE_TOLERANCE};

/// Assert that `actual` is within `tolerance` of `expected`.
#[track_caller]
pub fn assert_approx_eq(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "Expected {} (+/- {}), got {}",
        expected,
        tolerance,
        actual
    );
}

/// Assert that a score is a finite value within `[0.0, 1.0]`.
#[track_caller]
pub fn assert_unit_range(score: f64) {
    assert!(
        score.is_finite() && (0.0..=1.0).contains(&score),
        "Score {} is outside [0, 1]",
        score
    );
}
