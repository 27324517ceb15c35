use crate::models::Error;
use std::ops::{Add, Mul};

/// Numeric element of a vector handled by the functions in this module.
///
/// `dot_product` and `magnitude_squared` accumulate in the element's own width.
pub trait VectorElement: Copy + Default + Add<Output = Self> + Mul<Output = Self> {
    fn to_f64(self) -> f64;
}

macro_rules! impl_vector_element {
    ($($t:ty),*) => {
        $(
            impl VectorElement for $t {
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_vector_element!(u8, u16, u32, u64, usize, i8, i16, i32, i64, f32, f64);

fn ensure_same_dimensions<T>(v1: &[T], v2: &[T]) -> Result<(), Error> {
    if v1.len() != v2.len() {
        return Err(Error::DimensionMismatch {
            left: v1.len(),
            right: v2.len(),
        });
    }

    Ok(())
}

/// Calculate the dot product (inner product) of two vectors.
///
/// ```rust
/// use char_similarity::{dot_product, Error};
///
/// assert_eq!(dot_product(&[1u32, 2, 3], &[4, 5, 6]), Ok(32));
/// assert_eq!(
///     dot_product(&[1u32, 2, 3], &[1, 2, 3, 4]),
///     Err(Error::DimensionMismatch { left: 3, right: 4 })
/// );
/// ```
pub fn dot_product<T: VectorElement>(v1: &[T], v2: &[T]) -> Result<T, Error> {
    ensure_same_dimensions(v1, v2)?;

    Ok(v1
        .iter()
        .zip(v2)
        .fold(T::default(), |dot, (&a, &b)| dot + a * b))
}

/// Sum of the squares of the elements.
pub fn magnitude_squared<T: VectorElement>(vector: &[T]) -> T {
    vector.iter().fold(T::default(), |sum, &a| sum + a * a)
}

/// Euclidean norm of a vector.
pub fn magnitude<T: VectorElement>(vector: &[T]) -> f64 {
    magnitude_squared(vector).to_f64().sqrt()
}

/// Calculate cosine similarity between two vectors.
///
/// Returns `0.0` if either vector has zero magnitude. Elements are widened to `f64` before
/// multiplying, so large counts cannot overflow.
pub fn cosine_of_vectors<T: VectorElement>(v1: &[T], v2: &[T]) -> Result<f64, Error> {
    ensure_same_dimensions(v1, v2)?;

    // Single pass for the dot product and both squared magnitudes
    let (dot_product, magnitude_v1_sq, magnitude_v2_sq) =
        v1.iter()
            .zip(v2)
            .fold((0f64, 0f64, 0f64), |(dot, mag1, mag2), (&a, &b)| {
                let (a, b) = (a.to_f64(), b.to_f64());
                (dot + a * b, mag1 + a * a, mag2 + b * b)
            });

    if magnitude_v1_sq == 0.0 || magnitude_v2_sq == 0.0 {
        return Ok(0.0);
    }

    // sqrt(|a|^2 * |b|^2) keeps identical vectors at exactly 1.0
    Ok(dot_product / (magnitude_v1_sq * magnitude_v2_sq).sqrt())
}
