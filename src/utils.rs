pub mod character_vector_utils;
pub use character_vector_utils::{
    character_array_to_set, intersect, sort_alphabetically, string_to_character_set, union,
    unique_characters,
};

pub mod frequency_vector;
pub use frequency_vector::{count_character, create_frequency_of_occurrence_vector};

pub mod vector_math;
pub use vector_math::{
    cosine_of_vectors, dot_product, magnitude, magnitude_squared, VectorElement,
};
