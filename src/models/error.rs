use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Two numeric vectors were combined but do not share the same number of dimensions.
    DimensionMismatch { left: usize, right: usize },
    UnknownAlgorithm(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DimensionMismatch { left, right } => write!(
                f,
                "Dimension Mismatch Error: input vectors have {} and {} dimensions",
                left, right
            ),
            Error::UnknownAlgorithm(name) => write!(f, "Unknown Algorithm Error: {}", name),
        }
    }
}

impl std::error::Error for Error {}
