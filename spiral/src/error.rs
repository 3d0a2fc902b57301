use std::fmt;

/// Errors produced while accessing dataset samples.
#[derive(Debug, PartialEq, Eq)]
pub enum DataError {
    /// The requested sample index is out of bounds.
    OutOfBounds { index: usize, len: usize },
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataError::OutOfBounds { index, len } => {
                write!(f, "sample index {index} is out of bounds for {len} samples")
            }
        }
    }
}

impl std::error::Error for DataError {}
