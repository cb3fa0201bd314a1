use std::error::Error;
use std::fmt;

/// Custom error type for vector arithmetic and element access failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VectorError {
    OutOfRange { index: usize, len: usize },
    DivisionByZero,
    UnsupportedProjection,
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            VectorError::OutOfRange { index, len } => {
                write!(f, "index {} out of range for vector of length {}", index, len)
            }
            VectorError::DivisionByZero => write!(f, "cannot project onto the zero vector"),
            VectorError::UnsupportedProjection => {
                write!(f, "cannot project a scalar onto a vector")
            }
        }
    }
}

impl Error for VectorError {}
