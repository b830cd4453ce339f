//! Error handling for vector operations
//!
//! Only malformed indices are errors. Numeric anomalies such as division by
//! zero or the square root of a negative component flow through as IEEE-754
//! values and are never reported here.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorError {
    /// An index outside `0..len` was used to read from an array or to access
    /// a component.
    #[error("Index is out of range: {index}, length: {len}")]
    IndexOutOfRange { index: isize, len: usize },
    /// The source array does not hold enough elements after `index` to fill a
    /// vector.
    #[error(
        "Space of source array is not enough to fill in vector, index: {index}, array length: {len}, required: {required}"
    )]
    InsufficientSpace {
        index: isize,
        len: usize,
        required: usize,
    },
    /// A negative index was used to write into an array.
    #[error("Index should not be negative: {index}")]
    InvalidIndex { index: isize },
}

impl VectorError {
    /// Returns the offending index carried by every variant.
    pub fn index(&self) -> isize {
        match *self {
            VectorError::IndexOutOfRange { index, .. }
            | VectorError::InsufficientSpace { index, .. }
            | VectorError::InvalidIndex { index } => index,
        }
    }
}

pub type Result<T> = std::result::Result<T, VectorError>;
