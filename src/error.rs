use std::fmt;

use crate::types::Index;

/// Why a positional argument was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexError {
    /// The index was below zero.
    Negative { index: Index },
    /// The index was at or past the end of an empty list.
    Empty { index: Index },
    /// The index was past `max`, the largest position valid for the call.
    OutOfRange { index: Index, max: usize },
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexError::Negative { index } => write!(f, "index {index} is negative"),
            IndexError::Empty { index } => write!(f, "index {index} out of range: list is empty"),
            IndexError::OutOfRange { index, max } => {
                write!(f, "index {index} out of range 0..={max}")
            }
        }
    }
}

/// Unified error type for both list engines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid positional argument.
    Index(IndexError),
    /// A cursor was read or advanced past its last element.
    Exhausted,
    /// A structural invariant does not hold (broken links, bad counts).
    Corruption(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Index(e) => write!(f, "Index error: {e}"),
            Error::Exhausted => write!(f, "Cursor exhausted"),
            Error::Corruption(msg) => write!(f, "Corruption: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Index(e) => Some(e),
            _ => None,
        }
    }
}

impl std::error::Error for IndexError {}

impl From<IndexError> for Error {
    fn from(e: IndexError) -> Self {
        Error::Index(e)
    }
}

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_cause() {
        let neg: Error = IndexError::Negative { index: -1 }.into();
        assert_eq!(neg.to_string(), "Index error: index -1 is negative");

        let empty: Error = IndexError::Empty { index: 0 }.into();
        assert_eq!(empty.to_string(), "Index error: index 0 out of range: list is empty");

        let range: Error = IndexError::OutOfRange { index: 5, max: 2 }.into();
        assert_eq!(range.to_string(), "Index error: index 5 out of range 0..=2");
    }

    #[test]
    fn index_error_is_the_source() {
        use std::error::Error as _;
        let err = Error::Index(IndexError::Negative { index: -3 });
        assert!(err.source().is_some());
        assert!(Error::Exhausted.source().is_none());
    }
}
