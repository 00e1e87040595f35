//! Error types produced by the strict parts of the argument table.
//!
//! The lenient accessors never fail; these errors only surface from the
//! OS-argument constructor and the strict integer lookup.

use thiserror::Error;

/// Errors raised while building or strictly querying an argument table.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ArgsError {
    /// A process argument was not valid UTF-8.
    #[error("argument {index} is not valid UTF-8: {lossy}")]
    NonUnicode {
        /// Position of the argument in the raw sequence, program name included.
        index: usize,
        /// Lossy rendering of the argument for diagnostics.
        lossy: String,
    },

    /// A stored value could not be read as an integer.
    #[error("flag '-{name}' expects an integer, got '{value}'")]
    InvalidInteger {
        /// Canonical flag name.
        name: String,
        /// Stored value that failed to parse.
        value: String,
    },
}

/// Result alias for fallible argument table operations.
pub type ArgsResult<T> = Result<T, ArgsError>;
