//! Error type for the document-level parsing API.
//!
//! The core [`parse`](crate::parse) entry point never errors (its failure
//! signal is a consumed length of 0), so this type only appears on
//! [`parse_document`](crate::parse_document), which additionally requires the
//! whole buffer to be consumed.

use thiserror::Error;

/// Why a buffer was not accepted as a single complete document.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// Nothing at the start of the buffer parsed as a value.
    #[error("input rejected: no value recognized")]
    Rejected,

    /// A value parsed, but characters remain after it.
    #[error("trailing data after document: consumed {consumed} of {total} bytes")]
    TrailingData { consumed: usize, total: usize },
}

/// Convenience alias used throughout jot-core.
pub type Result<T> = std::result::Result<T, ParseError>;
