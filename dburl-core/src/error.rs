//! Error types for descriptor parsing.
//!
//! Every failure is classified into one of four kinds:
//!
//! - [`DbUrlError::NotFound`]: the requested environment variable is unset
//! - [`DbUrlError::InvalidSyntax`]: the descriptor has no `://` separator or no scheme
//! - [`DbUrlError::EngineNotSupported`]: the scheme names an unknown dialect
//! - [`DbUrlError::CannotBeParsed`]: the body does not match the dialect's layout
//!
//! ```rust
//! use dburl_core::{parse, DbUrlError};
//!
//! let err = parse("oracle://u:p@h:1521/db").unwrap_err();
//! assert!(matches!(err, DbUrlError::EngineNotSupported(_)));
//! ```

use thiserror::Error;

/// Result type for descriptor operations.
pub type DbUrlResult<T> = Result<T, DbUrlError>;

/// Errors that can occur while loading or parsing a descriptor.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DbUrlError {
    /// Environment variable not set.
    #[error("Environment variable not found: {0}")]
    NotFound(String),

    /// Descriptor is structurally malformed.
    #[error("Invalid descriptor syntax: {0}")]
    InvalidSyntax(String),

    /// Dialect token is not recognized.
    #[error("Database engine incorrect or unsupported: {0}")]
    EngineNotSupported(String),

    /// Body could not be split into the fields the dialect requires.
    #[error("Descriptor cannot be parsed: {0}")]
    CannotBeParsed(String),
}

impl DbUrlError {
    /// Create a cannot-be-parsed error.
    pub fn cannot_be_parsed(msg: impl Into<String>) -> Self {
        Self::CannotBeParsed(msg.into())
    }

    /// Create an invalid-syntax error.
    pub fn invalid_syntax(msg: impl Into<String>) -> Self {
        Self::InvalidSyntax(msg.into())
    }
}
