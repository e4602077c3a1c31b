//! Error handling for the roster engine
//!
//! Every failure an operation can report is a variant here. Errors are
//! recovered at the operation boundary; none of them terminates the
//! process.

use thiserror::Error;

/// Main error type for the roster engine
#[derive(Error, Debug)]
pub enum RosterError {
    /// The backing file cannot be opened for a required read
    #[error("backing file missing or unreadable: {path}")]
    FileMissing { path: String },

    /// A numeric field failed to parse while loading the backing file
    #[error("parse error at line {line}: invalid {field} field")]
    Parse { line: usize, field: &'static str },

    /// Record name exceeds the fixed-width field limit
    #[error("name is {len} characters, limit is {limit}")]
    NameTooLong { len: usize, limit: usize },

    /// Record name is empty or contains a newline
    #[error("invalid name: {0}")]
    InvalidName(String),

    /// Removal attempted on an empty store
    #[error("record store is empty")]
    EmptyStore,

    /// Removal target is not in the store
    #[error("no record named {name:?}")]
    NameNotFound { name: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl RosterError {
    /// Whether this error leaves the store and file untouched
    /// and should be surfaced as an ordinary user-facing message.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            RosterError::EmptyStore
                | RosterError::NameNotFound { .. }
                | RosterError::NameTooLong { .. }
                | RosterError::InvalidName(_)
        )
    }
}

/// Result type for roster operations
pub type RosterResult<T> = Result<T, RosterError>;
