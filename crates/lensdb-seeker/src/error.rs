//! Error types for the seeker crate.

use std::path::PathBuf;

use thiserror::Error;

/// Raw input is not a well-formed number for a non-boolean kind.
///
/// Recoverable: callers report it and leave the condition list untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{raw}' is not a valid number for {kind}")]
pub struct ParseFailure {
    /// Name of the query type the input was meant for.
    pub kind: &'static str,
    /// The rejected input, as typed.
    pub raw: String,
}

/// Errors that can occur while loading the catalog.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The catalog source could not be read.
    #[error("cannot read catalog at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog document is not an array of lens records.
    #[error("invalid catalog document: {0}")]
    Decode(#[from] serde_json::Error),

    /// Two records share the same identifier.
    #[error("duplicate lens id {0}")]
    DuplicateId(i64),

    /// A physical measurement is negative.
    #[error("lens {id} has a negative {field}")]
    NegativeField { id: i64, field: &'static str },

    /// The store already holds a catalog for this session.
    #[error("catalog is already loaded")]
    AlreadyLoaded,
}

/// Errors that can occur when driving a session.
#[derive(Debug, Error)]
pub enum SeekerError {
    /// Input text could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseFailure),

    /// Catalog load failed.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// No query type is registered under this name.
    #[error("unknown query type '{0}'")]
    UnknownQueryType(String),
}

/// Result type for seeker operations.
pub type Result<T> = std::result::Result<T, SeekerError>;
