//! Error types for the reading-list core.
//!
//! This module defines the centralized error type [`ShelfviewError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for reading-list operations.
///
/// Fetch and persist failures are produced by [`BookSource`](crate::storage::BookSource)
/// implementations. The state manager catches both at the async boundary and logs
/// them; they never reach callers of `load`/`refresh`.
///
/// # Examples
///
/// ```
/// use shelfview::ShelfviewError;
///
/// fn fetch_remote() -> Result<(), ShelfviewError> {
///     Err(ShelfviewError::Fetch("connection refused".to_string()))
/// }
///
/// assert!(fetch_remote().is_err());
/// ```
#[derive(Debug, Error)]
pub enum ShelfviewError {
    /// Fetching the book list from a local or remote source failed.
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// Persisting the book list to local storage failed.
    ///
    /// Non-fatal: the in-memory state is kept.
    #[error("Persist error: {0}")]
    Persist(String),

    /// The on-disk store could not be parsed or serialized.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Automatically converts from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A raw UI index did not map to a scope button or sort segment.
    #[error("invalid {kind} index: {index}")]
    InvalidIndex {
        /// Which enumeration the index was meant for.
        kind: &'static str,
        /// The rejected index.
        index: usize,
    },
}

/// A specialized `Result` type for reading-list operations.
pub type Result<T> = std::result::Result<T, ShelfviewError>;
