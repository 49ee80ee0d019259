//! Error types for Rolodex operations.
//!
//! This module provides the common `Error` type and `Result<T>` alias used
//! across all Rolodex crates. Uses `thiserror` for derive macros.
//!
//! All failures are local to a single operation: nothing is retried
//! automatically and nothing is fatal to the process.

use std::path::Path;

use thiserror::Error;

/// Errors that can occur in Rolodex operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Backing store missing, unreadable, or not a valid JSON array.
    #[error("storage read failed: {0}")]
    StorageRead(String),

    /// Backing store could not be rewritten after a mutation.
    ///
    /// The in-memory mutation is lost; the store on disk is unchanged or
    /// fully overwritten, never truncated.
    #[error("storage write failed: {0}")]
    StorageWrite(String),

    /// Malformed input, e.g. a non-numeric identifier.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Fake-data generation failure.
    #[error("fake data generation failed: {0}")]
    Generation(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Server startup or transport failure.
    #[error("server error: {0}")]
    Server(String),
}

impl Error {
    /// Create a storage-read error with path context.
    pub fn storage_read(path: &Path, reason: impl std::fmt::Display) -> Self {
        Self::StorageRead(format!("{}: {}", path.display(), reason))
    }

    /// Create a storage-write error with path context.
    pub fn storage_write(path: &Path, reason: impl std::fmt::Display) -> Self {
        Self::StorageWrite(format!("{}: {}", path.display(), reason))
    }

    /// Create an invalid-argument error.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a generation error.
    pub fn generation(msg: impl Into<String>) -> Self {
        Self::Generation(msg.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a server error.
    pub fn server(msg: impl Into<String>) -> Self {
        Self::Server(msg.into())
    }
}

/// Result type alias using Rolodex's Error type.
pub type Result<T> = std::result::Result<T, Error>;
