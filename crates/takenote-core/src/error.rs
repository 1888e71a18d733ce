//! Error types for takenote-core

use thiserror::Error;

/// Result type alias using takenote-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in takenote-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// libSQL error
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The stored notes or categories have not been loaded yet
    #[error("Not loaded: {0}")]
    NotLoaded(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
