// Rust guideline compliant 2026-10-16

//! Error types for the kanban core library.

use thiserror::Error;

/// Result type alias for kanban core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for kanban core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The storage lock could not be acquired.
    #[error("Failed to acquire storage lock: {0}")]
    Lock(String),

    /// Storage key is empty or not usable as a file name.
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    /// Configuration file or environment override is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Board state violates a structural invariant.
    #[error("Invalid board: {0}")]
    InvalidBoard(String),

    /// Column identifier is not one of the fixed columns.
    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    /// Move direction is neither left nor right.
    #[error("Unknown direction: {0}")]
    UnknownDirection(String),
}

/// Reasons a stored board could not be turned back into a `BoardState`.
///
/// Callers usually substitute [`crate::BoardState::default`] on any of these;
/// the variants exist so that decision stays visible and testable.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Nothing is stored under the key yet.
    #[error("No board stored under key `{0}`")]
    Missing(String),

    /// The payload exists but does not have the board shape.
    #[error("Malformed board payload: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The storage backend failed to read the payload.
    #[error(transparent)]
    Storage(#[from] Error),
}
