// Rust guideline compliant 2026-10-16

//! Error handling for kanban application services.

use kanban_core::Error as CoreError;
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for application-level operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Stable error codes for machine-readable responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The stored board violates an invariant.
    InvalidBoard,
    /// Configuration could not be loaded.
    InvalidConfig,
    /// IO failure while reading or writing workspace data.
    IoError,
    /// The storage lock is held by another process.
    Locked,
    /// The workspace has not been initialized.
    WorkspaceNotInitialized,
    /// The request included invalid inputs.
    InvalidInput,
    /// JSON serialization or parsing failed.
    JsonError,
    /// A fallback for unexpected errors.
    Unknown,
}

/// Application-level errors with stable mapping to error codes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Workspace directory is missing.
    #[error("Kanban workspace not initialized at {path}. Run 'kb init' first.")]
    WorkspaceNotInitialized {
        /// Path where `.kanban` was expected.
        path: PathBuf,
    },

    /// Invalid input was provided by the caller.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Error from core library operations.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// IO error not represented by core errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Returns a stable error code for the error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::WorkspaceNotInitialized { .. } => ErrorCode::WorkspaceNotInitialized,
            AppError::InvalidInput(_) => ErrorCode::InvalidInput,
            AppError::Io(_) => ErrorCode::IoError,
            AppError::Core(core) => match core {
                CoreError::Io(_) => ErrorCode::IoError,
                CoreError::Json(_) => ErrorCode::JsonError,
                CoreError::Lock(_) => ErrorCode::Locked,
                CoreError::InvalidConfig(_) => ErrorCode::InvalidConfig,
                CoreError::InvalidBoard(_) => ErrorCode::InvalidBoard,
                CoreError::InvalidKey(_)
                | CoreError::UnknownColumn(_)
                | CoreError::UnknownDirection(_) => ErrorCode::InvalidInput,
            },
        }
    }

    /// Returns structured details for errors that benefit from extra context.
    #[must_use]
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            AppError::WorkspaceNotInitialized { path } => Some(serde_json::json!({
                "path": path,
            })),
            AppError::Core(CoreError::UnknownColumn(column)) => Some(serde_json::json!({
                "column": column,
                "expected": ["todo", "doing", "done"],
            })),
            AppError::Core(CoreError::UnknownDirection(direction)) => Some(serde_json::json!({
                "direction": direction,
                "expected": ["left", "right"],
            })),
            _ => None,
        }
    }
}
