// Rust guideline compliant 2026-10-16

//! Shared application services for the kanban board.
//!
//! This crate provides the board controller that owns the in-memory state,
//! the intent surface used by presentation layers, workspace discovery,
//! and standardized error codes and response envelopes.

pub mod controller;
pub mod error;
pub mod intent;
pub mod response;
pub mod time;
pub mod workspace;

pub use controller::{BoardController, Renderer};
pub use error::{AppError, ErrorCode, Result};
pub use intent::{Intent, Outcome};
pub use response::{BoardPayload, ErrorBody, ErrorEnvelope, OutcomePayload, SuccessEnvelope};
pub use time::unix_millis;
pub use workspace::Workspace;
