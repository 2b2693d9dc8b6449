// Rust guideline compliant 2026-10-16

//! JSON envelopes for boards, intent outcomes and errors.
//!
//! Every document has a top-level `status` of `"ok"` or `"error"`.

use crate::error::{AppError, ErrorCode};
use crate::intent::Outcome;
use kanban_core::BoardState;
use serde::Serialize;

/// A board snapshot with its card count.
#[derive(Debug, Serialize)]
pub struct BoardPayload<'a> {
    /// The board, in its persisted shape.
    pub board: &'a BoardState,
    /// Cards across all columns.
    pub total: usize,
}

/// A dispatched intent together with the board it left behind.
#[derive(Debug, Serialize)]
pub struct OutcomePayload<'a> {
    /// What was applied and whether it changed anything.
    pub outcome: &'a Outcome,
    /// The board after the intent.
    pub board: &'a BoardState,
}

/// Success envelope: `{"status": "ok", "result": ...}`.
#[derive(Debug, Serialize)]
pub struct SuccessEnvelope<T> {
    /// Always `"ok"`.
    pub status: &'static str,
    /// Result payload.
    pub result: T,
}

impl<T: Serialize> SuccessEnvelope<T> {
    /// Wraps an arbitrary payload.
    #[must_use]
    pub fn new(result: T) -> Self {
        Self { status: "ok", result }
    }

    /// Serializes the envelope as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload cannot be serialized.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl<'a> SuccessEnvelope<BoardPayload<'a>> {
    /// Wraps a board snapshot.
    #[must_use]
    pub fn board(board: &'a BoardState) -> Self {
        Self::new(BoardPayload {
            board,
            total: board.card_count(),
        })
    }
}

impl<'a> SuccessEnvelope<OutcomePayload<'a>> {
    /// Wraps the outcome of a dispatched intent.
    #[must_use]
    pub fn outcome(outcome: &'a Outcome, board: &'a BoardState) -> Self {
        Self::new(OutcomePayload { outcome, board })
    }
}

/// Machine-readable description of a failure.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Stable error code.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// Optional structured details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Error envelope: `{"status": "error", "error": {...}}`.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    /// Always `"error"`.
    pub status: &'static str,
    /// The failure.
    pub error: ErrorBody,
}

impl ErrorEnvelope {
    /// Creates an envelope without details.
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            status: "error",
            error: ErrorBody {
                code,
                message: message.into(),
                details: None,
            },
        }
    }

    /// Creates an envelope from an application error, keeping its details.
    #[must_use]
    pub fn from_error(error: &AppError) -> Self {
        let mut envelope = Self::new(error.code(), error.to_string());
        envelope.error.details = error.details();
        envelope
    }

    /// Serializes the envelope as compact JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the details cannot be serialized.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
