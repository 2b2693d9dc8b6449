// Rust guideline compliant 2026-10-16

//! Implementation of the `kb check` command.
//!
//! Reads the stored board without the empty-board fallback and reports
//! whether it parses and whether its ids are consistent.

use super::Context;
use anyhow::Result;
use kanban_app::Workspace;
use kanban_core::{KeyValueStore, LoadError, StateStore};
use serde::Serialize;

/// State of the stored payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PayloadStatus {
    /// Parsed, and every invariant holds.
    Ok,
    /// Parsed, but ids are duplicated or `nextId` is stale.
    Invalid,
    /// Nothing stored yet; the board starts empty.
    Missing,
    /// Not a board; it is discarded on the next load.
    Malformed,
}

impl PayloadStatus {
    /// Returns the lowercase name used in output.
    pub fn as_str(self) -> &'static str {
        match self {
            PayloadStatus::Ok => "ok",
            PayloadStatus::Invalid => "invalid",
            PayloadStatus::Missing => "missing",
            PayloadStatus::Malformed => "malformed",
        }
    }
}

/// Findings of a board check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    /// Overall payload state.
    pub status: PayloadStatus,
    /// Number of cards across all columns.
    pub cards: usize,
    /// Stored `nextId`, when the payload parsed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_id: Option<u64>,
    /// Human-readable problems, empty when healthy.
    pub problems: Vec<String>,
}

impl CheckReport {
    /// Returns true if the stored board can be used as-is.
    pub fn is_healthy(&self) -> bool {
        matches!(self.status, PayloadStatus::Ok | PayloadStatus::Missing)
    }
}

/// Inspects the board stored in `store`.
///
/// # Errors
///
/// Returns an error if the backend cannot be read.
pub fn inspect<S: KeyValueStore>(store: &StateStore<S>) -> kanban_app::Result<CheckReport> {
    match store.try_load() {
        Ok(board) => {
            let problems = board.violations();
            Ok(CheckReport {
                status: if problems.is_empty() {
                    PayloadStatus::Ok
                } else {
                    PayloadStatus::Invalid
                },
                cards: board.card_count(),
                next_id: Some(board.next_id),
                problems,
            })
        }
        Err(LoadError::Missing(_)) => Ok(CheckReport {
            status: PayloadStatus::Missing,
            cards: 0,
            next_id: None,
            problems: Vec::new(),
        }),
        Err(LoadError::Malformed(err)) => Ok(CheckReport {
            status: PayloadStatus::Malformed,
            cards: 0,
            next_id: None,
            problems: vec![format!("stored board is not valid: {}", err)],
        }),
        Err(LoadError::Storage(err)) => Err(err.into()),
    }
}

/// Executes the check command.
///
/// # Returns
///
/// The report; callers exit non-zero when it is not healthy.
///
/// # Errors
///
/// Returns an error if the workspace or its storage cannot be read.
pub fn execute(ctx: &Context<'_>) -> Result<CheckReport> {
    let workspace = Workspace::discover(ctx.root)?;
    let report = inspect(&workspace.open_store()?)?;
    println!("{}", ctx.formatter.format_report(&report));
    Ok(report)
}
