// Rust guideline compliant 2026-10-16

//! Discrete user intents delivered by a presentation layer.

use kanban_core::{ColumnId, Direction};
use serde::{Deserialize, Serialize};

/// One user gesture, already resolved to the ids it targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Intent {
    /// Add a card to the tail of a column.
    AddCard {
        /// Target column.
        column: ColumnId,
    },
    /// Remove a card.
    RemoveCard {
        /// Card id.
        id: u64,
    },
    /// Move a card one column left or right.
    MoveCard {
        /// Card id.
        id: u64,
        /// Move direction.
        direction: Direction,
    },
    /// Give every card of a column a fresh color.
    ColorizeColumn {
        /// Target column.
        column: ColumnId,
    },
    /// Give one card a fresh color.
    ColorizeCard {
        /// Card id.
        id: u64,
    },
    /// Sort a column by title.
    SortColumn {
        /// Target column.
        column: ColumnId,
    },
    /// Replace a card title with finished edit text.
    RenameCard {
        /// Card id.
        id: u64,
        /// Raw text; trimmed before it is stored.
        title: String,
    },
}

/// Result of dispatching an intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    /// The intent that was applied.
    pub intent: Intent,
    /// Whether the board differs from before the intent.
    pub changed: bool,
    /// The card created or targeted, when there is one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_id: Option<u64>,
}
