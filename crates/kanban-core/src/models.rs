// Rust guideline compliant 2026-10-16

//! Core data models for the kanban board.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// One of the fixed board columns, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnId {
    /// Work not started yet.
    Todo,
    /// Work in progress.
    Doing,
    /// Finished work.
    Done,
}

impl ColumnId {
    /// All columns in their fixed order.
    pub const ALL: [ColumnId; 3] = [ColumnId::Todo, ColumnId::Doing, ColumnId::Done];

    /// Returns the position of the column in the fixed order.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            ColumnId::Todo => 0,
            ColumnId::Doing => 1,
            ColumnId::Done => 2,
        }
    }

    /// Returns the column at `index`, or `None` past either end.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Returns the storage key of the column.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            ColumnId::Todo => "todo",
            ColumnId::Doing => "doing",
            ColumnId::Done => "done",
        }
    }

    /// Returns the display title of the column.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            ColumnId::Todo => "Do zrobienia",
            ColumnId::Doing => "W trakcie",
            ColumnId::Done => "Zrobione",
        }
    }

    /// Returns the adjacent column in `direction`, or `None` at a boundary.
    #[must_use]
    pub fn neighbor(self, direction: Direction) -> Option<Self> {
        match direction {
            Direction::Left => self.index().checked_sub(1).and_then(Self::from_index),
            Direction::Right => Self::from_index(self.index() + 1),
        }
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ColumnId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "todo" => Ok(ColumnId::Todo),
            "doing" => Ok(ColumnId::Doing),
            "done" => Ok(ColumnId::Done),
            other => Err(Error::UnknownColumn(other.to_string())),
        }
    }
}

/// Direction a card can be moved between columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Towards the first column.
    Left,
    /// Towards the last column.
    Right,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Left => f.write_str("left"),
            Direction::Right => f.write_str("right"),
        }
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            other => Err(Error::UnknownDirection(other.to_string())),
        }
    }
}

/// A single task on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Board-unique identifier, never reused.
    pub id: u64,
    /// Card title; may be empty after a rename.
    pub title: String,
    /// CSS color token used as the card background.
    pub color: String,
    /// Unix timestamp of creation, in milliseconds.
    pub created_at: i64,
}

/// The ordered card lists of the three fixed columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Columns {
    /// Cards in the `todo` column.
    pub todo: Vec<Card>,
    /// Cards in the `doing` column.
    pub doing: Vec<Card>,
    /// Cards in the `done` column.
    pub done: Vec<Card>,
}

impl Columns {
    /// Returns the cards of a column.
    #[must_use]
    pub fn get(&self, column: ColumnId) -> &[Card] {
        match column {
            ColumnId::Todo => &self.todo,
            ColumnId::Doing => &self.doing,
            ColumnId::Done => &self.done,
        }
    }

    /// Returns the mutable card list of a column.
    pub fn get_mut(&mut self, column: ColumnId) -> &mut Vec<Card> {
        match column {
            ColumnId::Todo => &mut self.todo,
            ColumnId::Doing => &mut self.doing,
            ColumnId::Done => &mut self.done,
        }
    }

    /// Iterates columns in their fixed order.
    pub fn iter(&self) -> impl Iterator<Item = (ColumnId, &[Card])> {
        ColumnId::ALL.into_iter().map(move |column| (column, self.get(column)))
    }
}

/// The complete persisted board: id counter plus all columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardState {
    /// Identifier handed to the next created card.
    pub next_id: u64,
    /// Card lists keyed by column.
    pub columns: Columns,
}

impl Default for BoardState {
    fn default() -> Self {
        Self {
            next_id: 1,
            columns: Columns::default(),
        }
    }
}

impl BoardState {
    /// Returns the total number of cards across all columns.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.columns.iter().map(|(_, cards)| cards.len()).sum()
    }

    /// Locates a card, searching columns in their fixed order.
    ///
    /// # Returns
    ///
    /// The column and position of the first card with `id`, if any.
    #[must_use]
    pub fn locate(&self, id: u64) -> Option<(ColumnId, usize)> {
        self.columns.iter().find_map(|(column, cards)| {
            cards
                .iter()
                .position(|card| card.id == id)
                .map(|index| (column, index))
        })
    }

    /// Returns the card with `id`, if present.
    #[must_use]
    pub fn card(&self, id: u64) -> Option<&Card> {
        let (column, index) = self.locate(id)?;
        self.columns.get(column).get(index)
    }

    /// Returns the card with `id` mutably, if present.
    pub fn card_mut(&mut self, id: u64) -> Option<&mut Card> {
        let (column, index) = self.locate(id)?;
        self.columns.get_mut(column).get_mut(index)
    }

    /// Lists every invariant violation found in the board.
    ///
    /// # Returns
    ///
    /// Human-readable descriptions; empty when the board is well formed.
    #[must_use]
    pub fn violations(&self) -> Vec<String> {
        let mut problems = Vec::new();
        let mut seen = HashSet::new();

        for (column, cards) in self.columns.iter() {
            for card in cards {
                if !seen.insert(card.id) {
                    problems.push(format!("card {} appears more than once (in {})", card.id, column));
                }
                if card.id >= self.next_id {
                    problems.push(format!(
                        "card {} in {} is not below nextId {}",
                        card.id, column, self.next_id
                    ));
                }
            }
        }

        if self.next_id == 0 {
            problems.push("nextId must be at least 1".to_string());
        }

        problems
    }

    /// Validates the board invariants.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidBoard` describing the first violation found.
    pub fn validate(&self) -> Result<()> {
        match self.violations().into_iter().next() {
            Some(problem) => Err(Error::InvalidBoard(problem)),
            None => Ok(()),
        }
    }
}
