// Rust guideline compliant 2026-10-16

//! Mutation operations over a `BoardState`.
//!
//! Every operation is total over a well-formed board: unknown card ids and
//! boundary moves leave the board untouched instead of failing. Colors and
//! timestamps are supplied by the caller so the operations stay deterministic.

use crate::collation;
use crate::models::{BoardState, Card, ColumnId, Direction};

impl BoardState {
    /// Creates a card at the tail of `column`.
    ///
    /// # Arguments
    ///
    /// * `column` - Target column
    /// * `title` - Initial card title
    /// * `color` - Background color token
    /// * `created_at` - Creation timestamp in milliseconds
    ///
    /// # Returns
    ///
    /// The id assigned to the new card.
    pub fn add_card(&mut self, column: ColumnId, title: String, color: String, created_at: i64) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.columns.get_mut(column).push(Card {
            id,
            title,
            color,
            created_at,
        });
        id
    }

    /// Removes the card with `id`.
    ///
    /// # Returns
    ///
    /// The removed card, or `None` if no card has that id.
    pub fn remove_card(&mut self, id: u64) -> Option<Card> {
        let (column, index) = self.locate(id)?;
        Some(self.columns.get_mut(column).remove(index))
    }

    /// Moves a card one column in `direction`, appending it to the target's tail.
    ///
    /// # Returns
    ///
    /// True if the card moved; false if it was not found or already sits in
    /// the boundary column for that direction.
    pub fn move_card(&mut self, id: u64, direction: Direction) -> bool {
        let Some((from, index)) = self.locate(id) else {
            return false;
        };
        let Some(to) = from.neighbor(direction) else {
            return false;
        };

        let card = self.columns.get_mut(from).remove(index);
        self.columns.get_mut(to).push(card);
        true
    }

    /// Recolors every card in `column`, drawing one color per card.
    ///
    /// # Returns
    ///
    /// The number of cards recolored.
    pub fn colorize_column<F>(&mut self, column: ColumnId, mut next_color: F) -> usize
    where
        F: FnMut() -> String,
    {
        let cards = self.columns.get_mut(column);
        for card in cards.iter_mut() {
            card.color = next_color();
        }
        cards.len()
    }

    /// Recolors the card with `id`.
    ///
    /// # Returns
    ///
    /// True if the card exists.
    pub fn colorize_card(&mut self, id: u64, color: String) -> bool {
        match self.card_mut(id) {
            Some(card) => {
                card.color = color;
                true
            }
            None => false,
        }
    }

    /// Sorts `column` by collated title, breaking ties by creation time.
    ///
    /// The sort is stable, so cards equal on both keys keep their order.
    pub fn sort_column(&mut self, column: ColumnId) {
        self.columns.get_mut(column).sort_by(collation::compare_cards);
    }

    /// Sets the title of the card with `id` to the trimmed `title`.
    ///
    /// An empty result is allowed.
    ///
    /// # Returns
    ///
    /// True if the card exists.
    pub fn rename_card(&mut self, id: u64, title: &str) -> bool {
        match self.card_mut(id) {
            Some(card) => {
                card.title = title.trim().to_string();
                true
            }
            None => false,
        }
    }
}
