// Rust guideline compliant 2026-10-16

//! The board controller: owns the board, persists it, and asks the
//! presentation layer to re-render after every intent.

use crate::error::Result;
use crate::intent::{Intent, Outcome};
use kanban_core::{color, BoardState, ColumnId, Config, Direction, KeyValueStore, StateStore};

/// Presentation-layer hook invoked with the current board after each change.
pub trait Renderer {
    /// Draws `board`.
    fn render(&mut self, board: &BoardState);
}

impl<F> Renderer for F
where
    F: FnMut(&BoardState),
{
    fn render(&mut self, board: &BoardState) {
        self(board)
    }
}

/// Owns the single in-memory `BoardState` of a session.
///
/// Each mutation is applied to the board, the whole board is saved, and the
/// renderer is called, in that order and without interleaving.
pub struct BoardController<S: KeyValueStore, R: Renderer> {
    board: BoardState,
    store: StateStore<S>,
    renderer: R,
    default_title: String,
    palette: Box<dyn FnMut() -> String>,
    clock: Box<dyn FnMut() -> i64>,
}

impl<S: KeyValueStore, R: Renderer> BoardController<S, R> {
    /// Loads the board from `store` and renders it once.
    ///
    /// A missing or malformed stored board yields an empty board. A board
    /// that parses but breaks an id invariant is kept and logged.
    ///
    /// # Arguments
    ///
    /// * `store` - State store the board is loaded from and saved to
    /// * `renderer` - Presentation hook
    /// * `config` - Supplies the default card title
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend cannot be read.
    pub fn open(store: StateStore<S>, renderer: R, config: &Config) -> Result<Self> {
        let board = store.load()?;
        if let Err(err) = board.validate() {
            tracing::warn!(error = %err, "stored board is inconsistent; run 'kb check'");
        }
        let mut controller = Self {
            board,
            store,
            renderer,
            default_title: config.default_title.clone(),
            palette: Box::new(color::random_pastel),
            clock: Box::new(crate::time::unix_millis),
        };
        controller.renderer.render(&controller.board);
        Ok(controller)
    }

    /// Replaces the color source used for new and recolored cards.
    pub fn with_palette<F>(mut self, palette: F) -> Self
    where
        F: FnMut() -> String + 'static,
    {
        self.palette = Box::new(palette);
        self
    }

    /// Replaces the clock used to stamp new cards, in Unix milliseconds.
    pub fn with_clock<F>(mut self, clock: F) -> Self
    where
        F: FnMut() -> i64 + 'static,
    {
        self.clock = Box::new(clock);
        self
    }

    /// Returns the current board.
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    /// Returns the state store.
    pub fn store(&self) -> &StateStore<S> {
        &self.store
    }

    /// Returns the renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Saves the board and re-renders it.
    ///
    /// # Errors
    ///
    /// Returns an error if the board cannot be saved.
    pub fn save(&mut self) -> Result<()> {
        self.store.save(&self.board)?;
        self.renderer.render(&self.board);
        Ok(())
    }

    /// Applies an intent, then saves and re-renders.
    ///
    /// Intents naming a card that does not exist, or moving a card past a
    /// boundary column, leave the board unchanged and report `changed: false`.
    ///
    /// # Errors
    ///
    /// Returns an error if the board cannot be saved.
    pub fn dispatch(&mut self, intent: Intent) -> Result<Outcome> {
        let (changed, card_id) = self.apply(&intent);
        tracing::debug!(?intent, changed, "intent applied");
        self.save()?;
        Ok(Outcome {
            intent,
            changed,
            card_id,
        })
    }

    fn apply(&mut self, intent: &Intent) -> (bool, Option<u64>) {
        let target = match intent {
            Intent::RemoveCard { id }
            | Intent::MoveCard { id, .. }
            | Intent::ColorizeCard { id }
            | Intent::RenameCard { id, .. } => self.board.card(*id).map(|card| card.id),
            _ => None,
        };

        let changed = match intent {
            Intent::AddCard { column } => {
                let color = (self.palette)();
                let created_at = (self.clock)();
                let id = self
                    .board
                    .add_card(*column, self.default_title.clone(), color, created_at);
                return (true, Some(id));
            }
            Intent::RemoveCard { id } => self.board.remove_card(*id).is_some(),
            Intent::MoveCard { id, direction } => self.board.move_card(*id, *direction),
            Intent::ColorizeColumn { column } => {
                let palette = &mut self.palette;
                self.board.colorize_column(*column, || palette()) > 0
            }
            Intent::ColorizeCard { id } => {
                let color = (self.palette)();
                self.board.colorize_card(*id, color)
            }
            Intent::SortColumn { column } => {
                let order = |board: &BoardState| -> Vec<u64> {
                    board.columns.get(*column).iter().map(|card| card.id).collect()
                };
                let before = order(&self.board);
                self.board.sort_column(*column);
                order(&self.board) != before
            }
            Intent::RenameCard { id, title } => {
                let previous = self.board.card(*id).map(|card| card.title.clone());
                self.board.rename_card(*id, title)
                    && previous.as_deref() != self.board.card(*id).map(|card| card.title.as_str())
            }
        };

        (changed, target)
    }

    /// Adds a card with the default title to the tail of `column`.
    ///
    /// # Returns
    ///
    /// The id of the new card.
    ///
    /// # Errors
    ///
    /// Returns an error if the board cannot be saved.
    pub fn add_card(&mut self, column: ColumnId) -> Result<u64> {
        let outcome = self.dispatch(Intent::AddCard { column })?;
        Ok(outcome.card_id.unwrap_or_default())
    }

    /// Removes a card; unknown ids are a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the board cannot be saved.
    pub fn remove_card(&mut self, id: u64) -> Result<bool> {
        Ok(self.dispatch(Intent::RemoveCard { id })?.changed)
    }

    /// Moves a card one column in `direction`; boundary moves are a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the board cannot be saved.
    pub fn move_card(&mut self, id: u64, direction: Direction) -> Result<bool> {
        Ok(self.dispatch(Intent::MoveCard { id, direction })?.changed)
    }

    /// Gives every card of `column` a fresh pastel color.
    ///
    /// # Errors
    ///
    /// Returns an error if the board cannot be saved.
    pub fn colorize_column(&mut self, column: ColumnId) -> Result<bool> {
        Ok(self.dispatch(Intent::ColorizeColumn { column })?.changed)
    }

    /// Gives one card a fresh pastel color.
    ///
    /// # Errors
    ///
    /// Returns an error if the board cannot be saved.
    pub fn colorize_card(&mut self, id: u64) -> Result<bool> {
        Ok(self.dispatch(Intent::ColorizeCard { id })?.changed)
    }

    /// Sorts `column` by collated title, then creation time.
    ///
    /// # Errors
    ///
    /// Returns an error if the board cannot be saved.
    pub fn sort_column(&mut self, column: ColumnId) -> Result<bool> {
        Ok(self.dispatch(Intent::SortColumn { column })?.changed)
    }

    /// Sets a card title to the trimmed `title`.
    ///
    /// # Errors
    ///
    /// Returns an error if the board cannot be saved.
    pub fn rename_card(&mut self, id: u64, title: &str) -> Result<bool> {
        let title = title.to_string();
        Ok(self.dispatch(Intent::RenameCard { id, title })?.changed)
    }
}
