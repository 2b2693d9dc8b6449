// Rust guideline compliant 2026-10-16

//! Board state store: loads the board from a key-value backend and writes it
//! back after every mutation.

use crate::{BoardState, KeyValueStore, LoadError, Result};

/// Storage key of the board, namespaced so other applications sharing the
/// backend do not collide with it.
pub const STORAGE_KEY: &str = "piu-kanban-v1";

/// Deserializes a stored payload into a board.
///
/// # Errors
///
/// Returns the parse error if the payload is not JSON or lacks the board shape.
pub fn decode(raw: &str) -> std::result::Result<BoardState, serde_json::Error> {
    serde_json::from_str(raw)
}

/// Serializes a board into its stored payload.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn encode(board: &BoardState) -> Result<String> {
    Ok(serde_json::to_string(board)?)
}

/// Persists a single `BoardState` under one key of a `KeyValueStore`.
#[derive(Debug)]
pub struct StateStore<S> {
    backend: S,
    key: String,
}

impl<S: KeyValueStore> StateStore<S> {
    /// Creates a store using the default [`STORAGE_KEY`].
    pub fn new(backend: S) -> Self {
        Self::with_key(backend, STORAGE_KEY)
    }

    /// Creates a store using a custom key.
    pub fn with_key(backend: S, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    /// Returns the storage key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the underlying backend.
    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Reads and decodes the stored board.
    ///
    /// # Errors
    ///
    /// Returns a `LoadError` if:
    /// - Nothing is stored under the key
    /// - The payload fails structural deserialization
    /// - The backend cannot be read
    pub fn try_load(&self) -> std::result::Result<BoardState, LoadError> {
        let raw = self
            .backend
            .get(&self.key)?
            .ok_or_else(|| LoadError::Missing(self.key.clone()))?;
        Ok(decode(&raw)?)
    }

    /// Loads the stored board, falling back to an empty board.
    ///
    /// Missing and malformed payloads are not errors here: the fresh board
    /// `{nextId: 1, columns: {todo: [], doing: [], done: []}}` is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read. Nothing is replaced
    /// in that case, so a later save cannot overwrite the stored board.
    pub fn load(&self) -> Result<BoardState> {
        match self.try_load() {
            Ok(board) => Ok(board),
            Err(LoadError::Missing(key)) => {
                tracing::debug!(key = %key, "no stored board, starting empty");
                Ok(BoardState::default())
            }
            Err(LoadError::Malformed(err)) => {
                tracing::warn!(key = %self.key, error = %err, "discarding unreadable board");
                Ok(BoardState::default())
            }
            Err(LoadError::Storage(err)) => Err(err),
        }
    }

    /// Writes the whole board under the key.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the backend write fails.
    pub fn save(&self, board: &BoardState) -> Result<()> {
        let payload = encode(board)?;
        self.backend.set(&self.key, &payload)?;
        tracing::trace!(key = %self.key, bytes = payload.len(), "board saved");
        Ok(())
    }

    /// Deletes the stored board; the next load starts empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend write fails.
    pub fn clear(&self) -> Result<()> {
        self.backend.remove(&self.key)
    }
}
