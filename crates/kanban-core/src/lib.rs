// Rust guideline compliant 2026-10-16

//! Kanban Core Library
//!
//! This crate provides the foundational components for the kanban board:
//! - Data models (Card, ColumnId, BoardState)
//! - Mutation operations (add, remove, move, recolor, rename, sort)
//! - Title collation and pastel color generation
//! - Key-value storage backends and the board state store
//! - Configuration and error types

pub mod board;
pub mod collation;
pub mod color;
pub mod config;
pub mod error;
pub mod models;
pub mod state;
pub mod storage;

pub use config::{Config, OutputFormat};
pub use error::{Error, LoadError, Result};
pub use models::{BoardState, Card, ColumnId, Columns, Direction};
pub use state::{decode, encode, StateStore, STORAGE_KEY};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
