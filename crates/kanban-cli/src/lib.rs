// Rust guideline compliant 2026-10-16

//! Kanban CLI library.
//!
//! This library exposes the CLI modules for use in tests and external code.

pub mod commands;
pub mod logging;
pub mod output;
pub mod render;
pub mod terminal;

pub use output::{create_formatter, OutputFormatter};
pub use render::FrameRenderer;
pub use terminal::should_use_color;
