// Rust guideline compliant 2026-10-16

//! Renderer that turns each board snapshot into a printable frame.

use crate::output::OutputFormatter;
use kanban_app::Renderer;
use kanban_core::BoardState;

/// Keeps the most recent frame produced by an output formatter.
///
/// The controller calls the renderer after every change; the CLI prints
/// the last frame once the command has finished.
pub struct FrameRenderer<'a> {
    formatter: &'a dyn OutputFormatter,
    frame: String,
    renders: usize,
}

impl<'a> FrameRenderer<'a> {
    /// Creates a renderer with an empty frame.
    pub fn new(formatter: &'a dyn OutputFormatter) -> Self {
        Self {
            formatter,
            frame: String::new(),
            renders: 0,
        }
    }

    /// Returns the latest frame.
    pub fn frame(&self) -> &str {
        &self.frame
    }

    /// Returns how many times the board was rendered.
    pub fn renders(&self) -> usize {
        self.renders
    }
}

impl Renderer for FrameRenderer<'_> {
    fn render(&mut self, board: &BoardState) {
        self.frame = self.formatter.format_board(board);
        self.renders += 1;
    }
}
