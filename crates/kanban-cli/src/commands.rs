// Rust guideline compliant 2026-10-16

//! Command implementations for the kanban CLI.

pub mod card;
pub mod check;
pub mod column;
pub mod init;
pub mod reset;
pub mod show;

use crate::output::{summarize, OutputFormatter};
use crate::render::FrameRenderer;
use crate::terminal::{print_success, print_warning};
use anyhow::Result;
use kanban_app::{BoardController, Intent, Outcome, Workspace};
use kanban_core::{Config, FileStore};
use std::path::Path;

/// Settings shared by every command invocation.
pub struct Context<'a> {
    /// Workspace root; `None` means the current directory.
    pub root: Option<&'a Path>,
    /// Active output formatter.
    pub formatter: &'a dyn OutputFormatter,
    /// Whether status lines may be colored.
    pub use_color: bool,
}

impl<'a> Context<'a> {
    /// Opens the workspace board and renders it once.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The workspace is not initialized
    /// - The configuration is invalid
    /// - The storage directory cannot be opened or read
    pub fn open(&self) -> Result<BoardController<FileStore, FrameRenderer<'a>>> {
        let workspace = Workspace::discover(self.root)?;
        let config: Config = workspace.load_config()?;
        let store = workspace.open_store()?;
        Ok(BoardController::open(
            store,
            FrameRenderer::new(self.formatter),
            &config,
        )?)
    }
}

/// Prints a rendered frame, ending it with exactly one newline.
pub(crate) fn print_frame(frame: &str) {
    if frame.ends_with('\n') {
        print!("{}", frame);
    } else {
        println!("{}", frame);
    }
}

/// Dispatches one intent against the workspace board and prints the result.
///
/// Structured output gets a single document with the outcome and the board;
/// otherwise a status line goes to stderr and the re-rendered board to stdout.
///
/// # Errors
///
/// Returns an error if the board cannot be opened or saved.
pub fn dispatch(ctx: &Context<'_>, intent: Intent) -> Result<Outcome> {
    let mut controller = ctx.open()?;
    let outcome = controller.dispatch(intent)?;

    if ctx.formatter.is_structured() {
        println!("{}", ctx.formatter.format_outcome(&outcome, controller.board()));
    } else {
        let summary = summarize(&outcome);
        if outcome.changed {
            print_success(&summary, ctx.use_color);
        } else {
            print_warning(&summary, ctx.use_color);
        }
        print_frame(controller.renderer().frame());
    }

    Ok(outcome)
}
