// Rust guideline compliant 2026-10-16

//! Implementation of the `kb reset` command.

use super::{print_frame, Context};
use crate::terminal::print_success;
use anyhow::Result;
use kanban_app::Workspace;

/// Discards the stored board and shows the empty board that replaces it.
///
/// Configuration is kept; the next add starts again from id 1.
///
/// # Errors
///
/// Returns an error if:
/// - The workspace is not initialized
/// - The stored board cannot be removed
pub fn execute(ctx: &Context<'_>) -> Result<()> {
    let workspace = Workspace::discover(ctx.root)?;
    workspace.open_store()?.clear()?;
    tracing::info!(path = %workspace.kanban_dir().display(), "stored board discarded");

    let controller = ctx.open()?;
    if !ctx.formatter.is_structured() {
        print_success("Board cleared", ctx.use_color);
    }
    print_frame(controller.renderer().frame());
    Ok(())
}
