// Rust guideline compliant 2026-10-16

//! Implementation of the `kb show` command.

use super::{print_frame, Context};
use anyhow::Result;

/// Renders the stored board without modifying it.
///
/// # Errors
///
/// Returns an error if the workspace cannot be opened.
pub fn execute(ctx: &Context<'_>) -> Result<()> {
    let controller = ctx.open()?;
    print_frame(controller.renderer().frame());
    Ok(())
}
