// Rust guideline compliant 2026-10-16

//! Column-level commands: `kb colorize` and `kb sort`.

use super::{dispatch, Context};
use anyhow::Result;
use kanban_app::Intent;
use kanban_core::ColumnId;

/// Recolors every card in `column`.
///
/// # Errors
///
/// Returns an error if the board cannot be opened or saved.
pub fn colorize(ctx: &Context<'_>, column: ColumnId) -> Result<()> {
    dispatch(ctx, Intent::ColorizeColumn { column })?;
    Ok(())
}

/// Sorts `column` alphabetically by title (Polish collation).
///
/// # Errors
///
/// Returns an error if the board cannot be opened or saved.
pub fn sort(ctx: &Context<'_>, column: ColumnId) -> Result<()> {
    dispatch(ctx, Intent::SortColumn { column })?;
    Ok(())
}
