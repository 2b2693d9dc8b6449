// Rust guideline compliant 2026-10-16

//! Card-level commands: `kb add`, `kb remove`, `kb move`, `kb rename`, `kb color`.

use super::{dispatch, Context};
use anyhow::Result;
use kanban_app::Intent;
use kanban_core::{ColumnId, Direction};

/// Adds a card with the default title to the tail of `column`.
///
/// # Errors
///
/// Returns an error if the board cannot be opened or saved.
pub fn add(ctx: &Context<'_>, column: ColumnId) -> Result<()> {
    dispatch(ctx, Intent::AddCard { column })?;
    Ok(())
}

/// Removes the card with `id`; unknown ids leave the board unchanged.
///
/// # Errors
///
/// Returns an error if the board cannot be opened or saved.
pub fn remove(ctx: &Context<'_>, id: u64) -> Result<()> {
    dispatch(ctx, Intent::RemoveCard { id })?;
    Ok(())
}

/// Moves the card with `id` one column in `direction`.
///
/// # Errors
///
/// Returns an error if the board cannot be opened or saved.
pub fn move_card(ctx: &Context<'_>, id: u64, direction: Direction) -> Result<()> {
    dispatch(ctx, Intent::MoveCard { id, direction })?;
    Ok(())
}

/// Replaces the title of the card with `id`.
///
/// # Errors
///
/// Returns an error if the board cannot be opened or saved.
pub fn rename(ctx: &Context<'_>, id: u64, title: String) -> Result<()> {
    dispatch(ctx, Intent::RenameCard { id, title })?;
    Ok(())
}

/// Gives the card with `id` a fresh pastel color.
///
/// # Errors
///
/// Returns an error if the board cannot be opened or saved.
pub fn color(ctx: &Context<'_>, id: u64) -> Result<()> {
    dispatch(ctx, Intent::ColorizeCard { id })?;
    Ok(())
}
