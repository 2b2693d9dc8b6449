// Rust guideline compliant 2026-10-16

//! Implementation of the `kb init` command.
//!
//! Creates the `.kanban` directory with a default `config.toml` and an
//! empty board. Re-running it keeps existing data.

use super::Context;
use crate::terminal::{print_info, print_success};
use anyhow::Result;
use kanban_app::{SuccessEnvelope, Workspace};
use serde_json::json;

/// Initializes a kanban workspace.
///
/// # Errors
///
/// Returns an error if:
/// - The `.kanban` directory cannot be created
/// - The configuration file cannot be written
/// - The empty board cannot be saved
pub fn execute(ctx: &Context<'_>) -> Result<()> {
    let existed = Workspace::discover(ctx.root).is_ok();
    let workspace = Workspace::init(ctx.root)?;

    if ctx.formatter.is_structured() {
        let output = SuccessEnvelope::new(json!({
            "path": workspace.kanban_dir(),
            "created": !existed,
        }));
        println!("{}", output.to_json()?);
    } else if existed {
        print_info(
            &format!(
                "Kanban board already initialized at {}",
                workspace.kanban_dir().display()
            ),
            ctx.use_color,
        );
    } else {
        print_success(
            &format!(
                "Kanban board initialized at {}",
                workspace.kanban_dir().display()
            ),
            ctx.use_color,
        );
    }

    Ok(())
}
