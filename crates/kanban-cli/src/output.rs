// Rust guideline compliant 2026-10-16

//! Output formatting module for the kanban CLI.
//!
//! This module renders boards, intent outcomes, check reports and errors
//! in various output formats (JSON, table, plain text).

use crate::commands::check::{CheckReport, PayloadStatus};
use kanban_app::{AppError, ErrorCode, ErrorEnvelope, Intent, Outcome, SuccessEnvelope};
use kanban_core::{BoardState, Card};
use std::io::Write;
use tabled::{builder::Builder, settings::Style};
use termcolor::{Buffer, ColorSpec, WriteColor};

/// Placeholder shown for a column without cards.
pub const EMPTY_COLUMN: &str = "Brak kart";

/// Output formatter trait.
///
/// Defines the interface for rendering board data in different output formats.
pub trait OutputFormatter {
    /// Renders the whole board, columns in their fixed order.
    fn format_board(&self, board: &BoardState) -> String;

    /// Renders the result of one dispatched intent.
    fn format_outcome(&self, outcome: &Outcome, board: &BoardState) -> String;

    /// Renders the findings of `kb check`.
    fn format_report(&self, report: &CheckReport) -> String;

    /// Renders an error for display.
    fn format_error(&self, error: &anyhow::Error) -> String;

    /// Returns true if the output is a single machine-readable document.
    fn is_structured(&self) -> bool {
        false
    }
}

/// Returns the title to display for `card`, falling back to `placeholder`
/// when the stored title is empty.
pub fn display_title<'a>(card: &'a Card, placeholder: &'a str) -> &'a str {
    if card.title.is_empty() {
        placeholder
    } else {
        &card.title
    }
}

/// Formats a creation timestamp (Unix milliseconds) as UTC.
pub fn format_created(millis: i64) -> String {
    chrono::DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| millis.to_string())
}

/// Describes an outcome in one human-readable line.
pub fn summarize(outcome: &Outcome) -> String {
    match (&outcome.intent, outcome.changed, outcome.card_id) {
        (Intent::AddCard { column }, _, id) => {
            format!("Added card {} to {}", id.unwrap_or_default(), column)
        }
        (Intent::RemoveCard { id }, true, _) => format!("Removed card {}", id),
        (Intent::MoveCard { id, direction }, true, _) => format!("Moved card {} {}", id, direction),
        (Intent::MoveCard { id, direction }, false, Some(_)) => {
            format!("Card {} cannot move {}; board unchanged", id, direction)
        }
        (Intent::ColorizeColumn { column }, true, _) => format!("Recolored cards in {}", column),
        (Intent::ColorizeColumn { column }, false, _) => {
            format!("Column {} has no cards to recolor", column)
        }
        (Intent::ColorizeCard { id }, true, _) => format!("Recolored card {}", id),
        (Intent::SortColumn { column }, true, _) => format!("Sorted {}", column),
        (Intent::SortColumn { column }, false, _) => format!("Column {} already sorted", column),
        (Intent::RenameCard { id, .. }, true, _) => format!("Renamed card {}", id),
        (Intent::RenameCard { id, .. }, false, Some(_)) => {
            format!("Card {} already has that title", id)
        }
        (
            Intent::RemoveCard { id }
            | Intent::MoveCard { id, .. }
            | Intent::ColorizeCard { id }
            | Intent::RenameCard { id, .. },
            false,
            _,
        ) => format!("No card {}; board unchanged", id),
    }
}

fn serialization_error(what: &str, err: &serde_json::Error) -> String {
    ErrorEnvelope::new(
        ErrorCode::JsonError,
        format!("Failed to serialize {}: {}", what, err),
    )
    .to_json()
    .unwrap_or_default()
}

/// JSON output formatter.
///
/// Formats board data as valid JSON for machine consumption.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_board(&self, board: &BoardState) -> String {
        SuccessEnvelope::board(board)
            .to_json()
            .unwrap_or_else(|err| serialization_error("board", &err))
    }

    fn format_outcome(&self, outcome: &Outcome, board: &BoardState) -> String {
        SuccessEnvelope::outcome(outcome, board)
            .to_json()
            .unwrap_or_else(|err| serialization_error("outcome", &err))
    }

    fn format_report(&self, report: &CheckReport) -> String {
        SuccessEnvelope::new(report)
            .to_json()
            .unwrap_or_else(|err| serialization_error("report", &err))
    }

    fn format_error(&self, error: &anyhow::Error) -> String {
        let envelope = match error.downcast_ref::<AppError>() {
            Some(app_error) => ErrorEnvelope::from_error(app_error),
            None => ErrorEnvelope::new(ErrorCode::Unknown, error.to_string()),
        };
        envelope
            .to_json()
            .unwrap_or_else(|err| serialization_error("error", &err))
    }

    fn is_structured(&self) -> bool {
        true
    }
}

/// Table output formatter.
///
/// Formats columns as human-readable tables with optional colored headings.
pub struct TableFormatter {
    use_color: bool,
    placeholder: String,
}

impl TableFormatter {
    /// Creates a new table formatter.
    ///
    /// # Arguments
    /// * `use_color` - Whether to use colored output
    /// * `placeholder` - Title shown for cards with an empty title
    pub fn new(use_color: bool, placeholder: &str) -> Self {
        Self {
            use_color,
            placeholder: placeholder.to_string(),
        }
    }

    fn heading(&self, text: &str) -> String {
        if !self.use_color {
            return text.to_string();
        }
        let mut buffer = Buffer::ansi();
        let _ = buffer.set_color(ColorSpec::new().set_bold(true).set_underline(true));
        let _ = write!(buffer, "{}", text);
        let _ = buffer.reset();
        String::from_utf8_lossy(buffer.as_slice()).to_string()
    }
}

impl OutputFormatter for TableFormatter {
    fn format_board(&self, board: &BoardState) -> String {
        let mut sections = Vec::new();

        for (column, cards) in board.columns.iter() {
            let mut section = self.heading(&format!("{} ({})", column.title(), cards.len()));
            section.push('\n');

            if cards.is_empty() {
                section.push_str(&format!("  {}\n", EMPTY_COLUMN));
            } else {
                let mut builder = Builder::default();
                builder.push_record(vec!["ID", "Title", "Color", "Created"]);
                for card in cards {
                    builder.push_record(vec![
                        card.id.to_string(),
                        display_title(card, &self.placeholder).to_string(),
                        card.color.clone(),
                        format_created(card.created_at),
                    ]);
                }
                let mut table = builder.build();
                table.with(Style::modern());
                section.push_str(&table.to_string());
                section.push('\n');
            }

            sections.push(section);
        }

        sections.join("\n")
    }

    fn format_outcome(&self, outcome: &Outcome, _board: &BoardState) -> String {
        summarize(outcome)
    }

    fn format_report(&self, report: &CheckReport) -> String {
        match (report.status, report.next_id) {
            (PayloadStatus::Missing, _) => return "No board stored yet".to_string(),
            (PayloadStatus::Ok, Some(next_id)) => {
                return format!("Board OK: {} cards, nextId {}", report.cards, next_id)
            }
            _ => {}
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["#", "Problem"]);
        for (i, problem) in report.problems.iter().enumerate() {
            builder.push_record(vec![(i + 1).to_string(), problem.clone()]);
        }
        let mut table = builder.build();
        table.with(Style::modern());
        table.to_string()
    }

    fn format_error(&self, error: &anyhow::Error) -> String {
        if !self.use_color {
            return format!("Error: {}", error);
        }
        let mut buffer = Buffer::ansi();
        let _ = buffer.set_color(ColorSpec::new().set_fg(Some(termcolor::Color::Red)).set_bold(true));
        let _ = write!(buffer, "Error: ");
        let _ = buffer.reset();
        let _ = write!(buffer, "{}", error);
        String::from_utf8_lossy(buffer.as_slice()).to_string()
    }
}

/// Plain text output formatter.
///
/// One line per card, tab separated, suitable for scripts.
pub struct PlainFormatter {
    placeholder: String,
}

impl PlainFormatter {
    /// Creates a new plain formatter.
    pub fn new(placeholder: &str) -> Self {
        Self {
            placeholder: placeholder.to_string(),
        }
    }
}

impl OutputFormatter for PlainFormatter {
    fn format_board(&self, board: &BoardState) -> String {
        let mut output = String::new();
        for (column, cards) in board.columns.iter() {
            output.push_str(&format!("# {} {} ({})\n", column, column.title(), cards.len()));
            if cards.is_empty() {
                output.push_str(&format!("{}\n", EMPTY_COLUMN));
            }
            for card in cards {
                output.push_str(&format!(
                    "{}\t{}\t{}\t{}\n",
                    card.id,
                    display_title(card, &self.placeholder),
                    card.color,
                    card.created_at
                ));
            }
        }
        output
    }

    fn format_outcome(&self, outcome: &Outcome, _board: &BoardState) -> String {
        summarize(outcome)
    }

    fn format_report(&self, report: &CheckReport) -> String {
        if report.problems.is_empty() {
            return report.status.as_str().to_string();
        }
        report.problems.join("\n")
    }

    fn format_error(&self, error: &anyhow::Error) -> String {
        format!("Error: {}", error)
    }
}

/// Factory function to create an appropriate formatter.
///
/// # Arguments
/// * `format` - The desired output format ("json", "table", or "plain")
/// * `use_color` - Whether to use colored output (table only)
/// * `placeholder` - Title shown for cards with an empty title
///
/// # Returns
/// A boxed OutputFormatter instance
pub fn create_formatter(format: &str, use_color: bool, placeholder: &str) -> Box<dyn OutputFormatter> {
    match format {
        "json" => Box::new(JsonFormatter),
        "plain" => Box::new(PlainFormatter::new(placeholder)),
        _ => Box::new(TableFormatter::new(use_color, placeholder)),
    }
}
