// Rust guideline compliant 2026-10-16

//! Unit tests for output formatting module.

use kanban_app::{AppError, Intent, Outcome};
use kanban_cli::commands::check::{CheckReport, PayloadStatus};
use kanban_cli::create_formatter;
use kanban_cli::output::{format_created, summarize, EMPTY_COLUMN};
use kanban_core::{BoardState, ColumnId, Direction};

fn create_test_board() -> BoardState {
    let mut board = BoardState::default();
    board.add_card(ColumnId::Todo, "Zakupy".into(), "hsl(120deg 80% 90%)".into(), 1_704_067_200_000);
    board.add_card(ColumnId::Todo, String::new(), "hsl(200deg 80% 90%)".into(), 1_704_067_260_000);
    board.add_card(ColumnId::Done, "Pranie".into(), "hsl(10deg 80% 90%)".into(), 1_704_067_320_000);
    board
}

#[test]
fn test_table_formatter_board() {
    let formatter = create_formatter("table", false, "Nowa karta");
    let output = formatter.format_board(&create_test_board());

    assert!(output.contains("Do zrobienia (2)"));
    assert!(output.contains("W trakcie (0)"));
    assert!(output.contains("Zrobione (1)"));
    assert!(output.contains("Zakupy"));
    assert!(output.contains("Nowa karta"), "empty title shows the default");
    assert!(output.contains(EMPTY_COLUMN));
    assert!(output.contains("2024-01-01 00:00"));

    let todo = output.find("Do zrobienia").unwrap();
    let doing = output.find("W trakcie").unwrap();
    let done = output.find("Zrobione").unwrap();
    assert!(todo < doing && doing < done);
}

#[test]
fn test_table_formatter_without_color_has_no_escapes() {
    let formatter = create_formatter("table", false, "Nowa karta");
    let output = formatter.format_board(&BoardState::default());
    assert!(!output.contains('\u{1b}'));
    assert_eq!(output.matches(EMPTY_COLUMN).count(), 3);
}

#[test]
fn test_table_formatter_with_color_styles_headings() {
    let formatter = create_formatter("table", true, "Nowa karta");
    let output = formatter.format_board(&BoardState::default());
    assert!(output.contains('\u{1b}'));
}

#[test]
fn test_plain_formatter_board() {
    let formatter = create_formatter("plain", false, "Nowa karta");
    let output = formatter.format_board(&create_test_board());

    assert!(output.contains("# todo Do zrobienia (2)"));
    assert!(output.contains("1\tZakupy\thsl(120deg 80% 90%)\t1704067200000"));
    assert!(output.contains("2\tNowa karta\t"));
    assert!(output.contains("# doing W trakcie (0)\nBrak kart"));
}

#[test]
fn test_json_formatter_board_keeps_stored_title() {
    let formatter = create_formatter("json", false, "Nowa karta");
    let output = formatter.format_board(&create_test_board());
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["status"], "ok");
    assert_eq!(value["result"]["total"], 3);
    assert_eq!(value["result"]["board"]["nextId"], 4);
    assert_eq!(value["result"]["board"]["columns"]["todo"][1]["title"], "");
    assert_eq!(
        value["result"]["board"]["columns"]["done"][0]["createdAt"],
        1_704_067_320_000i64
    );
}

#[test]
fn test_json_formatter_outcome() {
    let formatter = create_formatter("json", false, "Nowa karta");
    let outcome = Outcome {
        intent: Intent::MoveCard {
            id: 3,
            direction: Direction::Right,
        },
        changed: false,
        card_id: Some(3),
    };
    let output = formatter.format_outcome(&outcome, &create_test_board());
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["result"]["outcome"]["intent"]["action"], "move_card");
    assert_eq!(value["result"]["outcome"]["changed"], false);
    assert_eq!(value["result"]["board"]["nextId"], 4);
}

#[test]
fn test_json_formatter_error_codes() {
    let formatter = create_formatter("json", false, "Nowa karta");

    let missing = anyhow::Error::from(AppError::WorkspaceNotInitialized {
        path: "/tmp/x/.kanban".into(),
    });
    let value: serde_json::Value = serde_json::from_str(&formatter.format_error(&missing)).unwrap();
    assert_eq!(value["status"], "error");
    assert_eq!(value["error"]["code"], "workspace_not_initialized");
    assert_eq!(value["error"]["details"]["path"], "/tmp/x/.kanban");

    let other = anyhow::anyhow!("boom");
    let value: serde_json::Value = serde_json::from_str(&formatter.format_error(&other)).unwrap();
    assert_eq!(value["error"]["code"], "unknown");
    assert_eq!(value["error"]["message"], "boom");
}

#[test]
fn test_text_formatter_error() {
    let formatter = create_formatter("plain", false, "Nowa karta");
    let output = formatter.format_error(&anyhow::anyhow!("Test error message"));
    assert_eq!(output, "Error: Test error message");
}

#[test]
fn test_report_formatting() {
    let healthy = CheckReport {
        status: PayloadStatus::Ok,
        cards: 3,
        next_id: Some(4),
        problems: Vec::new(),
    };
    let broken = CheckReport {
        status: PayloadStatus::Invalid,
        cards: 2,
        next_id: Some(1),
        problems: vec!["duplicate card id 1".into()],
    };

    let table = create_formatter("table", false, "Nowa karta");
    assert_eq!(table.format_report(&healthy), "Board OK: 3 cards, nextId 4");
    assert!(table.format_report(&broken).contains("duplicate card id 1"));

    let plain = create_formatter("plain", false, "Nowa karta");
    assert_eq!(plain.format_report(&healthy), "ok");

    let json = create_formatter("json", false, "Nowa karta");
    let value: serde_json::Value = serde_json::from_str(&json.format_report(&broken)).unwrap();
    assert_eq!(value["result"]["status"], "invalid");
    assert_eq!(value["result"]["next_id"], 1);
}

#[test]
fn test_summaries() {
    let added = Outcome {
        intent: Intent::AddCard {
            column: ColumnId::Doing,
        },
        changed: true,
        card_id: Some(7),
    };
    assert_eq!(summarize(&added), "Added card 7 to doing");

    let unknown = Outcome {
        intent: Intent::RenameCard {
            id: 9,
            title: "x".into(),
        },
        changed: false,
        card_id: None,
    };
    assert_eq!(summarize(&unknown), "No card 9; board unchanged");

    let same = Outcome {
        intent: Intent::RenameCard {
            id: 9,
            title: "x".into(),
        },
        changed: false,
        card_id: Some(9),
    };
    assert_eq!(summarize(&same), "Card 9 already has that title");
}

#[test]
fn test_format_created_out_of_range() {
    assert_eq!(format_created(0), "1970-01-01 00:00");
    assert_eq!(format_created(i64::MAX), i64::MAX.to_string());
}
