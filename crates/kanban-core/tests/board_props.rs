// Rust guideline compliant 2026-10-16

//! Property-based tests for board mutations and persistence.
//!
//! These tests validate properties that hold for every sequence of
//! operations applied to a well-formed board.

use kanban_core::{BoardState, ColumnId, Direction, MemoryStore, StateStore};
use proptest::prelude::*;
use std::collections::HashSet;

/// A single mutation drawn by the generator.
#[derive(Debug, Clone)]
enum Op {
    Add(ColumnId),
    Remove(u64),
    Move(u64, Direction),
    Rename(u64, String),
    Colorize(ColumnId),
    Sort(ColumnId),
}

fn arb_column() -> impl Strategy<Value = ColumnId> {
    prop_oneof![
        Just(ColumnId::Todo),
        Just(ColumnId::Doing),
        Just(ColumnId::Done),
    ]
}

fn arb_direction() -> impl Strategy<Value = Direction> {
    prop_oneof![Just(Direction::Left), Just(Direction::Right)]
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => arb_column().prop_map(Op::Add),
        1 => (1u64..40).prop_map(Op::Remove),
        2 => (1u64..40, arb_direction()).prop_map(|(id, dir)| Op::Move(id, dir)),
        1 => (1u64..40, "[ a-zA-Ząęłóśżź]{0,12}").prop_map(|(id, title)| Op::Rename(id, title)),
        1 => arb_column().prop_map(Op::Colorize),
        1 => arb_column().prop_map(Op::Sort),
    ]
}

/// Applies `ops` to a fresh board, returning the board plus add/remove counts.
fn apply(ops: &[Op]) -> (BoardState, usize, usize) {
    let mut board = BoardState::default();
    let (mut adds, mut removes) = (0, 0);
    for (step, op) in ops.iter().enumerate() {
        match op {
            Op::Add(column) => {
                board.add_card(*column, "Nowa karta".into(), "hsl(0deg 80% 90%)".into(), step as i64);
                adds += 1;
            }
            Op::Remove(id) => {
                if board.remove_card(*id).is_some() {
                    removes += 1;
                }
            }
            Op::Move(id, dir) => {
                board.move_card(*id, *dir);
            }
            Op::Rename(id, title) => {
                board.rename_card(*id, title);
            }
            Op::Colorize(column) => {
                board.colorize_column(*column, || format!("hsl({step}deg 80% 90%)"));
            }
            Op::Sort(column) => board.sort_column(*column),
        }
    }
    (board, adds, removes)
}

fn all_ids(board: &BoardState) -> Vec<u64> {
    board
        .columns
        .iter()
        .flat_map(|(_, cards)| cards.iter().map(|card| card.id))
        .collect()
}

proptest! {
    /// Card ids are unique across the board after any operation sequence.
    #[test]
    fn test_ids_unique(ops in prop::collection::vec(arb_op(), 0..60)) {
        let (board, _, _) = apply(&ops);
        let ids = all_ids(&board);
        let unique: HashSet<u64> = ids.iter().copied().collect();
        prop_assert_eq!(ids.len(), unique.len());
        prop_assert!(board.violations().is_empty());
    }

    /// `nextId` equals one plus the number of adds, whatever else happened.
    #[test]
    fn test_next_id_monotonic(ops in prop::collection::vec(arb_op(), 0..60)) {
        let (board, adds, _) = apply(&ops);
        prop_assert_eq!(board.next_id, 1 + adds as u64);
        prop_assert!(all_ids(&board).iter().all(|id| *id < board.next_id));
    }

    /// Total card count equals adds minus successful removes.
    #[test]
    fn test_conservation(ops in prop::collection::vec(arb_op(), 0..60)) {
        let (board, adds, removes) = apply(&ops);
        prop_assert_eq!(board.card_count(), adds - removes);
    }

    /// Moving outward from a boundary column never changes the board.
    #[test]
    fn test_move_boundary(ops in prop::collection::vec(arb_op(), 0..40)) {
        let (mut board, _, _) = apply(&ops);
        let before = board.clone();
        let first: Vec<u64> = board.columns.todo.iter().map(|card| card.id).collect();
        let last: Vec<u64> = board.columns.done.iter().map(|card| card.id).collect();
        for id in first {
            prop_assert!(!board.move_card(id, Direction::Left));
        }
        for id in last {
            prop_assert!(!board.move_card(id, Direction::Right));
        }
        prop_assert_eq!(board, before);
    }

    /// Saving then loading reproduces the board exactly.
    #[test]
    fn test_round_trip(ops in prop::collection::vec(arb_op(), 0..40)) {
        let (board, _, _) = apply(&ops);
        let store = StateStore::new(MemoryStore::new());
        store.save(&board).expect("save");
        prop_assert_eq!(store.try_load().expect("load"), board);
    }

    /// Sorting only permutes a column and leaves it ordered.
    #[test]
    fn test_sort_is_permutation(titles in prop::collection::vec("[a-zA-Ząćęłńóśźż ]{0,8}", 0..20)) {
        let mut board = BoardState::default();
        for (i, title) in titles.iter().enumerate() {
            board.add_card(ColumnId::Doing, title.clone(), "c".into(), (titles.len() - i) as i64);
        }
        let mut before: Vec<u64> = board.columns.doing.iter().map(|card| card.id).collect();
        board.sort_column(ColumnId::Doing);
        let mut after: Vec<u64> = board.columns.doing.iter().map(|card| card.id).collect();

        for pair in board.columns.doing.windows(2) {
            prop_assert_ne!(
                kanban_core::collation::compare_cards(&pair[0], &pair[1]),
                std::cmp::Ordering::Greater
            );
        }
        before.sort_unstable();
        after.sort_unstable();
        prop_assert_eq!(before, after);
    }
}

#[test]
fn test_add_then_move_right_scenario() {
    let mut board = BoardState::default();
    let id = board.add_card(ColumnId::Todo, "Nowa karta".into(), "hsl(1deg 80% 90%)".into(), 1);
    assert!(board.move_card(id, Direction::Right));
    assert!(board.columns.todo.is_empty());
    assert_eq!(board.columns.doing.len(), 1);
    assert_eq!(board.columns.doing[0].id, id);
    assert!(board.columns.done.is_empty());
}
