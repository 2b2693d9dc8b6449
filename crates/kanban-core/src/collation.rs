// Rust guideline compliant 2026-10-16

//! Polish title collation at base strength.
//!
//! Case and most diacritics are ignored. The Polish letters `ą ć ę ł ń ó ś ź ż`
//! are distinct letters of the alphabet, each sorting right after its base
//! letter (and `ż` after `ź`), so they keep their own primary weight.
//!
//! Characters fall into groups ordered whitespace, punctuation, symbols,
//! digits, letters. Titles starting with `~` or `{` therefore sort before
//! titles starting with a letter.

use crate::models::Card;
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// ASCII punctuation in root collation order.
const PUNCTUATION: &str = "_-,;:!?.'\"()[]{}@*/\\&#%";

/// ASCII symbols in root collation order.
const SYMBOLS: &str = "`^+<=>|~$";

/// Primary character groups, in sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Group {
    /// Spaces, tabs and line breaks.
    Whitespace,
    /// ASCII punctuation.
    Punctuation,
    /// ASCII symbols, then every other non-alphanumeric character.
    Symbol,
    /// Numeric characters.
    Digit,
    /// Letters of any script.
    Letter,
}

/// Primary weight of one character: its group, its position within the
/// group, and its Polish rank after the base letter.
pub type Weight = (Group, u32, u8);

fn polish_letter(c: char) -> Option<Weight> {
    let (base, rank) = match c {
        'ą' => ('a', 1),
        'ć' => ('c', 1),
        'ę' => ('e', 1),
        'ł' => ('l', 1),
        'ń' => ('n', 1),
        'ó' => ('o', 1),
        'ś' => ('s', 1),
        'ź' => ('z', 1),
        'ż' => ('z', 2),
        _ => return None,
    };
    Some((Group::Letter, u32::from(base), rank))
}

fn weight(c: char) -> Weight {
    if c.is_whitespace() {
        return (Group::Whitespace, u32::from(c), 0);
    }
    if c.is_numeric() {
        return (Group::Digit, u32::from(c), 0);
    }
    if c.is_alphabetic() {
        return (Group::Letter, u32::from(c), 0);
    }
    if let Some(pos) = PUNCTUATION.find(c) {
        return (Group::Punctuation, pos as u32, 0);
    }
    match SYMBOLS.find(c) {
        Some(pos) => (Group::Symbol, pos as u32, 0),
        None => (Group::Symbol, SYMBOLS.len() as u32 + u32::from(c), 0),
    }
}

/// Builds the comparison key for `text`.
///
/// Two titles compare equal exactly when their keys are equal.
#[must_use]
pub fn collation_key(text: &str) -> Vec<Weight> {
    let mut key = Vec::with_capacity(text.len());
    for c in text.nfc().flat_map(char::to_lowercase) {
        if let Some(letter) = polish_letter(c) {
            key.push(letter);
            continue;
        }
        key.extend(
            std::iter::once(c)
                .nfd()
                .filter(|d| !is_combining_mark(*d))
                .map(weight),
        );
    }
    key
}

/// Compares two titles at base strength.
#[must_use]
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    collation_key(a).cmp(&collation_key(b))
}

/// Column sort order: collated title, then creation time ascending.
#[must_use]
pub fn compare_cards(a: &Card, b: &Card) -> Ordering {
    compare_titles(&a.title, &b.title).then(a.created_at.cmp(&b.created_at))
}
