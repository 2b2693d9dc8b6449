// Rust guideline compliant 2026-10-16

//! Timestamp helpers.

/// Returns the current Unix timestamp in milliseconds.
#[must_use]
pub fn unix_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
