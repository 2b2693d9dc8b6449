// Rust guideline compliant 2026-10-16

//! Pastel color tokens for card backgrounds.

/// Saturation of every generated pastel, in percent.
pub const SATURATION: u8 = 80;

/// Lightness of every generated pastel, in percent.
pub const LIGHTNESS: u8 = 90;

/// Formats the CSS token for a pastel of the given hue.
///
/// Hues wrap around the color circle, so `360` is the same as `0`.
#[must_use]
pub fn pastel(hue: u16) -> String {
    format!("hsl({}deg {}% {}%)", hue % 360, SATURATION, LIGHTNESS)
}

/// Returns a pastel with a hue drawn uniformly from `0..360`.
#[must_use]
pub fn random_pastel() -> String {
    let hue = (rand::random::<f64>() * 360.0).floor() as u16;
    pastel(hue)
}
