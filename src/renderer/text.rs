//! Text Measurement
//!
//! Display-width measurement and truncation for card face text.
//!
//! Width is measured in terminal cells via `unicode-width`: ASCII is 1 cell,
//! CJK and most emoji are 2, combining marks are 0. Pixel hosts can treat the
//! cell count as a character budget.

use unicode_width::UnicodeWidthChar;

/// Measure the display width of a string in cells.
pub fn string_width(s: &str) -> u16 {
    s.chars()
        .map(|c| c.width().unwrap_or(0) as u16)
        .fold(0u16, u16::saturating_add)
}

/// Truncate text to a display width, appending an ellipsis when cut.
pub fn truncate_text(text: &str, width: u16) -> String {
    if width == 0 {
        return String::new();
    }

    if string_width(text) <= width {
        return text.to_string();
    }

    // Leave one cell for the ellipsis
    let target_width = width.saturating_sub(1);
    let mut result = String::new();
    let mut current_width = 0u16;

    for c in text.chars() {
        let char_width = c.width().unwrap_or(0) as u16;
        if current_width + char_width > target_width {
            break;
        }
        result.push(c);
        current_width += char_width;
    }

    result.push('…');
    result
}

// =============================================================================
// Tests
// =============================================================================
