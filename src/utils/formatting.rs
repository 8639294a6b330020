//! Formatting utilities used for CLI outputs.

use crate::models::event_kind::EventKind;
use crate::utils::colors::{GREEN, RED, RESET};
use unicode_width::UnicodeWidthStr;

/// Pad to a display width (wide glyphs and emoji count double).
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}

/// `Clock In` in green, `Clock Out` in red.
pub fn describe_kind(kind: EventKind) -> String {
    let color = if kind.is_in() { GREEN } else { RED };
    format!("{}{}{}", color, kind.describe(), RESET)
}

/// `7.0` → `"7.0h"`, as shown on day cards.
pub fn hours_short(h: f64) -> String {
    format!("{:.1}h", h)
}
