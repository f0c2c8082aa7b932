//! Formatting utilities used for CLI outputs.

use unicode_width::UnicodeWidthChar;

/// Left-justify `s` in exactly `width` terminal columns.
///
/// Longer values are cut at the last character that still fits; shorter
/// values are padded with spaces. Width is measured in display columns, so
/// wide (CJK, emoji) characters count double.
pub fn fit(s: &str, width: usize) -> String {
    let mut out = String::with_capacity(width);
    let mut used = 0;

    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(ch);
        used += w;
    }

    out.push_str(&" ".repeat(width - used));
    out
}
