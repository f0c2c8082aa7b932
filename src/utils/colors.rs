//! Terminal styles for console output.

use ansi_term::{Colour, Style};

/// Light pink (xterm 217).
pub const PINK: Colour = Colour::Fixed(217);

/// Black text on a light pink background, used for listing headers.
pub fn banner() -> Style {
    Colour::Black.on(PINK)
}

pub fn paint_banner(text: &str) -> String {
    banner().paint(text).to_string()
}
