use crate::types::{Rgb, TextStyle};

/// One terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub char: char,
    pub fg: Rgb,
    pub bg: Rgb,
    pub style: TextStyle,
    /// Right half of a wide character drawn in the cell to the left.
    pub wide_continuation: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self::blank(Rgb::BLACK)
    }
}

impl Cell {
    /// A space painted with `bg`.
    pub fn blank(bg: Rgb) -> Self {
        Self::styled(' ', Rgb::WHITE, bg, TextStyle::new())
    }

    pub fn styled(char: char, fg: Rgb, bg: Rgb, style: TextStyle) -> Self {
        Self {
            char,
            fg,
            bg,
            style,
            wide_continuation: false,
        }
    }

    /// Placeholder covering the right half of a wide character.
    pub fn continuation(fg: Rgb, bg: Rgb) -> Self {
        Self {
            wide_continuation: true,
            ..Self::styled(' ', fg, bg, TextStyle::new())
        }
    }
}
