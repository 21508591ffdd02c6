use super::Color;

/// Colours used to draw an accordion.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub header: Color,
    pub header_focused: Color,
    pub header_text: Color,
    pub header_text_disabled: Color,
    pub indicator: Color,
    pub content: Color,
    pub content_text: Color,
}

impl Theme {
    pub const fn new() -> Self {
        Self {
            background: Color::oklch(0.08, 0.0, 0.0),
            header: Color::oklch(0.22, 0.03, 250.0),
            header_focused: Color::oklch(0.35, 0.08, 250.0),
            header_text: Color::oklch(0.95, 0.02, 250.0),
            header_text_disabled: Color::oklch(0.55, 0.02, 250.0),
            indicator: Color::oklch(0.75, 0.12, 250.0),
            content: Color::oklch(0.14, 0.01, 250.0),
            content_text: Color::oklch(0.85, 0.01, 250.0),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}
