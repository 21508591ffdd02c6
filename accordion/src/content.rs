//! Content: the region revealed when an item is open.

use crate::text::wrap_words;

/// How an item's content participates in layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentVisibility {
    /// Open: laid out and drawn.
    Visible,
    /// Closed, but kept in the layout with zero height.
    Hidden,
    /// Closed and absent from the layout.
    Unmounted,
}

impl ContentVisibility {
    pub fn is_visible(self) -> bool {
        self == Self::Visible
    }

    pub fn is_mounted(self) -> bool {
        self != Self::Unmounted
    }
}

/// Body text of an item.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Content {
    body: String,
}

impl Content {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Body wrapped to `width` columns.
    pub fn lines(&self, width: u16) -> Vec<String> {
        wrap_words(&self.body, width as usize)
    }

    /// Rows needed to show the whole body at `width` columns.
    pub fn height(&self, width: u16) -> u16 {
        u16::try_from(self.lines(width).len()).unwrap_or(u16::MAX)
    }
}

impl From<&str> for Content {
    fn from(body: &str) -> Self {
        Self::new(body)
    }
}

impl From<String> for Content {
    fn from(body: String) -> Self {
        Self::new(body)
    }
}
