//! Header: the activatable control of an accordion item.

use crate::config::AccordionConfig;
use crate::event::{Key, Modifiers};

/// The ways a header can be activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Click,
    Enter,
    Space,
}

impl Activation {
    /// Map a key press to an activation. Enter and Space activate unless
    /// Ctrl or Alt is held; Shift is tolerated.
    pub fn from_key(key: Key, modifiers: Modifiers) -> Option<Self> {
        if modifiers.is_chord() {
            return None;
        }
        match key {
            Key::Enter => Some(Self::Enter),
            Key::Char(' ') => Some(Self::Space),
            _ => None,
        }
    }
}

/// Header label of an item.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Header {
    label: String,
}

impl Header {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Header line as drawn: direction indicator, a space, then the label.
    pub fn text(&self, open: bool, config: &AccordionConfig) -> String {
        format!("{} {}", config.indicator(open), self.label)
    }
}

impl From<&str> for Header {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for Header {
    fn from(label: String) -> Self {
        Self::new(label)
    }
}
