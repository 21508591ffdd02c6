use crate::value::ItemValue;

/// Input events routed to an accordion widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Key press, targeted at the focused header
    Key {
        target: Option<ItemValue>,
        key: Key,
        modifiers: Modifiers,
    },
    /// Mouse press, targeted at the header under the pointer
    Click {
        target: Option<ItemValue>,
        x: u16,
        y: u16,
        button: MouseButton,
    },
    /// Header gained focus
    Focus { target: ItemValue },
    /// Header lost focus
    Blur { target: ItemValue },
    /// Terminal resized
    Resize { width: u16, height: u16 },
}

/// Keys the widget and its host react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Tab,
    BackTab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Self = Self::flags(false, false, false);
    pub const SHIFT: Self = Self::flags(true, false, false);
    pub const CTRL: Self = Self::flags(false, true, false);
    pub const ALT: Self = Self::flags(false, false, true);

    const fn flags(shift: bool, ctrl: bool, alt: bool) -> Self {
        Self { shift, ctrl, alt }
    }

    pub fn new() -> Self {
        Self::NONE
    }

    /// Ctrl or Alt held. Such chords never activate a header.
    pub fn is_chord(&self) -> bool {
        self.ctrl || self.alt
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Whether the widget acted on an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Not for the widget; the host may use it.
    Ignored,
    Consumed,
}

impl EventResult {
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}

impl From<crossterm::event::KeyCode> for Key {
    fn from(code: crossterm::event::KeyCode) -> Self {
        use crossterm::event::KeyCode as Code;
        match code {
            Code::Char(c) => Key::Char(c),
            Code::Enter => Key::Enter,
            Code::Tab => Key::Tab,
            Code::BackTab => Key::BackTab,
            Code::Esc => Key::Escape,
            Code::Up => Key::Up,
            Code::Down => Key::Down,
            Code::Left => Key::Left,
            Code::Right => Key::Right,
            Code::Home => Key::Home,
            Code::End => Key::End,
            Code::PageUp => Key::PageUp,
            Code::PageDown => Key::PageDown,
            _ => Key::Other,
        }
    }
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers as Mods;
        Self::flags(
            mods.contains(Mods::SHIFT),
            mods.contains(Mods::CONTROL),
            mods.contains(Mods::ALT),
        )
    }
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(button: crossterm::event::MouseButton) -> Self {
        match button {
            crossterm::event::MouseButton::Left => MouseButton::Left,
            crossterm::event::MouseButton::Right => MouseButton::Right,
            crossterm::event::MouseButton::Middle => MouseButton::Middle,
        }
    }
}
