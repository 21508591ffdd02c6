//! Accordion configuration types.

/// How many items may be open at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// At most one item is open. Opening an item closes the previous one.
    Single,
    /// Every item opens and closes independently.
    #[default]
    Multiple,
}

/// What happens to the content of a closed item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentMode {
    /// Closed content is left out of the layout entirely.
    #[default]
    Unmount,
    /// Closed content stays in the layout with zero height.
    Hidden,
}

/// Per-accordion configuration.
#[derive(Debug, Clone)]
pub struct AccordionConfig {
    /// Display name, used in log output.
    pub name: &'static str,

    /// Single or multiple open items.
    pub mode: SelectionMode,

    /// In single mode, whether the open item can be closed by activating it
    /// again. Ignored in multiple mode.
    pub collapsible: bool,

    /// Rendering of closed content.
    pub content_mode: ContentMode,

    /// Indicator shown on the header of an open item.
    pub open_indicator: char,

    /// Indicator shown on the header of a closed item.
    pub closed_indicator: char,
}

impl Default for AccordionConfig {
    fn default() -> Self {
        Self {
            name: "Accordion",
            mode: SelectionMode::Multiple,
            collapsible: true,
            content_mode: ContentMode::Unmount,
            open_indicator: '▲',
            closed_indicator: '▼',
        }
    }
}

impl AccordionConfig {
    /// Create a new config with the given name.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            ..Default::default()
        }
    }

    /// Allow only one open item at a time.
    pub fn single(mut self) -> Self {
        self.mode = SelectionMode::Single;
        self
    }

    /// Allow any number of open items.
    pub fn multiple(mut self) -> Self {
        self.mode = SelectionMode::Multiple;
        self
    }

    pub fn mode(mut self, mode: SelectionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn collapsible(mut self, collapsible: bool) -> Self {
        self.collapsible = collapsible;
        self
    }

    pub fn content_mode(mut self, content_mode: ContentMode) -> Self {
        self.content_mode = content_mode;
        self
    }

    /// Set the open and closed indicator characters.
    pub fn indicators(mut self, open: char, closed: char) -> Self {
        self.open_indicator = open;
        self.closed_indicator = closed;
        self
    }

    /// Indicator for the given open state.
    pub fn indicator(&self, open: bool) -> char {
        if open {
            self.open_indicator
        } else {
            self.closed_indicator
        }
    }
}
