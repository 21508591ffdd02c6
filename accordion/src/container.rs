//! Accordion container: owner of the open set.
//!
//! The container holds the authoritative [`OpenSet`] and is the only place it
//! changes. Headers request changes through [`Accordion::toggle`]; items and
//! contents read it back through [`Accordion::is_open`] and friends.
//!
//! # Controlled and uncontrolled
//!
//! An accordion built with [`AccordionBuilder::default_value`] is
//! *uncontrolled*: a toggle mutates the open set, then the change callback is
//! told about the new value.
//!
//! An accordion built with [`AccordionBuilder::value`] is *controlled*: a
//! toggle only reports the value it *would* produce. The owner decides
//! whether to accept it and pushes it back with [`Accordion::set_value`].
//!
//! # Example
//!
//! ```ignore
//! let accordion = Accordion::builder()
//!     .item(Item::new("a", "First", "First body"))
//!     .item(Item::new("b", "Second", "Second body"))
//!     .default_value(["a"])
//!     .on_value_change(|open| log::info!("open: {open:?}"))
//!     .build()?;
//! ```

use std::collections::HashSet;
use std::fmt;

use log::{debug, warn};

use crate::config::{AccordionConfig, ContentMode, SelectionMode};
use crate::content::ContentVisibility;
use crate::error::AccordionError;
use crate::item::{Item, ItemState};
use crate::open_set::OpenSet;
use crate::value::ItemValue;

/// Observer invoked with the full, ordered open value after every toggle.
pub type ValueChangeCallback = Box<dyn FnMut(&[ItemValue])>;

/// Outcome of a toggle request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    /// The item went (or, when controlled, was requested to go) from closed to open.
    Opened,
    /// The item went (or was requested to go) from open to closed.
    Closed,
    /// Single non-collapsible mode: the open item stays open.
    Unchanged,
    /// The item is disabled; nothing happened.
    Disabled,
    /// No item has this value; nothing happened.
    Unknown,
}

impl Toggle {
    /// True if the toggle produced a new value.
    pub fn is_change(self) -> bool {
        matches!(self, Self::Opened | Self::Closed)
    }
}

/// The accordion container.
pub struct Accordion {
    config: AccordionConfig,
    items: Vec<Item>,
    open: OpenSet,
    controlled: bool,
    on_value_change: Option<ValueChangeCallback>,
    dirty: bool,
}

impl fmt::Debug for Accordion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accordion")
            .field("config", &self.config)
            .field("items", &self.items)
            .field("open", &self.open)
            .field("controlled", &self.controlled)
            .field("on_value_change", &self.on_value_change.is_some())
            .field("dirty", &self.dirty)
            .finish()
    }
}

impl Accordion {
    pub fn builder() -> AccordionBuilder {
        AccordionBuilder::new()
    }

    pub fn config(&self) -> &AccordionConfig {
        &self.config
    }

    pub fn is_controlled(&self) -> bool {
        self.controlled
    }

    // -------------------------------------------------------------------------
    // Items
    // -------------------------------------------------------------------------

    /// Items in declaration order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item(&self, value: &ItemValue) -> Option<&Item> {
        self.items.iter().find(|item| item.value() == value)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Values of items that can be focused and activated, in declaration order.
    pub fn enabled_values(&self) -> impl Iterator<Item = &ItemValue> {
        self.items
            .iter()
            .filter(|item| !item.is_disabled())
            .map(Item::value)
    }

    // -------------------------------------------------------------------------
    // Open state
    // -------------------------------------------------------------------------

    pub fn open_set(&self) -> &OpenSet {
        &self.open
    }

    /// Open values in the order they were opened.
    pub fn value(&self) -> Vec<ItemValue> {
        self.open.to_vec()
    }

    pub fn is_open(&self, value: &ItemValue) -> bool {
        self.open.contains(value)
    }

    pub fn state(&self, value: &ItemValue) -> ItemState {
        self.is_open(value).into()
    }

    /// How the content of `value` takes part in layout.
    pub fn content_visibility(&self, value: &ItemValue) -> ContentVisibility {
        if self.is_open(value) {
            ContentVisibility::Visible
        } else {
            match self.config.content_mode {
                ContentMode::Hidden => ContentVisibility::Hidden,
                ContentMode::Unmount => ContentVisibility::Unmounted,
            }
        }
    }

    /// Toggle the item with the given value.
    ///
    /// Disabled and unknown items are left alone. Otherwise the next value is
    /// computed (closing other items in single mode), applied unless the
    /// accordion is controlled, and passed to the change callback.
    pub fn toggle(&mut self, value: &ItemValue) -> Toggle {
        let Some(item) = self.item(value) else {
            warn!("[{}] toggle of unknown item {value}", self.config.name);
            return Toggle::Unknown;
        };
        if item.is_disabled() {
            debug!("[{}] ignoring toggle of disabled item {value}", self.config.name);
            return Toggle::Disabled;
        }

        let was_open = self.open.contains(value);
        if was_open && self.config.mode == SelectionMode::Single && !self.config.collapsible {
            return Toggle::Unchanged;
        }

        let mut next = self.open.clone();
        if was_open {
            next.remove(value);
        } else {
            if self.config.mode == SelectionMode::Single {
                // Disabled items keep their state.
                next.retain(|v| self.item(v).is_some_and(Item::is_disabled));
            }
            next.insert(value.clone());
        }

        let outcome = if was_open {
            Toggle::Closed
        } else {
            Toggle::Opened
        };
        debug!(
            "[{}] {value} {:?} -> {:?}{}",
            self.config.name,
            outcome,
            next.to_vec(),
            if self.controlled { " (requested)" } else { "" }
        );

        let reported = next.to_vec();
        if !self.controlled {
            self.open = next;
            self.dirty = true;
        }
        if let Some(callback) = self.on_value_change.as_mut() {
            callback(&reported);
        }
        outcome
    }

    /// Replace the open value.
    ///
    /// This is how a controlled owner pushes the value it accepted. It works
    /// on uncontrolled accordions as a programmatic reset. The change callback
    /// is not invoked.
    pub fn set_value<I, V>(&mut self, values: I) -> Result<(), AccordionError>
    where
        I: IntoIterator<Item = V>,
        V: Into<ItemValue>,
    {
        let next = OpenSet::from_values(values);
        check_mode(&self.config, &self.items, &next)?;
        if !next.same_order(&self.open) {
            self.open = next;
            self.dirty = true;
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the open value changed since the last [`clear_dirty`](Self::clear_dirty).
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }
}

/// Single mode allows one open value besides disabled items, which are
/// pinned in whatever state they start in.
fn check_mode(
    config: &AccordionConfig,
    items: &[Item],
    open: &OpenSet,
) -> Result<(), AccordionError> {
    if config.mode == SelectionMode::Multiple {
        return Ok(());
    }
    let pinned = |value: &ItemValue| {
        items
            .iter()
            .any(|item| item.value() == value && item.is_disabled())
    };
    let count = open.iter().filter(|value| !pinned(value)).count();
    if count > 1 {
        return Err(AccordionError::MultipleValuesInSingleMode(count));
    }
    Ok(())
}

/// Builder for [`Accordion`].
#[derive(Default)]
pub struct AccordionBuilder {
    config: AccordionConfig,
    items: Vec<Item>,
    default_value: Vec<ItemValue>,
    value: Option<Vec<ItemValue>>,
    on_value_change: Option<ValueChangeCallback>,
}

impl AccordionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: AccordionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    pub fn items(mut self, items: impl IntoIterator<Item = Item>) -> Self {
        self.items.extend(items);
        self
    }

    /// Values open when the accordion is built. Uncontrolled only; ignored
    /// when [`value`](Self::value) is also set.
    pub fn default_value<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<ItemValue>,
    {
        self.default_value = values.into_iter().map(Into::into).collect();
        self
    }

    /// Make the accordion controlled, starting from `values`.
    pub fn value<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<ItemValue>,
    {
        self.value = Some(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn on_value_change(mut self, callback: impl FnMut(&[ItemValue]) + 'static) -> Self {
        self.on_value_change = Some(Box::new(callback));
        self
    }

    pub fn build(self) -> Result<Accordion, AccordionError> {
        let mut seen = HashSet::new();
        for item in &self.items {
            if !seen.insert(item.value()) {
                return Err(AccordionError::DuplicateItem(item.value().clone()));
            }
        }
        if let Some(first) = self.items.first()
            && let Some(odd) = self
                .items
                .iter()
                .find(|item| item.value().is_number() != first.value().is_number())
        {
            return Err(AccordionError::MixedValueKinds(odd.value().clone()));
        }

        let controlled = self.value.is_some();
        let open = OpenSet::from_values(self.value.unwrap_or(self.default_value));
        check_mode(&self.config, &self.items, &open)?;

        debug!(
            "[{}] built with {} items, open {:?}, controlled={controlled}",
            self.config.name,
            self.items.len(),
            open.to_vec()
        );

        Ok(Accordion {
            config: self.config,
            items: self.items,
            open,
            controlled,
            on_value_change: self.on_value_change,
            dirty: true,
        })
    }
}
