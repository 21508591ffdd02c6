use crate::container::Accordion;
use crate::value::ItemValue;

/// Tracks which header currently has keyboard focus.
///
/// Only enabled headers take part in the focus order; disabled ones are
/// skipped by every navigation method and refused by [`focus`](Self::focus).
#[derive(Debug, Default)]
pub struct FocusState {
    focused: Option<ItemValue>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently focused header's item value.
    pub fn focused(&self) -> Option<&ItemValue> {
        self.focused.as_ref()
    }

    pub fn is_focused(&self, value: &ItemValue) -> bool {
        self.focused.as_ref() == Some(value)
    }

    /// Focus a header by item value.
    /// Returns true if focus changed. Disabled or unknown items are refused.
    pub fn focus(&mut self, accordion: &Accordion, value: &ItemValue) -> bool {
        let focusable = accordion
            .item(value)
            .is_some_and(|item| !item.is_disabled());
        if !focusable || self.is_focused(value) {
            return false;
        }
        self.focused = Some(value.clone());
        true
    }

    /// Clear focus.
    /// Returns true if there was something focused.
    pub fn blur(&mut self) -> bool {
        self.focused.take().is_some()
    }

    /// Focus the next enabled header, wrapping at the end (Tab, Down).
    /// Returns the newly focused value if focus changed.
    pub fn focus_next(&mut self, accordion: &Accordion) -> Option<ItemValue> {
        let focusable = collect_focusable(accordion);
        let next = match self.position_in(&focusable) {
            Some(i) => focusable.get((i + 1) % focusable.len()),
            None => focusable.first(),
        };
        self.move_to(next.cloned())
    }

    /// Focus the previous enabled header, wrapping at the start (Shift+Tab, Up).
    /// Returns the newly focused value if focus changed.
    pub fn focus_prev(&mut self, accordion: &Accordion) -> Option<ItemValue> {
        let focusable = collect_focusable(accordion);
        let prev = match self.position_in(&focusable) {
            Some(0) | None => focusable.last(),
            Some(i) => focusable.get(i - 1),
        };
        self.move_to(prev.cloned())
    }

    /// Focus the first enabled header (Home).
    pub fn focus_first(&mut self, accordion: &Accordion) -> Option<ItemValue> {
        let first = collect_focusable(accordion).into_iter().next();
        self.move_to(first)
    }

    /// Focus the last enabled header (End).
    pub fn focus_last(&mut self, accordion: &Accordion) -> Option<ItemValue> {
        let last = collect_focusable(accordion).pop();
        self.move_to(last)
    }

    /// Drop focus if the focused item no longer exists or became disabled.
    /// Returns the value that lost focus.
    pub fn sanitize(&mut self, accordion: &Accordion) -> Option<ItemValue> {
        let stale = self
            .focused
            .as_ref()
            .is_some_and(|v| accordion.item(v).is_none_or(|item| item.is_disabled()));
        if stale { self.focused.take() } else { None }
    }

    fn position_in(&self, focusable: &[ItemValue]) -> Option<usize> {
        let current = self.focused.as_ref()?;
        focusable.iter().position(|v| v == current)
    }

    fn move_to(&mut self, target: Option<ItemValue>) -> Option<ItemValue> {
        let target = target?;
        if self.focused.as_ref() == Some(&target) {
            return None;
        }
        log::debug!("[focus] {:?} -> {}", self.focused, target);
        self.focused = Some(target.clone());
        Some(target)
    }
}

/// Collect the values of all focusable headers in declaration order.
pub fn collect_focusable(accordion: &Accordion) -> Vec<ItemValue> {
    accordion.enabled_values().cloned().collect()
}
