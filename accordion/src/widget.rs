//! Interactive accordion: state, focus, layout and rendering together.
//!
//! [`AccordionWidget`] is the piece an event loop talks to. Raw crossterm
//! events go through [`AccordionWidget::process_events`] to become targeted
//! [`Event`]s, which [`AccordionWidget::handle`] turns into focus moves and
//! header activations.
//!
//! # Example
//!
//! ```ignore
//! let mut widget = AccordionWidget::new(accordion);
//! loop {
//!     term.draw(|buf| widget.render(buf.area(), buf))?;
//!     let raw = term.poll(None)?;
//!     for event in widget.process_events(&raw) {
//!         widget.handle(&event);
//!     }
//! }
//! ```

use crossterm::event::{Event as CrosstermEvent, KeyEventKind, MouseEventKind};
use log::debug;

use crate::buffer::Buffer;
use crate::container::{Accordion, Toggle};
use crate::event::{Event, EventResult, Key, Modifiers, MouseButton};
use crate::focus::FocusState;
use crate::header::Activation;
use crate::hit::hit_test;
use crate::layout::{layout, LayoutResult, Rect};
use crate::render::render_to_buffer;
use crate::types::Theme;
use crate::value::ItemValue;

#[derive(Debug)]
pub struct AccordionWidget {
    accordion: Accordion,
    focus: FocusState,
    layout: LayoutResult,
    theme: Theme,
}

impl AccordionWidget {
    pub fn new(accordion: Accordion) -> Self {
        Self {
            accordion,
            focus: FocusState::new(),
            layout: LayoutResult::new(),
            theme: Theme::default(),
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn accordion(&self) -> &Accordion {
        &self.accordion
    }

    pub fn accordion_mut(&mut self) -> &mut Accordion {
        &mut self.accordion
    }

    pub fn focused(&self) -> Option<&ItemValue> {
        self.focus.focused()
    }

    /// Layout from the last [`relayout`](Self::relayout) or [`render`](Self::render).
    pub fn layout(&self) -> &LayoutResult {
        &self.layout
    }

    pub fn relayout(&mut self, area: Rect) -> &LayoutResult {
        self.layout = layout(&self.accordion, area);
        &self.layout
    }

    /// Lay out into `area` and draw into `buf`.
    pub fn render(&mut self, area: Rect, buf: &mut Buffer) {
        self.focus.sanitize(&self.accordion);
        self.layout = layout(&self.accordion, area);
        render_to_buffer(
            &self.accordion,
            &self.layout,
            self.focus.focused(),
            &self.theme,
            buf,
        );
        self.accordion.clear_dirty();
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    /// Convert raw crossterm events into targeted events.
    ///
    /// Key presses carry no target: they go to whichever header holds focus
    /// when they are handled, so a Tab earlier in the same batch counts.
    /// Mouse presses target the header under the pointer according to the
    /// last layout. Releases, repeats, drags and moves are dropped.
    pub fn process_events(&self, raw: &[CrosstermEvent]) -> Vec<Event> {
        raw.iter()
            .filter_map(|raw_event| match raw_event {
                CrosstermEvent::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    Some(Event::Key {
                        target: None,
                        key: key_event.code.into(),
                        modifiers: key_event.modifiers.into(),
                    })
                }
                CrosstermEvent::Mouse(mouse) => match mouse.kind {
                    MouseEventKind::Down(button) => Some(Event::Click {
                        target: hit_test(&self.layout, &self.accordion, mouse.column, mouse.row),
                        x: mouse.column,
                        y: mouse.row,
                        button: button.into(),
                    }),
                    _ => None,
                },
                CrosstermEvent::Resize(width, height) => Some(Event::Resize {
                    width: *width,
                    height: *height,
                }),
                _ => None,
            })
            .collect()
    }

    /// Apply one event.
    pub fn handle(&mut self, event: &Event) -> EventResult {
        match event {
            Event::Key {
                target,
                key,
                modifiers,
            } => self.handle_key(target.as_ref(), *key, *modifiers),
            Event::Click {
                target: Some(value),
                button: MouseButton::Left,
                ..
            } => {
                if self
                    .accordion
                    .item(value)
                    .is_none_or(|item| item.is_disabled())
                {
                    return EventResult::Ignored;
                }
                self.focus.focus(&self.accordion, value);
                self.activate(value, Activation::Click);
                EventResult::Consumed
            }
            Event::Click { .. } => EventResult::Ignored,
            Event::Focus { target } => {
                if self.focus.focus(&self.accordion, target) {
                    EventResult::Consumed
                } else {
                    EventResult::Ignored
                }
            }
            Event::Blur { target } => {
                if self.focus.is_focused(target) && self.focus.blur() {
                    EventResult::Consumed
                } else {
                    EventResult::Ignored
                }
            }
            Event::Resize { .. } => EventResult::Ignored,
        }
    }

    fn handle_key(
        &mut self,
        target: Option<&ItemValue>,
        key: Key,
        modifiers: Modifiers,
    ) -> EventResult {
        if let Some(activation) = Activation::from_key(key, modifiers) {
            let Some(value) = target.or(self.focus.focused()).cloned() else {
                return EventResult::Ignored;
            };
            return match self.activate(&value, activation) {
                Toggle::Unknown | Toggle::Disabled => EventResult::Ignored,
                _ => EventResult::Consumed,
            };
        }

        if modifiers.is_chord() {
            return EventResult::Ignored;
        }

        let moved = match key {
            Key::Tab if modifiers.shift => self.focus.focus_prev(&self.accordion),
            Key::Tab | Key::Down => self.focus.focus_next(&self.accordion),
            Key::BackTab | Key::Up => self.focus.focus_prev(&self.accordion),
            Key::Home => self.focus.focus_first(&self.accordion),
            Key::End => self.focus.focus_last(&self.accordion),
            _ => return EventResult::Ignored,
        };

        if moved.is_some() {
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }

    /// Activate the header of `value`, as a click or key press would.
    pub fn activate(&mut self, value: &ItemValue, activation: Activation) -> Toggle {
        let outcome = self.accordion.toggle(value);
        debug!("[widget] {activation:?} on {value}: {outcome:?}");
        outcome
    }
}
