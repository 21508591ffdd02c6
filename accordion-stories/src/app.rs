//! Catalog event loop and chrome.

use std::cell::RefCell;
use std::rc::Rc;

use accordion::render::{draw_text, fill_rect};
use accordion::{AccordionWidget, Buffer, Event, Key, Rect, Terminal, TextStyle, Theme};
use log::{debug, info};

use crate::error::StoryError;
use crate::stories::{Story, ValueLog};

const HELP: &str = "Tab/↑↓ move · Enter/Space/click toggle · ←/→ or 1-9 story · q quit";

/// Rows above the accordion: title, description, blank.
const TOP_ROWS: u16 = 3;
/// Rows below the accordion: status, help.
const BOTTOM_ROWS: u16 = 2;

enum Flow {
    Continue,
    Quit,
}

pub struct Catalog {
    stories: Vec<Story>,
    index: usize,
    widget: AccordionWidget,
    value_log: ValueLog,
    theme: Theme,
}

impl Catalog {
    pub fn new(stories: Vec<Story>) -> Result<Self, StoryError> {
        let first = stories.first().ok_or(StoryError::NoStories)?;
        let theme = Theme::default();
        let (widget, value_log) = open_story(first, &theme)?;
        Ok(Self {
            stories,
            index: 0,
            widget,
            value_log,
            theme,
        })
    }

    pub fn run(&mut self) -> Result<(), StoryError> {
        let mut term = Terminal::new()?;
        info!("catalog started with {} stories", self.stories.len());

        loop {
            term.draw(|buf| self.draw(buf))?;

            let raw = term.poll(None)?;
            for event in self.widget.process_events(&raw) {
                if let Flow::Quit = self.handle(&event)? {
                    info!("catalog closed");
                    return Ok(());
                }
            }
        }
    }

    fn select(&mut self, index: usize) -> Result<(), StoryError> {
        let Some(story) = self.stories.get(index) else {
            return Ok(());
        };
        debug!("selecting story {index}: {}", story.name);
        let (widget, value_log) = open_story(story, &self.theme)?;
        self.widget = widget;
        self.value_log = value_log;
        self.index = index;
        Ok(())
    }

    fn handle(&mut self, event: &Event) -> Result<Flow, StoryError> {
        if self.widget.handle(event).is_handled() {
            self.apply_owner()?;
            return Ok(Flow::Continue);
        }

        let Event::Key { key, modifiers, .. } = event else {
            return Ok(Flow::Continue);
        };

        let count = self.stories.len();
        match (*key, *modifiers) {
            (Key::Char('q') | Key::Escape, _) => return Ok(Flow::Quit),
            (Key::Char('c'), m) if m.ctrl => return Ok(Flow::Quit),
            (Key::Right | Key::PageDown, _) => self.select((self.index + 1) % count)?,
            (Key::Left | Key::PageUp, _) => self.select((self.index + count - 1) % count)?,
            (Key::Char(c), _) => {
                if let Some(n) = c.to_digit(10).filter(|&n| n >= 1) {
                    self.select(n as usize - 1)?;
                }
            }
            _ => {}
        }
        Ok(Flow::Continue)
    }

    /// In controlled stories, hand the requested value to the owner and push
    /// back whatever it accepts.
    fn apply_owner(&mut self) -> Result<(), StoryError> {
        let Some(owner) = self.stories[self.index].owner else {
            return Ok(());
        };
        if !self.widget.accordion().is_controlled() {
            return Ok(());
        }

        let requested = self.value_log.borrow().clone();
        match owner(&requested) {
            Some(accepted) => self.widget.accordion_mut().set_value(accepted)?,
            None => debug!("owner rejected {requested:?}"),
        }
        *self.value_log.borrow_mut() = self.widget.accordion().value();
        Ok(())
    }

    fn draw(&mut self, buf: &mut Buffer) {
        let area = buf.area();
        fill_rect(buf, area, self.theme.background.to_rgb());
        if area.height <= TOP_ROWS + BOTTOM_ROWS || area.width < 4 {
            return;
        }

        let story = &self.stories[self.index];
        let bg = self.theme.background.to_rgb();
        let fg = self.theme.header_text.to_rgb();
        let muted = self.theme.header_text_disabled.to_rgb();
        let inner_width = area.width - 2;

        let title = format!(
            "Accordion stories · {}/{} · {}",
            self.index + 1,
            self.stories.len(),
            story.name
        );
        draw_text(buf, Rect::new(1, 0, inner_width, 1), &title, fg, bg, TextStyle::new().bold());
        draw_text(
            buf,
            Rect::new(1, 1, inner_width, 1),
            story.description,
            muted,
            bg,
            TextStyle::new().italic(),
        );

        let body_height = area.height - TOP_ROWS - BOTTOM_ROWS;
        self.widget
            .render(Rect::new(1, TOP_ROWS, inner_width, body_height), buf);

        let open = self
            .value_log
            .borrow()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        let status_row = area.height - BOTTOM_ROWS;
        draw_text(
            buf,
            Rect::new(1, status_row, inner_width, 1),
            &format!("Open items: {open}"),
            fg,
            bg,
            TextStyle::new(),
        );
        draw_text(
            buf,
            Rect::new(1, status_row + 1, inner_width, 1),
            HELP,
            muted,
            bg,
            TextStyle::new().dim(),
        );
    }
}

/// Build a story's accordion with a fresh value log seeded from its initial value.
fn open_story(story: &Story, theme: &Theme) -> Result<(AccordionWidget, ValueLog), StoryError> {
    let value_log: ValueLog = Rc::new(RefCell::new(Vec::new()));
    let accordion = story.build(&value_log)?;
    *value_log.borrow_mut() = accordion.value();
    Ok((AccordionWidget::new(accordion).with_theme(theme.clone()), value_log))
}
