use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent},
    execute, queue,
    style::{Attribute, Color as CtColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal,
};

use crate::buffer::Buffer;
use crate::text::char_width;
use crate::types::{Rgb, TextStyle};

/// Raw-mode terminal with double-buffered, diffed output.
///
/// Entering raw mode, the alternate screen and mouse capture happens in
/// [`Terminal::new`]; all of it is undone on drop.
pub struct Terminal {
    stdout: io::Stdout,
    current_buffer: Buffer,
    previous_buffer: Buffer,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;

        let (width, height) = terminal::size()?;
        log::debug!("[terminal] entered raw mode at {width}x{height}");

        Ok(Self {
            stdout,
            current_buffer: Buffer::new(width, height),
            previous_buffer: Buffer::new(width, height),
        })
    }

    pub fn size(&self) -> (u16, u16) {
        (self.current_buffer.width(), self.current_buffer.height())
    }

    /// Wait for input. With a timeout, returns an empty list if nothing
    /// arrived; without one, blocks until at least one event is read.
    pub fn poll(&self, timeout: Option<Duration>) -> io::Result<Vec<CrosstermEvent>> {
        let mut events = Vec::new();

        if let Some(dur) = timeout
            && !event::poll(dur)?
        {
            return Ok(events);
        }
        events.push(event::read()?);

        // Drain anything else already queued
        while event::poll(Duration::ZERO)? {
            events.push(event::read()?);
        }
        Ok(events)
    }

    /// Draw a frame. `draw` fills a cleared buffer covering the whole screen;
    /// only cells that differ from the previous frame reach the terminal.
    pub fn draw(&mut self, draw: impl FnOnce(&mut Buffer)) -> io::Result<()> {
        let (width, height) = terminal::size()?;
        if width != self.current_buffer.width() || height != self.current_buffer.height() {
            log::debug!("[terminal] resized to {width}x{height}");
            self.current_buffer = Buffer::new(width, height);
            self.previous_buffer = Buffer::new(width, height);
            execute!(self.stdout, terminal::Clear(terminal::ClearType::All))?;
        }

        self.current_buffer.clear();
        draw(&mut self.current_buffer);
        self.flush_diff()?;
        std::mem::swap(&mut self.current_buffer, &mut self.previous_buffer);
        Ok(())
    }

    fn flush_diff(&mut self) -> io::Result<()> {
        // Cursor column expected after the last write, and the pen it used.
        let mut next_pos: Option<(u16, u16)> = None;
        let mut pen: Option<(Rgb, Rgb, TextStyle)> = None;

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;

        for (x, y, cell) in self.current_buffer.diff(&self.previous_buffer) {
            if cell.wide_continuation {
                continue;
            }
            if next_pos != Some((x, y)) {
                queue!(self.stdout, cursor::MoveTo(x, y))?;
            }

            match pen {
                Some((_, _, style)) if style == cell.style => {
                    if pen.map(|(fg, _, _)| fg) != Some(cell.fg) {
                        queue!(self.stdout, SetForegroundColor(to_crossterm(cell.fg)))?;
                    }
                    if pen.map(|(_, bg, _)| bg) != Some(cell.bg) {
                        queue!(self.stdout, SetBackgroundColor(to_crossterm(cell.bg)))?;
                    }
                }
                _ => apply_style(&mut self.stdout, cell.style, cell.fg, cell.bg)?,
            }
            pen = Some((cell.fg, cell.bg, cell.style));

            write!(self.stdout, "{}", cell.char)?;
            next_pos = Some((x + char_width(cell.char).max(1) as u16, y));
        }

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;
        self.stdout.flush()
    }
}

/// Attributes cannot be switched off one by one (bold and dim share a
/// reset), so every change starts from a clean slate.
fn apply_style(out: &mut impl Write, style: TextStyle, fg: Rgb, bg: Rgb) -> io::Result<()> {
    queue!(
        out,
        SetAttribute(Attribute::Reset),
        SetForegroundColor(to_crossterm(fg)),
        SetBackgroundColor(to_crossterm(bg))
    )?;
    if style.is_plain() {
        return Ok(());
    }
    let attributes = [
        (style.bold, Attribute::Bold),
        (style.dim, Attribute::Dim),
        (style.italic, Attribute::Italic),
    ];
    for (_, attribute) in attributes.into_iter().filter(|(on, _)| *on) {
        queue!(out, SetAttribute(attribute))?;
    }
    Ok(())
}

fn to_crossterm(rgb: Rgb) -> CtColor {
    CtColor::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
