use log::trace;

use crate::buffer::{Buffer, Cell};
use crate::container::Accordion;
use crate::item::Item;
use crate::layout::{LayoutResult, Rect, CONTENT_INDENT};
use crate::text::{char_width, truncate_to_width};
use crate::types::{Rgb, TextStyle, Theme};
use crate::value::ItemValue;

/// Draw `accordion` into `buf` using a layout from [`crate::layout::layout`].
///
/// `focused` is the item whose header has keyboard focus, if any.
pub fn render_to_buffer(
    accordion: &Accordion,
    layout: &LayoutResult,
    focused: Option<&ItemValue>,
    theme: &Theme,
    buf: &mut Buffer,
) {
    for item in accordion.items() {
        let open = accordion.is_open(item.value());
        let is_focused = focused == Some(item.value());

        if let Some(rect) = layout.get(&item.header_id()) {
            render_header(accordion, item, open, is_focused, *rect, theme, buf);
        }
        if open && let Some(rect) = layout.get(&item.content_id()) {
            render_content(item, *rect, theme, buf);
        }
    }
    trace!("[render] {} items into {}x{}", accordion.len(), buf.width(), buf.height());
}

fn render_header(
    accordion: &Accordion,
    item: &Item,
    open: bool,
    focused: bool,
    rect: Rect,
    theme: &Theme,
    buf: &mut Buffer,
) {
    let bg = if focused {
        theme.header_focused.to_rgb()
    } else {
        theme.header.to_rgb()
    };
    fill_rect(buf, rect, bg);

    let (fg, style) = if item.is_disabled() {
        (theme.header_text_disabled.to_rgb(), TextStyle::new().dim())
    } else if open {
        (theme.header_text.to_rgb(), TextStyle::new().bold())
    } else {
        (theme.header_text.to_rgb(), TextStyle::new())
    };

    let text = item.header().text(open, accordion.config());
    let end = draw_text(buf, rect, &text, fg, bg, style);

    // Re-colour the indicator glyph, which always comes first.
    if end > rect.x
        && !item.is_disabled()
        && let Some(cell) = buf.get_mut(rect.x, rect.y)
    {
        cell.fg = theme.indicator.to_rgb();
    }
}

fn render_content(item: &Item, rect: Rect, theme: &Theme, buf: &mut Buffer) {
    let bg = theme.content.to_rgb();
    let fg = theme.content_text.to_rgb();
    fill_rect(buf, rect, bg);

    let text_area = rect.inset(0, CONTENT_INDENT);
    for (row, line) in item
        .content()
        .lines(text_area.width)
        .iter()
        .take(text_area.height as usize)
        .enumerate()
    {
        let line_rect = Rect::new(text_area.x, text_area.y + row as u16, text_area.width, 1);
        draw_text(buf, line_rect, line, fg, bg, TextStyle::new());
    }
}

/// Paint `rect` blank with background `bg`.
pub fn fill_rect(buf: &mut Buffer, rect: Rect, bg: Rgb) {
    for y in rect.y..rect.bottom().min(buf.height()) {
        for x in rect.x..rect.right().min(buf.width()) {
            if let Some(cell) = buf.get_mut(x, y) {
                *cell = Cell::blank(bg);
            }
        }
    }
}

/// Write `text` on the first row of `rect`, truncated to fit.
/// Returns the column after the last written cell.
pub fn draw_text(
    buf: &mut Buffer,
    rect: Rect,
    text: &str,
    fg: Rgb,
    bg: Rgb,
    style: TextStyle,
) -> u16 {
    if rect.is_empty() {
        return rect.x;
    }
    let text = truncate_to_width(text, rect.width as usize);
    let mut x = rect.x;

    for ch in text.chars() {
        let width = char_width(ch) as u16;
        if width == 0 {
            continue;
        }
        if x + width > rect.right() {
            break;
        }
        buf.set(x, rect.y, Cell::styled(ch, fg, bg, style));
        if width == 2 {
            buf.set(x + 1, rect.y, Cell::continuation(fg, bg));
        }
        x += width;
    }
    x
}
