//! Vertical layout of an accordion.
//!
//! Items stack top to bottom in declaration order. Each header takes one
//! row. Open content follows its header, indented by [`CONTENT_INDENT`]
//! columns, taking as many rows as its wrapped body needs. Hidden content is
//! recorded with zero height; unmounted content is not recorded at all.
//! Anything that starts below the available area gets no rect.

mod rect;

use std::collections::HashMap;

pub use rect::Rect;

use crate::container::Accordion;
use crate::content::ContentVisibility;

/// Element id to rect.
pub type LayoutResult = HashMap<String, Rect>;

/// Id of the rect covering the whole accordion.
pub const ROOT_ID: &str = "accordion";

/// Header height in rows (always 1)
pub const HEADER_HEIGHT: u16 = 1;

/// Columns between the left edge and content text.
pub const CONTENT_INDENT: u16 = 2;

pub fn layout(accordion: &Accordion, available: Rect) -> LayoutResult {
    let mut result = LayoutResult::new();
    let mut remaining = available;

    for item in accordion.items() {
        if remaining.is_empty() {
            break;
        }
        let top = remaining.y;

        let header = remaining.take_rows(HEADER_HEIGHT);
        result.insert(item.header_id(), header);
        remaining = remaining.inset(header.height, 0);

        match accordion.content_visibility(item.value()) {
            ContentVisibility::Visible => {
                let wanted = item
                    .content()
                    .height(available.width.saturating_sub(CONTENT_INDENT));
                let content = remaining.take_rows(wanted);
                result.insert(item.content_id(), content);
                remaining = remaining.inset(content.height, 0);
            }
            ContentVisibility::Hidden => {
                result.insert(item.content_id(), remaining.take_rows(0));
            }
            ContentVisibility::Unmounted => {}
        }

        result.insert(
            item.item_id(),
            Rect::new(available.x, top, available.width, remaining.y - top),
        );
    }

    let used = remaining.y - available.y;
    result.insert(
        ROOT_ID.to_string(),
        Rect::new(available.x, available.y, available.width, used),
    );
    result
}

/// Rows the accordion needs at `width` columns with nothing clipped.
pub fn content_height(accordion: &Accordion, width: u16) -> u16 {
    accordion
        .items()
        .iter()
        .map(|item| {
            let body = if accordion.is_open(item.value()) {
                item.content().height(width.saturating_sub(CONTENT_INDENT))
            } else {
                0
            };
            HEADER_HEIGHT.saturating_add(body)
        })
        .fold(0u16, u16::saturating_add)
}
