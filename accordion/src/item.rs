//! Item: one expandable unit, a header plus its content.

use crate::content::Content;
use crate::header::Header;
use crate::open_set::OpenSet;
use crate::value::ItemValue;

/// Expanded state of an item, derived from the open set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemState {
    #[default]
    Closed,
    Open,
}

impl ItemState {
    pub fn is_open(self) -> bool {
        self == Self::Open
    }
}

impl From<bool> for ItemState {
    fn from(open: bool) -> Self {
        if open { Self::Open } else { Self::Closed }
    }
}

/// An accordion item.
///
/// Items carry no open/closed state of their own. Whether an item is
/// expanded is a lookup of its value in the container's [`OpenSet`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    value: ItemValue,
    disabled: bool,
    header: Header,
    content: Content,
}

impl Item {
    pub fn new(
        value: impl Into<ItemValue>,
        header: impl Into<Header>,
        content: impl Into<Content>,
    ) -> Self {
        Self {
            value: value.into(),
            disabled: false,
            header: header.into(),
            content: content.into(),
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn value(&self) -> &ItemValue {
        &self.value
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn state(&self, open: &OpenSet) -> ItemState {
        open.contains(&self.value).into()
    }

    // Element ids used in layout results.

    pub fn item_id(&self) -> String {
        format!("item:{}", self.value)
    }

    pub fn header_id(&self) -> String {
        format!("header:{}", self.value)
    }

    pub fn content_id(&self) -> String {
        format!("content:{}", self.value)
    }
}
