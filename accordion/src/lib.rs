//! Accordion widget for terminal user interfaces.
//!
//! An [`Accordion`] owns the set of open item values. Each [`Item`] pairs a
//! [`Header`] with a [`Content`] region, and derives its expanded state purely
//! from membership in that set. [`AccordionWidget`] wires the state model to
//! focus tracking, layout, hit testing and rendering into a [`Buffer`].

pub mod buffer;
pub mod config;
pub mod container;
pub mod content;
pub mod error;
pub mod event;
pub mod focus;
pub mod header;
pub mod hit;
pub mod item;
pub mod layout;
pub mod open_set;
pub mod render;
pub mod terminal;
pub mod text;
pub mod types;
pub mod value;
pub mod widget;

pub use buffer::{Buffer, Cell};
pub use config::{AccordionConfig, ContentMode, SelectionMode};
pub use container::{Accordion, AccordionBuilder, Toggle, ValueChangeCallback};
pub use content::{Content, ContentVisibility};
pub use error::AccordionError;
pub use event::{Event, EventResult, Key, Modifiers, MouseButton};
pub use focus::{collect_focusable, FocusState};
pub use header::{Activation, Header};
pub use hit::{hit_test, hit_test_item};
pub use item::{Item, ItemState};
pub use layout::{layout, LayoutResult, Rect};
pub use open_set::OpenSet;
pub use terminal::Terminal;
pub use types::*;
pub use value::ItemValue;
pub use widget::AccordionWidget;
