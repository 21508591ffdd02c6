//! The story catalog.

use std::cell::RefCell;
use std::rc::Rc;

use accordion::{Accordion, AccordionConfig, AccordionError, ContentMode, Item, ItemValue};

/// Last value reported by a story's change callback.
pub type ValueLog = Rc<RefCell<Vec<ItemValue>>>;

/// Owner policy for controlled stories: given the requested value, return the
/// value to push back, or `None` to reject the change.
pub type Owner = fn(&[ItemValue]) -> Option<Vec<ItemValue>>;

pub struct Story {
    pub name: &'static str,
    pub description: &'static str,
    pub owner: Option<Owner>,
    build: fn(&ValueLog) -> Result<Accordion, AccordionError>,
}

impl Story {
    pub fn build(&self, log: &ValueLog) -> Result<Accordion, AccordionError> {
        (self.build)(log)
    }
}

pub fn all() -> Vec<Story> {
    vec![
        Story {
            name: "Default",
            description: "Three items, the first open.",
            owner: None,
            build: |log| faq().default_value(["item-1"]).on_value_change(record(log)).build(),
        },
        Story {
            name: "Default value open",
            description: "The second item starts open.",
            owner: None,
            build: |log| faq().default_value(["item-2"]).on_value_change(record(log)).build(),
        },
        Story {
            name: "Multiple values open",
            description: "First and third items start open; each item toggles on its own.",
            owner: None,
            build: |log| {
                faq()
                    .default_value(["item-1", "item-3"])
                    .on_value_change(record(log))
                    .build()
            },
        },
        Story {
            name: "Disabled item",
            description: "The middle item cannot be focused or toggled.",
            owner: None,
            build: |log| {
                Accordion::builder()
                    .item(Item::new(
                        "item-1",
                        "Normal Item",
                        "You can open and close this item.",
                    ))
                    .item(
                        Item::new(
                            "item-2",
                            "Disabled Item",
                            "You cannot interact with this item.",
                        )
                        .disabled(true),
                    )
                    .item(Item::new(
                        "item-3",
                        "Another Normal Item",
                        "This one works too.",
                    ))
                    .on_value_change(record(log))
                    .build()
            },
        },
        Story {
            name: "Single panel",
            description: "Opening an item closes the one that was open.",
            owner: None,
            build: |log| {
                faq()
                    .config(AccordionConfig::new("single-panel").single())
                    .default_value(["item-1"])
                    .on_value_change(record(log))
                    .build()
            },
        },
        Story {
            name: "Hidden content",
            description: "Closed content stays mounted with zero height.",
            owner: None,
            build: |log| {
                faq()
                    .config(AccordionConfig::new("hidden").content_mode(ContentMode::Hidden))
                    .on_value_change(record(log))
                    .build()
            },
        },
        Story {
            name: "Controlled",
            description: "The owner holds the value and refuses more than two open items.",
            owner: Some(at_most_two_open as Owner),
            build: |log| faq().value(["item-1"]).on_value_change(record(log)).build(),
        },
        Story {
            name: "Showcase",
            description: "Five items keyed \"0\"..\"4\", the third disabled.",
            owner: None,
            build: |log| {
                Accordion::builder()
                    .config(AccordionConfig::new("showcase"))
                    .items((0..5usize).map(|i| {
                        Item::new(i.to_string(), format!("accordion {}", i + 1), release_notes(i))
                            .disabled(i == 2)
                    }))
                    .default_value(["0", "1"])
                    .on_value_change(record(log))
                    .build()
            },
        },
        Story {
            name: "Numbered",
            description: "Five items keyed by number, all closed.",
            owner: None,
            build: |log| {
                Accordion::builder()
                    .config(AccordionConfig::new("numbered"))
                    .items((0..5usize).map(|i| {
                        Item::new(i, format!("accordion {}", i + 1), LOREM)
                    }))
                    .on_value_change(record(log))
                    .build()
            },
        },
    ]
}

fn faq() -> accordion::AccordionBuilder {
    Accordion::builder()
        .item(Item::new(
            "item-1",
            "Is it accessible?",
            "Yes. It follows the WAI-ARIA design pattern for accordions.",
        ))
        .item(Item::new(
            "item-2",
            "Is it styled?",
            "Yes. It comes with default styles that can be easily overridden.",
        ))
        .item(Item::new(
            "item-3",
            "Is it animated?",
            "No. Terminals redraw in whole cells, so items open instantly.",
        ))
}

/// Controlled owner policy: accept any value with at most two open items.
fn at_most_two_open(requested: &[ItemValue]) -> Option<Vec<ItemValue>> {
    (requested.len() <= 2).then(|| requested.to_vec())
}

fn record(log: &ValueLog) -> impl FnMut(&[ItemValue]) + 'static {
    let log = Rc::clone(log);
    move |open: &[ItemValue]| {
        log::info!("value change: {open:?}");
        *log.borrow_mut() = open.to_vec();
    }
}

fn release_notes(index: usize) -> String {
    format!(
        "This is the content of item {}.\n\
         This release includes bug fixes across several components:\n\
         \n\
         Checkbox: fixed indeterminate initial state.\n\
         Combobox: fixed initial value propagation in controlled single-select mode.\n\
         Listbox: fixed Enter key behaviour when no item is highlighted.\n\
         Slider: fixed dragging behaviour when disabled mid-operation.\n\
         Tabs: improved indicator positioning.",
        index + 1
    )
}

const LOREM: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. \
    Donec euismod, nisl eget aliquam ultricies, nunc nisl aliquet nunc, \
    quis aliquam nisl nisl eu nisl.";
