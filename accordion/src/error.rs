use thiserror::Error;

use crate::value::ItemValue;

/// Errors raised while building or updating an accordion.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccordionError {
    #[error("duplicate item value: {0}")]
    DuplicateItem(ItemValue),
    #[error("single-selection accordion given {0} open values")]
    MultipleValuesInSingleMode(usize),
    #[error("items keyed by both text and numbers: {0} collides with another item's element id")]
    MixedValueKinds(ItemValue),
}
