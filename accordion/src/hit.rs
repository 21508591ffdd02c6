use crate::container::Accordion;
use crate::layout::LayoutResult;
use crate::value::ItemValue;

/// Find the header at the given coordinates.
/// Returns the header's item value, disabled or not; callers decide whether
/// the hit may activate anything.
pub fn hit_test(layout: &LayoutResult, accordion: &Accordion, x: u16, y: u16) -> Option<ItemValue> {
    accordion
        .items()
        .iter()
        .find(|item| {
            layout
                .get(&item.header_id())
                .is_some_and(|rect| rect.contains(x, y))
        })
        .map(|item| item.value().clone())
}

/// Find the item (header or content) at the given coordinates.
pub fn hit_test_item(
    layout: &LayoutResult,
    accordion: &Accordion,
    x: u16,
    y: u16,
) -> Option<ItemValue> {
    accordion
        .items()
        .iter()
        .find(|item| {
            layout
                .get(&item.item_id())
                .is_some_and(|rect| rect.contains(x, y))
        })
        .map(|item| item.value().clone())
}
