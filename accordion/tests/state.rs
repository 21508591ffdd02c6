use std::cell::RefCell;
use std::rc::Rc;

use accordion::{
    Accordion, AccordionConfig, AccordionError, ContentMode, ContentVisibility, Item, ItemState,
    ItemValue, OpenSet, Toggle,
};

fn v(s: &str) -> ItemValue {
    ItemValue::from(s)
}

fn two_items() -> Vec<Item> {
    vec![
        Item::new("item-0", "Header 1", "Content 1"),
        Item::new("item-1", "Header 2", "Content 2"),
    ]
}

/// Records every value passed to the change callback.
fn recorder() -> (Rc<RefCell<Vec<Vec<ItemValue>>>>, impl FnMut(&[ItemValue]) + 'static) {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&calls);
    (calls, move |open: &[ItemValue]| sink.borrow_mut().push(open.to_vec()))
}

// ============================================================================
// OpenSet
// ============================================================================

#[test]
fn test_open_set_keeps_insertion_order() {
    let mut set = OpenSet::new();
    assert!(set.insert(v("b")));
    assert!(set.insert(v("a")));
    assert!(set.insert(v("c")));
    assert!(!set.insert(v("a")));

    assert_eq!(set.to_vec(), vec![v("b"), v("a"), v("c")]);

    assert!(set.remove(&v("a")));
    assert_eq!(set.to_vec(), vec![v("b"), v("c")]);
    assert!(!set.remove(&v("a")));
}

#[test]
fn test_open_set_toggle() {
    let mut set = OpenSet::from_values(["x"]);
    assert!(!set.toggle(&v("x")));
    assert!(set.is_empty());
    assert!(set.toggle(&v("x")));
    assert!(set.contains(&v("x")));
}

#[test]
fn test_open_set_from_values_drops_repeats() {
    let set = OpenSet::from_values(["a", "b", "a"]);
    assert_eq!(set.to_vec(), vec![v("a"), v("b")]);
}

#[test]
fn test_open_set_equality_ignores_order() {
    let ab = OpenSet::from_values(["a", "b"]);
    let ba = OpenSet::from_values(["b", "a"]);
    assert_eq!(ab, ba);
    assert!(!ab.same_order(&ba));
}

#[test]
fn test_text_and_number_values_are_distinct() {
    let set = OpenSet::from_values([ItemValue::number(1)]);
    assert!(set.contains(&ItemValue::number(1)));
    assert!(!set.contains(&ItemValue::text("1")));
    assert_eq!(ItemValue::text("1"), v("1"));
    assert!(!set.contains(&v("1")));
    assert_eq!(ItemValue::number(1).to_string(), "1");
    assert_eq!(ItemValue::from(3usize), ItemValue::number(3));
}

// ============================================================================
// Building
// ============================================================================

#[test]
fn test_items_start_closed() {
    let accordion = Accordion::builder().items(two_items()).build().unwrap();

    assert!(accordion.value().is_empty());
    for item in accordion.items() {
        assert_eq!(item.state(accordion.open_set()), ItemState::Closed);
    }
}

#[test]
fn test_default_value_sets_initial_open_set_exactly() {
    let accordion = Accordion::builder()
        .items(two_items())
        .default_value(["item-1"])
        .build()
        .unwrap();

    assert!(!accordion.is_open(&v("item-0")));
    assert!(accordion.is_open(&v("item-1")));
    assert_eq!(accordion.value(), vec![v("item-1")]);
}

#[test]
fn test_default_value_may_name_unknown_items() {
    let accordion = Accordion::builder()
        .items(two_items())
        .default_value(["item-1", "ghost"])
        .build()
        .unwrap();

    assert_eq!(accordion.value(), vec![v("item-1"), v("ghost")]);
}

#[test]
fn test_duplicate_item_values_are_rejected() {
    let result = Accordion::builder()
        .item(Item::new("a", "A", ""))
        .item(Item::new("a", "A again", ""))
        .build();

    assert_eq!(result.unwrap_err(), AccordionError::DuplicateItem(v("a")));
}

#[test]
fn test_single_mode_rejects_several_defaults() {
    let result = Accordion::builder()
        .config(AccordionConfig::new("single").single())
        .items(two_items())
        .default_value(["item-0", "item-1"])
        .build();

    assert_eq!(
        result.unwrap_err(),
        AccordionError::MultipleValuesInSingleMode(2)
    );
}

#[test]
fn test_mixed_value_kinds_are_rejected() {
    let result = Accordion::builder()
        .item(Item::new("1", "Text one", ""))
        .item(Item::new(1usize, "Number one", ""))
        .build();

    assert_eq!(
        result.unwrap_err(),
        AccordionError::MixedValueKinds(ItemValue::from(1usize))
    );
}

#[test]
fn test_empty_accordion_builds() {
    let mut accordion = Accordion::builder().build().unwrap();
    assert!(accordion.is_empty());
    assert_eq!(accordion.toggle(&v("nothing")), Toggle::Unknown);
}

// ============================================================================
// Toggling
// ============================================================================

#[test]
fn test_toggle_flips_state_exactly_once_per_activation() {
    let mut accordion = Accordion::builder().items(two_items()).build().unwrap();

    for round in 0..4 {
        let was_open = accordion.is_open(&v("item-0"));
        let outcome = accordion.toggle(&v("item-0"));
        assert_eq!(accordion.is_open(&v("item-0")), !was_open, "round {round}");
        assert_eq!(
            outcome,
            if was_open { Toggle::Closed } else { Toggle::Opened }
        );
    }
}

#[test]
fn test_disabled_item_never_changes() {
    let (calls, callback) = recorder();
    let mut accordion = Accordion::builder()
        .item(Item::new("a", "A", "a"))
        .item(Item::new("b", "B", "b").disabled(true))
        .on_value_change(callback)
        .build()
        .unwrap();

    for _ in 0..3 {
        assert_eq!(accordion.toggle(&v("b")), Toggle::Disabled);
        assert!(!accordion.is_open(&v("b")));
    }
    assert!(calls.borrow().is_empty());
}

#[test]
fn test_disabled_item_open_by_default_stays_open() {
    let mut accordion = Accordion::builder()
        .item(Item::new("b", "B", "b").disabled(true))
        .default_value(["b"])
        .build()
        .unwrap();

    assert_eq!(accordion.toggle(&v("b")), Toggle::Disabled);
    assert!(accordion.is_open(&v("b")));
}

#[test]
fn test_scenario_default_a_then_activate_b() {
    let (calls, callback) = recorder();
    let mut accordion = Accordion::builder()
        .item(Item::new("a", "A", "alpha"))
        .item(Item::new("b", "B", "beta"))
        .default_value(["a"])
        .on_value_change(callback)
        .build()
        .unwrap();

    assert_eq!(accordion.state(&v("a")), ItemState::Open);
    assert_eq!(accordion.state(&v("b")), ItemState::Closed);

    accordion.toggle(&v("b"));
    assert_eq!(*calls.borrow(), vec![vec![v("a"), v("b")]]);
}

#[test]
fn test_callback_reports_ordered_value_after_each_toggle() {
    let (calls, callback) = recorder();
    let mut accordion = Accordion::builder()
        .items(two_items())
        .on_value_change(callback)
        .build()
        .unwrap();

    accordion.toggle(&v("item-0"));
    accordion.toggle(&v("item-1"));
    accordion.toggle(&v("item-0"));

    assert_eq!(
        *calls.borrow(),
        vec![
            vec![v("item-0")],
            vec![v("item-0"), v("item-1")],
            vec![v("item-1")],
        ]
    );
}

#[test]
fn test_unknown_toggle_is_ignored() {
    let (calls, callback) = recorder();
    let mut accordion = Accordion::builder()
        .items(two_items())
        .on_value_change(callback)
        .build()
        .unwrap();

    assert_eq!(accordion.toggle(&v("missing")), Toggle::Unknown);
    assert!(accordion.value().is_empty());
    assert!(calls.borrow().is_empty());
}

#[test]
fn test_numeric_values() {
    let mut accordion = Accordion::builder()
        .items((0..3usize).map(|i| Item::new(i, format!("accordion {}", i + 1), "body")))
        .default_value([0usize, 1usize])
        .build()
        .unwrap();

    assert_eq!(accordion.toggle(&ItemValue::from(2usize)), Toggle::Opened);
    assert_eq!(
        accordion.value(),
        vec![
            ItemValue::number(0),
            ItemValue::number(1),
            ItemValue::number(2)
        ]
    );
}

// ============================================================================
// Single mode
// ============================================================================

#[test]
fn test_single_mode_closes_previous_item() {
    let (calls, callback) = recorder();
    let mut accordion = Accordion::builder()
        .config(AccordionConfig::new("single").single())
        .items(two_items())
        .default_value(["item-0"])
        .on_value_change(callback)
        .build()
        .unwrap();

    assert_eq!(accordion.toggle(&v("item-1")), Toggle::Opened);
    assert_eq!(accordion.value(), vec![v("item-1")]);
    assert!(!accordion.is_open(&v("item-0")));
    assert_eq!(*calls.borrow(), vec![vec![v("item-1")]]);
}

#[test]
fn test_single_mode_keeps_disabled_item_open() {
    let (calls, callback) = recorder();
    let mut accordion = Accordion::builder()
        .config(AccordionConfig::new("single").single())
        .item(Item::new("a", "A", "pinned").disabled(true))
        .item(Item::new("b", "B", "beta"))
        .item(Item::new("c", "C", "gamma"))
        .default_value(["a"])
        .on_value_change(callback)
        .build()
        .unwrap();

    assert_eq!(accordion.toggle(&v("b")), Toggle::Opened);
    assert!(accordion.is_open(&v("a")));
    assert_eq!(accordion.value(), vec![v("a"), v("b")]);

    assert_eq!(accordion.toggle(&v("c")), Toggle::Opened);
    assert_eq!(accordion.value(), vec![v("a"), v("c")]);
    assert_eq!(
        *calls.borrow(),
        vec![vec![v("a"), v("b")], vec![v("a"), v("c")]]
    );
}

#[test]
fn test_single_mode_limit_does_not_count_disabled_items() {
    let mut accordion = Accordion::builder()
        .config(AccordionConfig::new("single").single())
        .item(Item::new("a", "A", "").disabled(true))
        .item(Item::new("b", "B", ""))
        .item(Item::new("c", "C", ""))
        .default_value(["a", "b"])
        .build()
        .unwrap();

    assert!(accordion.set_value(["a", "c"]).is_ok());
    assert_eq!(
        accordion.set_value(["a", "b", "c"]),
        Err(AccordionError::MultipleValuesInSingleMode(2))
    );
}

#[test]
fn test_toggle_outcome_reports_change() {
    let mut accordion = Accordion::builder()
        .config(AccordionConfig::new("single").single().collapsible(false))
        .items(two_items())
        .item(Item::new("off", "Off", "").disabled(true))
        .build()
        .unwrap();

    assert!(accordion.toggle(&v("item-0")).is_change());
    assert!(!accordion.toggle(&v("item-0")).is_change());
    assert!(!accordion.toggle(&v("off")).is_change());
    assert!(!accordion.toggle(&v("ghost")).is_change());
}

#[test]
fn test_single_mode_collapsible_closes_open_item() {
    let mut accordion = Accordion::builder()
        .config(AccordionConfig::new("single").single())
        .items(two_items())
        .default_value(["item-0"])
        .build()
        .unwrap();

    assert_eq!(accordion.toggle(&v("item-0")), Toggle::Closed);
    assert!(accordion.value().is_empty());
}

#[test]
fn test_single_mode_not_collapsible_keeps_item_open() {
    let (calls, callback) = recorder();
    let mut accordion = Accordion::builder()
        .config(AccordionConfig::new("single").single().collapsible(false))
        .items(two_items())
        .default_value(["item-0"])
        .on_value_change(callback)
        .build()
        .unwrap();

    assert_eq!(accordion.toggle(&v("item-0")), Toggle::Unchanged);
    assert_eq!(accordion.value(), vec![v("item-0")]);
    assert!(calls.borrow().is_empty());
}

// ============================================================================
// Controlled mode
// ============================================================================

#[test]
fn test_controlled_toggle_reports_without_mutating() {
    let (calls, callback) = recorder();
    let mut accordion = Accordion::builder()
        .items(two_items())
        .value(["item-0"])
        .on_value_change(callback)
        .build()
        .unwrap();

    assert!(accordion.is_controlled());
    assert_eq!(accordion.toggle(&v("item-1")), Toggle::Opened);

    assert_eq!(accordion.value(), vec![v("item-0")]);
    assert_eq!(*calls.borrow(), vec![vec![v("item-0"), v("item-1")]]);

    let accepted = calls.borrow().last().cloned().unwrap();
    accordion.set_value(accepted).unwrap();
    assert_eq!(accordion.value(), vec![v("item-0"), v("item-1")]);
    assert_eq!(calls.borrow().len(), 1, "set_value must not notify");
}

#[test]
fn test_controlled_value_wins_over_default() {
    let accordion = Accordion::builder()
        .items(two_items())
        .default_value(["item-0"])
        .value(["item-1"])
        .build()
        .unwrap();

    assert_eq!(accordion.value(), vec![v("item-1")]);
}

#[test]
fn test_set_value_in_single_mode_is_checked() {
    let mut accordion = Accordion::builder()
        .config(AccordionConfig::new("single").single())
        .items(two_items())
        .value(Vec::<ItemValue>::new())
        .build()
        .unwrap();

    assert_eq!(
        accordion.set_value(["item-0", "item-1"]),
        Err(AccordionError::MultipleValuesInSingleMode(2))
    );
    assert!(accordion.value().is_empty());
}

// ============================================================================
// Dirty tracking and content visibility
// ============================================================================

#[test]
fn test_dirty_tracking() {
    let mut accordion = Accordion::builder().items(two_items()).build().unwrap();
    assert!(accordion.is_dirty());
    accordion.clear_dirty();

    accordion.toggle(&v("item-0"));
    assert!(accordion.is_dirty());
    accordion.clear_dirty();

    accordion.set_value(["item-0"]).unwrap();
    assert!(!accordion.is_dirty(), "same value is not a change");
}

#[test]
fn test_content_visibility_follows_content_mode() {
    let unmount = Accordion::builder()
        .items(two_items())
        .default_value(["item-0"])
        .build()
        .unwrap();
    assert_eq!(
        unmount.content_visibility(&v("item-0")),
        ContentVisibility::Visible
    );
    assert_eq!(
        unmount.content_visibility(&v("item-1")),
        ContentVisibility::Unmounted
    );

    let hidden = Accordion::builder()
        .config(AccordionConfig::default().content_mode(ContentMode::Hidden))
        .items(two_items())
        .build()
        .unwrap();
    let visibility = hidden.content_visibility(&v("item-1"));
    assert_eq!(visibility, ContentVisibility::Hidden);
    assert!(visibility.is_mounted());
    assert!(!visibility.is_visible());
}
