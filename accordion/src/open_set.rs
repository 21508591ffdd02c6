//! The set of currently open item values.

use indexmap::IndexSet;

use crate::value::ItemValue;

/// Set of open item values.
///
/// Membership is the only thing that decides whether an item is expanded.
/// Iteration follows insertion order: values appear in the order they were
/// opened, and removing one keeps the relative order of the rest. This is
/// the order reported to change observers.
///
/// Equality ignores order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpenSet {
    values: IndexSet<ItemValue>,
}

impl OpenSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from a list of values. Repeated values are kept once, at
    /// their first position.
    pub fn from_values<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<ItemValue>,
    {
        values.into_iter().map(Into::into).collect()
    }

    pub fn contains(&self, value: &ItemValue) -> bool {
        self.values.contains(value)
    }

    /// Insert a value at the end. Returns false if it was already open.
    pub fn insert(&mut self, value: ItemValue) -> bool {
        self.values.insert(value)
    }

    /// Remove a value, keeping the order of the others.
    /// Returns false if it was not open.
    pub fn remove(&mut self, value: &ItemValue) -> bool {
        self.values.shift_remove(value)
    }

    /// Flip membership of `value`. Returns true if the value is now open.
    pub fn toggle(&mut self, value: &ItemValue) -> bool {
        if self.remove(value) {
            false
        } else {
            self.values.insert(value.clone());
            true
        }
    }

    /// Keep only the values for which `keep` returns true, in order.
    pub fn retain(&mut self, mut keep: impl FnMut(&ItemValue) -> bool) {
        self.values.retain(|value| keep(value));
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemValue> {
        self.values.iter()
    }

    /// Snapshot as an ordered list.
    pub fn to_vec(&self) -> Vec<ItemValue> {
        self.values.iter().cloned().collect()
    }

    /// True if both sets hold the same values in the same order.
    pub fn same_order(&self, other: &OpenSet) -> bool {
        self.values.iter().eq(other.values.iter())
    }
}

impl FromIterator<ItemValue> for OpenSet {
    fn from_iter<T: IntoIterator<Item = ItemValue>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a OpenSet {
    type Item = &'a ItemValue;
    type IntoIter = indexmap::set::Iter<'a, ItemValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
