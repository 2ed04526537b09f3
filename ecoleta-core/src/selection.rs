use indexmap::IndexSet;

use crate::entities::ItemId;

/// The set of selected item categories.
///
/// Membership tests are O(1); the insertion order is retained
/// because it determines the order of the submitted id list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemSelection(IndexSet<ItemId>);

impl ItemSelection {
    /// Removes `id` if it is selected and adds it otherwise.
    ///
    /// Returns whether `id` is selected afterwards.
    pub fn toggle(&mut self, id: ItemId) -> bool {
        if self.0.shift_remove(&id) {
            false
        } else {
            self.0.insert(id);
            true
        }
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.0.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.0.iter().copied()
    }

    pub fn to_comma_separated(&self) -> String {
        self.iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl FromIterator<ItemId> for ItemSelection {
    fn from_iter<I: IntoIterator<Item = ItemId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
