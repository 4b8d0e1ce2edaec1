//! Ordered item sequence and the reorder mutation
//!
//! Items are never cloned or edited; the sequence only moves them around.
//! Every item carries an [`ItemKey`] assigned at construction so the dragged
//! item can be followed across reorders without inspecting `T`.

use crate::error::{DockError, Result};

/// Stable key of an item: its index in the sequence as originally supplied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemKey(pub usize);

/// Result of a reorder request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reordered {
    /// The order did not change
    Unchanged,
    /// The item moved from one slot to another
    Moved { from: usize, to: usize },
}

#[derive(Debug, Clone)]
struct Entry<T> {
    key: ItemKey,
    item: T,
}

/// Displayed left-to-right order of the dock items
#[derive(Debug, Clone)]
pub struct Sequence<T> {
    entries: Vec<Entry<T>>,
}

impl<T: PartialEq> Sequence<T> {
    /// Build a sequence, rejecting duplicate identities
    pub fn new(items: Vec<T>) -> Result<Self> {
        for (second, item) in items.iter().enumerate() {
            if let Some(first) = items[..second].iter().position(|other| other == item) {
                return Err(DockError::DuplicateItem { first, second });
            }
        }
        let entries = items
            .into_iter()
            .enumerate()
            .map(|(i, item)| Entry {
                key: ItemKey(i),
                item,
            })
            .collect();
        Ok(Self { entries })
    }

    /// Current slot of an item, by equality
    pub fn position(&self, item: &T) -> Option<usize> {
        self.entries.iter().position(|e| &e.item == item)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.position(item).is_some()
    }

    /// Move `item` to `target`, interpreting `target` in the list after removal
    ///
    /// Requires `item` to be present and `target < len`. Either violation
    /// leaves the order untouched (and panics in debug builds).
    pub fn reorder(&mut self, item: &T, target: usize) -> Reordered {
        match self.position(item) {
            Some(from) => self.move_slot(from, target),
            None => {
                debug_assert!(false, "reorder called with an item not in the sequence");
                tracing::error!("reorder: item not in sequence, order unchanged");
                Reordered::Unchanged
            }
        }
    }
}

impl<T> Sequence<T> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.entries.get(index).map(|e| &e.item)
    }

    pub fn key_at(&self, index: usize) -> Option<ItemKey> {
        self.entries.get(index).map(|e| e.key)
    }

    /// Current slot of the item with `key`
    pub fn position_of_key(&self, key: ItemKey) -> Option<usize> {
        self.entries.iter().position(|e| e.key == key)
    }

    pub fn item_by_key(&self, key: ItemKey) -> Option<&T> {
        self.entries.iter().find(|e| e.key == key).map(|e| &e.item)
    }

    /// Items in display order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|e| &e.item)
    }

    /// Keys in display order
    pub fn keys(&self) -> impl Iterator<Item = ItemKey> + '_ {
        self.entries.iter().map(|e| e.key)
    }

    /// Key-based form of [`Sequence::reorder`], same remove-then-insert rule
    pub fn reorder_key(&mut self, key: ItemKey, target: usize) -> Reordered {
        match self.position_of_key(key) {
            Some(from) => self.move_slot(from, target),
            None => {
                debug_assert!(false, "reorder_key called with unknown key {:?}", key);
                tracing::error!(?key, "reorder: key not in sequence, order unchanged");
                Reordered::Unchanged
            }
        }
    }

    /// Consume the sequence, yielding items in display order
    pub fn into_items(self) -> Vec<T> {
        self.entries.into_iter().map(|e| e.item).collect()
    }

    fn move_slot(&mut self, from: usize, target: usize) -> Reordered {
        // After removal the list has len - 1 entries, so len - 1 is the
        // largest slot an insert can land in.
        if target >= self.entries.len() {
            debug_assert!(
                false,
                "reorder target {} out of range for {} items",
                target,
                self.entries.len()
            );
            tracing::error!(
                slot = target,
                len = self.entries.len(),
                "reorder: target out of range, order unchanged"
            );
            return Reordered::Unchanged;
        }
        if target == from {
            return Reordered::Unchanged;
        }
        let entry = self.entries.remove(from);
        self.entries.insert(target, entry);
        Reordered::Moved { from, to: target }
    }
}
