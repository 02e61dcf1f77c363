//! Generic keyed in-memory store.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use crate::entity::{Entity, StockLevel};
use crate::error::{StoreError, StoreResult};

/// In-memory store mapping a unique identifier to one record.
///
/// Invariant: at most one entry per identifier at any time. The store owns
/// its records; callers get references or owned copies, and mutation goes
/// through the store's own update operations.
///
/// Single-threaded by design. Callers that share a store across threads
/// must add their own locking around it.
#[derive(Debug, Clone)]
pub struct KeyedStore<T: Entity> {
    entries: BTreeMap<T::Id, T>,
}

impl<T: Entity> Default for KeyedStore<T> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<T: Entity> KeyedStore<T> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its own identifier.
    ///
    /// Insert-if-absent: when the identifier is already taken the insert is
    /// rejected with [`StoreError::DuplicateId`] and the existing entry is
    /// left untouched.
    pub fn add(&mut self, item: T) -> StoreResult<()> {
        let id = item.id();
        match self.entries.entry(id) {
            Entry::Occupied(_) => Err(StoreError::duplicate_id(id)),
            Entry::Vacant(vacant) => {
                vacant.insert(item);
                Ok(())
            }
        }
    }

    /// Look up the record stored under `id`.
    pub fn get(&self, id: T::Id) -> StoreResult<&T> {
        self.entries.get(&id).ok_or_else(|| StoreError::not_found(id))
    }

    /// Delete and return the record stored under `id`.
    ///
    /// Other entries are unaffected, whether the removal succeeds or not.
    pub fn remove(&mut self, id: T::Id) -> StoreResult<T> {
        self.entries
            .remove(&id)
            .ok_or_else(|| StoreError::not_found(id))
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the stored records in ascending-id order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.values()
    }

    /// Owned copies of all stored records, in ascending-id order.
    ///
    /// The returned vector is detached: mutating it never affects the store.
    pub fn snapshot(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.entries.values().cloned().collect()
    }
}

impl<T: StockLevel> KeyedStore<T> {
    /// Replace the quantity of the record stored under `id`.
    ///
    /// Validity is checked before existence: a negative quantity fails with
    /// [`StoreError::InvalidQuantity`] even when `id` is absent. On success
    /// only the quantity field changes.
    pub fn update_quantity(&mut self, id: T::Id, quantity: i64) -> StoreResult<()> {
        if quantity < 0 {
            return Err(StoreError::InvalidQuantity(quantity));
        }
        let item = self
            .entries
            .get_mut(&id)
            .ok_or_else(|| StoreError::not_found(id))?;
        item.set_quantity(quantity);
        Ok(())
    }
}
