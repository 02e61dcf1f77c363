//! Two-section warehouse façade over the keyed store.

use tally_core::{KeyedStore, StockLevel, StoreResult};

use crate::item::{ElectronicItem, GroceryItem};

/// Adjust a stock level by `delta`, returning the new quantity.
///
/// Reads the current quantity first, so an absent id fails with `NotFound`
/// before any arithmetic; a delta that would drive the quantity below zero
/// fails with `InvalidQuantity` and leaves the record unchanged.
pub fn restock<T: StockLevel>(
    store: &mut KeyedStore<T>,
    id: T::Id,
    delta: i64,
) -> StoreResult<i64> {
    let current = store.get(id)?.quantity();
    let updated = current + delta;
    store.update_quantity(id, updated)?;
    Ok(updated)
}

/// Warehouse with one keyed store per stock section.
#[derive(Debug, Clone, Default)]
pub struct Warehouse {
    electronics: KeyedStore<ElectronicItem>,
    groceries: KeyedStore<GroceryItem>,
}

impl Warehouse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_electronic(&mut self, item: ElectronicItem) -> StoreResult<()> {
        self.electronics.add(item)
    }

    pub fn add_grocery(&mut self, item: GroceryItem) -> StoreResult<()> {
        self.groceries.add(item)
    }

    pub fn electronic(&self, id: u32) -> StoreResult<&ElectronicItem> {
        self.electronics.get(id)
    }

    pub fn grocery(&self, id: u32) -> StoreResult<&GroceryItem> {
        self.groceries.get(id)
    }

    pub fn restock_electronic(&mut self, id: u32, delta: i64) -> StoreResult<i64> {
        restock(&mut self.electronics, id, delta)
    }

    pub fn restock_grocery(&mut self, id: u32, delta: i64) -> StoreResult<i64> {
        restock(&mut self.groceries, id, delta)
    }

    pub fn remove_electronic(&mut self, id: u32) -> StoreResult<ElectronicItem> {
        self.electronics.remove(id)
    }

    pub fn remove_grocery(&mut self, id: u32) -> StoreResult<GroceryItem> {
        self.groceries.remove(id)
    }

    /// Snapshot of the electronics section, ascending id.
    pub fn electronics(&self) -> Vec<ElectronicItem> {
        self.electronics.snapshot()
    }

    /// Snapshot of the groceries section, ascending id.
    pub fn groceries(&self) -> Vec<GroceryItem> {
        self.groceries.snapshot()
    }
}
