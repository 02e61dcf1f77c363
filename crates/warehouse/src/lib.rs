//! Warehouse domain module.
//!
//! Stock record variants and the two-section warehouse façade, implemented
//! purely as deterministic data logic (no IO, no printing).

pub mod item;
pub mod warehouse;

pub use item::{ElectronicItem, GroceryItem, InventoryItem};
pub use warehouse::{Warehouse, restock};
