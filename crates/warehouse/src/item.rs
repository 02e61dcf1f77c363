use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tally_core::{Entity, StockLevel};

/// Electronic stock record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectronicItem {
    pub id: u32,
    pub name: String,
    pub quantity: i64,
    pub brand: String,
    pub warranty_months: u32,
}

impl ElectronicItem {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        quantity: i64,
        brand: impl Into<String>,
        warranty_months: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            brand: brand.into(),
            warranty_months,
        }
    }
}

/// Grocery stock record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroceryItem {
    pub id: u32,
    pub name: String,
    pub quantity: i64,
    pub expiry: DateTime<Utc>,
}

impl GroceryItem {
    pub fn new(id: u32, name: impl Into<String>, quantity: i64, expiry: DateTime<Utc>) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            expiry,
        }
    }
}

/// Logged inventory record: the variant that crosses the persistence
/// boundary, stamped with the time it entered the log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: u32,
    pub name: String,
    pub quantity: i64,
    pub date_added: DateTime<Utc>,
}

impl InventoryItem {
    pub fn new(id: u32, name: impl Into<String>, quantity: i64, date_added: DateTime<Utc>) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            date_added,
        }
    }
}

macro_rules! impl_stock_record {
    ($t:ty) => {
        impl Entity for $t {
            type Id = u32;

            fn id(&self) -> u32 {
                self.id
            }
        }

        impl StockLevel for $t {
            fn quantity(&self) -> i64 {
                self.quantity
            }

            fn set_quantity(&mut self, quantity: i64) {
                self.quantity = quantity;
            }
        }
    };
}

impl_stock_record!(ElectronicItem);
impl_stock_record!(GroceryItem);
impl_stock_record!(InventoryItem);
