use serde::{Deserialize, Serialize};

use tally_core::ValueObject;

/// Money amount in the smallest currency unit (e.g. pesewas, cents).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    pub minor_units: i64,
    /// ISO currency code (e.g. "GHS", "USD").
    pub currency: String,
}

impl Money {
    pub fn new(minor_units: i64, currency: impl Into<String>) -> Self {
        Self {
            minor_units,
            currency: currency.into(),
        }
    }
}

impl ValueObject for Money {}
