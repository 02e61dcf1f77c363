use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tally_core::Entity;

use crate::money::Money;

/// Logged transaction record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: u32,
    pub date: DateTime<Utc>,
    pub amount: Money,
    pub category: String,
}

impl Transaction {
    pub fn new(id: u32, date: DateTime<Utc>, amount: Money, category: impl Into<String>) -> Self {
        Self {
            id,
            date,
            amount,
            category: category.into(),
        }
    }
}

impl Entity for Transaction {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tally_core::{KeyedStore, StoreError};

    fn test_date() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 2, 14, 12, 0, 0).unwrap()
    }

    #[test]
    fn money_is_compared_by_value() {
        assert_eq!(Money::new(15_000, "GHS"), Money::new(15_000, "GHS"));
        assert_ne!(Money::new(15_000, "GHS"), Money::new(15_000, "USD"));
    }

    #[test]
    fn transaction_log_rejects_reused_ids() {
        let mut log: KeyedStore<Transaction> = KeyedStore::new();
        log.add(Transaction::new(1, test_date(), Money::new(15_000, "GHS"), "Groceries"))
            .unwrap();
        log.add(Transaction::new(2, test_date(), Money::new(20_000, "GHS"), "Utilities"))
            .unwrap();

        let err = log
            .add(Transaction::new(2, test_date(), Money::new(30_000, "GHS"), "Entertainment"))
            .unwrap_err();
        assert_eq!(err, StoreError::duplicate_id(2u32));

        let categories: Vec<&str> = log.iter().map(|t| t.category.as_str()).collect();
        assert_eq!(categories, vec!["Groceries", "Utilities"]);
    }
}
