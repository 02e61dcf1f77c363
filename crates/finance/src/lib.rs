//! Finance records domain module.
//!
//! The transaction record and the money value object. Transactions live in
//! a keyed store like every other record kind, which gives the log
//! duplicate-id protection.

pub mod money;
pub mod transaction;

pub use money::Money;
pub use transaction::Transaction;
