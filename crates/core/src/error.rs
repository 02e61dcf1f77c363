//! Store error model.

use thiserror::Error;

/// Result type used across the store layer.
pub type StoreResult<T> = Result<T, StoreError>;

/// Keyed-store error.
///
/// Keep this focused on deterministic store failures (key conflicts, missing
/// entries, rejected updates). Parsing and IO concerns belong to the
/// collaborator crates. Every variant is recoverable: the caller decides
/// whether to log and continue or abort.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// An entry with the same identifier already exists.
    #[error("duplicate id: {0}")]
    DuplicateId(String),

    /// No entry exists for the requested identifier.
    #[error("no entry for id: {0}")]
    NotFound(String),

    /// A quantity update was rejected before the store was touched.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(i64),
}

impl StoreError {
    pub fn duplicate_id(id: impl core::fmt::Display) -> Self {
        Self::DuplicateId(id.to_string())
    }

    pub fn not_found(id: impl core::fmt::Display) -> Self {
        Self::NotFound(id.to_string())
    }
}
