//! Value object trait: equality by value, not identity.

/// Marker trait for immutable, compared-by-value domain types.
///
/// Two value objects with the same attribute values are the same value;
/// identity never enters into it. A money amount is a value object, a
/// patient record with an identifier is not. To "modify" one, build a new
/// one with the new values.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
