//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two item ids
/// with the same text are the same item, two warehouse names with the same
/// text are the same warehouse.
///
/// The trait requires:
/// - **Clone**: value objects are copied freely into working state and output
/// - **Eq**: they are compared by their attribute values
/// - **Debug**: they show up in logs and test failures
pub trait ValueObject: Clone + Eq + core::fmt::Debug {}
