//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two prices with
/// the same amount are the same price. To "modify" one, create a new one.
///
/// The trait requires:
/// - **Clone**: value objects are cheap to copy (they're values, not references)
/// - **PartialEq**: compared by their attribute values
/// - **Debug**: debuggable for logging and tests
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
