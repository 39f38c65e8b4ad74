//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// A cart line is the canonical example here: its identity is the product id,
/// and it stays the same line while its quantity changes.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
