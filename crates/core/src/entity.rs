//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// The identifier is fixed at construction; everything else about an entity may
/// change while it keeps the same identity.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Ord + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
