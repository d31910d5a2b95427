//! Entity trait: identity + continuity across state changes.

/// Minimal interface for domain objects with identity.
///
/// Two entities with the same id are the same entity, whatever their other
/// fields say.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;
}
