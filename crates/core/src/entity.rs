//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
pub trait Entity {
    /// Natural key of the entity within its owning collection.
    type Id: ?Sized + Eq + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Whether this entity is identified by `id`.
    fn is(&self, id: &Self::Id) -> bool {
        self.id() == id
    }
}
