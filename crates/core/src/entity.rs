//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Registry records are keyed by their entity identifier, so the identifier
/// must stay stable for the lifetime of the record.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
