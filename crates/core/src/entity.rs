//! Entity trait: identity + continuity across state changes.
//!
//! Catalog records (`Restaurant`, `MenuItem`) are entities: two entries with
//! identical attributes are still distinct listings.

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
