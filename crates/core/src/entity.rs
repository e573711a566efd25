//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Products and customers are entities: two records with the same id are the
/// same thing even if a field differs.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;
}
