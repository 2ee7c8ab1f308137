//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Inventory items and log entries are entities: two snapshots with the same
/// id describe the same thing even if a field was copied at a different time.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;
}
