//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values. Names
/// and report rows are value objects; menus and guests are entities.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Availability {
///     menu: MenuName,
///     remaining: u32,
/// }
///
/// impl ValueObject for Availability {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
