//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**: they are defined entirely by their
//! attribute values. Order lines, orders, tax entries and order summaries are
//! value objects in this system.

/// Marker trait for value objects.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: No identity (two value objects with same values are equal)
/// - **Entity**: Has identity (two entities with same ID are the same entity)
///
/// Example:
/// - `TaxEntry { description: "State", rate: 0.06 }` is a value object
/// - `Customer { id: CustomerId(7), .. }` is an entity
///
/// ## Usage Pattern
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct TaxEntry {
///     description: String,
///     rate: Decimal,
/// }
///
/// impl ValueObject for TaxEntry {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
