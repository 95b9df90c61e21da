//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects carry no identity: two instances holding the same values are
/// the same value. In this workspace `ItemName` is one; a store entry keyed by
/// it is not.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
