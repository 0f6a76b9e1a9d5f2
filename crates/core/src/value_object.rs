//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity of their own. Two instances with the same
/// attribute values are interchangeable, e.g. an expiration date or a set of
/// pending field changes, as opposed to a stocked item which is tracked by its ID.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
