//! Value object trait: equality by value, not identity.

/// Marker trait for immutable domain values compared field-by-field.
///
/// A line item named "iPad" is interchangeable with any other "iPad" line
/// item; nothing about it carries identity.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
