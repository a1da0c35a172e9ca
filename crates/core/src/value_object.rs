//! Value object trait: equality by value, not identity.
//!
//! The catalog document embeds many records that carry no identity of their
//! own (images, discounts, review aggregates, brand snapshots). They are
//! defined entirely by their attribute values; two with the same values are
//! interchangeable.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify"
/// one, build a new one; the owning document replaces the embedded value as
/// a whole on every write.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
