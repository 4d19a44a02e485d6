//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two [`Money`]
/// amounts of the same number of cents are the same amount, while two
/// restaurants with the same name are still different restaurants (entities).
///
/// To "modify" a value object, build a new one. The required bounds keep
/// values cheap to copy, comparable, and debuggable.
///
/// [`Money`]: crate::Money
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
