//! Capabilities the path engine needs from a reflection layer.
//!
//! The engine is generic over these traits and never inspects concrete
//! types itself. Any reflection layer can be addressed by paths once it
//! provides:
//!
//! - [`ReflectType`]: property lookup and the wrapper / pointer queries used
//!   for coercion and null handling.
//! - [`ReflectProperty`]: a named, typed slot on a type.
//! - [`ReflectValue`]: a dynamically typed value, always obtained by copy,
//!   with an optional array-like capability.
//! - [`ReflectInstance`]: the root object, the only place where a real
//!   mutable property slot exists.

use core::fmt;

/// The type handle of a value `V`.
pub type TypeOf<V> = <V as ReflectValue>::Type;

/// The property handle of a value `V`.
pub type PropertyOf<V> = <TypeOf<V> as ReflectType>::Property;

// -----------------------------------------------------------------------------
// Type

/// A runtime type handle.
///
/// `Display` must print the type name, it is used in error messages.
pub trait ReflectType: Clone + PartialEq + fmt::Debug + fmt::Display {
    /// The property handle of this reflection layer.
    type Property: ReflectProperty<Type = Self>;

    /// Returns the property called `name`, or `None` if the type has none.
    fn property(&self, name: &str) -> Option<Self::Property>;

    /// Returns `true` if this type wraps another one (a smart pointer, a handle).
    fn is_wrapper(&self) -> bool;

    /// Returns the wrapped type, `None` if this type is not a wrapper.
    fn wrapped_type(&self) -> Option<Self>;

    /// Returns `true` if values of this type are raw pointers.
    fn is_pointer(&self) -> bool;

    /// Returns `true` if a slot of this type holds a pointer,
    /// either directly or through a wrapper.
    fn is_pointer_like(&self) -> bool {
        match self.wrapped_type() {
            Some(wrapped) if self.is_wrapper() => wrapped.is_pointer(),
            _ => self.is_pointer(),
        }
    }
}

// -----------------------------------------------------------------------------
// Property

/// A named, typed slot on a type.
pub trait ReflectProperty: Clone + fmt::Debug {
    /// The type handle of this reflection layer.
    type Type: ReflectType<Property = Self>;

    /// The property name.
    fn name(&self) -> &str;

    /// The declared type of the slot.
    fn property_type(&self) -> Self::Type;
}

// -----------------------------------------------------------------------------
// Value

/// A dynamically typed value.
///
/// Every value handed out by the reflection layer is an independent copy:
/// mutating it never affects the object it was read from.
pub trait ReflectValue: Clone + fmt::Debug {
    /// The type handle of this reflection layer.
    type Type: ReflectType;

    /// The null sentinel.
    fn null() -> Self;

    /// Returns `true` for the null sentinel.
    fn is_null(&self) -> bool;

    /// The null value written into a pointer-like slot of type `ty`.
    ///
    /// Defaults to [`null`](ReflectValue::null), layers with typed null
    /// pointers override it.
    fn null_pointer(_ty: &Self::Type) -> Self {
        Self::null()
    }

    /// The runtime type of the value, `None` for the null sentinel.
    fn value_type(&self) -> Option<Self::Type>;

    /// Converts the value to `ty` in place. Returns `false` and leaves the
    /// value untouched if no conversion exists.
    fn convert_to(&mut self, ty: &Self::Type) -> bool;

    /// Reads a copy of `property` off this value.
    fn get_property(&self, property: &PropertyOf<Self>) -> Option<Self>;

    /// Writes `value` into `property` of this value.
    /// Returns `false` if the slot refuses the value.
    fn set_property(&mut self, property: &PropertyOf<Self>, value: Self) -> bool;

    /// Returns `true` if the value is an array-like container.
    fn is_array(&self) -> bool;

    /// Number of elements, `None` if the value is not array-like.
    fn array_len(&self) -> Option<usize>;

    /// Reads a copy of the element at `index`.
    fn array_get(&self, index: usize) -> Option<Self>;

    /// Writes `value` into the element at `index`.
    /// Returns `false` if the index is out of bounds or the slot refuses the value.
    fn array_set(&mut self, index: usize, value: Self) -> bool;

    /// Declared element type, `None` if the value is not array-like.
    fn array_element_type(&self) -> Option<Self::Type>;
}

// -----------------------------------------------------------------------------
// Instance

/// A root object that paths are resolved against.
pub trait ReflectInstance {
    /// The value type of this reflection layer.
    type Value: ReflectValue;

    /// The runtime type of the object.
    fn instance_type(&self) -> TypeOf<Self::Value>;

    /// Reads a copy of `property` off the object.
    fn get_property(&self, property: &PropertyOf<Self::Value>) -> Option<Self::Value>;

    /// Writes `value` directly into `property` of the object.
    /// Returns `false` if the slot refuses the value.
    fn set_property(&mut self, property: &PropertyOf<Self::Value>, value: Self::Value) -> bool;
}
