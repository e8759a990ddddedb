//! Plugs the dynamic layer into the path engine.

use vp_path::reflect::{ReflectInstance, ReflectProperty, ReflectType, ReflectValue};

use crate::info::{Property, Type};
use crate::value::{Object, StructValue, Value};

impl ReflectType for Type {
    type Property = Property;

    /// Pointers expose the properties of their pointee.
    fn property(&self, name: &str) -> Option<Property> {
        match self.pointee_type() {
            Some(pointee) => pointee.property(name),
            None => Type::property(self, name),
        }
    }

    #[inline]
    fn is_wrapper(&self) -> bool {
        Type::is_wrapper(self)
    }

    #[inline]
    fn wrapped_type(&self) -> Option<Self> {
        self.wrapped().cloned()
    }

    #[inline]
    fn is_pointer(&self) -> bool {
        Type::is_pointer(self)
    }

    #[inline]
    fn is_pointer_like(&self) -> bool {
        Type::is_pointer_like(self)
    }
}

impl ReflectProperty for Property {
    type Type = Type;

    #[inline]
    fn name(&self) -> &str {
        Property::name(self)
    }

    #[inline]
    fn property_type(&self) -> Type {
        self.ty().clone()
    }
}

impl ReflectValue for Value {
    type Type = Type;

    #[inline]
    fn null() -> Self {
        Value::Null
    }

    #[inline]
    fn is_null(&self) -> bool {
        Value::is_null(self)
    }

    #[inline]
    fn value_type(&self) -> Option<Type> {
        Value::value_type(self)
    }

    #[inline]
    fn convert_to(&mut self, ty: &Type) -> bool {
        Value::convert_to(self, ty)
    }

    fn get_property(&self, property: &Property) -> Option<Self> {
        match self {
            Value::Struct(value) => value.read(property),
            Value::Pointer(ptr) => ptr.as_struct().read(property),
            _ => None,
        }
    }

    fn set_property(&mut self, property: &Property, value: Self) -> bool {
        match self {
            Value::Struct(target) => target.write(property, value),
            // Pointees are shared and immutable.
            Value::Pointer(ptr) => {
                log::debug!(
                    "`{}.{}` is behind a pointer and cannot be written",
                    ptr.id(),
                    property.name()
                );
                false
            }
            _ => false,
        }
    }

    #[inline]
    fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    #[inline]
    fn array_len(&self) -> Option<usize> {
        self.as_array().map(|array| array.len())
    }

    #[inline]
    fn array_get(&self, index: usize) -> Option<Self> {
        self.as_array()?.get(index).cloned()
    }

    fn array_set(&mut self, index: usize, value: Self) -> bool {
        match self {
            Value::Array(array) => array.set(index, value),
            _ => false,
        }
    }

    #[inline]
    fn array_element_type(&self) -> Option<Type> {
        self.as_array().map(|array| array.element_type().clone())
    }
}

impl ReflectInstance for StructValue {
    type Value = Value;

    #[inline]
    fn instance_type(&self) -> Type {
        self.ty().clone()
    }

    #[inline]
    fn get_property(&self, property: &Property) -> Option<Value> {
        self.read(property)
    }

    #[inline]
    fn set_property(&mut self, property: &Property, value: Value) -> bool {
        self.write(property, value)
    }
}

impl ReflectInstance for Object {
    type Value = Value;

    #[inline]
    fn instance_type(&self) -> Type {
        self.ty().clone()
    }

    #[inline]
    fn get_property(&self, property: &Property) -> Option<Value> {
        self.as_struct().read(property)
    }

    #[inline]
    fn set_property(&mut self, property: &Property, value: Value) -> bool {
        log::trace!("writing `{}.{}`", self.id(), property.name());
        self.as_struct_mut().write(property, value)
    }
}
