//! Dynamically typed values.
//!
//! A [`Value`] carries its own type. Struct and array values own their
//! contents, so cloning a value copies the whole sub-tree; an
//! [`ObjectPtr`] is the only way to share data between values.

// -----------------------------------------------------------------------------
// Modules

mod array_value;
mod convert;
mod object;
mod struct_value;

// -----------------------------------------------------------------------------
// Exports

pub use array_value::ArrayValue;
pub use object::{Object, ObjectPtr};
pub use struct_value::StructValue;

// -----------------------------------------------------------------------------
// Value

use alloc::string::String;

use crate::info::{Primitive, Type, TypeKind};

/// A value of any reflected type, or the null sentinel.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// The null sentinel. Has no type; only pointer slots accept it.
    #[default]
    Null,
    Bool(bool),
    I32(i32),
    I64(i64),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    String(String),
    Struct(StructValue),
    Array(ArrayValue),
    Pointer(ObjectPtr),
}

impl Value {
    /// The default value of `ty`: zero, empty string, a struct of defaults,
    /// an empty array, or null for pointers.
    ///
    /// # Examples
    ///
    /// ```
    /// use vp_reflect::info::{Primitive, StructBuilder, Type};
    /// use vp_reflect::value::Value;
    ///
    /// let vec2 = StructBuilder::new("Vec2")
    ///     .with_field("X", Primitive::F32)
    ///     .with_field("Y", Primitive::F32)
    ///     .build()
    ///     .unwrap();
    ///
    /// let Value::Struct(v) = Value::default_for(&vec2) else { unreachable!() };
    /// assert_eq!(v.get("Y"), Some(&Value::F32(0.0)));
    /// assert!(Value::default_for(&Type::pointer(vec2).unwrap()).is_null());
    /// ```
    pub fn default_for(ty: &Type) -> Self {
        match ty.kind() {
            TypeKind::Primitive(primitive) => match primitive {
                Primitive::Bool => Self::Bool(false),
                Primitive::I32 => Self::I32(0),
                Primitive::I64 => Self::I64(0),
                Primitive::U32 => Self::U32(0),
                Primitive::U64 => Self::U64(0),
                Primitive::F32 => Self::F32(0.0),
                Primitive::F64 => Self::F64(0.0),
                Primitive::String => Self::String(String::new()),
            },
            TypeKind::Struct(info) => Self::Struct(StructValue::from_info(ty.clone(), info)),
            TypeKind::Array(element) => Self::Array(ArrayValue::new(element.clone())),
            TypeKind::Pointer(_) => Self::Null,
            TypeKind::Wrapper(wrapped) => Self::default_for(wrapped),
        }
    }

    /// Returns `true` for the null sentinel.
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the primitive type of a scalar value.
    pub fn primitive(&self) -> Option<Primitive> {
        Some(match self {
            Self::Bool(_) => Primitive::Bool,
            Self::I32(_) => Primitive::I32,
            Self::I64(_) => Primitive::I64,
            Self::U32(_) => Primitive::U32,
            Self::U64(_) => Primitive::U64,
            Self::F32(_) => Primitive::F32,
            Self::F64(_) => Primitive::F64,
            Self::String(_) => Primitive::String,
            Self::Null | Self::Struct(_) | Self::Array(_) | Self::Pointer(_) => return None,
        })
    }

    /// The runtime type of the value, `None` for null.
    ///
    /// A pointer's type is a pointer to the pointed object's own type,
    /// which may be derived from the slot's declared pointee.
    pub fn value_type(&self) -> Option<Type> {
        match self {
            Self::Null => None,
            Self::Struct(value) => Some(value.ty().clone()),
            Self::Array(value) => Some(value.ty().clone()),
            Self::Pointer(ptr) => Some(Type::pointer_unchecked(ptr.ty().clone())),
            scalar => scalar.primitive().map(Type::primitive),
        }
    }

    /// Returns `true` if a slot declared as `slot` can store this value as is.
    ///
    /// - Wrapper slots store values of the wrapped type.
    /// - Pointer slots store null, or pointers to the pointee or a derived struct.
    /// - Every other slot requires the exact type, checked with
    ///   [`Type::same_layout`] rather than by name.
    pub fn fits(&self, slot: &Type) -> bool {
        match slot.kind() {
            TypeKind::Wrapper(wrapped) => self.fits(wrapped),
            TypeKind::Pointer(pointee) => match self {
                Self::Null => true,
                Self::Pointer(ptr) => ptr.ty().is_derived_from(pointee),
                _ => false,
            },
            TypeKind::Primitive(primitive) => self.primitive() == Some(*primitive),
            TypeKind::Struct(_) => {
                matches!(self, Self::Struct(value) if value.ty().same_layout(slot))
            }
            TypeKind::Array(_) => {
                matches!(self, Self::Array(value) if value.ty().same_layout(slot))
            }
        }
    }

    /// Returns the struct value, if this is one.
    #[inline]
    pub fn as_struct(&self) -> Option<&StructValue> {
        match self {
            Self::Struct(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the array value, if this is one.
    #[inline]
    pub fn as_array(&self) -> Option<&ArrayValue> {
        match self {
            Self::Array(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the object pointer, if this is one.
    #[inline]
    pub fn as_pointer(&self) -> Option<&ObjectPtr> {
        match self {
            Self::Pointer(ptr) => Some(ptr),
            _ => None,
        }
    }
}

macro_rules! impl_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                #[inline]
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

impl_from! {
    bool => Bool,
    i32 => I32,
    i64 => I64,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    String => String,
    StructValue => Struct,
    ArrayValue => Array,
    ObjectPtr => Pointer,
}

impl From<&str> for Value {
    #[inline]
    fn from(value: &str) -> Self {
        Self::String(String::from(value))
    }
}

impl From<Option<ObjectPtr>> for Value {
    #[inline]
    fn from(value: Option<ObjectPtr>) -> Self {
        value.map_or(Self::Null, Self::Pointer)
    }
}

#[cfg(test)]
mod tests {
    use super::{ArrayValue, Object, ObjectPtr, Value};
    use crate::info::{Primitive, StructBuilder, Type};

    #[test]
    fn fits_primitives_exactly() {
        assert!(Value::I32(1).fits(&Primitive::I32.into()));
        assert!(!Value::I64(1).fits(&Primitive::I32.into()));
        assert!(!Value::Null.fits(&Primitive::I32.into()));
        assert!(Value::from("x").fits(&Type::wrapper("Name", Primitive::String.into())));
    }

    #[test]
    fn namesake_structs_do_not_fit() {
        let a = StructBuilder::new("A")
            .with_field("X", Primitive::I32)
            .build()
            .unwrap();
        let impostor = StructBuilder::new("A")
            .with_field("Y", Primitive::String)
            .build()
            .unwrap();
        let holder = StructBuilder::new("Holder")
            .with_field("F", a.clone())
            .build()
            .unwrap();

        assert!(Value::default_for(&a).fits(&a));
        assert!(!Value::default_for(&impostor).fits(&a));
        assert!(!Value::from(ArrayValue::new(impostor.clone())).fits(&Type::array(a.clone())));

        let mut root = Object::new("holder", &holder).unwrap();
        assert!(!root.set("F", Value::default_for(&impostor)));
        assert!(root.get("F").unwrap().fits(&a));
    }

    #[test]
    fn pointers_accept_derived_objects() {
        let resource = StructBuilder::new("Resource").build().unwrap();
        let texture = StructBuilder::new("Texture")
            .with_base(resource.clone())
            .build()
            .unwrap();
        let ptr = ObjectPtr::new(Object::new("tex", &texture).unwrap());

        let to_resource = Type::pointer(resource.clone()).unwrap();
        let to_texture = Type::pointer(texture).unwrap();
        let base_ptr = ObjectPtr::new(Object::new("res", &resource).unwrap());

        assert!(Value::from(ptr.clone()).fits(&to_resource));
        assert!(Value::from(ptr).fits(&to_texture));
        assert!(!Value::from(base_ptr).fits(&to_texture));
        assert!(Value::Null.fits(&to_texture));
    }

    #[test]
    fn arrays_fit_by_element_type() {
        let ints = ArrayValue::new(Primitive::I32.into());
        assert!(Value::from(ints.clone()).fits(&Type::array(Primitive::I32.into())));
        assert!(!Value::from(ints).fits(&Type::array(Primitive::U32.into())));
    }

    #[test]
    fn value_types() {
        assert_eq!(Value::Null.value_type(), None);
        assert_eq!(Value::U64(3).value_type(), Some(Primitive::U64.into()));

        let node = StructBuilder::new("Node").build().unwrap();
        let ptr = ObjectPtr::new(Object::new("n", &node).unwrap());
        assert_eq!(
            Value::from(ptr).value_type(),
            Some(Type::pointer(node).unwrap())
        );
    }
}
