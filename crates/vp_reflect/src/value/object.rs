use alloc::borrow::Cow;
use alloc::sync::Arc;
use core::fmt;
use core::ops::Deref;

use crate::TypeError;
use crate::info::Type;
use crate::value::{StructValue, Value};

// -----------------------------------------------------------------------------
// Object

/// A named instance of a struct type, the root that paths are resolved against.
///
/// # Examples
///
/// ```
/// use vp_reflect::info::{Primitive, StructBuilder};
/// use vp_reflect::value::{Object, Value};
///
/// let window = StructBuilder::new("Window")
///     .with_field("Title", Primitive::String)
///     .build()
///     .unwrap();
///
/// let mut object = Object::new("main_window", &window).unwrap();
/// assert!(object.set("Title", "Demo"));
/// assert_eq!(object.get("Title"), Some(&Value::from("Demo")));
/// assert_eq!(object.id(), "main_window");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Object {
    id: Cow<'static, str>,
    value: StructValue,
}

impl Object {
    /// Creates an object of struct type `ty` with default field values.
    ///
    /// # Errors
    ///
    /// [`TypeError::NotAStruct`] if `ty` is not a struct type.
    pub fn new(id: impl Into<Cow<'static, str>>, ty: &Type) -> Result<Self, TypeError> {
        Ok(Self {
            id: id.into(),
            value: StructValue::new(ty)?,
        })
    }

    /// Wraps an existing struct value.
    #[inline]
    pub fn from_value(id: impl Into<Cow<'static, str>>, value: StructValue) -> Self {
        Self {
            id: id.into(),
            value,
        }
    }

    /// The object identifier.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The object's struct type.
    #[inline]
    pub fn ty(&self) -> &Type {
        self.value.ty()
    }

    /// The object's fields.
    #[inline]
    pub fn as_struct(&self) -> &StructValue {
        &self.value
    }

    /// Mutable access to the object's fields.
    #[inline]
    pub fn as_struct_mut(&mut self) -> &mut StructValue {
        &mut self.value
    }

    /// The value of the field called `name`.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.value.get(name)
    }

    /// Writes the field called `name`, see [`StructValue::set`].
    #[inline]
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> bool {
        self.value.set(name, value)
    }
}

// -----------------------------------------------------------------------------
// ObjectPtr

/// A shared pointer to an immutable [`Object`].
///
/// Two pointers are equal when they point to the same allocation.
#[derive(Clone)]
pub struct ObjectPtr(Arc<Object>);

impl ObjectPtr {
    #[inline]
    pub fn new(object: Object) -> Self {
        Self(Arc::new(object))
    }
}

impl Deref for ObjectPtr {
    type Target = Object;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PartialEq for ObjectPtr {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for ObjectPtr {}

impl fmt::Debug for ObjectPtr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ObjectPtr").field(&self.id()).finish()
    }
}
