use alloc::string::ToString;
use alloc::vec::Vec;

use crate::TypeError;
use crate::info::{Property, StructInfo, Type};
use crate::value::Value;

/// An owned instance of a struct type.
///
/// Holds one value per field, inherited fields first. Every write is checked
/// against the declared field type with [`Value::fits`].
///
/// # Examples
///
/// ```
/// use vp_reflect::info::{Primitive, StructBuilder};
/// use vp_reflect::value::{StructValue, Value};
///
/// let color = StructBuilder::new("Color")
///     .with_field("R", Primitive::U32)
///     .with_field("A", Primitive::F32)
///     .build()
///     .unwrap();
///
/// let mut value = StructValue::new(&color).unwrap();
/// assert!(value.set("R", 255_u32));
/// assert!(!value.set("A", 1_i32)); // wrong type
/// assert!(!value.set("G", 0_u32)); // no such field
///
/// assert_eq!(value.get("R"), Some(&Value::U32(255)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StructValue {
    ty: Type,
    fields: Vec<Value>,
}

impl StructValue {
    /// Creates a struct value of `ty` with every field set to its default.
    ///
    /// # Errors
    ///
    /// [`TypeError::NotAStruct`] if `ty` is not a struct type.
    pub fn new(ty: &Type) -> Result<Self, TypeError> {
        match ty.as_struct() {
            Some(info) => Ok(Self::from_info(ty.clone(), info)),
            None => Err(TypeError::NotAStruct(ty.name().to_string())),
        }
    }

    pub(crate) fn from_info(ty: Type, info: &StructInfo) -> Self {
        let fields = info
            .fields()
            .iter()
            .map(|field| Value::default_for(field.ty()))
            .collect();
        Self { ty, fields }
    }

    /// The struct type.
    #[inline]
    pub fn ty(&self) -> &Type {
        &self.ty
    }

    /// The field values, inherited fields first.
    #[inline]
    pub fn fields(&self) -> &[Value] {
        &self.fields
    }

    /// The value of the field called `name`.
    pub fn get(&self, name: &str) -> Option<&Value> {
        let index = self.ty.as_struct()?.index_of(name)?;
        self.fields.get(index)
    }

    /// Writes the field called `name`. Returns `false` if there is no such
    /// field or the value does not fit its declared type.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> bool {
        match self.ty.property(name) {
            Some(property) => self.write(&property, value.into()),
            None => false,
        }
    }

    /// Builder form of [`set`](Self::set), ignoring refused values.
    #[inline]
    pub fn with(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    /// Reads a copy of `property`. The property may come from a base type.
    pub fn read(&self, property: &Property) -> Option<Value> {
        let field = self.ty.as_struct()?.field_at(property.index())?;
        if field.name() != property.name() {
            return None;
        }
        self.fields.get(property.index()).cloned()
    }

    /// Writes `value` into `property`. The property may come from a base type.
    pub fn write(&mut self, property: &Property, value: Value) -> bool {
        let Some(field) = self
            .ty
            .as_struct()
            .and_then(|info| info.field_at(property.index()))
        else {
            return false;
        };
        if field.name() != property.name() || !value.fits(field.ty()) {
            log::trace!(
                "`{}.{}` refused a value of type {:?}",
                self.ty,
                property.name(),
                value.value_type()
            );
            return false;
        }
        match self.fields.get_mut(property.index()) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }
}
