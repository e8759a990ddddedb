use alloc::borrow::Cow;
use alloc::string::ToString;
use alloc::vec::Vec;

use vp_utils::hash::HashMap;

use crate::TypeError;
use crate::info::{Type, TypeKind};

// -----------------------------------------------------------------------------
// FieldInfo

/// A named, typed field of a struct.
#[derive(Debug, Clone)]
pub struct FieldInfo {
    name: Cow<'static, str>,
    ty: Type,
}

impl FieldInfo {
    /// The field name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub(crate) fn name_cow(&self) -> &Cow<'static, str> {
        &self.name
    }

    /// The declared field type.
    #[inline]
    pub fn ty(&self) -> &Type {
        &self.ty
    }
}

// -----------------------------------------------------------------------------
// StructInfo

/// The fields of a struct type.
///
/// Inherited fields come first, in the base's order, so a field index
/// obtained on a base type is valid on every derived type.
#[derive(Debug, Clone)]
pub struct StructInfo {
    base: Option<Type>,
    fields: Vec<FieldInfo>,
    field_indices: HashMap<Cow<'static, str>, usize>,
}

impl StructInfo {
    /// The base struct, if any.
    #[inline]
    pub fn base(&self) -> Option<&Type> {
        self.base.as_ref()
    }

    /// The number of fields, inherited ones included.
    #[inline]
    pub fn field_len(&self) -> usize {
        self.fields.len()
    }

    /// All fields, inherited ones first.
    #[inline]
    pub fn fields(&self) -> &[FieldInfo] {
        &self.fields
    }

    /// The field at `index`.
    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&FieldInfo> {
        self.fields.get(index)
    }

    /// The field called `name`.
    #[inline]
    pub fn field(&self, name: &str) -> Option<&FieldInfo> {
        self.field_at(self.index_of(name)?)
    }

    /// The index of the field called `name`.
    #[inline]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.field_indices.get(name).copied()
    }
}

// -----------------------------------------------------------------------------
// StructBuilder

/// Builds a struct [`Type`].
///
/// # Examples
///
/// ```
/// use vp_reflect::info::{Primitive, StructBuilder};
///
/// let resource = StructBuilder::new("Resource")
///     .with_field("ID", Primitive::String)
///     .build()
///     .unwrap();
/// let image = StructBuilder::new("Image")
///     .with_base(resource)
///     .with_field("Width", Primitive::U32)
///     .with_field("Height", Primitive::U32)
///     .build()
///     .unwrap();
///
/// let info = image.as_struct().unwrap();
/// assert_eq!(info.field_len(), 3);
/// assert_eq!(info.index_of("ID"), Some(0));
/// assert!(image.property("Height").is_some());
/// ```
#[derive(Debug, Clone)]
pub struct StructBuilder {
    name: Cow<'static, str>,
    base: Option<Type>,
    fields: Vec<FieldInfo>,
}

impl StructBuilder {
    /// Starts a struct called `name`.
    #[inline]
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            base: None,
            fields: Vec::new(),
        }
    }

    /// Inherits every field of `base`.
    #[inline]
    pub fn with_base(mut self, base: Type) -> Self {
        self.base = Some(base);
        self
    }

    /// Declares a field.
    #[inline]
    pub fn with_field(mut self, name: impl Into<Cow<'static, str>>, ty: impl Into<Type>) -> Self {
        self.fields.push(FieldInfo {
            name: name.into(),
            ty: ty.into(),
        });
        self
    }

    /// Builds the type.
    ///
    /// # Errors
    ///
    /// - [`TypeError::BaseNotStruct`] if the base is not a struct.
    /// - [`TypeError::DuplicateField`] if a field name is declared twice,
    ///   or shadows an inherited field.
    pub fn build(self) -> Result<Type, TypeError> {
        let mut fields = match &self.base {
            None => Vec::with_capacity(self.fields.len()),
            Some(base) => match base.as_struct() {
                Some(info) => info.fields.clone(),
                None => {
                    return Err(TypeError::BaseNotStruct {
                        ty: self.name,
                        base: base.name().to_string(),
                    });
                }
            },
        };
        fields.extend(self.fields);

        let mut field_indices = HashMap::default();
        for (index, field) in fields.iter().enumerate() {
            if field_indices.insert(field.name.clone(), index).is_some() {
                return Err(TypeError::DuplicateField {
                    ty: self.name,
                    field: field.name.clone(),
                });
            }
        }

        let info = StructInfo {
            base: self.base,
            fields,
            field_indices,
        };
        Ok(Type::new(self.name, TypeKind::Struct(info)))
    }
}
