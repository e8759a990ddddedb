use alloc::borrow::Cow;
use alloc::format;
use alloc::string::ToString;
use alloc::sync::Arc;
use core::fmt;
use core::hash::{Hash, Hasher};

use crate::TypeError;
use crate::info::{Property, StructInfo};

// -----------------------------------------------------------------------------
// Primitive

/// Built-in scalar types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Bool,
    I32,
    I64,
    U32,
    U64,
    F32,
    F64,
    String,
}

impl Primitive {
    /// Every primitive, in declaration order.
    pub const ALL: [Primitive; 8] = [
        Self::Bool,
        Self::I32,
        Self::I64,
        Self::U32,
        Self::U64,
        Self::F32,
        Self::F64,
        Self::String,
    ];

    /// The type name, e.g. `"i32"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::String => "String",
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

// -----------------------------------------------------------------------------
// TypeKind

/// The shape of a type.
#[derive(Debug, Clone)]
pub enum TypeKind {
    /// A scalar.
    Primitive(Primitive),
    /// Named fields, see [`StructInfo`].
    Struct(StructInfo),
    /// A homogeneous, resizable sequence of the element type.
    Array(Type),
    /// A shared pointer to an object of the pointee struct type,
    /// or of a struct derived from it.
    Pointer(Type),
    /// A transparent box around the wrapped type, e.g. a smart pointer.
    ///
    /// A wrapper slot stores values of the wrapped type.
    Wrapper(Type),
}

// -----------------------------------------------------------------------------
// TypeInfo

/// The description of one type: its name and its [`TypeKind`].
#[derive(Debug, Clone)]
pub struct TypeInfo {
    name: Cow<'static, str>,
    kind: TypeKind,
}

impl TypeInfo {
    /// The unique type name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The shape of the type.
    #[inline]
    pub fn kind(&self) -> &TypeKind {
        &self.kind
    }
}

// -----------------------------------------------------------------------------
// Type

/// A shared handle to a [`TypeInfo`].
///
/// Type names are unique: equality and hashing only look at the name, so
/// handles built separately for the same type compare equal.
///
/// # Examples
///
/// ```
/// use vp_reflect::info::{Primitive, Type};
///
/// let floats = Type::array(Primitive::F32.into());
/// assert_eq!(floats.name(), "f32[]");
/// assert_eq!(floats.element_type(), Some(&Type::from(Primitive::F32)));
/// assert_eq!(floats, Type::array(Primitive::F32.into()));
/// ```
#[derive(Clone)]
pub struct Type(Arc<TypeInfo>);

impl Type {
    #[inline]
    pub(crate) fn new(name: impl Into<Cow<'static, str>>, kind: TypeKind) -> Self {
        Self(Arc::new(TypeInfo {
            name: name.into(),
            kind,
        }))
    }

    /// A primitive type.
    #[inline]
    pub fn primitive(primitive: Primitive) -> Self {
        Self::new(primitive.name(), TypeKind::Primitive(primitive))
    }

    /// An array of `element`, named `element[]`.
    pub fn array(element: Type) -> Self {
        Self::new(format!("{}[]", element.name()), TypeKind::Array(element))
    }

    /// A pointer to `pointee`, named `pointee*`.
    ///
    /// # Errors
    ///
    /// [`TypeError::PointeeNotStruct`] if `pointee` is not a struct.
    pub fn pointer(pointee: Type) -> Result<Self, TypeError> {
        if pointee.as_struct().is_none() {
            return Err(TypeError::PointeeNotStruct(pointee.name().to_string()));
        }
        Ok(Self::pointer_unchecked(pointee))
    }

    pub(crate) fn pointer_unchecked(pointee: Type) -> Self {
        Self::new(format!("{}*", pointee.name()), TypeKind::Pointer(pointee))
    }

    /// A wrapper called `name` around `wrapped`.
    ///
    /// # Examples
    ///
    /// ```
    /// use vp_reflect::info::{StructBuilder, Type};
    ///
    /// let mesh = StructBuilder::new("Mesh").build().unwrap();
    /// let handle = Type::wrapper("ResourcePtr<Mesh>", Type::pointer(mesh).unwrap());
    ///
    /// assert!(handle.is_wrapper());
    /// assert!(handle.is_pointer_like());
    /// assert!(!handle.is_pointer());
    /// ```
    #[inline]
    pub fn wrapper(name: impl Into<Cow<'static, str>>, wrapped: Type) -> Self {
        Self::new(name, TypeKind::Wrapper(wrapped))
    }

    /// The full description.
    #[inline]
    pub fn info(&self) -> &TypeInfo {
        &self.0
    }

    /// The unique type name.
    #[inline]
    pub fn name(&self) -> &str {
        self.0.name()
    }

    /// The shape of the type.
    #[inline]
    pub fn kind(&self) -> &TypeKind {
        self.0.kind()
    }

    /// Returns the struct description if this is a struct.
    #[inline]
    pub fn as_struct(&self) -> Option<&StructInfo> {
        match self.kind() {
            TypeKind::Struct(info) => Some(info),
            _ => None,
        }
    }

    /// Returns the primitive if this is a primitive.
    #[inline]
    pub fn as_primitive(&self) -> Option<Primitive> {
        match self.kind() {
            TypeKind::Primitive(primitive) => Some(*primitive),
            _ => None,
        }
    }

    /// Returns the element type if this is an array.
    #[inline]
    pub fn element_type(&self) -> Option<&Type> {
        match self.kind() {
            TypeKind::Array(element) => Some(element),
            _ => None,
        }
    }

    /// Returns the pointee type if this is a pointer.
    #[inline]
    pub fn pointee_type(&self) -> Option<&Type> {
        match self.kind() {
            TypeKind::Pointer(pointee) => Some(pointee),
            _ => None,
        }
    }

    /// Returns the wrapped type if this is a wrapper.
    #[inline]
    pub fn wrapped(&self) -> Option<&Type> {
        match self.kind() {
            TypeKind::Wrapper(wrapped) => Some(wrapped),
            _ => None,
        }
    }

    /// Returns `true` for [`TypeKind::Array`].
    #[inline]
    pub fn is_array(&self) -> bool {
        matches!(self.kind(), TypeKind::Array(_))
    }

    /// Returns `true` for [`TypeKind::Pointer`].
    #[inline]
    pub fn is_pointer(&self) -> bool {
        matches!(self.kind(), TypeKind::Pointer(_))
    }

    /// Returns `true` for [`TypeKind::Wrapper`].
    #[inline]
    pub fn is_wrapper(&self) -> bool {
        matches!(self.kind(), TypeKind::Wrapper(_))
    }

    /// Returns `true` if the type is a pointer, or wraps one.
    #[inline]
    pub fn is_pointer_like(&self) -> bool {
        match self.wrapped() {
            Some(wrapped) => wrapped.is_pointer(),
            None => self.is_pointer(),
        }
    }

    /// Returns the type itself with every wrapper layer removed.
    pub fn unwrapped(&self) -> &Type {
        let mut ty = self;
        while let Some(wrapped) = ty.wrapped() {
            ty = wrapped;
        }
        ty
    }

    /// Returns `true` if both handles describe the same type.
    ///
    /// `==` only compares names. This also compares the shape: field names
    /// and field types of structs, element and pointee types, wrapped types.
    /// Two separately built types with the same name but different fields are
    /// not the same layout.
    pub fn same_layout(&self, other: &Type) -> bool {
        if Arc::ptr_eq(&self.0, &other.0) {
            return true;
        }
        if self.name() != other.name() {
            return false;
        }
        match (self.kind(), other.kind()) {
            (TypeKind::Primitive(a), TypeKind::Primitive(b)) => a == b,
            (TypeKind::Struct(a), TypeKind::Struct(b)) => {
                a.base().map(Type::name) == b.base().map(Type::name)
                    && a.field_len() == b.field_len()
                    && a.fields().iter().zip(b.fields()).all(|(left, right)| {
                        left.name() == right.name() && left.ty().same_layout(right.ty())
                    })
            }
            (TypeKind::Array(a), TypeKind::Array(b))
            | (TypeKind::Pointer(a), TypeKind::Pointer(b))
            | (TypeKind::Wrapper(a), TypeKind::Wrapper(b)) => a.same_layout(b),
            _ => false,
        }
    }

    /// Returns `true` if `self` is `base` or a struct derived from it.
    pub fn is_derived_from(&self, base: &Type) -> bool {
        let mut ty = self;
        loop {
            if ty.same_layout(base) {
                return true;
            }
            match ty.as_struct().and_then(StructInfo::base) {
                Some(parent) => ty = parent,
                None => return false,
            }
        }
    }

    /// Looks up a property by name, inherited fields included.
    ///
    /// Only structs have properties.
    pub fn property(&self, name: &str) -> Option<Property> {
        let info = self.as_struct()?;
        let index = info.index_of(name)?;
        let field = info.field_at(index)?;
        Some(Property::new(field.name_cow().clone(), field.ty().clone(), index))
    }
}

impl From<Primitive> for Type {
    #[inline]
    fn from(primitive: Primitive) -> Self {
        Self::primitive(primitive)
    }
}

impl PartialEq for Type {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.name() == other.name()
    }
}

impl Eq for Type {}

impl Hash for Type {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name().hash(state);
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Type({})", self.name())
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::{Primitive, Type};
    use crate::info::StructBuilder;

    #[test]
    fn names() {
        let vec3 = StructBuilder::new("Vec3").build().unwrap();
        assert_eq!(Type::array(vec3.clone()).name(), "Vec3[]");
        assert_eq!(Type::pointer(vec3.clone()).unwrap().name(), "Vec3*");
        assert_eq!(Type::array(Type::array(Primitive::U32.into())).name(), "u32[][]");
    }

    #[test]
    fn pointer_requires_struct() {
        assert!(Type::pointer(Primitive::I32.into()).is_err());
    }

    #[test]
    fn inheritance_chain() {
        let object = StructBuilder::new("Object").build().unwrap();
        let resource = StructBuilder::new("Resource")
            .with_base(object.clone())
            .build()
            .unwrap();
        let texture = StructBuilder::new("Texture")
            .with_base(resource.clone())
            .build()
            .unwrap();

        assert!(texture.is_derived_from(&texture));
        assert!(texture.is_derived_from(&object));
        assert!(!object.is_derived_from(&texture));
        assert!(!resource.is_derived_from(&Primitive::Bool.into()));
    }

    #[test]
    fn pointer_like_through_wrapper() {
        let mesh = StructBuilder::new("Mesh").build().unwrap();
        let ptr = Type::pointer(mesh).unwrap();
        let wrapped = Type::wrapper("ObjectPtr<Mesh>", ptr.clone());

        assert!(ptr.is_pointer_like());
        assert!(wrapped.is_pointer_like());
        assert_eq!(wrapped.unwrapped(), &ptr);
        assert!(!Type::wrapper("Box<i32>", Primitive::I32.into()).is_pointer_like());
    }

    #[test]
    fn layout_goes_beyond_the_name() {
        let a = StructBuilder::new("A")
            .with_field("X", Primitive::I32)
            .build()
            .unwrap();
        let rebuilt = StructBuilder::new("A")
            .with_field("X", Primitive::I32)
            .build()
            .unwrap();
        let other = StructBuilder::new("A")
            .with_field("Y", Primitive::String)
            .build()
            .unwrap();

        assert_eq!(a, other);
        assert!(a.same_layout(&rebuilt));
        assert!(!a.same_layout(&other));
        assert!(Type::array(a.clone()).same_layout(&Type::array(rebuilt)));
        assert!(!Type::array(a.clone()).same_layout(&Type::array(other.clone())));
        assert!(!Type::pointer(other).unwrap().is_derived_from(&a));
    }
}
