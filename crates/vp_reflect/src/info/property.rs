use alloc::borrow::Cow;

use crate::info::Type;

/// A named, typed slot on a struct type.
///
/// Obtained through [`Type::property`]. The slot index is shared by the
/// declaring struct and every struct derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Property {
    name: Cow<'static, str>,
    ty: Type,
    index: usize,
}

impl Property {
    #[inline]
    pub(crate) fn new(name: Cow<'static, str>, ty: Type, index: usize) -> Self {
        Self { name, ty, index }
    }

    /// The property name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared type of the slot.
    #[inline]
    pub fn ty(&self) -> &Type {
        &self.ty
    }

    /// The slot index in the struct's field list.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }
}
