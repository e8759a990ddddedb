//! Runtime type descriptions.
//!
//! - [`Type`]: a cheap, shared handle to a [`TypeInfo`]. Two handles are
//!   equal when they name the same type.
//! - [`TypeKind`]: primitive, struct, array, pointer or wrapper.
//! - [`StructInfo`] / [`StructBuilder`]: named fields, with single inheritance.
//! - [`Property`]: a named, typed slot on a struct type.

// -----------------------------------------------------------------------------
// Modules

mod property;
mod struct_info;
mod type_info;

// -----------------------------------------------------------------------------
// Exports

pub use property::Property;
pub use struct_info::{FieldInfo, StructBuilder, StructInfo};
pub use type_info::{Primitive, Type, TypeInfo, TypeKind};
