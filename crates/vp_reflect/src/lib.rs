//! A dynamic reflection layer that [`vp_path`] paths can address.
//!
//! Types are described at runtime ([`info`]), values carry their type with
//! them ([`value`]), and a [`registry::TypeRegistry`] looks types up by name.
//!
//! Values follow the rule the path engine is built around: a read always
//! returns an independent copy. Struct and array values are owned and deep
//! cloned; only [`ObjectPtr`](value::ObjectPtr) shares data, and it only
//! shares immutable objects.
//!
//! # Examples
//!
//! ```
//! use vp_path::Path;
//! use vp_reflect::info::{Primitive, StructBuilder, Type};
//! use vp_reflect::value::{ArrayValue, Object, Value};
//!
//! let light = StructBuilder::new("Light")
//!     .with_field("Intensity", Primitive::F32)
//!     .build()
//!     .unwrap();
//! let scene = StructBuilder::new("Scene")
//!     .with_field("Lights", Type::array(light.clone()))
//!     .build()
//!     .unwrap();
//!
//! let mut lights = ArrayValue::new(light.clone());
//! lights.push(Value::default_for(&light));
//!
//! let mut root = Object::new("scene", &scene).unwrap();
//! assert!(root.set("Lights", lights));
//!
//! let path = Path::parse("Lights/0/Intensity");
//! path.set_value(&mut root, Value::from(2.5_f32)).unwrap();
//! assert_eq!(path.get_value(&root).unwrap(), Value::F32(2.5));
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// no_std support

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod access;
mod error;

pub mod info;
pub mod registry;
pub mod value;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use error::TypeError;

#[doc(hidden)]
pub mod __macro_exports {
    #[cfg(feature = "auto_register")]
    pub use inventory;
}
