//! Property paths over reflected object graphs.
//!
//! A [`Path`](path::Path) such as `"Materials/0/Color"` addresses one slot
//! inside a root object. Resolving it against the root records every step,
//! and writing through the resolved path propagates the new value from the
//! leaf back to the root, because every intermediate value is a copy.
//!
//! - [`path`]: the path type and the generic resolver.
//! - [`reflect`]: a dynamic reflection layer the resolver can address.
//! - [`utils`]: shared containers.
//!
//! # Examples
//!
//! ```
//! use vp_core::path::{Path, PathErrorKind};
//! use vp_core::reflect::info::{Primitive, StructBuilder, Type};
//! use vp_core::reflect::value::{ArrayValue, Object, Value};
//!
//! let material = StructBuilder::new("Material")
//!     .with_field("Color", Primitive::U32)
//!     .build()
//!     .unwrap();
//! let model = StructBuilder::new("Model")
//!     .with_field("Materials", Type::array(material.clone()))
//!     .build()
//!     .unwrap();
//!
//! let mut model = Object::new("model", &model).unwrap();
//! model.set("Materials", ArrayValue::new(material.clone()).with(Value::default_for(&material)));
//!
//! let path = Path::parse("Materials/0/Color");
//! path.set_value(&mut model, Value::U32(0xFF00FF)).unwrap();
//! assert_eq!(path.get_value(&model).unwrap(), Value::U32(0xFF00FF));
//!
//! let err = Path::parse("Materials/1/Color").get_value(&model).unwrap_err();
//! assert_eq!(err.kind(), PathErrorKind::IndexOutOfRange);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use vp_path as path;
pub use vp_reflect as reflect;
pub use vp_utils as utils;
