//! Property-path addressing and mutation over a runtime reflection layer.
//!
//! A [`Path`] names a location inside a nested object graph: a property,
//! nested inside a property, nested inside an array slot, to arbitrary depth.
//! It knows nothing about any object graph and can be reused across roots.
//!
//! [`Path::resolve`] walks a path against one concrete root and produces a
//! [`ResolvedPath`], which reads the addressed value and writes a new one back.
//!
//! # Values are only reachable by copy
//!
//! The reflection layer this crate sits on (see [`reflect`]) never hands out
//! a reference to a property slot: every read returns an independent copy.
//! So a write to a nested location is staged on copies and propagated from
//! the leaf back to the root:
//!
//! - the new value is written into a copy of its parent object,
//! - that modified copy is written into a copy of *its* parent,
//! - and so on, until the root object's real property slot is reached.
//!
//! The root is the only element that is borrowed rather than copied. A write
//! that fails partway never reaches it, so the root object is either fully
//! updated or left untouched.
//!
//! # Textual form
//!
//! `segment ("/" segment)*`, where a segment is an attribute name or a
//! decimal array index, e.g. `Materials/0/Uniforms/Color`.
//!
//! A token that parses as a non-negative integer is *always* an array index,
//! so an attribute whose name is made of digits only cannot be written in
//! the textual form. This ambiguity is kept as is; there is no escaping.
//!
//! # Examples
//!
//! ```
//! use vp_path::{Path, Segment};
//!
//! let path = Path::parse("Materials/0/Uniforms/Color");
//! assert_eq!(path.len(), 4);
//! assert_eq!(path[1], Segment::ArrayElement(0));
//! assert_eq!(path.to_string(), "Materials/0/Uniforms/Color");
//!
//! let built = Path::new()
//!     .with_attribute("Materials")
//!     .with_array_element(0)
//!     .with_attribute("Uniforms")
//!     .with_attribute("Color");
//! assert_eq!(built, path);
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

mod error;
mod path;
mod resolve;

pub mod reflect;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use error::{InvalidPath, PathError, PathErrorKind};
pub use path::{Path, SEPARATOR, Segment};
pub use resolve::{ResolvedElement, ResolvedPath, resolve};
