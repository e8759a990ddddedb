//! Name-keyed storage of [`Type`](crate::info::Type)s.
//!
//! - [`TypeRegistry`]: looks types up by their unique name.
//! - [`TypeRegistration`]: a type constructor submitted with [`submit_type!`].
//!
//! ## auto_register
//!
//! See [`TypeRegistry::auto_register`].
//!
//! Static registration is implemented with the [`inventory`] crate. Not every
//! platform supports it; where it is missing nothing is collected.
//!
//! [`submit_type!`]: crate::submit_type
//! [`inventory`]: https://docs.rs/inventory

// -----------------------------------------------------------------------------
// Modules

mod auto_register;
mod type_registry;

// -----------------------------------------------------------------------------
// Exports

pub use auto_register::TypeRegistration;
pub use type_registry::TypeRegistry;
