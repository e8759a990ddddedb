use crate::TypeError;
use crate::info::Type;

/// A type constructor collected by [`TypeRegistry::auto_register`].
///
/// Submit one with [`submit_type!`](crate::submit_type).
///
/// [`TypeRegistry::auto_register`]: crate::registry::TypeRegistry::auto_register
#[derive(Debug, Clone, Copy)]
pub struct TypeRegistration {
    build: fn() -> Result<Type, TypeError>,
}

impl TypeRegistration {
    #[inline]
    pub const fn new(build: fn() -> Result<Type, TypeError>) -> Self {
        Self { build }
    }

    /// Runs the constructor.
    #[inline]
    pub fn build(&self) -> Result<Type, TypeError> {
        (self.build)()
    }
}

#[cfg(feature = "auto_register")]
inventory::collect!(TypeRegistration);

/// Submits a type constructor for [`TypeRegistry::auto_register`].
///
/// The argument is a `fn() -> Result<Type, TypeError>`.
///
/// # Examples
///
/// ```
/// use vp_reflect::TypeError;
/// use vp_reflect::info::{Primitive, StructBuilder, Type};
/// use vp_reflect::registry::TypeRegistry;
///
/// fn health() -> Result<Type, TypeError> {
///     StructBuilder::new("Health")
///         .with_field("Current", Primitive::F32)
///         .with_field("Max", Primitive::F32)
///         .build()
/// }
///
/// vp_reflect::submit_type!(health);
///
/// fn main() {
///     let mut registry = TypeRegistry::new();
///     registry.auto_register();
///     #[cfg(feature = "auto_register")]
///     assert!(registry.contains("Health"));
/// }
/// ```
///
/// [`TypeRegistry::auto_register`]: crate::registry::TypeRegistry::auto_register
#[cfg(feature = "auto_register")]
#[macro_export]
macro_rules! submit_type {
    ($build:expr) => {
        $crate::__macro_exports::inventory::submit! {
            $crate::registry::TypeRegistration::new($build)
        }
    };
}

/// Does nothing without the `auto_register` feature.
#[cfg(not(feature = "auto_register"))]
#[macro_export]
macro_rules! submit_type {
    ($build:expr) => {
        const _: fn() -> ::core::result::Result<$crate::info::Type, $crate::TypeError> = $build;
    };
}
