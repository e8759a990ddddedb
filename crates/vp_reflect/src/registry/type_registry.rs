use alloc::string::{String, ToString};

use vp_utils::hash::HashMap;
use vp_utils::hash::hashbrown::hash_map;

use crate::TypeError;
use crate::info::{Primitive, Type};

// -----------------------------------------------------------------------------
// TypeRegistry

/// A store of [`Type`]s keyed by their unique name.
///
/// # Examples
///
/// ```
/// use vp_reflect::info::{Primitive, StructBuilder, Type};
/// use vp_reflect::registry::TypeRegistry;
///
/// let mut registry = TypeRegistry::new();
/// assert_eq!(registry.get("f32"), Some(&Type::from(Primitive::F32)));
///
/// let player = StructBuilder::new("Player")
///     .with_field("Score", Primitive::U64)
///     .build()
///     .unwrap();
/// registry.register(player).unwrap();
///
/// assert!(registry.contains("Player"));
/// assert!(registry.register(Primitive::U64.into()).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    types: HashMap<String, Type>,
}

impl Default for TypeRegistry {
    /// See [`TypeRegistry::new`].
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl TypeRegistry {
    /// Creates an empty registry.
    #[inline]
    pub fn empty() -> Self {
        Self {
            types: HashMap::default(),
        }
    }

    /// Creates a registry holding every [`Primitive`].
    pub fn new() -> Self {
        let mut registry = Self::empty();
        for primitive in Primitive::ALL {
            registry
                .types
                .insert(primitive.name().to_string(), primitive.into());
        }
        registry
    }

    /// Adds `ty`.
    ///
    /// # Errors
    ///
    /// [`TypeError::DuplicateType`] if a type with the same name exists.
    /// The registry is left unchanged.
    pub fn register(&mut self, ty: Type) -> Result<(), TypeError> {
        match self.types.entry(ty.name().to_string()) {
            hash_map::Entry::Occupied(_) => Err(TypeError::DuplicateType(ty.name().to_string())),
            hash_map::Entry::Vacant(entry) => {
                log::trace!("registered type `{ty}`");
                entry.insert(ty);
                Ok(())
            }
        }
    }

    /// Adds `ty`, **overwriting** a type with the same name.
    ///
    /// Returns the replaced type.
    pub fn insert(&mut self, ty: Type) -> Option<Type> {
        let old = self.types.insert(ty.name().to_string(), ty);
        if let Some(old) = &old {
            log::warn!("type `{old}` was registered twice, the last definition wins");
        }
        old
    }

    /// Returns the type called `name`.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&Type> {
        self.types.get(name)
    }

    /// Returns `true` if a type called `name` is registered.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Removes and returns the type called `name`.
    #[inline]
    pub fn remove(&mut self, name: &str) -> Option<Type> {
        self.types.remove(name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Iterates over the registered types, in no particular order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Type> {
        self.types.values()
    }

    /// Registers every type submitted with [`submit_type!`](crate::submit_type).
    ///
    /// Returns the number of newly registered types. Types whose name is
    /// already taken are skipped, and constructors that fail are logged and
    /// skipped, so calling this more than once is harmless.
    ///
    /// ## Feature Dependency
    ///
    /// Requires the `auto_register` feature. When disabled, it does nothing
    /// and returns `0`.
    #[cfg(feature = "auto_register")]
    pub fn auto_register(&mut self) -> usize {
        use crate::registry::TypeRegistration;

        let mut count = 0;
        for registration in inventory::iter::<TypeRegistration> {
            match registration.build() {
                Ok(ty) => {
                    if self.register(ty).is_ok() {
                        count += 1;
                    }
                }
                Err(err) => log::error!("auto registration failed: {err}"),
            }
        }
        log::debug!("auto registered {count} types");
        count
    }

    /// Registers every type submitted with [`submit_type!`](crate::submit_type).
    ///
    /// Without the `auto_register` feature this does nothing and returns `0`.
    #[cfg(not(feature = "auto_register"))]
    #[inline(always)]
    pub fn auto_register(&mut self) -> usize {
        0
    }
}

impl<'a> IntoIterator for &'a TypeRegistry {
    type Item = &'a Type;
    type IntoIter = hash_map::Values<'a, String, Type>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.types.values()
    }
}
