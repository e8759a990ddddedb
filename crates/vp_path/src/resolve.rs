//! Resolve a [`Path`] against a root object, read and write through it.

use alloc::borrow::Cow;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use core::ops::{Deref, DerefMut};

use crate::reflect::{
    PropertyOf, ReflectInstance, ReflectProperty, ReflectType, ReflectValue, TypeOf,
};
use crate::{InvalidPath, Path, PathError, Segment};

// -----------------------------------------------------------------------------
// Resolved element

/// The realization of one [`Segment`] against a concrete object graph.
///
/// Only the first element of a [`ResolvedPath`] is a [`Root`](Self::Root).
/// Every other element owns a copy of its parent context: the reflection layer
/// only reads by copy, and that copy is also the staging area a write is
/// applied to before it is handed to the level above.
///
/// `R` is the handle the root is held through, usually `&O` or `&mut O`.
pub enum ResolvedElement<O: ReflectInstance, R> {
    /// A property directly on the root object. Borrowed, never copied.
    Root {
        instance: R,
        property: PropertyOf<O::Value>,
    },
    /// A property on a copy of an intermediate object.
    Attribute {
        container: O::Value,
        property: PropertyOf<O::Value>,
    },
    /// A slot in a copy of an intermediate array.
    ArrayElement { container: O::Value, index: usize },
}

impl<O: ReflectInstance, R: Clone> Clone for ResolvedElement<O, R> {
    fn clone(&self) -> Self {
        match self {
            Self::Root { instance, property } => Self::Root {
                instance: instance.clone(),
                property: property.clone(),
            },
            Self::Attribute {
                container,
                property,
            } => Self::Attribute {
                container: container.clone(),
                property: property.clone(),
            },
            Self::ArrayElement { container, index } => Self::ArrayElement {
                container: container.clone(),
                index: *index,
            },
        }
    }
}

impl<O: ReflectInstance, R> fmt::Debug for ResolvedElement<O, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Root { property, .. } => f
                .debug_struct("Root")
                .field("property", &property.name())
                .finish_non_exhaustive(),
            Self::Attribute {
                container,
                property,
            } => f
                .debug_struct("Attribute")
                .field("container", container)
                .field("property", &property.name())
                .finish(),
            Self::ArrayElement { container, index } => f
                .debug_struct("ArrayElement")
                .field("container", container)
                .field("index", index)
                .finish(),
        }
    }
}

// -----------------------------------------------------------------------------
// Resolved path

/// A [`Path`] resolved against one root object.
///
/// Holds one [`ResolvedElement`] per segment, the first one always being
/// [`ResolvedElement::Root`]. The root stays borrowed through `R` for as long
/// as the resolved path lives, so the graph it walked cannot change underneath
/// it.
///
/// Any [`Deref`] handle to the root can be resolved, which is enough to read.
/// Writing needs a [`DerefMut`] handle such as `&mut O`. A path resolved
/// through a shared reference is [`Clone`].
///
/// Reads and writes can be repeated any number of times.
pub struct ResolvedPath<O: ReflectInstance, R> {
    elements: Vec<ResolvedElement<O, R>>,
}

impl<O: ReflectInstance, R: Clone> Clone for ResolvedPath<O, R> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            elements: self.elements.clone(),
        }
    }
}

impl<O: ReflectInstance, R> fmt::Debug for ResolvedPath<O, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.elements).finish()
    }
}

/// Resolves `path` against `root`.
///
/// Walks the segments left to right. The first segment must name a property
/// of the root's type; every later segment is looked up on a fresh copy of the
/// value addressed so far. Array bounds are not checked here, only when the
/// slot is read or written.
///
/// # Errors
///
/// - [`InvalidPath::Empty`] for an empty path.
/// - [`InvalidPath::MissingProperty`] if an attribute names no property.
/// - [`InvalidPath::EmptyContext`] if a segment is applied to the null value,
///   or if the path starts with an array index.
/// - [`InvalidPath::NotAnArray`] if an index is applied to a non-array value.
/// - [`PathError::IndexOutOfRange`] if an intermediate array slot does not exist.
///
/// No partially resolved path is ever returned.
pub fn resolve<O, R>(root: R, path: &Path) -> Result<ResolvedPath<O, R>, PathError>
where
    O: ReflectInstance,
    R: Deref<Target = O>,
{
    let result = resolve_internal(root, path);
    if let Err(err) = &result {
        log::debug!("failed to resolve `{path}`: {err}");
    }
    result
}

fn resolve_internal<O, R>(root: R, path: &Path) -> Result<ResolvedPath<O, R>, PathError>
where
    O: ReflectInstance,
    R: Deref<Target = O>,
{
    let mut segments = path.iter().enumerate();

    let property = match segments.next() {
        None => return Err(InvalidPath::Empty.into()),
        Some((_, Segment::ArrayElement(_))) => {
            return Err(InvalidPath::EmptyContext { segment: 0 }.into());
        }
        Some((_, Segment::Attribute(name))) => {
            let ty = root.instance_type();
            ty.property(name).ok_or_else(|| missing_property(0, name, &ty))?
        }
    };

    let mut elements = Vec::with_capacity(path.len());
    elements.push(ResolvedElement::Root {
        instance: root,
        property,
    });
    let mut resolved = ResolvedPath { elements };

    for (segment, step) in segments {
        let context = resolved.value()?;
        let Some(ty) = context.value_type() else {
            return Err(InvalidPath::EmptyContext { segment }.into());
        };

        let element = match step {
            Segment::Attribute(name) => {
                let property = ty
                    .property(name)
                    .ok_or_else(|| missing_property(segment, name, &ty))?;
                ResolvedElement::Attribute {
                    container: context,
                    property,
                }
            }
            &Segment::ArrayElement(index) => {
                if !context.is_array() {
                    return Err(InvalidPath::NotAnArray {
                        segment,
                        ty: ty.to_string(),
                    }
                    .into());
                }
                ResolvedElement::ArrayElement {
                    container: context,
                    index,
                }
            }
        };
        resolved.elements.push(element);
    }

    log::trace!("resolved `{path}` into {} elements", resolved.len());
    Ok(resolved)
}

fn missing_property<T: ReflectType>(
    segment: usize,
    name: &Cow<'static, str>,
    ty: &T,
) -> PathError {
    InvalidPath::MissingProperty {
        segment,
        name: name.clone(),
        ty: ty.to_string(),
    }
    .into()
}

fn type_name<T: ReflectType>(ty: Option<T>) -> String {
    match ty {
        Some(ty) => ty.to_string(),
        None => String::from("null"),
    }
}

impl<O: ReflectInstance, R: Deref<Target = O>> ResolvedPath<O, R> {
    /// Returns the number of elements, one per segment of the resolved path.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns the resolved elements, root first.
    #[inline]
    pub fn elements(&self) -> &[ResolvedElement<O, R>] {
        &self.elements
    }

    /// Returns the root object.
    pub fn root(&self) -> Option<&O> {
        match self.elements.first() {
            Some(ResolvedElement::Root { instance, .. }) => Some(&**instance),
            _ => None,
        }
    }

    /// Reads the value currently addressed by the path.
    ///
    /// Always returns a fresh copy. A path ending at the root reads the live
    /// root property, otherwise the value is read off the copy owned by the
    /// last element.
    ///
    /// # Errors
    ///
    /// [`PathError::IndexOutOfRange`] if the path ends at an array slot that
    /// does not exist.
    pub fn value(&self) -> Result<O::Value, PathError> {
        let segment = self.len().saturating_sub(1);
        match self.elements.last() {
            None => Err(InvalidPath::Empty.into()),
            Some(ResolvedElement::Root { instance, property }) => instance
                .get_property(property)
                .ok_or_else(|| {
                    unreadable(segment, property.name(), instance.instance_type().to_string())
                }),
            Some(ResolvedElement::Attribute {
                container,
                property,
            }) => container
                .get_property(property)
                .ok_or_else(|| {
                    unreadable(segment, property.name(), type_name(container.value_type()))
                }),
            Some(ResolvedElement::ArrayElement { container, index }) => {
                let len = container.array_len().unwrap_or(0);
                match container.array_get(*index) {
                    Some(value) if *index < len => Ok(value),
                    _ => Err(PathError::IndexOutOfRange {
                        segment,
                        index: *index,
                        len,
                    }),
                }
            }
        }
    }

    /// Returns the runtime type of [`value`](Self::value), `None` for the null value.
    #[inline]
    pub fn value_type(&self) -> Result<Option<TypeOf<O::Value>>, PathError> {
        Ok(self.value()?.value_type())
    }

    /// Returns the declared type of the addressed slot: the property type,
    /// or the element type of the array.
    pub fn declared_type(&self) -> Result<TypeOf<O::Value>, PathError> {
        let segment = self.len().saturating_sub(1);
        match self.elements.last() {
            None => Err(InvalidPath::Empty.into()),
            Some(
                ResolvedElement::Root { property, .. }
                | ResolvedElement::Attribute { property, .. },
            ) => Ok(property.property_type()),
            Some(ResolvedElement::ArrayElement { container, .. }) => {
                container.array_element_type().ok_or_else(|| {
                    InvalidPath::NotAnArray {
                        segment,
                        ty: type_name(container.value_type()),
                    }
                    .into()
                })
            }
        }
    }

    /// Returns the property of the innermost element that addresses one.
    ///
    /// For a path ending in array indices this is the property holding the
    /// outermost of those arrays. Always `Some` for a resolved path.
    pub fn property(&self) -> Option<&PropertyOf<O::Value>> {
        self.elements.iter().rev().find_map(|element| match element {
            ResolvedElement::Root { property, .. }
            | ResolvedElement::Attribute { property, .. } => Some(property),
            ResolvedElement::ArrayElement { .. } => None,
        })
    }
}

impl<O: ReflectInstance, R: DerefMut<Target = O>> ResolvedPath<O, R> {
    /// Writes `value` at the addressed location.
    ///
    /// The value is first coerced to the declared type of the slot (to the
    /// wrapped type if the slot is a wrapper), unless it is the null value.
    /// It is then written into the copy owned by the last element, that copy
    /// is written into the copy owned by the element before it, and so on
    /// until the root object's property is written directly.
    ///
    /// A failure at any step returns immediately. The root is written last,
    /// so it is only modified if every step succeeded.
    ///
    /// # Errors
    ///
    /// - [`PathError::TypeMismatch`] if the value cannot be coerced.
    /// - [`PathError::IndexOutOfRange`] if an array slot on the way does not exist.
    /// - [`PathError::WriteFailed`] if a slot refuses the value.
    ///
    /// # Examples
    ///
    /// See the crate-level documentation of `vp_core` for a complete example.
    pub fn set_value(&mut self, value: O::Value) -> Result<(), PathError> {
        let result = self.set_value_internal(value);
        if let Err(err) = &result {
            log::debug!("failed to write through resolved path: {err}");
        }
        result
    }

    fn set_value_internal(&mut self, mut value: O::Value) -> Result<(), PathError> {
        let declared = self.declared_type()?;
        coerce(&mut value, &declared)?;

        for (segment, element) in self.elements.iter_mut().enumerate().rev() {
            value = match element {
                ResolvedElement::Root { instance, property } => {
                    let staged = stage(&property.property_type(), value);
                    log::trace!("segment {segment}: writing root property `{}`", property.name());
                    if !instance.set_property(property, staged) {
                        return Err(PathError::WriteFailed { segment });
                    }
                    return Ok(());
                }
                ResolvedElement::Attribute {
                    container,
                    property,
                } => {
                    let staged = stage(&property.property_type(), value);
                    log::trace!(
                        "segment {segment}: writing property `{}` on a copy",
                        property.name()
                    );
                    if !container.set_property(property, staged) {
                        return Err(PathError::WriteFailed { segment });
                    }
                    container.clone()
                }
                ResolvedElement::ArrayElement { container, index } => {
                    let index = *index;
                    let len = container.array_len().unwrap_or(0);
                    if index >= len {
                        return Err(PathError::IndexOutOfRange {
                            segment,
                            index,
                            len,
                        });
                    }
                    let staged = match container.array_element_type() {
                        Some(element_type) => stage(&element_type, value),
                        None => value,
                    };
                    log::trace!("segment {segment}: writing array slot {index} on a copy");
                    if !container.array_set(index, staged) {
                        return Err(PathError::WriteFailed { segment });
                    }
                    container.clone()
                }
            };
        }

        // Only reachable without a root element, i.e. for an empty chain.
        Err(InvalidPath::Empty.into())
    }
}

fn unreadable(segment: usize, name: &str, ty: String) -> PathError {
    InvalidPath::MissingProperty {
        segment,
        name: Cow::Owned(String::from(name)),
        ty,
    }
    .into()
}

/// Makes `value` compatible with a slot declared as `target`.
///
/// The null value is left as is. A value of a different type is converted
/// to the wrapped type if `target` is a wrapper, to `target` otherwise.
fn coerce<V: ReflectValue>(value: &mut V, target: &V::Type) -> Result<(), PathError> {
    if value.is_null() {
        return Ok(());
    }
    let found = value.value_type();
    if found.as_ref() == Some(target) {
        return Ok(());
    }

    let goal = match target.wrapped_type() {
        Some(wrapped) if target.is_wrapper() => wrapped,
        _ => target.clone(),
    };
    if value.convert_to(&goal) {
        return Ok(());
    }

    Err(PathError::TypeMismatch {
        expected: goal.to_string(),
        found: type_name(found),
    })
}

/// The value actually written into a slot declared as `slot`:
/// the null value becomes the slot's null pointer if the slot holds pointers.
fn stage<V: ReflectValue>(slot: &V::Type, value: V) -> V {
    if value.is_null() && slot.is_pointer_like() {
        V::null_pointer(slot)
    } else {
        value
    }
}
