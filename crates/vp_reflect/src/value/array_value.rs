use alloc::vec::Vec;
use core::slice;

use crate::info::Type;
use crate::value::Value;

/// An owned, homogeneous, resizable array.
///
/// Every element fits the declared element type.
///
/// # Examples
///
/// ```
/// use vp_reflect::info::Primitive;
/// use vp_reflect::value::{ArrayValue, Value};
///
/// let mut weights = ArrayValue::new(Primitive::F64.into());
/// assert!(weights.push(0.25_f64));
/// assert!(!weights.push(1_u32));
///
/// assert!(weights.set(0, 0.5_f64));
/// assert!(!weights.set(1, 0.5_f64)); // out of bounds
/// assert_eq!(weights.get(0), Some(&Value::F64(0.5)));
/// assert_eq!(weights.ty().name(), "f64[]");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayValue {
    ty: Type,
    element: Type,
    items: Vec<Value>,
}

impl ArrayValue {
    /// Creates an empty array of `element`.
    pub fn new(element: Type) -> Self {
        Self {
            ty: Type::array(element.clone()),
            element,
            items: Vec::new(),
        }
    }

    /// The array type.
    #[inline]
    pub fn ty(&self) -> &Type {
        &self.ty
    }

    /// The declared element type.
    #[inline]
    pub fn element_type(&self) -> &Type {
        &self.element
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Value> {
        self.items.iter()
    }

    /// Replaces the element at `index`. Returns `false` if the index is out
    /// of bounds or the value does not fit the element type.
    pub fn set(&mut self, index: usize, value: impl Into<Value>) -> bool {
        let value = value.into();
        if !value.fits(&self.element) {
            return false;
        }
        match self.items.get_mut(index) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Appends an element. Returns `false` if it does not fit the element type.
    pub fn push(&mut self, value: impl Into<Value>) -> bool {
        let value = value.into();
        if !value.fits(&self.element) {
            return false;
        }
        self.items.push(value);
        true
    }

    /// Removes and returns the element at `index`.
    pub fn remove(&mut self, index: usize) -> Option<Value> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    /// Builder form of [`push`](Self::push), ignoring refused values.
    #[inline]
    pub fn with(mut self, value: impl Into<Value>) -> Self {
        self.push(value);
        self
    }
}

impl<'a> IntoIterator for &'a ArrayValue {
    type Item = &'a Value;
    type IntoIter = slice::Iter<'a, Value>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::ArrayValue;
    use crate::info::Primitive;
    use crate::value::Value;

    #[test]
    fn remove_and_len() {
        let mut names = ArrayValue::new(Primitive::String.into())
            .with("a")
            .with("b")
            .with(3_i32);
        assert_eq!(names.len(), 2);

        assert_eq!(names.remove(0), Some(Value::from("a")));
        assert_eq!(names.remove(5), None);
        assert_eq!(names.iter().collect::<alloc::vec::Vec<_>>(), [&Value::from("b")]);
    }
}
