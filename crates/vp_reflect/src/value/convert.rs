use alloc::string::{String, ToString};

use crate::info::{Primitive, Type};
use crate::value::Value;

/// A scalar widened to the largest representation of its family.
#[derive(Clone, Copy)]
enum Scalar<'a> {
    Bool(bool),
    Int(i128),
    Float(f64),
    Str(&'a str),
}

impl<'a> Scalar<'a> {
    fn of(value: &'a Value) -> Option<Self> {
        Some(match value {
            Value::Bool(v) => Self::Bool(*v),
            Value::I32(v) => Self::Int(i128::from(*v)),
            Value::I64(v) => Self::Int(i128::from(*v)),
            Value::U32(v) => Self::Int(i128::from(*v)),
            Value::U64(v) => Self::Int(i128::from(*v)),
            Value::F32(v) => Self::Float(f64::from(*v)),
            Value::F64(v) => Self::Float(*v),
            Value::String(v) => Self::Str(v.trim()),
            Value::Null | Value::Struct(_) | Value::Array(_) | Value::Pointer(_) => return None,
        })
    }

    fn to_bool(self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(v),
            Self::Int(v) => Some(v != 0),
            Self::Float(v) => (!v.is_nan()).then_some(v != 0.0),
            Self::Str(v) => v.parse().ok(),
        }
    }

    /// Floats are truncated toward zero. NaN and infinities have no integer.
    fn to_int(self) -> Option<i128> {
        match self {
            Self::Bool(v) => Some(i128::from(v)),
            Self::Int(v) => Some(v),
            Self::Float(v) => v.is_finite().then_some(v as i128),
            Self::Str(v) => match v.parse::<i128>() {
                Ok(int) => Some(int),
                Err(_) => Self::Float(v.parse().ok()?).to_int(),
            },
        }
    }

    fn to_float(self) -> Option<f64> {
        match self {
            Self::Bool(v) => Some(if v { 1.0 } else { 0.0 }),
            Self::Int(v) => Some(v as f64),
            Self::Float(v) => Some(v),
            Self::Str(v) => v.parse().ok(),
        }
    }
}

fn narrow(value: f64) -> Option<f32> {
    let narrowed = value as f32;
    // A finite value that overflows f32 is out of range.
    (narrowed.is_finite() || !value.is_finite()).then_some(narrowed)
}

fn to_text(value: &Value) -> Option<String> {
    Some(match value {
        Value::Bool(v) => v.to_string(),
        Value::I32(v) => v.to_string(),
        Value::I64(v) => v.to_string(),
        Value::U32(v) => v.to_string(),
        Value::U64(v) => v.to_string(),
        Value::F32(v) => v.to_string(),
        Value::F64(v) => v.to_string(),
        Value::String(v) => v.clone(),
        Value::Null | Value::Struct(_) | Value::Array(_) | Value::Pointer(_) => return None,
    })
}

impl Value {
    /// Returns this value converted to `ty`, or `None` if no conversion exists.
    ///
    /// - A value that already [`fits`](Value::fits) is returned unchanged.
    /// - Scalars convert between each other: integer targets are range
    ///   checked, floats are truncated, strings are parsed after trimming.
    /// - Every scalar converts to `String`.
    /// - Wrapper targets convert to the wrapped type.
    /// - Null never converts. Structs, arrays and pointers only convert to a
    ///   type they already fit.
    ///
    /// # Examples
    ///
    /// ```
    /// use vp_reflect::info::{Primitive, Type};
    /// use vp_reflect::value::Value;
    ///
    /// let unsigned = Type::from(Primitive::U32);
    /// assert_eq!(Value::I64(7).converted(&unsigned), Some(Value::U32(7)));
    /// assert_eq!(Value::I64(-7).converted(&unsigned), None);
    ///
    /// let float = Type::from(Primitive::F32);
    /// assert_eq!(Value::from(" 1.5 ").converted(&float), Some(Value::F32(1.5)));
    ///
    /// let text = Type::from(Primitive::String);
    /// assert_eq!(Value::Bool(true).converted(&text), Some(Value::from("true")));
    /// ```
    pub fn converted(&self, ty: &Type) -> Option<Value> {
        if self.is_null() {
            return None;
        }
        if self.fits(ty) {
            return Some(self.clone());
        }

        let primitive = ty.unwrapped().as_primitive()?;
        let scalar = Scalar::of(self)?;
        match primitive {
            Primitive::Bool => scalar.to_bool().map(Value::Bool),
            Primitive::I32 => scalar.to_int().and_then(|v| v.try_into().ok()).map(Value::I32),
            Primitive::I64 => scalar.to_int().and_then(|v| v.try_into().ok()).map(Value::I64),
            Primitive::U32 => scalar.to_int().and_then(|v| v.try_into().ok()).map(Value::U32),
            Primitive::U64 => scalar.to_int().and_then(|v| v.try_into().ok()).map(Value::U64),
            Primitive::F32 => scalar.to_float().and_then(narrow).map(Value::F32),
            Primitive::F64 => scalar.to_float().map(Value::F64),
            Primitive::String => to_text(self).map(Value::String),
        }
    }

    /// Converts the value to `ty` in place, see [`converted`](Value::converted).
    ///
    /// Returns `false` and leaves the value untouched if no conversion exists.
    pub fn convert_to(&mut self, ty: &Type) -> bool {
        if !self.is_null() && self.fits(ty) {
            return true;
        }
        match self.converted(ty) {
            Some(value) => {
                *self = value;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::info::{Primitive, StructBuilder, Type};
    use crate::value::{Object, ObjectPtr, StructValue, Value};

    fn ty(primitive: Primitive) -> Type {
        Type::from(primitive)
    }

    #[test]
    fn integers_are_range_checked() {
        assert_eq!(Value::I32(7).converted(&ty(Primitive::U64)), Some(Value::U64(7)));
        assert_eq!(Value::I32(-1).converted(&ty(Primitive::U32)), None);
        assert_eq!(Value::U64(u64::MAX).converted(&ty(Primitive::I64)), None);
        assert_eq!(Value::I64(1 << 40).converted(&ty(Primitive::I32)), None);
    }

    #[test]
    fn floats_truncate_into_integers() {
        assert_eq!(Value::F64(2.9).converted(&ty(Primitive::I32)), Some(Value::I32(2)));
        assert_eq!(Value::F32(-2.9).converted(&ty(Primitive::I64)), Some(Value::I64(-2)));
        assert_eq!(Value::F64(f64::NAN).converted(&ty(Primitive::I32)), None);
        assert_eq!(Value::F64(f64::INFINITY).converted(&ty(Primitive::U64)), None);
        assert_eq!(Value::F64(1e30).converted(&ty(Primitive::U64)), None);
    }

    #[test]
    fn numeric_to_float() {
        assert_eq!(Value::I32(3).converted(&ty(Primitive::F32)), Some(Value::F32(3.0)));
        assert_eq!(Value::F32(0.5).converted(&ty(Primitive::F64)), Some(Value::F64(0.5)));
        assert_eq!(Value::F64(1e40).converted(&ty(Primitive::F32)), None);
    }

    #[test]
    fn strings_and_bools() {
        assert_eq!(Value::from("42").converted(&ty(Primitive::I64)), Some(Value::I64(42)));
        assert_eq!(Value::from("4.75").converted(&ty(Primitive::U32)), Some(Value::U32(4)));
        assert_eq!(Value::from("nope").converted(&ty(Primitive::F64)), None);
        assert_eq!(Value::from("true").converted(&ty(Primitive::Bool)), Some(Value::Bool(true)));
        assert_eq!(Value::U32(0).converted(&ty(Primitive::Bool)), Some(Value::Bool(false)));
        assert_eq!(Value::Bool(true).converted(&ty(Primitive::I32)), Some(Value::I32(1)));
        assert_eq!(Value::F32(0.1).converted(&ty(Primitive::String)), Some(Value::from("0.1")));
    }

    #[test]
    fn wrapper_targets_use_the_wrapped_type() {
        let boxed = Type::wrapper("Box<f64>", ty(Primitive::F64));
        assert_eq!(Value::I32(2).converted(&boxed), Some(Value::F64(2.0)));
    }

    #[test]
    fn null_never_converts() {
        let node = StructBuilder::new("Node").build().unwrap();
        let mut null = Value::Null;
        assert!(!null.convert_to(&Type::pointer(node).unwrap()));
        assert!(!null.convert_to(&ty(Primitive::String)));
        assert!(null.is_null());
    }

    #[test]
    fn composites_only_convert_to_what_they_fit() {
        let a = StructBuilder::new("A").build().unwrap();
        let b = StructBuilder::new("B").with_base(a.clone()).build().unwrap();

        let value = Value::from(StructValue::new(&b).unwrap());
        assert_eq!(value.converted(&a), None);
        assert_eq!(value.converted(&ty(Primitive::String)), None);

        let mut ptr = Value::from(ObjectPtr::new(Object::new("b", &b).unwrap()));
        assert!(ptr.convert_to(&Type::pointer(a.clone()).unwrap()));
        assert!(!ptr.convert_to(&a));
    }

    #[test]
    fn failed_conversion_leaves_value_untouched() {
        let mut value = Value::I64(-5);
        assert!(!value.convert_to(&ty(Primitive::U32)));
        assert_eq!(value, Value::I64(-5));
        assert!(value.convert_to(&ty(Primitive::F64)));
        assert_eq!(value, Value::F64(-5.0));
    }
}
