use alloc::borrow::Cow;
use alloc::string::String;

use thiserror::Error;

/// An error returned when a type or a typed value cannot be built.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TypeError {
    #[error("struct `{ty}` declares field `{field}` more than once")]
    DuplicateField {
        ty: Cow<'static, str>,
        field: Cow<'static, str>,
    },

    #[error("base `{base}` of struct `{ty}` is not a struct")]
    BaseNotStruct { ty: Cow<'static, str>, base: String },

    #[error("pointer target `{0}` is not a struct")]
    PointeeNotStruct(String),

    #[error("`{0}` is not a struct type")]
    NotAStruct(String),

    #[error("type `{0}` is already registered")]
    DuplicateType(String),
}
