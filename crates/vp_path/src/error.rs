use alloc::borrow::Cow;
use alloc::string::String;

use thiserror::Error;

// -----------------------------------------------------------------------------
// Invalid path

/// Why a path cannot address anything on a given root.
///
/// `segment` is the position of the offending segment in the path.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvalidPath {
    #[error("an empty path addresses nothing")]
    Empty,

    #[error("segment {segment}: type `{ty}` has no property `{name}`")]
    MissingProperty {
        segment: usize,
        name: Cow<'static, str>,
        ty: String,
    },

    #[error("segment {segment}: the path so far does not yield a value")]
    EmptyContext { segment: usize },

    #[error("segment {segment}: array index applied to non-array type `{ty}`")]
    NotAnArray { segment: usize, ty: String },
}

// -----------------------------------------------------------------------------
// Path error

/// An error returned when resolving, reading or writing a path.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PathError {
    #[error("invalid path: {0}")]
    InvalidPath(#[from] InvalidPath),

    #[error("segment {segment}: index {index} is out of range for an array of length {len}")]
    IndexOutOfRange {
        segment: usize,
        index: usize,
        len: usize,
    },

    #[error("cannot convert a value of type `{found}` to `{expected}`")]
    TypeMismatch { expected: String, found: String },

    #[error("segment {segment}: the slot refused the value")]
    WriteFailed { segment: usize },
}

/// The category of a [`PathError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathErrorKind {
    InvalidPath,
    IndexOutOfRange,
    TypeMismatch,
    WriteFailed,
}

impl PathError {
    /// Returns the category of the error.
    #[inline]
    pub fn kind(&self) -> PathErrorKind {
        match self {
            Self::InvalidPath(_) => PathErrorKind::InvalidPath,
            Self::IndexOutOfRange { .. } => PathErrorKind::IndexOutOfRange,
            Self::TypeMismatch { .. } => PathErrorKind::TypeMismatch,
            Self::WriteFailed { .. } => PathErrorKind::WriteFailed,
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::{InvalidPath, PathError, PathErrorKind};

    #[test]
    fn kind_and_message() {
        let err = PathError::from(InvalidPath::NotAnArray {
            segment: 2,
            ty: "Transform".to_string(),
        });
        assert_eq!(err.kind(), PathErrorKind::InvalidPath);
        assert_eq!(
            err.to_string(),
            "invalid path: segment 2: array index applied to non-array type `Transform`"
        );

        let err = PathError::IndexOutOfRange {
            segment: 1,
            index: 4,
            len: 2,
        };
        assert_eq!(err.kind(), PathErrorKind::IndexOutOfRange);
        assert_eq!(
            err.to_string(),
            "segment 1: index 4 is out of range for an array of length 2"
        );
    }
}
