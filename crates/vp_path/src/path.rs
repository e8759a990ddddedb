//! Provide [`Path`] and its textual form.

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;
use core::convert::Infallible;
use core::fmt;
use core::ops::Index;
use core::slice;
use core::str::FromStr;

use vp_utils::vec::FastVec;

use crate::reflect::ReflectInstance;
use crate::{PathError, ResolvedPath, resolve};

/// Separator between segments in the textual form.
pub const SEPARATOR: char = '/';

// -----------------------------------------------------------------------------
// Segment

/// One step of a [`Path`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Segment {
    /// A named property on the current object.
    ///
    /// Example: the `Color` of `Uniforms/Color`
    Attribute(Cow<'static, str>),
    /// An element of the current array-like container.
    ///
    /// Example: the `0` of `Materials/0`
    ArrayElement(usize),
}

impl Segment {
    /// Parses a single token, preferring the array-index reading.
    ///
    /// A token is an index if the whole token is an integer that is not
    /// negative. Everything else, negative integers included, is an attribute
    /// name.
    fn parse(token: &str) -> Self {
        match token.parse::<i64>().map(usize::try_from) {
            Ok(Ok(index)) => Self::ArrayElement(index),
            _ => Self::Attribute(Cow::Owned(String::from(token))),
        }
    }

    /// Returns `true` for [`Segment::Attribute`].
    #[inline]
    pub fn is_attribute(&self) -> bool {
        matches!(self, Self::Attribute(_))
    }

    /// Returns `true` for [`Segment::ArrayElement`].
    #[inline]
    pub fn is_array_element(&self) -> bool {
        matches!(self, Self::ArrayElement(_))
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Attribute(name) => f.write_str(name),
            Self::ArrayElement(index) => write!(f, "{index}"),
        }
    }
}

impl From<usize> for Segment {
    #[inline]
    fn from(index: usize) -> Self {
        Self::ArrayElement(index)
    }
}

impl From<&'static str> for Segment {
    #[inline]
    fn from(name: &'static str) -> Self {
        Self::Attribute(Cow::Borrowed(name))
    }
}

impl From<String> for Segment {
    #[inline]
    fn from(name: String) -> Self {
        Self::Attribute(Cow::Owned(name))
    }
}

// -----------------------------------------------------------------------------
// Path

/// An ordered sequence of [`Segment`]s naming a location in an object graph.
///
/// A path carries no knowledge of any object graph: it is only checked when
/// [resolved](Path::resolve). Equality, ordering and hashing are defined by the
/// segment sequence.
///
/// The empty path is a valid value but never resolves.
///
/// # Textual form
///
/// [`Display`](fmt::Display) joins the segments with `/`, [`Path::parse`]
/// splits on `/` and drops empty tokens. A token made of digits only always
/// becomes an array index, so the round trip is lossy for attributes with
/// purely numeric names:
///
/// ```
/// use vp_path::{Path, Segment};
///
/// let path = Path::new().with_attribute("Layers").with_attribute("2");
/// let reparsed = Path::parse(&path.to_string());
///
/// assert_eq!(reparsed[1], Segment::ArrayElement(2));
/// assert_ne!(reparsed, path);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Path {
    segments: Vec<Segment>,
}

impl Path {
    /// Creates an empty path.
    #[inline]
    pub const fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Parses the textual form.
    ///
    /// Never fails: empty tokens are skipped, integer tokens become array
    /// indices and every other token becomes an attribute name.
    ///
    /// # Examples
    ///
    /// ```
    /// use vp_path::{Path, Segment};
    ///
    /// let path = Path::parse("/Transforms//3/Position/");
    /// assert_eq!(path.len(), 3);
    /// assert_eq!(path[0], Segment::from("Transforms"));
    /// assert_eq!(path[1], Segment::ArrayElement(3));
    /// ```
    pub fn parse(text: &str) -> Self {
        let mut vec: FastVec<Segment, 8> = FastVec::new();
        let data = vec.get();

        for token in text.split(SEPARATOR).filter(|token| !token.is_empty()) {
            data.push(Segment::parse(token));
        }

        Self {
            segments: vec.into_boxed_slice().into_vec(),
        }
    }

    /// Appends an attribute segment. No schema is consulted.
    #[inline]
    pub fn push_attribute(&mut self, name: impl Into<Cow<'static, str>>) {
        self.segments.push(Segment::Attribute(name.into()));
    }

    /// Appends an array-element segment. No bounds are checked.
    #[inline]
    pub fn push_array_element(&mut self, index: usize) {
        self.segments.push(Segment::ArrayElement(index));
    }

    /// Appends an attribute segment, by value.
    #[inline]
    pub fn with_attribute(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.push_attribute(name);
        self
    }

    /// Appends an array-element segment, by value.
    #[inline]
    pub fn with_array_element(mut self, index: usize) -> Self {
        self.push_array_element(index);
        self
    }

    /// Returns the number of segments.
    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` if the path has no segment.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the segments as a slice.
    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns an iterator over the segments.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    /// Returns the segment at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Segment> {
        self.segments.get(index)
    }

    /// Returns the last segment.
    #[inline]
    pub fn last(&self) -> Option<&Segment> {
        self.segments.last()
    }

    /// Returns the path without its last segment, `None` if the path is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use vp_path::Path;
    ///
    /// let path = Path::parse("Materials/0/Color");
    /// assert_eq!(path.parent(), Some(Path::parse("Materials/0")));
    /// assert_eq!(Path::new().parent(), None);
    /// ```
    pub fn parent(&self) -> Option<Self> {
        let (_, init) = self.segments.split_last()?;
        Some(Self {
            segments: init.to_vec(),
        })
    }

    /// Concatenates two paths.
    ///
    /// # Examples
    ///
    /// ```
    /// use vp_path::Path;
    ///
    /// let a = Path::parse("Materials/0");
    /// let b = Path::parse("Uniforms/Color");
    /// assert_eq!(a.concat(b).to_string(), "Materials/0/Uniforms/Color");
    /// ```
    pub fn concat(mut self, other: Path) -> Self {
        self.segments.extend(other.segments);
        self
    }

    /// Resolves the path against `root` for reading and writing.
    /// See [`resolve`].
    #[inline]
    pub fn resolve<'a, O: ReflectInstance>(
        &self,
        root: &'a mut O,
    ) -> Result<ResolvedPath<O, &'a mut O>, PathError> {
        resolve(root, self)
    }

    /// Resolves the path against a shared `root`, for reading only.
    /// See [`resolve`].
    ///
    /// The result is [`Clone`], and other shared borrows of the root may
    /// coexist with it.
    #[inline]
    pub fn resolve_ref<'a, O: ReflectInstance>(
        &self,
        root: &'a O,
    ) -> Result<ResolvedPath<O, &'a O>, PathError> {
        resolve(root, self)
    }

    /// Resolves the path against `root` and reads the addressed value.
    ///
    /// Only needs a shared borrow, reading has no side effect on the root.
    #[inline]
    pub fn get_value<O: ReflectInstance>(&self, root: &O) -> Result<O::Value, PathError> {
        self.resolve_ref(root)?.value()
    }

    /// Resolves the path against `root` and writes `value` at the addressed location.
    #[inline]
    pub fn set_value<O: ReflectInstance>(
        &self,
        root: &mut O,
        value: O::Value,
    ) -> Result<(), PathError> {
        self.resolve(root)?.set_value(value)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut segments = self.segments.iter();
        if let Some(first) = segments.next() {
            fmt::Display::fmt(first, f)?;
        }
        for segment in segments {
            write!(f, "{SEPARATOR}{segment}")?;
        }
        Ok(())
    }
}

impl FromStr for Path {
    type Err = Infallible;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl Index<usize> for Path {
    type Output = Segment;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.segments[index]
    }
}

impl FromIterator<Segment> for Path {
    #[inline]
    fn from_iter<T: IntoIterator<Item = Segment>>(iter: T) -> Self {
        Self {
            segments: iter.into_iter().collect(),
        }
    }
}

impl Extend<Segment> for Path {
    #[inline]
    fn extend<T: IntoIterator<Item = Segment>>(&mut self, iter: T) {
        self.segments.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Segment;
    type IntoIter = slice::Iter<'a, Segment>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

// -----------------------------------------------------------------------------
// Serde

#[cfg(feature = "serde")]
mod serde_impl {
    use core::fmt;

    use serde_core::de::{self, Visitor};
    use serde_core::{Deserialize, Deserializer, Serialize, Serializer};

    use super::Path;

    impl Serialize for Path {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    struct PathVisitor;

    impl Visitor<'_> for PathVisitor {
        type Value = Path;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a `/` separated property path")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            Ok(Path::parse(v))
        }
    }

    impl<'de> Deserialize<'de> for Path {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_str(PathVisitor)
        }
    }
}

// -----------------------------------------------------------------------------
// Tests
