//! The closed shape set over which examination is defined.
//!
//! Classification happens at construction time: converting a Rust value into
//! a [`Value`] picks its shape, and the dispatcher is then an exhaustive
//! `match`. Iterator-bearing shapes are single-pass; a `Value` is consumed by
//! examination, so a one-shot stream cannot be traversed twice.

use std::borrow::Cow;
use std::fmt::Display;

use crate::examinable::Examinable;

/// A boxed, single-pass sequence of child values.
pub type ValueIter<'a> = Box<dyn Iterator<Item = Value<'a>> + 'a>;

/// A boxed, single-pass sequence of key/value pairs.
pub type EntryIter<'a> = Box<dyn Iterator<Item = (Value<'a>, Value<'a>)> + 'a>;

/// A runtime value, tagged with its shape.
///
/// Every examinable datum maps to exactly one variant; anything without a
/// more specific shape goes through [`Value::scalar`] and is rendered via its
/// `Display` impl.
pub enum Value<'a> {
    Nil,
    Bool(bool),
    Char(char),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
    Str(Cow<'a, str>),
    BoolSlice(&'a [bool]),
    CharSlice(&'a [char]),
    I8Slice(&'a [i8]),
    I16Slice(&'a [i16]),
    I32Slice(&'a [i32]),
    I64Slice(&'a [i64]),
    F32Slice(&'a [f32]),
    F64Slice(&'a [f64]),
    /// A collection or array of reference elements.
    Sequence(ValueIter<'a>),
    /// A key/value mapping; key uniqueness is the producer's concern.
    Mapping(EntryIter<'a>),
    /// A lazy, one-shot sequence of values.
    Stream(ValueIter<'a>),
    /// Lazy, one-shot sequences of primitive elements.
    F64Stream(Box<dyn Iterator<Item = f64> + 'a>),
    I32Stream(Box<dyn Iterator<Item = i32> + 'a>),
    I64Stream(Box<dyn Iterator<Item = i64> + 'a>),
    /// A named composite exposing its own properties.
    Examinable(&'a dyn Examinable),
    /// The opaque fallback shape.
    Scalar(Box<dyn Display + 'a>),
}

impl<'a> Value<'a> {
    /// Wraps a collection of elements, each convertible to a `Value`.
    pub fn sequence<I>(elements: I) -> Self
    where
        I: IntoIterator,
        I::IntoIter: 'a,
        I::Item: Into<Value<'a>> + 'a,
    {
        Value::Sequence(Box::new(elements.into_iter().map(Into::into)))
    }

    /// Wraps a mapping's entries, preserving their iteration order.
    pub fn mapping<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        I::IntoIter: 'a,
        K: Into<Value<'a>>,
        V: Into<Value<'a>>,
    {
        Value::Mapping(Box::new(
            entries.into_iter().map(|(k, v)| (k.into(), v.into())),
        ))
    }

    /// Wraps a lazy sequence of values. The sequence is consumed exactly
    /// once, in forward order, when the `Value` is examined.
    pub fn stream<I>(elements: I) -> Self
    where
        I: IntoIterator,
        I::IntoIter: 'a,
        I::Item: Into<Value<'a>> + 'a,
    {
        Value::Stream(Box::new(elements.into_iter().map(Into::into)))
    }

    /// Wraps a lazy sequence of `f64` elements.
    pub fn f64_stream<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = f64>,
        I::IntoIter: 'a,
    {
        Value::F64Stream(Box::new(elements.into_iter()))
    }

    /// Wraps a lazy sequence of `i32` elements.
    pub fn i32_stream<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = i32>,
        I::IntoIter: 'a,
    {
        Value::I32Stream(Box::new(elements.into_iter()))
    }

    /// Wraps a lazy sequence of `i64` elements.
    pub fn i64_stream<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = i64>,
        I::IntoIter: 'a,
    {
        Value::I64Stream(Box::new(elements.into_iter()))
    }

    /// Wraps a composite.
    pub fn examinable(value: &'a dyn Examinable) -> Self {
        Value::Examinable(value)
    }

    /// Wraps anything else; rendered through its `Display` impl.
    pub fn scalar(value: impl Display + 'a) -> Self {
        Value::Scalar(Box::new(value))
    }
}

impl From<bool> for Value<'_> {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<char> for Value<'_> {
    fn from(value: char) -> Self {
        Value::Char(value)
    }
}

impl From<i8> for Value<'_> {
    fn from(value: i8) -> Self {
        Value::I8(value)
    }
}

impl From<i16> for Value<'_> {
    fn from(value: i16) -> Self {
        Value::I16(value)
    }
}

impl From<i32> for Value<'_> {
    fn from(value: i32) -> Self {
        Value::I32(value)
    }
}

impl From<i64> for Value<'_> {
    fn from(value: i64) -> Self {
        Value::I64(value)
    }
}

impl From<f32> for Value<'_> {
    fn from(value: f32) -> Self {
        Value::F32(value)
    }
}

impl From<f64> for Value<'_> {
    fn from(value: f64) -> Self {
        Value::F64(value)
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(value: &'a str) -> Self {
        Value::Str(Cow::Borrowed(value))
    }
}

impl From<String> for Value<'_> {
    fn from(value: String) -> Self {
        Value::Str(Cow::Owned(value))
    }
}

impl<'a> From<Cow<'a, str>> for Value<'a> {
    fn from(value: Cow<'a, str>) -> Self {
        Value::Str(value)
    }
}

impl<'a, T: Into<Value<'a>>> From<Option<T>> for Value<'a> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => Value::Nil,
        }
    }
}

impl<'a> From<&'a [bool]> for Value<'a> {
    fn from(values: &'a [bool]) -> Self {
        Value::BoolSlice(values)
    }
}

impl<'a> From<&'a [char]> for Value<'a> {
    fn from(values: &'a [char]) -> Self {
        Value::CharSlice(values)
    }
}

impl<'a> From<&'a [i8]> for Value<'a> {
    fn from(values: &'a [i8]) -> Self {
        Value::I8Slice(values)
    }
}

impl<'a> From<&'a [i16]> for Value<'a> {
    fn from(values: &'a [i16]) -> Self {
        Value::I16Slice(values)
    }
}

impl<'a> From<&'a [i32]> for Value<'a> {
    fn from(values: &'a [i32]) -> Self {
        Value::I32Slice(values)
    }
}

impl<'a> From<&'a [i64]> for Value<'a> {
    fn from(values: &'a [i64]) -> Self {
        Value::I64Slice(values)
    }
}

impl<'a> From<&'a [f32]> for Value<'a> {
    fn from(values: &'a [f32]) -> Self {
        Value::F32Slice(values)
    }
}

impl<'a> From<&'a [f64]> for Value<'a> {
    fn from(values: &'a [f64]) -> Self {
        Value::F64Slice(values)
    }
}
