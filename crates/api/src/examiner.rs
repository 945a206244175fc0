//! The visitor protocol and its dispatch entry point.

use std::borrow::Cow;
use std::fmt::Display;

use crate::examinable::Examinable;
use crate::value::Value;

/// Folds examined values into an output type.
///
/// Implementations provide one fold operation per shape and stay free of
/// recursion and shape detection: the provided [`examine`](Examiner::examine)
/// entry point classifies the value, recurses into children, and hands each
/// operation a lazy sequence of already-folded child results.
///
/// Examination is a pure function of the value graph. A value appearing
/// twice is folded twice; cycles are not detected and will not terminate.
/// Guarding against cyclic or pathologically deep graphs is the caller's
/// responsibility.
pub trait Examiner {
    /// The folded result type.
    type Output;

    fn nil(&self) -> Self::Output;

    fn boolean(&self, value: bool) -> Self::Output;

    fn character(&self, value: char) -> Self::Output;

    fn int8(&self, value: i8) -> Self::Output;

    fn int16(&self, value: i16) -> Self::Output;

    fn int32(&self, value: i32) -> Self::Output;

    fn int64(&self, value: i64) -> Self::Output;

    fn float32(&self, value: f32) -> Self::Output;

    fn float64(&self, value: f64) -> Self::Output;

    fn string(&self, value: &str) -> Self::Output;

    /// The fallback for values with no more specific shape.
    fn scalar(&self, value: &dyn Display) -> Self::Output;

    /// Folds a sequence of already-examined elements. Used for arrays of
    /// reference, collections and streamed sequences.
    fn sequence<I>(&self, elements: I) -> Self::Output
    where
        I: Iterator<Item = Self::Output>;

    /// Folds a mapping's already-examined entries.
    fn mapping<I>(&self, entries: I) -> Self::Output
    where
        I: Iterator<Item = (Self::Output, Self::Output)>;

    /// Folds a named composite from its already-examined properties.
    fn examinable<'a, I>(&self, name: &str, properties: I) -> Self::Output
    where
        I: Iterator<Item = (Cow<'a, str>, Self::Output)>;

    /// Folds a slice of `bool` elements.
    ///
    /// The slice operations exist so implementations can special-case
    /// primitive slices; by default they fold through
    /// [`sequence`](Examiner::sequence) over the matching scalar operation,
    /// so a primitive slice and the equivalent sequence of boxed values
    /// render identically.
    fn bool_slice(&self, values: &[bool]) -> Self::Output {
        self.sequence(values.iter().map(|value| self.boolean(*value)))
    }

    fn char_slice(&self, values: &[char]) -> Self::Output {
        self.sequence(values.iter().map(|value| self.character(*value)))
    }

    fn int8_slice(&self, values: &[i8]) -> Self::Output {
        self.sequence(values.iter().map(|value| self.int8(*value)))
    }

    fn int16_slice(&self, values: &[i16]) -> Self::Output {
        self.sequence(values.iter().map(|value| self.int16(*value)))
    }

    fn int32_slice(&self, values: &[i32]) -> Self::Output {
        self.sequence(values.iter().map(|value| self.int32(*value)))
    }

    fn int64_slice(&self, values: &[i64]) -> Self::Output {
        self.sequence(values.iter().map(|value| self.int64(*value)))
    }

    fn float32_slice(&self, values: &[f32]) -> Self::Output {
        self.sequence(values.iter().map(|value| self.float32(*value)))
    }

    fn float64_slice(&self, values: &[f64]) -> Self::Output {
        self.sequence(values.iter().map(|value| self.float64(*value)))
    }

    /// Examines a value of any shape.
    ///
    /// This is the single entry point: it routes the value to the matching
    /// fold operation and re-enters itself for every nested child, so
    /// arbitrarily deep structures resolve without any recursion logic in
    /// the fold operations. The value is consumed; one-shot streams inside
    /// it are drained exactly once, in forward order.
    fn examine(&self, value: Value<'_>) -> Self::Output
    where
        Self: Sized,
    {
        match value {
            Value::Nil => self.nil(),
            Value::Bool(value) => self.boolean(value),
            Value::Char(value) => self.character(value),
            Value::I8(value) => self.int8(value),
            Value::I16(value) => self.int16(value),
            Value::I32(value) => self.int32(value),
            Value::I64(value) => self.int64(value),
            Value::F32(value) => self.float32(value),
            Value::F64(value) => self.float64(value),
            Value::Str(value) => self.string(&value),
            Value::BoolSlice(values) => self.bool_slice(values),
            Value::CharSlice(values) => self.char_slice(values),
            Value::I8Slice(values) => self.int8_slice(values),
            Value::I16Slice(values) => self.int16_slice(values),
            Value::I32Slice(values) => self.int32_slice(values),
            Value::I64Slice(values) => self.int64_slice(values),
            Value::F32Slice(values) => self.float32_slice(values),
            Value::F64Slice(values) => self.float64_slice(values),
            Value::Sequence(elements) => {
                self.sequence(elements.map(|element| self.examine(element)))
            }
            Value::Mapping(entries) => self.mapping(
                entries.map(|(key, value)| (self.examine(key), self.examine(value))),
            ),
            Value::Stream(elements) => {
                self.sequence(elements.map(|element| self.examine(element)))
            }
            Value::F64Stream(elements) => {
                self.sequence(elements.map(|element| self.float64(element)))
            }
            Value::I32Stream(elements) => {
                self.sequence(elements.map(|element| self.int32(element)))
            }
            Value::I64Stream(elements) => {
                self.sequence(elements.map(|element| self.int64(element)))
            }
            Value::Examinable(value) => self.examine_examinable(value),
            Value::Scalar(value) => self.scalar(&*value),
        }
    }

    /// Examines a composite via its capability: its display name paired
    /// with each property's name and examined value, in property order.
    fn examine_examinable(&self, value: &dyn Examinable) -> Self::Output
    where
        Self: Sized,
    {
        let name = value.examinable_name();
        let properties = value.examinable_properties().map(|property| {
            let (name, value) = property.into_parts();
            (name, self.examine(value))
        });
        self.examinable(&name, properties)
    }
}
