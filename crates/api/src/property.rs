//! Named property slots and the contract for producing them.

use std::borrow::Cow;
use std::fmt::Display;

use crate::examiner::Examiner;
use crate::value::Value;

/// An immutable named slot holding a value to be examined.
///
/// Properties are transient: a composite builds them fresh each time its
/// properties are enumerated, and each one is consumed when examined. Nothing
/// is cached across traversals, so a property backed by a one-shot stream
/// behaves the same as the stream itself.
pub struct ExaminableProperty<'a> {
    name: Cow<'a, str>,
    value: Value<'a>,
}

impl<'a> ExaminableProperty<'a> {
    /// Pairs a name with any value that has a shape conversion.
    pub fn new(name: impl Into<Cow<'a, str>>, value: impl Into<Value<'a>>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Pairs a name with an opaque value, rendered via its `Display` impl.
    pub fn opaque(name: impl Into<Cow<'a, str>>, value: impl Display + 'a) -> Self {
        Self {
            name: name.into(),
            value: Value::scalar(value),
        }
    }

    /// The property's name, used as a key in rendered output.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Forwards the held value through the given examiner's entry point.
    pub fn examine<E: Examiner>(self, examiner: &E) -> E::Output {
        examiner.examine(self.value)
    }

    /// Splits the property into its name and unexamined value.
    pub fn into_parts(self) -> (Cow<'a, str>, Value<'a>) {
        (self.name, self.value)
    }
}

/// Something that can supply an ordered sequence of properties without being
/// a full [`Examinable`](crate::Examinable) itself.
///
/// Any mechanism that yields a finite, ordered `(name, value)` sequence
/// satisfies this contract; the framework does not care how the sequence was
/// produced.
pub trait PropertySource {
    /// The properties, in declaration order. Single-pass.
    fn examinable_properties(&self) -> Box<dyn Iterator<Item = ExaminableProperty<'_>> + '_>;
}
