//! The multi-line renderer.

use std::borrow::Cow;
use std::fmt::Display;

use scrutiny_api::Examiner;

use crate::layout;
use crate::single_line::StringExaminer;

/// Renders any value to an ordered sequence of lines.
///
/// Leaf scalars render as the wrapped [`StringExaminer`]'s single-line form.
/// Recursive structures render as an opening line, a body indented by one
/// step per nesting level, and a closing line; an empty body collapses to a
/// single `[]` / `{}` / `Name{}` line. Key/value and name/value pairs are
/// laid out as aligned associations, so the `=` column lines up even when a
/// key or value spans multiple lines.
pub struct MultiLineStringExaminer {
    examiner: StringExaminer,
}

impl MultiLineStringExaminer {
    /// An examiner over [`StringExaminer::simple_escaping`].
    pub fn simple_escaping() -> Self {
        Self::over(StringExaminer::simple_escaping())
    }

    /// An examiner using the given single-line examiner for leaf scalars.
    pub fn over(examiner: StringExaminer) -> Self {
        Self { examiner }
    }

    fn array_like<I>(&self, elements: I) -> Vec<String>
    where
        I: Iterator<Item = Vec<String>>,
    {
        layout::enclose(layout::flatten(",", elements), "[", "]")
    }
}

impl Default for MultiLineStringExaminer {
    fn default() -> Self {
        Self::simple_escaping()
    }
}

impl Examiner for MultiLineStringExaminer {
    type Output = Vec<String>;

    fn nil(&self) -> Vec<String> {
        vec![self.examiner.nil()]
    }

    fn boolean(&self, value: bool) -> Vec<String> {
        vec![self.examiner.boolean(value)]
    }

    fn character(&self, value: char) -> Vec<String> {
        vec![self.examiner.character(value)]
    }

    fn int8(&self, value: i8) -> Vec<String> {
        vec![self.examiner.int8(value)]
    }

    fn int16(&self, value: i16) -> Vec<String> {
        vec![self.examiner.int16(value)]
    }

    fn int32(&self, value: i32) -> Vec<String> {
        vec![self.examiner.int32(value)]
    }

    fn int64(&self, value: i64) -> Vec<String> {
        vec![self.examiner.int64(value)]
    }

    fn float32(&self, value: f32) -> Vec<String> {
        vec![self.examiner.float32(value)]
    }

    fn float64(&self, value: f64) -> Vec<String> {
        vec![self.examiner.float64(value)]
    }

    fn string(&self, value: &str) -> Vec<String> {
        vec![self.examiner.string(value)]
    }

    fn scalar(&self, value: &dyn Display) -> Vec<String> {
        vec![self.examiner.scalar(value)]
    }

    fn sequence<I>(&self, elements: I) -> Vec<String>
    where
        I: Iterator<Item = Vec<String>>,
    {
        self.array_like(elements)
    }

    fn mapping<I>(&self, entries: I) -> Vec<String>
    where
        I: Iterator<Item = (Vec<String>, Vec<String>)>,
    {
        let body = layout::flatten(
            ",",
            entries.map(|(key, value)| layout::association(key, " = ", value)),
        );
        layout::enclose(body, "{", "}")
    }

    fn examinable<'a, I>(&self, name: &str, properties: I) -> Vec<String>
    where
        I: Iterator<Item = (Cow<'a, str>, Vec<String>)>,
    {
        let body = layout::flatten(
            ",",
            properties.map(|(name, value)| {
                layout::association(vec![self.examiner.string(&name)], " = ", value)
            }),
        );
        layout::enclose(body, &format!("{name}{{"), "}")
    }
}
