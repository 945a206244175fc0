//! The single-line renderer.

use std::borrow::Cow;
use std::fmt::Display;

use itertools::Itertools;
use scrutiny_api::Examiner;

/// An injectable string-escaping function.
pub type Escaper = Box<dyn Fn(&str) -> String + Send + Sync>;

/// Escapes `"`, `\`, backspace, form feed, newline, carriage return and tab
/// with their backslash sequences. Each source character is escaped exactly
/// once; characters introduced by a substitution are never re-escaped.
pub fn simple_escape(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\u{0008}' => escaped.push_str("\\b"),
            '\u{000C}' => escaped.push_str("\\f"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Renders any value to a single-line string.
///
/// `null` for nil, `[a, b]` for sequences, `{k=v}` for mappings,
/// `Name{prop=value}` for composites, quoted-and-escaped text for strings
/// and chars, and a `d`/`f` suffix on doubles and floats.
pub struct StringExaminer {
    escaper: Escaper,
}

impl StringExaminer {
    /// An examiner using [`simple_escape`].
    pub fn simple_escaping() -> Self {
        Self::with_escaper(Box::new(simple_escape))
    }

    /// An examiner using the given escaper for string and char values.
    pub fn with_escaper(escaper: Escaper) -> Self {
        Self { escaper }
    }
}

impl Default for StringExaminer {
    fn default() -> Self {
        Self::simple_escaping()
    }
}

impl Examiner for StringExaminer {
    type Output = String;

    fn nil(&self) -> String {
        "null".to_owned()
    }

    fn boolean(&self, value: bool) -> String {
        value.to_string()
    }

    fn character(&self, value: char) -> String {
        format!("'{}'", (self.escaper)(value.encode_utf8(&mut [0u8; 4])))
    }

    fn int8(&self, value: i8) -> String {
        value.to_string()
    }

    fn int16(&self, value: i16) -> String {
        value.to_string()
    }

    fn int32(&self, value: i32) -> String {
        value.to_string()
    }

    fn int64(&self, value: i64) -> String {
        value.to_string()
    }

    // Debug formatting keeps the decimal point on whole floats, so `1.0`
    // renders as "1.0f" rather than "1f".
    fn float32(&self, value: f32) -> String {
        format!("{value:?}f")
    }

    fn float64(&self, value: f64) -> String {
        format!("{value:?}d")
    }

    fn string(&self, value: &str) -> String {
        format!("\"{}\"", (self.escaper)(value))
    }

    fn scalar(&self, value: &dyn Display) -> String {
        value.to_string()
    }

    fn sequence<I>(&self, mut elements: I) -> String
    where
        I: Iterator<Item = String>,
    {
        format!("[{}]", elements.join(", "))
    }

    fn mapping<I>(&self, entries: I) -> String
    where
        I: Iterator<Item = (String, String)>,
    {
        format!(
            "{{{}}}",
            entries
                .map(|(key, value)| format!("{key}={value}"))
                .join(", ")
        )
    }

    fn examinable<'a, I>(&self, name: &str, properties: I) -> String
    where
        I: Iterator<Item = (Cow<'a, str>, String)>,
    {
        format!(
            "{name}{{{}}}",
            properties
                .map(|(name, value)| format!("{name}={value}"))
                .join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_each_source_character_once() {
        assert_eq!(simple_escape("a\"b\\c"), "a\\\"b\\\\c");
        assert_eq!(simple_escape("tab\there"), "tab\\there");
        assert_eq!(simple_escape("line\nbreak\r"), "line\\nbreak\\r");
        assert_eq!(simple_escape("\u{0008}\u{000C}"), "\\b\\f");
        assert_eq!(simple_escape("plain"), "plain");
    }

    #[test]
    fn custom_escaper_is_applied_to_strings_and_chars() {
        let examiner = StringExaminer::with_escaper(Box::new(|s| s.to_uppercase()));
        assert_eq!(examiner.string("abc"), "\"ABC\"");
        assert_eq!(examiner.character('x'), "'X'");
    }

    #[test]
    fn floats_carry_their_suffix() {
        let examiner = StringExaminer::simple_escaping();
        assert_eq!(examiner.float64(1.2), "1.2d");
        assert_eq!(examiner.float64(1.0), "1.0d");
        assert_eq!(examiner.float32(0.4), "0.4f");
        assert_eq!(examiner.float32(1.0), "1.0f");
    }
}
