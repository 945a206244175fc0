mod common;

use common::ExaminableA;
use scrutiny::{Examinable, Examiner, StringExaminer, Value};

fn examiner() -> StringExaminer {
    StringExaminer::simple_escaping()
}

#[test]
fn array_0() {
    assert_eq!(examiner().examine(Value::sequence(Vec::<&str>::new())), "[]");
}

#[test]
fn array_1() {
    assert_eq!(
        examiner().examine(Value::sequence(vec!["abc"])),
        "[\"abc\"]"
    );
}

#[test]
fn array_2() {
    assert_eq!(
        examiner().examine(Value::sequence(vec!["abc", "def"])),
        "[\"abc\", \"def\"]"
    );
    assert_eq!(
        examiner().examine(Value::sequence(vec![Some("abc"), None])),
        "[\"abc\", null]"
    );
}

#[test]
fn examinable() {
    let expected = "ExaminableA{abc=\"def\", ghi=ExaminableC{jkl=\"mno\", pqr=\"stu\", vwx=\"yz\"}}";
    assert_eq!(
        examiner().examine(Value::examinable(&ExaminableA::new())),
        expected
    );
    assert_eq!(ExaminableA::new().examine(&examiner()), expected);
}

#[test]
fn map_0() {
    assert_eq!(
        examiner().examine(Value::mapping(Vec::<(&str, &str)>::new())),
        "{}"
    );
}

#[test]
fn map_1() {
    assert_eq!(
        examiner().examine(Value::mapping([("abc", "def")])),
        "{\"abc\"=\"def\"}"
    );
}

#[test]
fn map_2() {
    assert_eq!(
        examiner().examine(Value::mapping([("abc", "def"), ("ghi", "jkl")])),
        "{\"abc\"=\"def\", \"ghi\"=\"jkl\"}"
    );
}

#[test]
fn map_keys_are_examined_too() {
    assert_eq!(
        examiner().examine(Value::mapping([(1, "one"), (2, "two")])),
        "{1=\"one\", 2=\"two\"}"
    );
}

#[test]
fn nil() {
    assert_eq!(examiner().examine(Value::Nil), "null");
    assert_eq!(examiner().examine(Value::from(None::<&str>)), "null");
}

#[test]
fn scalars() {
    let examiner = examiner();
    assert_eq!(examiner.examine(Value::from('a')), "'a'");
    assert_eq!(examiner.examine(Value::from("abc")), "\"abc\"");
    assert_eq!(examiner.examine(Value::from(true)), "true");
    assert_eq!(examiner.examine(Value::from(123i8)), "123");
    assert_eq!(examiner.examine(Value::from(3i16)), "3");
    assert_eq!(examiner.examine(Value::from(1i32)), "1");
    assert_eq!(examiner.examine(Value::from(3i64)), "3");
    assert_eq!(examiner.examine(Value::from(1.23f64)), "1.23d");
    assert_eq!(examiner.examine(Value::from(1.23f32)), "1.23f");
    assert_eq!(examiner.examine(Value::from(0.4f32)), "0.4f");
    assert_eq!(examiner.examine(Value::from(1.0f64)), "1.0d");
}

#[test]
fn opaque_fallback_uses_display() {
    struct Endpoint;
    impl std::fmt::Display for Endpoint {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "10.0.0.1:80")
        }
    }
    assert_eq!(examiner().examine(Value::scalar(Endpoint)), "10.0.0.1:80");
}

#[test]
fn stream_0() {
    assert_eq!(
        examiner().examine(Value::stream(std::iter::empty::<Value>())),
        "[]"
    );
}

#[test]
fn stream_1() {
    assert_eq!(examiner().examine(Value::stream(vec!["abc"])), "[\"abc\"]");
}

#[test]
fn stream_2() {
    assert_eq!(
        examiner().examine(Value::stream(vec!["abc", "def"])),
        "[\"abc\", \"def\"]"
    );
}

#[test]
fn primitive_streams() {
    let examiner = examiner();
    assert_eq!(
        examiner.examine(Value::f64_stream([1.3, 2.4])),
        "[1.3d, 2.4d]"
    );
    assert_eq!(examiner.examine(Value::i32_stream([1, 2])), "[1, 2]");
    assert_eq!(examiner.examine(Value::i64_stream([1, 2])), "[1, 2]");
}

#[test]
fn string_escaping() {
    assert_eq!(
        examiner().examine(Value::from("a\"b\\c")),
        "\"a\\\"b\\\\c\""
    );
    assert_eq!(
        examiner().examine(Value::from("tab\tand\nnewline")),
        "\"tab\\tand\\nnewline\""
    );
}

#[test]
fn char_escaping() {
    assert_eq!(examiner().examine(Value::from('\n')), "'\\n'");
    assert_eq!(examiner().examine(Value::from('\'')), "'''");
    assert_eq!(examiner().examine(Value::from('"')), "'\\\"'");
}

#[test]
fn primitive_slices_render_like_boxed_sequences() {
    let examiner = examiner();
    let ints = [1i32, 2, 3];
    assert_eq!(examiner.examine(Value::from(&ints[..])), "[1, 2, 3]");
    assert_eq!(
        examiner.examine(Value::from(&ints[..])),
        examiner.examine(Value::sequence(ints))
    );

    let doubles = [1.2f64, 2.3];
    assert_eq!(examiner.examine(Value::from(&doubles[..])), "[1.2d, 2.3d]");

    let chars = ['a', 'b'];
    assert_eq!(examiner.examine(Value::from(&chars[..])), "['a', 'b']");

    let flags = [true, false];
    assert_eq!(examiner.examine(Value::from(&flags[..])), "[true, false]");
}

#[test]
fn empty_composite_collapses() {
    struct Empty;
    impl Examinable for Empty {}
    assert_eq!(examiner().examine(Value::examinable(&Empty)), "Empty{}");
}
