//! Examines arbitrary runtime values and folds them into a result via a
//! pluggable visitor.
//!
//! Describe a value as a [`Value`] (or implement [`Examinable`] on your own
//! types), then hand it to an [`Examiner`]. Two renderers ship with the
//! framework: [`StringExaminer`] produces a single-line form and
//! [`MultiLineStringExaminer`] an indented, column-aligned multi-line form.
//!
//! ```
//! use scrutiny::{Examiner, StringExaminer, Value};
//!
//! let examiner = StringExaminer::simple_escaping();
//! let rendered = examiner.examine(Value::mapping([("answer", 42)]));
//! assert_eq!(rendered, "{\"answer\"=42}");
//! ```
//!
//! Examination is synchronous and side-effect-free; recursion depth is
//! bounded only by the value graph, and cyclic graphs are not detected.

pub use scrutiny_api as api;
pub use scrutiny_props as props;
pub use scrutiny_string as string;

pub use scrutiny_api::{Examinable, ExaminableProperty, Examiner, PropertySource, Value};
pub use scrutiny_props::{FieldSet, OnError, PropertyError};
pub use scrutiny_string::{Escaper, MultiLineStringExaminer, StringExaminer, simple_escape};
