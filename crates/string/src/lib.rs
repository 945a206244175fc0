//! Reference examiners that render values to text.
//!
//! [`StringExaminer`] folds any value into a single line;
//! [`MultiLineStringExaminer`] folds the same structure into an ordered
//! sequence of lines with indentation and aligned key/value columns. Lines
//! carry no trailing terminator; join them with your preferred separator.

mod layout;
pub mod multi_line;
pub mod single_line;

pub use multi_line::MultiLineStringExaminer;
pub use single_line::{Escaper, StringExaminer, simple_escape};
