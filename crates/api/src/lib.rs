//! Core abstractions for examining arbitrary runtime values.
//!
//! A value is described to the framework as a [`Value`], a closed set of
//! shapes covering scalars, strings, primitive slices, sequences, mappings,
//! lazy streams and named composites. An [`Examiner`] folds a `Value` into
//! some output type; the provided [`Examiner::examine`] entry point owns all
//! recursion and shape routing, so examiner implementations only fold
//! already-examined children.
//!
//! Types that want a structured rendering implement [`Examinable`] and hand
//! out their fields as an ordered sequence of [`ExaminableProperty`].

pub mod examinable;
pub mod examiner;
pub mod property;
pub mod value;

pub use examinable::Examinable;
pub use examiner::Examiner;
pub use property::{ExaminableProperty, PropertySource};
pub use value::Value;
