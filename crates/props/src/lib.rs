//! Property-source helpers.
//!
//! A [`FieldSet`] is an ordered table of named accessors for one type,
//! built once (typically in a `LazyLock`) and reused to describe every
//! instance of that type. It is the hand-written stand-in for annotation
//! scanning: the table owns declaration order, and an instance's properties
//! are produced on demand by running the accessors against it.
//!
//! ```
//! use std::sync::LazyLock;
//! use scrutiny_api::{Examinable, ExaminableProperty, Value};
//! use scrutiny_props::FieldSet;
//!
//! struct Server {
//!     host: String,
//!     port: u16,
//! }
//!
//! static FIELDS: LazyLock<FieldSet<Server>> = LazyLock::new(|| {
//!     FieldSet::new()
//!         .field("host", |server: &Server| Value::from(server.host.as_str()))
//!         .field("port", |server: &Server| Value::from(i32::from(server.port)))
//! });
//!
//! impl Examinable for Server {
//!     fn examinable_properties(&self) -> Box<dyn Iterator<Item = ExaminableProperty<'_>> + '_> {
//!         Box::new(FIELDS.properties(self))
//!     }
//! }
//! ```

use std::borrow::Cow;

use log::warn;
use scrutiny_api::{ExaminableProperty, PropertySource, Value};
use thiserror::Error;

/// An accessor failure, reported by fallible fields.
#[derive(Debug, Error)]
pub enum PropertyError {
    /// The property's value could not be produced.
    #[error("property '{name}' unavailable: {reason}")]
    Unavailable { name: String, reason: String },
}

impl PropertyError {
    pub fn unavailable(name: impl Into<String>, reason: impl Into<String>) -> Self {
        PropertyError::Unavailable {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// What to do when a fallible accessor fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnError {
    /// Log at warn level and omit the property.
    Skip,
    /// Substitute the given text as an opaque placeholder value.
    Placeholder(&'static str),
}

type Accessor<T> =
    Box<dyn for<'a> Fn(&'a T) -> Result<Value<'a>, PropertyError> + Send + Sync>;

/// An ordered registry of named accessors for values of type `T`.
///
/// Fields are yielded in registration order, which the renderers preserve.
pub struct FieldSet<T> {
    fields: Vec<(&'static str, Accessor<T>)>,
    on_error: OnError,
}

impl<T> FieldSet<T> {
    pub fn new() -> Self {
        Self {
            fields: Vec::new(),
            on_error: OnError::Skip,
        }
    }

    /// Sets the failure policy for fallible fields. Defaults to
    /// [`OnError::Skip`].
    pub fn on_error(mut self, policy: OnError) -> Self {
        self.on_error = policy;
        self
    }

    /// Registers an infallible field.
    pub fn field<F>(self, name: &'static str, accessor: F) -> Self
    where
        F: for<'a> Fn(&'a T) -> Value<'a> + Send + Sync + 'static,
    {
        self.try_field(name, move |target| Ok(accessor(target)))
    }

    /// Registers a field whose accessor may fail; the set's [`OnError`]
    /// policy decides whether a failure skips the property or substitutes a
    /// placeholder.
    pub fn try_field<F>(mut self, name: &'static str, accessor: F) -> Self
    where
        F: for<'a> Fn(&'a T) -> Result<Value<'a>, PropertyError> + Send + Sync + 'static,
    {
        self.fields.push((name, Box::new(accessor)));
        self
    }

    /// Runs the accessors against `target`, yielding one property per
    /// surviving field, in registration order.
    pub fn properties<'a>(
        &'a self,
        target: &'a T,
    ) -> impl Iterator<Item = ExaminableProperty<'a>> + 'a {
        self.fields
            .iter()
            .filter_map(move |(name, accessor)| match accessor(target) {
                Ok(value) => Some(ExaminableProperty::new(*name, value)),
                Err(error) => match self.on_error {
                    OnError::Skip => {
                        warn!("skipping property '{name}': {error}");
                        None
                    }
                    OnError::Placeholder(text) => Some(ExaminableProperty::opaque(*name, text)),
                },
            })
    }

    /// Binds this set to one instance, producing a [`PropertySource`].
    pub fn bind<'a>(&'a self, target: &'a T) -> BoundFields<'a, T> {
        BoundFields { fields: self, target }
    }
}

impl<T> Default for FieldSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A [`FieldSet`] paired with the instance it describes.
pub struct BoundFields<'a, T> {
    fields: &'a FieldSet<T>,
    target: &'a T,
}

impl<T> PropertySource for BoundFields<'_, T> {
    fn examinable_properties(&self) -> Box<dyn Iterator<Item = ExaminableProperty<'_>> + '_> {
        Box::new(self.fields.properties(self.target))
    }
}
