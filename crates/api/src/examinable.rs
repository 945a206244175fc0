//! The capability a composite value implements to participate in
//! examination.

use std::borrow::Cow;
use std::iter;

use crate::examiner::Examiner;
use crate::property::ExaminableProperty;

/// A value that exposes a display name and an ordered set of named
/// sub-values for examination.
///
/// Both methods have defaults: the name falls back to the implementing
/// type's own simple name, and the property sequence falls back to empty.
/// Property order is an invariant: renderers emit properties exactly as
/// yielded, never re-sorted.
pub trait Examinable {
    /// The name used to label this composite in rendered output.
    fn examinable_name(&self) -> Cow<'_, str> {
        Cow::Borrowed(simple_type_name::<Self>())
    }

    /// The properties, in declaration order. The sequence is consumed once
    /// per examination; implementations should build it fresh on each call.
    fn examinable_properties(&self) -> Box<dyn Iterator<Item = ExaminableProperty<'_>> + '_> {
        Box::new(iter::empty())
    }

    /// Examines this value with the given examiner.
    fn examine<E: Examiner>(&self, examiner: &E) -> E::Output
    where
        Self: Sized,
    {
        examiner.examine_examinable(self)
    }
}

/// The last path segment of a type's name, with any generic arguments
/// stripped. `foo::bar::Baz<Qux>` becomes `Baz`.
fn simple_type_name<T: ?Sized>() -> &'static str {
    let name = std::any::type_name::<T>();
    let name = name.split('<').next().unwrap_or(name);
    name.rsplit("::").next().unwrap_or(name)
}
