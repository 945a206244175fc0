use scrutiny::{Examinable, ExaminableProperty, Value};

/// A composite nesting another composite, shared by the renderer suites.
pub struct ExaminableA {
    pub c: ExaminableC,
}

impl ExaminableA {
    pub fn new() -> Self {
        Self {
            c: ExaminableC { base: ExaminableB },
        }
    }
}

impl Examinable for ExaminableA {
    fn examinable_properties(&self) -> Box<dyn Iterator<Item = ExaminableProperty<'_>> + '_> {
        Box::new(
            [
                ExaminableProperty::new("abc", "def"),
                ExaminableProperty::new("ghi", Value::examinable(&self.c)),
            ]
            .into_iter(),
        )
    }
}

pub struct ExaminableB;

impl Examinable for ExaminableB {
    fn examinable_properties(&self) -> Box<dyn Iterator<Item = ExaminableProperty<'_>> + '_> {
        Box::new(
            [
                ExaminableProperty::new("jkl", "mno"),
                ExaminableProperty::new("pqr", "stu"),
            ]
            .into_iter(),
        )
    }
}

/// Merges an embedded composite's properties ahead of its own, preserving
/// declaration order across the merge.
pub struct ExaminableC {
    pub base: ExaminableB,
}

impl Examinable for ExaminableC {
    fn examinable_properties(&self) -> Box<dyn Iterator<Item = ExaminableProperty<'_>> + '_> {
        Box::new(
            self.base
                .examinable_properties()
                .chain([ExaminableProperty::new("vwx", "yz")]),
        )
    }
}
