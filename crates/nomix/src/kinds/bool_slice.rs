//! `KindBoolSlice` tags.

use super::invalid_type;
use crate::convert::render_seq;
use crate::spec::parse_not_implemented;
use crate::tag::boxed;
use crate::{Flavor, Kind, Options, Result, Slice, Spec, Value};

/// Boolean sequence tag.
pub type BoolSlice = Slice<bool>;

struct BoolSliceFlavor;

impl Flavor<[bool]> for BoolSliceFlavor {
    fn render(&self, value: &[bool]) -> String {
        render_seq(value, ToString::to_string)
    }
}

static FLAVOR: BoolSliceFlavor = BoolSliceFlavor;

static SPEC: Spec = Spec::new(
    Kind::BOOL_SLICE,
    |name, value, opts| boxed(create_bool_slice(name, value, opts)),
    parse_not_implemented,
);

pub fn bool_slice_spec() -> Spec {
    SPEC
}

pub fn new_bool_slice(name: impl Into<String>, value: Vec<bool>) -> BoolSlice {
    Slice::new(name, value, Kind::BOOL_SLICE, &FLAVOR)
}

pub fn create_bool_slice(name: &str, value: Value, _: &Options) -> Result<BoolSlice> {
    match value {
        Value::BoolSlice(v) => Ok(new_bool_slice(name, v)),
        _ => Err(invalid_type(name)),
    }
}

#[cfg(test)]
mod tests;
