//! `KindIntSlice` tags.

use super::invalid_type;
use crate::convert::render_seq;
use crate::spec::parse_not_implemented;
use crate::tag::boxed;
use crate::{Flavor, Kind, Options, Result, Slice, Spec, Value};

/// Machine-sized integer sequence tag.
pub type IntSlice = Slice<isize>;

struct IntSliceFlavor;

impl Flavor<[isize]> for IntSliceFlavor {
    fn render(&self, value: &[isize]) -> String {
        render_seq(value, ToString::to_string)
    }
}

static FLAVOR: IntSliceFlavor = IntSliceFlavor;

static SPEC: Spec = Spec::new(
    Kind::INT_SLICE,
    |name, value, opts| boxed(create_int_slice(name, value, opts)),
    parse_not_implemented,
);

pub fn int_slice_spec() -> Spec {
    SPEC
}

pub fn new_int_slice(name: impl Into<String>, value: Vec<isize>) -> IntSlice {
    Slice::new(name, value, Kind::INT_SLICE, &FLAVOR)
}

pub fn create_int_slice(name: &str, value: Value, _: &Options) -> Result<IntSlice> {
    match value {
        Value::IntSlice(v) => Ok(new_int_slice(name, v)),
        _ => Err(invalid_type(name)),
    }
}
