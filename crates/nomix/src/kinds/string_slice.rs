//! `KindStringSlice` tags.

use super::invalid_type;
use crate::convert::{quote, render_seq};
use crate::spec::parse_not_implemented;
use crate::tag::boxed;
use crate::{Flavor, Kind, Options, Result, Slice, Spec, Value};

/// String sequence tag.
pub type StringSlice = Slice<String>;

struct StringSliceFlavor;

impl Flavor<[String]> for StringSliceFlavor {
    fn render(&self, value: &[String]) -> String {
        render_seq(value, |s| quote(s))
    }
}

static FLAVOR: StringSliceFlavor = StringSliceFlavor;

static SPEC: Spec = Spec::new(
    Kind::STRING_SLICE,
    |name, value, opts| boxed(create_string_slice(name, value, opts)),
    parse_not_implemented,
);

pub fn string_slice_spec() -> Spec {
    SPEC
}

pub fn new_string_slice(name: impl Into<String>, value: Vec<String>) -> StringSlice {
    Slice::new(name, value, Kind::STRING_SLICE, &FLAVOR)
}

pub fn create_string_slice(name: &str, value: Value, _: &Options) -> Result<StringSlice> {
    match value {
        Value::StringSlice(v) => Ok(new_string_slice(name, v)),
        _ => Err(invalid_type(name)),
    }
}
