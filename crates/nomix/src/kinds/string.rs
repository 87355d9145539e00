//! `KindString` tags.

use super::invalid_type;
use crate::tag::boxed;
use crate::{Flavor, Kind, Options, Result, Single, Spec, Value};

/// String tag.
pub type Str = Single<String>;

struct StringFlavor;

impl Flavor<String> for StringFlavor {
    fn render(&self, value: &String) -> String {
        value.clone()
    }
}

static FLAVOR: StringFlavor = StringFlavor;

static SPEC: Spec = Spec::new(
    Kind::STRING,
    |name, value, opts| boxed(create_string(name, value, opts)),
    |name, s, opts| boxed(parse_string(name, s, opts)),
);

pub fn string_spec() -> Spec {
    SPEC
}

pub fn new_string(name: impl Into<String>, value: impl Into<String>) -> Str {
    Single::new(name, value.into(), Kind::STRING, &FLAVOR)
}

pub fn create_string(name: &str, value: Value, _: &Options) -> Result<Str> {
    match value {
        Value::String(v) => Ok(new_string(name, v)),
        _ => Err(invalid_type(name)),
    }
}

/// Never fails; the input is the value.
pub fn parse_string(name: &str, s: &str, _: &Options) -> Result<Str> {
    Ok(new_string(name, s))
}
