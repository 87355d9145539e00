//! `KindInt` tags.

use super::invalid_type;
use crate::tag::boxed;
use crate::{convert, Flavor, Kind, Options, Result, Single, Spec, Value};

/// Machine-sized integer tag.
pub type Int = Single<isize>;

struct IntFlavor;

impl Flavor<isize> for IntFlavor {
    fn render(&self, value: &isize) -> String {
        value.to_string()
    }

    fn scalar(&self, value: &isize) -> Option<Result<Value>> {
        Some(Ok(Value::Int64(*value as i64)))
    }
}

static FLAVOR: IntFlavor = IntFlavor;

static SPEC: Spec = Spec::new(
    Kind::INT,
    |name, value, opts| boxed(create_int(name, value, opts)),
    |name, s, opts| boxed(parse_int(name, s, opts)),
);

pub fn int_spec() -> Spec {
    SPEC
}

pub fn new_int(name: impl Into<String>, value: isize) -> Int {
    Single::new(name, value, Kind::INT, &FLAVOR)
}

/// Create from a [`Value::Int`].
pub fn create_int(name: &str, value: Value, _: &Options) -> Result<Int> {
    match value {
        Value::Int(v) => Ok(new_int(name, v)),
        _ => Err(invalid_type(name)),
    }
}

/// Parse in the radix from `opts`.
///
/// A radix outside `2..=36` fails with `InvalidFormat` naming the radix.
pub fn parse_int(name: &str, s: &str, opts: &Options) -> Result<Int> {
    convert::parse_int(s, opts)
        .map(|v| new_int(name, v))
        .map_err(|e| e.in_field(name))
}

#[cfg(test)]
mod tests;
