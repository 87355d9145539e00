//! `KindBool` tags.

use super::{invalid_format, invalid_type};
use crate::tag::boxed;
use crate::{convert, Flavor, Kind, Options, Result, Single, Spec, Value};

/// Boolean tag.
pub type Bool = Single<bool>;

struct BoolFlavor;

impl Flavor<bool> for BoolFlavor {
    fn render(&self, value: &bool) -> String {
        value.to_string()
    }

    fn scalar(&self, value: &bool) -> Option<Result<Value>> {
        Some(Ok(Value::Int64(i64::from(*value))))
    }
}

static FLAVOR: BoolFlavor = BoolFlavor;

static SPEC: Spec = Spec::new(
    Kind::BOOL,
    |name, value, opts| boxed(create_bool(name, value, opts)),
    |name, s, opts| boxed(parse_bool(name, s, opts)),
);

pub fn bool_spec() -> Spec {
    SPEC
}

pub fn new_bool(name: impl Into<String>, value: bool) -> Bool {
    Single::new(name, value, Kind::BOOL, &FLAVOR)
}

/// Create from a [`Value::Bool`].
pub fn create_bool(name: &str, value: Value, _: &Options) -> Result<Bool> {
    match value {
        Value::Bool(v) => Ok(new_bool(name, v)),
        _ => Err(invalid_type(name)),
    }
}

/// Parse one of `1 t T true TRUE True 0 f F false FALSE False`.
pub fn parse_bool(name: &str, s: &str, _: &Options) -> Result<Bool> {
    convert::parse_bool(s)
        .map(|v| new_bool(name, v))
        .ok_or_else(|| invalid_format(name))
}
