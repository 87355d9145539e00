//! `KindInt64` tags.

use super::invalid_type;
use crate::tag::boxed;
use crate::{convert, Flavor, Kind, Options, Result, Single, Spec, Value};

/// 64-bit integer tag.
pub type Int64 = Single<i64>;

struct Int64Flavor;

impl Flavor<i64> for Int64Flavor {
    fn render(&self, value: &i64) -> String {
        value.to_string()
    }
}

static FLAVOR: Int64Flavor = Int64Flavor;

static SPEC: Spec = Spec::new(
    Kind::INT64,
    |name, value, opts| boxed(create_int64(name, value, opts)),
    |name, s, opts| boxed(parse_int64(name, s, opts)),
);

pub fn int64_spec() -> Spec {
    SPEC
}

pub fn new_int64(name: impl Into<String>, value: i64) -> Int64 {
    Single::new(name, value, Kind::INT64, &FLAVOR)
}

/// Create from any signed integer value or a `u8`.
pub fn create_int64(name: &str, value: Value, _: &Options) -> Result<Int64> {
    let v = match value {
        Value::Uint8(v) => i64::from(v),
        Value::Int(v) => v as i64,
        Value::Int8(v) => i64::from(v),
        Value::Int16(v) => i64::from(v),
        Value::Int32(v) => i64::from(v),
        Value::Int64(v) => v,
        _ => return Err(invalid_type(name)),
    };
    Ok(new_int64(name, v))
}

/// Parse in the radix from `opts`.
///
/// A radix outside `2..=36` fails with `InvalidFormat` naming the radix.
pub fn parse_int64(name: &str, s: &str, opts: &Options) -> Result<Int64> {
    convert::parse_int64(s, opts)
        .map(|v| new_int64(name, v))
        .map_err(|e| e.in_field(name))
}
