//! `KindFloat64` tags.

use super::{invalid_format, invalid_type};
use crate::convert::to_float64;
use crate::tag::boxed;
use crate::{Flavor, Kind, NativeType, Options, Result, Single, Spec, Value};

/// 64-bit float tag.
pub type Float64 = Single<f64>;

struct Float64Flavor;

impl Flavor<f64> for Float64Flavor {
    fn render(&self, value: &f64) -> String {
        format!("{value}")
    }
}

static FLAVOR: Float64Flavor = Float64Flavor;

static SPEC: Spec = Spec::new(
    Kind::FLOAT64,
    |name, value, opts| boxed(create_float64(name, value, opts)),
    |name, s, opts| boxed(parse_float64(name, s, opts)),
);

pub fn float64_spec() -> Spec {
    SPEC
}

pub fn new_float64(name: impl Into<String>, value: f64) -> Float64 {
    Single::new(name, value, Kind::FLOAT64, &FLAVOR)
}

/// Create from a float or integer value.
///
/// `isize` and `i64` values beyond 2^53-1 in magnitude fail with
/// `InvalidValue`.
pub fn create_float64(name: &str, value: Value, _: &Options) -> Result<Float64> {
    let v = match value {
        Value::Float64(v) => v,
        Value::Float32(v) => f64::from(v),
        Value::Uint8(v) => f64::from(v),
        Value::Int8(v) => f64::from(v),
        Value::Int16(v) => f64::from(v),
        Value::Int32(v) => f64::from(v),
        Value::Int(v) => to_float64(v as i64, NativeType::Int).map_err(|e| e.in_field(name))?,
        Value::Int64(v) => to_float64(v, NativeType::Int64).map_err(|e| e.in_field(name))?,
        _ => return Err(invalid_type(name)),
    };
    Ok(new_float64(name, v))
}

pub fn parse_float64(name: &str, s: &str, _: &Options) -> Result<Float64> {
    s.parse()
        .map(|v| new_float64(name, v))
        .map_err(|_| invalid_format(name))
}
