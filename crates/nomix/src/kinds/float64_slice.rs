//! `KindFloat64Slice` tags.

use super::invalid_type;
use crate::convert::{render_seq, to_float64};
use crate::spec::parse_not_implemented;
use crate::tag::boxed;
use crate::{Flavor, Kind, NativeType, Options, Result, Slice, Spec, Value};

/// 64-bit float sequence tag.
pub type Float64Slice = Slice<f64>;

struct Float64SliceFlavor;

impl Flavor<[f64]> for Float64SliceFlavor {
    fn render(&self, value: &[f64]) -> String {
        render_seq(value, |v| format!("{v}"))
    }
}

static FLAVOR: Float64SliceFlavor = Float64SliceFlavor;

static SPEC: Spec = Spec::new(
    Kind::FLOAT64_SLICE,
    |name, value, opts| boxed(create_float64_slice(name, value, opts)),
    parse_not_implemented,
);

pub fn float64_slice_spec() -> Spec {
    SPEC
}

pub fn new_float64_slice(name: impl Into<String>, value: Vec<f64>) -> Float64Slice {
    Slice::new(name, value, Kind::FLOAT64_SLICE, &FLAVOR)
}

/// Create from any float or signed integer sequence.
///
/// Like [`create_float64`](super::create_float64), `isize` and `i64`
/// elements beyond 2^53-1 in magnitude fail the whole sequence.
pub fn create_float64_slice(name: &str, value: Value, _: &Options) -> Result<Float64Slice> {
    let v = match value {
        Value::Float64Slice(v) => v,
        Value::Float32Slice(v) => v.into_iter().map(f64::from).collect(),
        Value::Int8Slice(v) => v.into_iter().map(f64::from).collect(),
        Value::Int16Slice(v) => v.into_iter().map(f64::from).collect(),
        Value::Int32Slice(v) => v.into_iter().map(f64::from).collect(),
        Value::IntSlice(v) => v
            .into_iter()
            .map(|x| to_float64(x as i64, NativeType::Int))
            .collect::<Result<_>>()
            .map_err(|e| e.in_field(name))?,
        Value::Int64Slice(v) => v
            .into_iter()
            .map(|x| to_float64(x, NativeType::Int64))
            .collect::<Result<_>>()
            .map_err(|e| e.in_field(name))?,
        _ => return Err(invalid_type(name)),
    };
    Ok(new_float64_slice(name, v))
}
