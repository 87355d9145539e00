//! `KindInt64Slice` tags.

use super::invalid_type;
use crate::convert::render_seq;
use crate::spec::parse_not_implemented;
use crate::tag::boxed;
use crate::{Flavor, Kind, Options, Result, Slice, Spec, Value};

/// 64-bit integer sequence tag.
pub type Int64Slice = Slice<i64>;

struct Int64SliceFlavor;

impl Flavor<[i64]> for Int64SliceFlavor {
    fn render(&self, value: &[i64]) -> String {
        render_seq(value, ToString::to_string)
    }
}

static FLAVOR: Int64SliceFlavor = Int64SliceFlavor;

static SPEC: Spec = Spec::new(
    Kind::INT64_SLICE,
    |name, value, opts| boxed(create_int64_slice(name, value, opts)),
    parse_not_implemented,
);

pub fn int64_slice_spec() -> Spec {
    SPEC
}

pub fn new_int64_slice(name: impl Into<String>, value: Vec<i64>) -> Int64Slice {
    Slice::new(name, value, Kind::INT64_SLICE, &FLAVOR)
}

/// Create from bytes or any signed integer sequence, widening each element.
pub fn create_int64_slice(name: &str, value: Value, _: &Options) -> Result<Int64Slice> {
    let v = match value {
        Value::Int64Slice(v) => v,
        Value::Bytes(v) => v.into_iter().map(i64::from).collect(),
        Value::IntSlice(v) => v.into_iter().map(|x| x as i64).collect(),
        Value::Int8Slice(v) => v.into_iter().map(i64::from).collect(),
        Value::Int16Slice(v) => v.into_iter().map(i64::from).collect(),
        Value::Int32Slice(v) => v.into_iter().map(i64::from).collect(),
        _ => return Err(invalid_type(name)),
    };
    Ok(new_int64_slice(name, v))
}
