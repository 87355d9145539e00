//! `KindTimeSlice` tags.

use super::{invalid_format, invalid_type};
use crate::convert::{parse_time, quote, render_seq, render_time};
use crate::spec::parse_not_implemented;
use crate::tag::boxed;
use crate::{Flavor, Kind, Options, Result, Slice, Spec, Timestamp, Value};

/// Time sequence tag.
pub type TimeSlice = Slice<Timestamp>;

struct TimeSliceFlavor;

impl Flavor<[Timestamp]> for TimeSliceFlavor {
    fn render(&self, value: &[Timestamp]) -> String {
        render_seq(value, |t| quote(&render_time(t)))
    }
}

static FLAVOR: TimeSliceFlavor = TimeSliceFlavor;

static SPEC: Spec = Spec::new(
    Kind::TIME_SLICE,
    |name, value, opts| boxed(create_time_slice(name, value, opts)),
    parse_not_implemented,
);

pub fn time_slice_spec() -> Spec {
    SPEC
}

pub fn new_time_slice(name: impl Into<String>, value: Vec<Timestamp>) -> TimeSlice {
    Slice::new(name, value, Kind::TIME_SLICE, &FLAVOR)
}

/// Create from times, or strings parsed with the options' time format.
/// Zero-time sentinels are honored per element.
pub fn create_time_slice(name: &str, value: Value, opts: &Options) -> Result<TimeSlice> {
    let v = match value {
        Value::TimeSlice(v) => v,
        Value::StringSlice(v) => v
            .iter()
            .map(|s| parse_time(s, opts.time_format(), opts))
            .collect::<Result<_>>()
            .map_err(|_| invalid_format(name))?,
        _ => return Err(invalid_type(name)),
    };
    Ok(new_time_slice(name, v))
}
