//! `KindTime` tags.

use super::{invalid_format, invalid_type};
use crate::convert::{self, render_time};
use crate::tag::boxed;
use crate::{Flavor, Kind, Options, Result, Single, Spec, Timestamp, Value};

/// Time tag.
pub type Time = Single<Timestamp>;

struct TimeFlavor;

impl Flavor<Timestamp> for TimeFlavor {
    fn render(&self, value: &Timestamp) -> String {
        render_time(value)
    }
}

static FLAVOR: TimeFlavor = TimeFlavor;

static SPEC: Spec = Spec::new(
    Kind::TIME,
    |name, value, opts| boxed(create_time(name, value, opts)),
    |name, s, opts| boxed(parse_time(name, s, opts)),
);

pub fn time_spec() -> Spec {
    SPEC
}

pub fn new_time(name: impl Into<String>, value: Timestamp) -> Time {
    Single::new(name, value, Kind::TIME, &FLAVOR)
}

/// Create from a [`Value::Time`], or a [`Value::String`] parsed like
/// [`parse_time`].
pub fn create_time(name: &str, value: Value, opts: &Options) -> Result<Time> {
    match value {
        Value::Time(v) => Ok(new_time(name, v)),
        Value::String(s) => parse_time(name, &s, opts),
        _ => Err(invalid_type(name)),
    }
}

/// Parse with the options' time format, location and zero-time sentinels.
pub fn parse_time(name: &str, s: &str, opts: &Options) -> Result<Time> {
    convert::parse_time(s, opts.time_format(), opts)
        .map(|v| new_time(name, v))
        .map_err(|_| invalid_format(name))
}
