//! Value conversion, parsing and rendering helpers shared by the kinds and
//! the meta set.
//!
//! # Widening
//!
//! Integer values widen losslessly to `i64`. Conversion to `f64` comes in
//! two flavors: [`to_float64`] rejects magnitudes a `f64` cannot hold
//! exactly, while the meta set widens unchecked.

use chrono::{
    DateTime, Duration, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, Offset, SecondsFormat,
    TimeZone,
};
use chrono_tz::Tz;

use crate::{Error, ErrorKind, NativeType, Options, Result, Timestamp, Value, DEFAULT_TIME_FORMAT};

/// Largest integer magnitude a `f64` represents exactly.
const MAX_SAFE_FLOAT64: i64 = (1 << 53) - 1;

/// Convert an integer to `f64`, failing when precision would be lost.
///
/// `ty` names the source type in the error message.
#[expect(clippy::cast_precision_loss, reason = "magnitude checked against 2^53")]
pub fn to_float64(v: i64, ty: NativeType) -> Result<f64> {
    if !(-MAX_SAFE_FLOAT64..=MAX_SAFE_FLOAT64).contains(&v) {
        return Err(Error::with_detail(
            ErrorKind::InvalidValue,
            format!("{ty} value out of range for precise float64 conversion"),
        ));
    }
    Ok(v as f64)
}

/// Widen an integer value to `i64`.
pub(crate) fn widen_int64(value: &Value) -> Option<i64> {
    match *value {
        Value::Int(v) => Some(v as i64),
        Value::Int8(v) => Some(i64::from(v)),
        Value::Int16(v) => Some(i64::from(v)),
        Value::Int32(v) => Some(i64::from(v)),
        Value::Int64(v) => Some(v),
        _ => None,
    }
}

/// Widen an integer sequence to `Vec<i64>`.
pub(crate) fn widen_int64_slice(value: &Value) -> Option<Vec<i64>> {
    match value {
        Value::IntSlice(v) => Some(v.iter().map(|&x| x as i64).collect()),
        Value::Int8Slice(v) => Some(v.iter().copied().map(i64::from).collect()),
        Value::Int16Slice(v) => Some(v.iter().copied().map(i64::from).collect()),
        Value::Int32Slice(v) => Some(v.iter().copied().map(i64::from).collect()),
        Value::Int64Slice(v) => Some(v.clone()),
        _ => None,
    }
}

/// Widen a numeric value to `f64`. Integers beyond 2^53 round.
#[expect(clippy::cast_precision_loss, reason = "documented as unchecked")]
pub(crate) fn widen_float64(value: &Value) -> Option<f64> {
    match *value {
        Value::Int(v) => Some(v as f64),
        Value::Int8(v) => Some(f64::from(v)),
        Value::Int16(v) => Some(f64::from(v)),
        Value::Int32(v) => Some(f64::from(v)),
        Value::Int64(v) => Some(v as f64),
        Value::Float32(v) => Some(f64::from(v)),
        Value::Float64(v) => Some(v),
        _ => None,
    }
}

/// Widen a numeric sequence to `Vec<f64>`. Integers beyond 2^53 round.
#[expect(clippy::cast_precision_loss, reason = "documented as unchecked")]
pub(crate) fn widen_float64_slice(value: &Value) -> Option<Vec<f64>> {
    match value {
        Value::IntSlice(v) => Some(v.iter().map(|&x| x as f64).collect()),
        Value::Int8Slice(v) => Some(v.iter().copied().map(f64::from).collect()),
        Value::Int16Slice(v) => Some(v.iter().copied().map(f64::from).collect()),
        Value::Int32Slice(v) => Some(v.iter().copied().map(f64::from).collect()),
        Value::Int64Slice(v) => Some(v.iter().map(|&x| x as f64).collect()),
        Value::Float32Slice(v) => Some(v.iter().copied().map(f64::from).collect()),
        Value::Float64Slice(v) => Some(v.clone()),
        _ => None,
    }
}

/// Parse a boolean literal.
///
/// Accepts `1 t T true TRUE True` and `0 f F false FALSE False`.
pub fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}

/// Parse an `i64` in the radix from `opts`.
pub(crate) fn parse_int64(s: &str, opts: &Options) -> Result<i64> {
    let radix = checked_radix(opts)?;
    i64::from_str_radix(s, radix).map_err(|_| Error::new(ErrorKind::InvalidFormat))
}

/// Parse an `isize` in the radix from `opts`.
pub(crate) fn parse_int(s: &str, opts: &Options) -> Result<isize> {
    let radix = checked_radix(opts)?;
    isize::from_str_radix(s, radix).map_err(|_| Error::new(ErrorKind::InvalidFormat))
}

fn checked_radix(opts: &Options) -> Result<u32> {
    match opts.radix() {
        radix @ 2..=36 => Ok(radix),
        radix => Err(Error::with_detail(
            ErrorKind::InvalidFormat,
            format!("invalid radix {radix}"),
        )),
    }
}

/// Parse a time with `format`.
///
/// Zero-time sentinels from `opts` parse to [`Timestamp::default`]. Inputs
/// without an offset are placed in the options' location, or UTC when none
/// is set. A format without time fields parses as midnight.
pub fn parse_time(s: &str, format: &str, opts: &Options) -> Result<Timestamp> {
    if opts.is_zero_time(s) {
        return Ok(Timestamp::default());
    }
    let invalid = || Error::new(ErrorKind::InvalidFormat);

    if format == DEFAULT_TIME_FORMAT {
        return DateTime::parse_from_rfc3339(s).map_err(|_| invalid());
    }
    if let Ok(tim) = DateTime::parse_from_str(s, format) {
        return Ok(tim);
    }
    let naive = NaiveDateTime::parse_from_str(s, format)
        .or_else(|_| NaiveDate::parse_from_str(s, format).map(|d| d.and_time(NaiveTime::default())))
        .map_err(|_| invalid())?;

    let Some(tz) = opts.location() else {
        return Ok(naive.and_utc().fixed_offset());
    };
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(tim) | LocalResult::Ambiguous(tim, _) => Ok(tim.fixed_offset()),
        LocalResult::None => skip_gap(tz, naive).ok_or_else(invalid),
    }
}

/// Resolve a local time that falls in a daylight-saving gap.
///
/// The offset in force before the gap is applied, which moves the time
/// forward by the length of the gap (02:30 becomes 03:30 across a one hour
/// spring-forward).
fn skip_gap(tz: Tz, naive: NaiveDateTime) -> Option<Timestamp> {
    let before = naive.checked_sub_signed(Duration::days(1))?;
    let offset = tz.offset_from_utc_datetime(&before).fix();
    let utc = naive.checked_sub_signed(Duration::seconds(i64::from(offset.local_minus_utc())))?;
    Some(tz.from_utc_datetime(&utc).fixed_offset())
}

/// Render a time as RFC 3339, `Z` for UTC, fractional seconds as needed.
pub fn render_time(tim: &Timestamp) -> String {
    tim.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Render a sequence as `[a, b]`.
pub(crate) fn render_seq<T>(items: &[T], render: impl Fn(&T) -> String) -> String {
    let mut out = String::from("[");
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&render(item));
    }
    out.push(']');
    out
}

/// Wrap in double quotes, verbatim.
pub(crate) fn quote(s: &str) -> String {
    format!("\"{s}\"")
}
