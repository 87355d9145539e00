//! Named collection of bare values.
//!
//! Unlike a [`TagSet`](crate::TagSet), a `MetaSet` stores [`Value`]s with no
//! kind attached. Typed getters narrow on read and widen numbers where the
//! conversion is lossless:
//!
//! - `i8`, `i16`, `i32`, `isize` and `i64` read as `i64`
//! - those and `f32` read as `f64` (integers beyond 2^53 round)
//!
//! Strings read as times only when the caller supplies a time format.

use chrono_tz::Tz;
use rustc_hash::FxHashMap;

use crate::convert::{
    parse_time, widen_float64, widen_float64_slice, widen_int64, widen_int64_slice,
};
use crate::{Element, Error, ErrorKind, Options, RawJson, Result, Seed, Timestamp, Value};

/// Capacity of a set built without a seed or length.
const DEFAULT_CAPACITY: usize = 10;

/// Values keyed by name.
#[derive(Clone, Debug, PartialEq)]
pub struct MetaSet {
    meta: FxHashMap<String, Value>,
}

impl Default for MetaSet {
    fn default() -> Self {
        Self::new(Options::new())
    }
}

impl MetaSet {
    /// Build a set, taking ownership of a [`Seed::Meta`] seed when present.
    ///
    /// A [`Seed::Tags`] seed is dropped.
    pub fn new(mut opts: Options) -> Self {
        let meta = match opts.take_seed() {
            Some(Seed::Meta(seed)) => seed
                .into_iter()
                .filter_map(|(name, value)| value.map(|value| (name, value)))
                .collect(),
            seed => {
                if let Some(Seed::Tags(tags)) = seed {
                    tracing::debug!(entries = tags.len(), "meta set ignores tag seed");
                }
                let capacity = match opts.length() {
                    0 => DEFAULT_CAPACITY,
                    n => n,
                };
                FxHashMap::with_capacity_and_hasher(capacity, Default::default())
            }
        };
        Self { meta }
    }

    pub fn meta_get(&self, name: &str) -> Option<&Value> {
        self.meta.get(name)
    }

    /// Store `value` under `name`. Setting `None` does nothing.
    pub fn meta_set(&mut self, name: impl Into<String>, value: impl Into<Option<Value>>) {
        if let Some(value) = value.into() {
            self.meta.insert(name.into(), value);
        }
    }

    pub fn meta_delete(&mut self, name: &str) -> Option<Value> {
        self.meta.remove(name)
    }

    pub fn meta_count(&self) -> usize {
        self.meta.len()
    }

    /// All values, read-only.
    pub fn meta_get_all(&self) -> &FxHashMap<String, Value> {
        &self.meta
    }

    pub fn meta_delete_all(&mut self) {
        self.meta.clear();
    }

    pub fn meta_get_string(&self, name: &str) -> Result<&str> {
        match self.lookup(name)? {
            Value::String(s) => Ok(s),
            _ => Err(invalid_type(name)),
        }
    }

    pub fn meta_get_string_slice(&self, name: &str) -> Result<&[String]> {
        match self.lookup(name)? {
            Value::StringSlice(v) => Ok(v),
            _ => Err(invalid_type(name)),
        }
    }

    /// Read an integer, widened to `i64`.
    pub fn meta_get_int64(&self, name: &str) -> Result<i64> {
        widen_int64(self.lookup(name)?).ok_or_else(|| invalid_type(name))
    }

    /// Read an integer sequence, widened to `i64`.
    pub fn meta_get_int64_slice(&self, name: &str) -> Result<Vec<i64>> {
        widen_int64_slice(self.lookup(name)?).ok_or_else(|| invalid_type(name))
    }

    /// Read a number, widened to `f64`.
    pub fn meta_get_float64(&self, name: &str) -> Result<f64> {
        widen_float64(self.lookup(name)?).ok_or_else(|| invalid_type(name))
    }

    /// Read a numeric sequence, widened to `f64`.
    pub fn meta_get_float64_slice(&self, name: &str) -> Result<Vec<f64>> {
        widen_float64_slice(self.lookup(name)?).ok_or_else(|| invalid_type(name))
    }

    /// Read a time.
    ///
    /// A string value is parsed only when `opts` carries an explicit time
    /// format, honoring its location and zero-time sentinels.
    pub fn meta_get_time(&self, name: &str, opts: &Options) -> Result<Timestamp> {
        match (self.lookup(name)?, opts.explicit_time_format()) {
            (Value::Time(tim), _) => Ok(*tim),
            (Value::String(s), Some(format)) => {
                parse_time(s, format, opts).map_err(|e| e.in_field(name))
            }
            _ => Err(invalid_type(name)),
        }
    }

    /// Read a time sequence. Strings are handled like
    /// [`MetaSet::meta_get_time`].
    pub fn meta_get_time_slice(&self, name: &str, opts: &Options) -> Result<Vec<Timestamp>> {
        match (self.lookup(name)?, opts.explicit_time_format()) {
            (Value::TimeSlice(v), _) => Ok(v.clone()),
            (Value::StringSlice(v), Some(format)) => v
                .iter()
                .map(|s| parse_time(s, format, opts))
                .collect::<Result<_>>()
                .map_err(|e| e.in_field(name)),
            _ => Err(invalid_type(name)),
        }
    }

    /// Read JSON stored as JSON, bytes or a string.
    ///
    /// Bytes and strings fail with `InvalidFormat` unless they hold a valid
    /// document.
    pub fn meta_get_json(&self, name: &str) -> Result<RawJson> {
        let bytes = match self.lookup(name)? {
            Value::Json(doc) => return Ok(doc.clone()),
            Value::Bytes(bytes) => bytes.clone(),
            Value::String(s) => s.clone().into_bytes(),
            _ => return Err(invalid_type(name)),
        };
        RawJson::parse(bytes).map_err(|e| e.in_field(name))
    }

    pub fn meta_get_bool(&self, name: &str) -> Result<bool> {
        match self.lookup(name)? {
            Value::Bool(v) => Ok(*v),
            _ => Err(invalid_type(name)),
        }
    }

    pub fn meta_get_bool_slice(&self, name: &str) -> Result<&[bool]> {
        match self.lookup(name)? {
            Value::BoolSlice(v) => Ok(v),
            _ => Err(invalid_type(name)),
        }
    }

    pub fn meta_get_int(&self, name: &str) -> Result<isize> {
        match self.lookup(name)? {
            Value::Int(v) => Ok(*v),
            _ => Err(invalid_type(name)),
        }
    }

    pub fn meta_get_int_slice(&self, name: &str) -> Result<&[isize]> {
        match self.lookup(name)? {
            Value::IntSlice(v) => Ok(v),
            _ => Err(invalid_type(name)),
        }
    }

    /// Read a time zone stored by name.
    ///
    /// Names are accepted only when `opts` enables
    /// [`Options::with_loc_string`]; unknown names fail with
    /// `InvalidFormat`.
    pub fn meta_get_loc(&self, name: &str, opts: &Options) -> Result<Tz> {
        match self.lookup(name)? {
            Value::String(s) if opts.location_as_string() => s
                .parse()
                .map_err(|_| Error::new(ErrorKind::InvalidFormat).in_field(name)),
            _ => Err(invalid_type(name)),
        }
    }

    fn lookup(&self, name: &str) -> Result<&Value> {
        self.meta
            .get(name)
            .ok_or_else(|| Error::new(ErrorKind::Missing).in_field(name))
    }
}

/// The value named `name` as a `T`, with no widening.
pub fn get_meta_value<T: Element>(set: &MetaSet, name: &str) -> Result<T> {
    let value = set.lookup(name)?;
    T::from_value_ref(value)
        .cloned()
        .ok_or_else(|| invalid_type(name))
}

fn invalid_type(name: &str) -> Error {
    Error::new(ErrorKind::InvalidType).in_field(name)
}
