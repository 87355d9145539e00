//! Construction options shared by specs, tag sets and meta sets.
//!
//! `Options` is a by-value builder: every `with_*` method consumes and
//! returns the options, and a later call for the same field wins. Nothing is
//! validated at construction; consumers interpret the fields they need.

use chrono_tz::Tz;
use rustc_hash::FxHashMap;

use crate::{BoxedTag, Value};

/// Time format used when none was supplied.
///
/// RFC 3339 with optional fractional seconds; a trailing `Z` is accepted for
/// UTC.
pub const DEFAULT_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%:z";

/// Default radix for integer parsing.
const DEFAULT_RADIX: u32 = 10;

/// Initial entries for a tag set or meta set.
///
/// `None` entries are dropped when the set is built.
#[derive(Clone, Debug)]
pub enum Seed {
    /// Seed for a [`TagSet`](crate::TagSet).
    Tags(FxHashMap<String, Option<BoxedTag>>),
    /// Seed for a [`MetaSet`](crate::MetaSet).
    Meta(FxHashMap<String, Option<Value>>),
}

/// Options for creating and parsing tags and building sets.
#[derive(Clone, Debug)]
pub struct Options {
    length: usize,
    seed: Option<Seed>,
    time_format: Option<String>,
    location: Option<Tz>,
    location_as_string: bool,
    zero_time: Vec<String>,
    radix: u32,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            length: 0,
            seed: None,
            time_format: None,
            location: None,
            location_as_string: false,
            zero_time: Vec::new(),
            radix: DEFAULT_RADIX,
        }
    }
}

impl Options {
    /// Options with every field at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial capacity of a set.
    #[must_use]
    pub fn with_len(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Seed a tag set with `tags`. The map moves into the set.
    ///
    /// A [`MetaSet`](crate::MetaSet) built from these options ignores the
    /// seed. Only one seed is kept; a later `with_meta` replaces it.
    #[must_use]
    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = (String, T)>,
        T: Into<Option<BoxedTag>>,
    {
        let tags = tags.into_iter().map(|(k, v)| (k, v.into())).collect();
        self.seed = Some(Seed::Tags(tags));
        self
    }

    /// Seed a meta set with `meta`. The map moves into the set.
    ///
    /// A [`TagSet`](crate::TagSet) built from these options ignores the
    /// seed. Only one seed is kept; a later `with_tags` replaces it.
    #[must_use]
    pub fn with_meta<I, V>(mut self, meta: I) -> Self
    where
        I: IntoIterator<Item = (String, V)>,
        V: Into<Option<Value>>,
    {
        let meta = meta.into_iter().map(|(k, v)| (k, v.into())).collect();
        self.seed = Some(Seed::Meta(meta));
        self
    }

    /// Time format in `chrono` strftime syntax.
    #[must_use]
    pub fn with_time_format(mut self, format: impl Into<String>) -> Self {
        self.time_format = Some(format.into());
        self
    }

    /// Interpret times without an offset in `location`.
    #[must_use]
    pub fn with_time_loc(mut self, location: Tz) -> Self {
        self.location = Some(location);
        self
    }

    /// Accept time zone names stored as strings.
    #[must_use]
    pub fn with_loc_string(mut self) -> Self {
        self.location_as_string = true;
        self
    }

    /// Strings that parse to the zero time instead of going through the
    /// time format.
    #[must_use]
    pub fn with_zero_time<I, S>(mut self, zero: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.zero_time = zero.into_iter().map(Into::into).collect();
        self
    }

    /// Radix for integer parsing.
    #[must_use]
    pub fn with_radix(mut self, radix: u32) -> Self {
        self.radix = radix;
        self
    }

    /// Parse integers as hexadecimal (no `0x` prefix).
    #[must_use]
    pub fn with_radix_hex(self) -> Self {
        self.with_radix(16)
    }

    /// Initial capacity of a set.
    #[inline]
    pub fn length(&self) -> usize {
        self.length
    }

    /// The time format to create and parse with.
    pub fn time_format(&self) -> &str {
        self.time_format.as_deref().unwrap_or(DEFAULT_TIME_FORMAT)
    }

    /// The time format, only when one was supplied.
    pub fn explicit_time_format(&self) -> Option<&str> {
        self.time_format.as_deref()
    }

    /// Location for times without an offset.
    #[inline]
    pub fn location(&self) -> Option<Tz> {
        self.location
    }

    /// Whether time zone names may be stored as strings.
    #[inline]
    pub fn location_as_string(&self) -> bool {
        self.location_as_string
    }

    /// Zero-time sentinel strings.
    pub fn zero_time(&self) -> &[String] {
        &self.zero_time
    }

    /// Check whether `s` is a zero-time sentinel.
    pub fn is_zero_time(&self, s: &str) -> bool {
        self.zero_time.iter().any(|z| z == s)
    }

    /// Radix for integer parsing.
    #[inline]
    pub fn radix(&self) -> u32 {
        self.radix
    }

    /// Take the seed out, leaving `None`.
    pub fn take_seed(&mut self) -> Option<Seed> {
        self.seed.take()
    }
}
