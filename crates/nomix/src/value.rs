//! Dynamic values passed to tag creation and stored in meta sets.
//!
//! [`Value`] is the closed set of native representations a tag can be
//! created from or a meta set can hold. [`NativeType`] names each
//! representation and is what the registry keys type associations on.
//! [`Element`] converts between a concrete payload type and `Value`.

use std::fmt;
use std::ops::Deref;

use chrono::{DateTime, FixedOffset};

use crate::{Error, ErrorKind, Result};

/// Timestamp payload of time kinds.
pub type Timestamp = DateTime<FixedOffset>;

/// Conversion between a concrete payload type and [`Value`].
///
/// Implemented for exactly the payload types of the `Value` variants, so a
/// successful conversion always means the runtime type matched.
pub trait Element: Clone + PartialEq + fmt::Debug + Send + Sync + 'static {
    /// Wrap in the matching `Value` variant.
    fn into_value(self) -> Value;

    /// Unwrap the matching variant, handing the value back on mismatch.
    fn from_value(value: Value) -> Result<Self, Value>;

    /// Borrow the payload of the matching variant.
    fn from_value_ref(value: &Value) -> Option<&Self>;
}

macro_rules! define_values {
    ($( $(#[$doc:meta])* $variant:ident($ty:ty) => $native:literal ),* $(,)?) => {
        /// A dynamically typed value.
        #[derive(Clone, Debug, PartialEq)]
        pub enum Value {
            $( $(#[$doc])* $variant($ty), )*
        }

        /// Runtime type of a [`Value`].
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum NativeType {
            $( $(#[$doc])* $variant, )*
        }

        impl Value {
            /// The runtime type of this value.
            pub const fn native_type(&self) -> NativeType {
                match self {
                    $( Value::$variant(_) => NativeType::$variant, )*
                }
            }
        }

        impl NativeType {
            /// Every native type, in declaration order.
            pub const ALL: &'static [NativeType] = &[ $( NativeType::$variant, )* ];

            /// The Rust spelling of the payload type.
            pub const fn name(self) -> &'static str {
                match self {
                    $( NativeType::$variant => $native, )*
                }
            }
        }

        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::$variant(value)
                }
            }

            impl Element for $ty {
                fn into_value(self) -> Value {
                    Value::$variant(self)
                }

                fn from_value(value: Value) -> Result<Self, Value> {
                    match value {
                        Value::$variant(v) => Ok(v),
                        other => Err(other),
                    }
                }

                fn from_value_ref(value: &Value) -> Option<&Self> {
                    match value {
                        Value::$variant(v) => Some(v),
                        _ => None,
                    }
                }
            }
        )*
    };
}

define_values! {
    Bool(bool) => "bool",
    /// Machine-sized integer.
    Int(isize) => "isize",
    Int8(i8) => "i8",
    Int16(i16) => "i16",
    Int32(i32) => "i32",
    Int64(i64) => "i64",
    Uint8(u8) => "u8",
    Float32(f32) => "f32",
    Float64(f64) => "f64",
    String(String) => "String",
    Time(Timestamp) => "DateTime<FixedOffset>",
    /// Validated raw JSON document.
    Json(RawJson) => "RawJson",
    /// Raw bytes.
    Bytes(Vec<u8>) => "Vec<u8>",
    IntSlice(Vec<isize>) => "Vec<isize>",
    Int8Slice(Vec<i8>) => "Vec<i8>",
    Int16Slice(Vec<i16>) => "Vec<i16>",
    Int32Slice(Vec<i32>) => "Vec<i32>",
    Int64Slice(Vec<i64>) => "Vec<i64>",
    Float32Slice(Vec<f32>) => "Vec<f32>",
    Float64Slice(Vec<f64>) => "Vec<f64>",
    BoolSlice(Vec<bool>) => "Vec<bool>",
    StringSlice(Vec<String>) => "Vec<String>",
    TimeSlice(Vec<Timestamp>) => "Vec<DateTime<FixedOffset>>",
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_owned())
    }
}

impl From<Vec<&str>> for Value {
    fn from(value: Vec<&str>) -> Self {
        Value::StringSlice(value.into_iter().map(str::to_owned).collect())
    }
}

impl fmt::Display for NativeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A syntactically valid JSON document kept as raw bytes.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct RawJson(Vec<u8>);

impl RawJson {
    /// Validate `bytes` as JSON and take ownership of them.
    ///
    /// Fails with [`ErrorKind::InvalidFormat`] for malformed input.
    pub fn parse(bytes: impl Into<Vec<u8>>) -> Result<Self> {
        let bytes = bytes.into();
        if !is_valid_json(&bytes) {
            return Err(Error::new(ErrorKind::InvalidFormat));
        }
        Ok(Self(bytes))
    }

    /// The document as bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Release the underlying bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl Deref for RawJson {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for RawJson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RawJson({})", String::from_utf8_lossy(&self.0))
    }
}

impl fmt::Display for RawJson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for RawJson {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::Error as _;

        let doc: serde_json::Value = serde_json::from_slice(&self.0).map_err(S::Error::custom)?;
        serde::Serialize::serialize(&doc, serializer)
    }
}

/// Check that `bytes` hold exactly one JSON document.
fn is_valid_json(bytes: &[u8]) -> bool {
    serde_json::from_slice::<serde_json::Value>(bytes).is_ok()
}

#[cfg(test)]
mod tests;
