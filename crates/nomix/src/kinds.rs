//! Builtin kinds.
//!
//! One module per [`Kind`]: a type alias over [`Single`](crate::Single) or
//! [`Slice`](crate::Slice), its flavor, and the `new_*` / `create_*` /
//! `parse_*` / `*_spec` functions. [`BUILTIN_TYPES`] lists the native type
//! associations a builtin registry starts with.

mod boolean;
mod bool_slice;
mod byte_slice;
mod float64;
mod float64_slice;
mod int;
mod int64;
mod int64_slice;
mod int_slice;
mod json;
mod string;
mod string_slice;
mod time;
mod time_slice;

pub use boolean::{bool_spec, create_bool, new_bool, parse_bool, Bool};
pub use bool_slice::{bool_slice_spec, create_bool_slice, new_bool_slice, BoolSlice};
pub use byte_slice::{byte_slice_spec, create_byte_slice, new_byte_slice, ByteSlice};
pub use float64::{create_float64, float64_spec, new_float64, parse_float64, Float64};
pub use float64_slice::{
    create_float64_slice, float64_slice_spec, new_float64_slice, Float64Slice,
};
pub use int::{create_int, int_spec, new_int, parse_int, Int};
pub use int64::{create_int64, int64_spec, new_int64, parse_int64, Int64};
pub use int64_slice::{create_int64_slice, int64_slice_spec, new_int64_slice, Int64Slice};
pub use int_slice::{create_int_slice, int_slice_spec, new_int_slice, IntSlice};
pub use json::{create_json, json_spec, new_json, parse_json, Json};
pub use string::{create_string, new_string, parse_string, string_spec, Str};
pub use string_slice::{
    create_string_slice, new_string_slice, string_slice_spec, StringSlice,
};
pub use time::{create_time, new_time, parse_time, time_spec, Time};
pub use time_slice::{create_time_slice, new_time_slice, time_slice_spec, TimeSlice};

use crate::{Error, ErrorKind, Kind, NativeType, Spec};

/// Specs of every builtin kind.
pub fn builtin_specs() -> [Spec; 14] {
    [
        bool_spec(),
        int_spec(),
        int64_spec(),
        float64_spec(),
        string_spec(),
        time_spec(),
        json_spec(),
        byte_slice_spec(),
        int_slice_spec(),
        int64_slice_spec(),
        float64_slice_spec(),
        bool_slice_spec(),
        string_slice_spec(),
        time_slice_spec(),
    ]
}

/// Native types a builtin registry resolves, and the kind each creates.
pub const BUILTIN_TYPES: &[(NativeType, Kind)] = &[
    (NativeType::Int, Kind::INT),
    (NativeType::Uint8, Kind::INT64),
    (NativeType::Int8, Kind::INT64),
    (NativeType::Int16, Kind::INT64),
    (NativeType::Int32, Kind::INT64),
    (NativeType::Int64, Kind::INT64),
    (NativeType::Float32, Kind::FLOAT64),
    (NativeType::Float64, Kind::FLOAT64),
    (NativeType::Bool, Kind::BOOL),
    (NativeType::String, Kind::STRING),
    (NativeType::Time, Kind::TIME),
    (NativeType::Json, Kind::JSON),
    (NativeType::Bytes, Kind::BYTE_SLICE),
    (NativeType::IntSlice, Kind::INT_SLICE),
    (NativeType::Int8Slice, Kind::INT64_SLICE),
    (NativeType::Int16Slice, Kind::INT64_SLICE),
    (NativeType::Int32Slice, Kind::INT64_SLICE),
    (NativeType::Int64Slice, Kind::INT64_SLICE),
    (NativeType::Float32Slice, Kind::FLOAT64_SLICE),
    (NativeType::Float64Slice, Kind::FLOAT64_SLICE),
    (NativeType::BoolSlice, Kind::BOOL_SLICE),
    (NativeType::StringSlice, Kind::STRING_SLICE),
    (NativeType::TimeSlice, Kind::TIME_SLICE),
];

/// `"<name>: invalid element type"`.
fn invalid_type(name: &str) -> Error {
    Error::new(ErrorKind::InvalidType).in_field(name)
}

/// `"<name>: invalid element format"`.
fn invalid_format(name: &str) -> Error {
    Error::new(ErrorKind::InvalidFormat).in_field(name)
}
