//! `KindByteSlice` tags.

use super::invalid_type;
use crate::convert::render_seq;
use crate::spec::parse_not_implemented;
use crate::tag::boxed;
use crate::{Flavor, Kind, Options, Result, Slice, Spec, Value};

/// Byte sequence tag.
pub type ByteSlice = Slice<u8>;

struct ByteSliceFlavor;

impl Flavor<[u8]> for ByteSliceFlavor {
    fn render(&self, value: &[u8]) -> String {
        render_seq(value, ToString::to_string)
    }
}

static FLAVOR: ByteSliceFlavor = ByteSliceFlavor;

static SPEC: Spec = Spec::new(
    Kind::BYTE_SLICE,
    |name, value, opts| boxed(create_byte_slice(name, value, opts)),
    parse_not_implemented,
);

pub fn byte_slice_spec() -> Spec {
    SPEC
}

pub fn new_byte_slice(name: impl Into<String>, value: Vec<u8>) -> ByteSlice {
    Slice::new(name, value, Kind::BYTE_SLICE, &FLAVOR)
}

pub fn create_byte_slice(name: &str, value: Value, _: &Options) -> Result<ByteSlice> {
    match value {
        Value::Bytes(v) => Ok(new_byte_slice(name, v)),
        _ => Err(invalid_type(name)),
    }
}

#[cfg(test)]
mod tests;
