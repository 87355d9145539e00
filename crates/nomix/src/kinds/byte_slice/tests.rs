use pretty_assertions::assert_eq;

use super::*;
use crate::{ErrorKind, Tag};

#[test]
fn new() {
    let tag = new_byte_slice("A", vec![1, 2, 255]);
    assert_eq!(tag.tag_kind(), Kind::BYTE_SLICE);
    assert_eq!(tag.to_string(), "[1, 2, 255]");
    assert_eq!(new_byte_slice("A", vec![]).to_string(), "[]");
    assert_eq!(tag.to_scalar().ok(), Some(Value::Bytes(vec![1, 2, 255])));
}

#[test]
fn create() {
    let opts = Options::new();
    assert_eq!(
        create_byte_slice("A", Value::Bytes(vec![1]), &opts).ok(),
        Some(new_byte_slice("A", vec![1]))
    );

    let err = create_byte_slice("A", Value::Int8Slice(vec![1]), &opts).err();
    assert!(err.is_some_and(|e| e.is(ErrorKind::InvalidType)));
}

#[test]
fn spec() {
    let spec = byte_slice_spec();
    let tag = spec.tag_create("A", Value::Bytes(vec![1]), &Options::new()).ok();
    assert_eq!(tag.as_deref().map(Tag::tag_kind), Some(Kind::BYTE_SLICE));

    let err = spec.tag_parse("A", "[1]", &Options::new()).err();
    assert!(err.is_some_and(|e| e.is(ErrorKind::NotImplemented)));
}
