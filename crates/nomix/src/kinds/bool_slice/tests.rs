use pretty_assertions::assert_eq;

use super::*;
use crate::{ErrorKind, Tag};

#[test]
fn new() {
    let tag = new_bool_slice("A", vec![true, false]);
    assert_eq!(tag.tag_kind(), Kind::BOOL_SLICE);
    assert_eq!(tag.to_string(), "[true, false]");
    assert_eq!(tag.to_scalar().ok(), Some(Value::BoolSlice(vec![true, false])));
}

#[test]
fn create() {
    let opts = Options::new();
    assert_eq!(
        create_bool_slice("A", Value::BoolSlice(vec![true]), &opts).ok(),
        Some(new_bool_slice("A", vec![true]))
    );

    let err = create_bool_slice("A", Value::Bool(true), &opts).err();
    assert!(err.is_some_and(|e| e.is(ErrorKind::InvalidType)));
}

#[test]
fn spec() {
    let tag = bool_slice_spec()
        .tag_create("A", Value::BoolSlice(vec![false]), &Options::new())
        .ok();
    assert_eq!(tag.as_deref().map(Tag::tag_kind), Some(Kind::BOOL_SLICE));
}
