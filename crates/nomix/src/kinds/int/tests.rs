use pretty_assertions::assert_eq;

use super::*;
use crate::{ErrorKind, Tag};

#[test]
fn new() {
    let tag = new_int("A", -42);
    assert_eq!(tag.tag_kind(), Kind::INT);
    assert_eq!(tag.tag_value(), Value::Int(-42));
    assert_eq!(tag.to_string(), "-42");
    assert_eq!(tag.to_scalar().ok(), Some(Value::Int64(-42)));
}

#[test]
fn create_accepts_only_int() {
    let opts = Options::new();
    assert_eq!(create_int("A", Value::Int(42), &opts).ok(), Some(new_int("A", 42)));

    let err = create_int("A", Value::Int64(42), &opts).err();
    assert!(err.is_some_and(|e| e.is(ErrorKind::InvalidType)));
}

#[test]
fn parse_with_radix() {
    assert_eq!(
        parse_int("A", "42", &Options::new()).ok(),
        Some(new_int("A", 42))
    );
    assert_eq!(
        parse_int("A", "ff", &Options::new().with_radix_hex()).ok(),
        Some(new_int("A", 255))
    );

    let err = parse_int("A", "4.2", &Options::new()).err();
    assert_eq!(
        err.map(|e| e.to_string()),
        Some("A: invalid element format".to_owned())
    );
}

#[test]
fn parse_reports_bad_radix() {
    let err = parse_int("A", "1", &Options::new().with_radix(37)).err();
    assert_eq!(
        err.map(|e| e.to_string()),
        Some("A: invalid radix 37".to_owned())
    );
}

#[test]
fn spec() {
    let tag = int_spec().tag_parse("A", "12", &Options::new()).ok();
    assert_eq!(tag.as_deref().map(Tag::tag_value), Some(Value::Int(12)));
}
