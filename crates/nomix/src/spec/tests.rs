use pretty_assertions::assert_eq;

use super::*;
use crate::kinds::new_string;
use crate::tag::boxed;

fn create_upper(name: &str, value: Value, _: &Options) -> Result<BoxedTag> {
    match value {
        Value::String(s) => boxed(Ok(new_string(name, s.to_uppercase()))),
        _ => Err(Error::new(ErrorKind::InvalidType).in_field(name)),
    }
}

fn parse_upper(name: &str, s: &str, _: &Options) -> Result<BoxedTag> {
    boxed(Ok(new_string(name, s.to_uppercase())))
}

#[test]
fn zero_spec() {
    let spec = Spec::default();
    assert!(spec.is_zero());
    assert_eq!(spec.tag_kind(), Kind::empty());

    let err = spec.tag_create("A", Value::Bool(true), &Options::new()).err();
    assert!(err.as_ref().is_some_and(|e| e.is(ErrorKind::NotImplemented)));
    assert_eq!(err.map(|e| e.to_string()), Some("A: not implemented".to_owned()));

    let err = spec.tag_parse("A", "true", &Options::new()).err();
    assert!(err.is_some_and(|e| e.is(ErrorKind::NotImplemented)));
}

#[test]
fn delegates_to_functions() {
    let spec = Spec::new(Kind::STRING, create_upper, parse_upper);
    assert!(!spec.is_zero());
    assert_eq!(spec.tag_kind(), Kind::STRING);

    let tag = spec.tag_create("A", Value::from("abc"), &Options::new()).ok();
    assert_eq!(tag.map(|t| t.to_string()), Some("ABC".to_owned()));

    let tag = spec.tag_parse("A", "xyz", &Options::new()).ok();
    assert_eq!(tag.map(|t| t.to_string()), Some("XYZ".to_owned()));

    let err = spec.tag_create("A", Value::Int64(1), &Options::new()).err();
    assert_eq!(
        err.map(|e| e.to_string()),
        Some("A: invalid element type".to_owned())
    );
}

#[test]
fn not_implemented_parser() {
    let spec = Spec::new(Kind::STRING, create_upper, parse_not_implemented);
    let err = spec.tag_parse("A", "abc", &Options::new()).err();
    assert!(err.as_ref().is_some_and(|e| e.is(ErrorKind::NotImplemented)));
    assert_eq!(
        err.map(|e| e.to_string()),
        Some("A: tag parser not implemented".to_owned())
    );
}

#[test]
fn debug_format() {
    let spec = Spec::new(Kind::STRING, create_upper, parse_upper);
    assert_eq!(
        format!("{spec:?}"),
        "Spec { kind: KindString(2), create: true, parse: true }"
    );
}
