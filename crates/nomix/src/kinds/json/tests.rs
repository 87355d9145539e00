use pretty_assertions::assert_eq;

use super::*;
use crate::{ErrorKind, Tag};

fn doc(s: &str) -> RawJson {
    RawJson::parse(s).unwrap_or_default()
}

#[test]
fn new() {
    let tag = new_json("A", doc(r#"{"a": 1}"#));
    assert_eq!(tag.tag_kind(), Kind::JSON);
    assert_eq!(tag.to_string(), r#"{"a": 1}"#);
    assert_eq!(tag.to_scalar().ok(), Some(Value::Json(doc(r#"{"a": 1}"#))));
}

#[test]
fn create_validates_bytes_and_strings() {
    let opts = Options::new();
    let want = Some(new_json("A", doc("[1, 2]")));

    assert_eq!(create_json("A", Value::Json(doc("[1, 2]")), &opts).ok(), want);
    assert_eq!(create_json("A", Value::Bytes(b"[1, 2]".to_vec()), &opts).ok(), want);
    assert_eq!(create_json("A", Value::from("[1, 2]"), &opts).ok(), want);

    let err = create_json("A", Value::from("[1, 2"), &opts).err();
    assert_eq!(
        err.map(|e| e.to_string()),
        Some("A: invalid element format".to_owned())
    );

    let err = create_json("A", Value::Int64(1), &opts).err();
    assert!(err.is_some_and(|e| e.is(ErrorKind::InvalidType)));
}

#[test]
fn parse() {
    let opts = Options::new();
    assert_eq!(
        parse_json("A", "null", &opts).ok(),
        Some(new_json("A", doc("null")))
    );

    let err = parse_json("A", "{a}", &opts).err();
    assert!(err.is_some_and(|e| e.is(ErrorKind::InvalidFormat)));
}

#[test]
fn spec() {
    let tag = json_spec().tag_parse("A", "true", &Options::new()).ok();
    assert_eq!(tag.as_deref().map(Tag::tag_kind), Some(Kind::JSON));
}
