use pretty_assertions::assert_eq;

use super::*;

#[test]
fn native_type_follows_variant() {
    assert_eq!(Value::from(1i8).native_type(), NativeType::Int8);
    assert_eq!(Value::from(1isize).native_type(), NativeType::Int);
    assert_eq!(Value::from(1i64).native_type(), NativeType::Int64);
    assert_eq!(Value::from("abc").native_type(), NativeType::String);
    assert_eq!(Value::from(vec![1u8]).native_type(), NativeType::Bytes);
    assert_eq!(Value::from(vec![1i32]).native_type(), NativeType::Int32Slice);
    assert_eq!(Value::from(vec!["a", "b"]).native_type(), NativeType::StringSlice);
}

#[test]
fn native_type_names() {
    assert_eq!(NativeType::Int8.to_string(), "i8");
    assert_eq!(NativeType::Float64Slice.to_string(), "Vec<f64>");
    assert_eq!(NativeType::Time.to_string(), "DateTime<FixedOffset>");
    assert_eq!(NativeType::ALL.len(), 23);
}

#[test]
fn element_round_trip() {
    let value = 42i64.into_value();
    assert_eq!(value, Value::Int64(42));
    assert_eq!(i64::from_value_ref(&value), Some(&42));
    assert_eq!(i64::from_value(value), Ok(42));
}

#[test]
fn element_mismatch_hands_value_back() {
    let value = Value::Int32(42);
    assert_eq!(i64::from_value_ref(&value), None);
    assert_eq!(i64::from_value(value), Err(Value::Int32(42)));
    assert_eq!(
        Vec::<i64>::from_value(Value::Int64Slice(vec![1])),
        Ok(vec![1])
    );
}

#[test]
fn raw_json_accepts_valid_documents() {
    for doc in [r#"{"a": 1}"#, "[]", "true", "null", "42", r#""str""#, " {} "] {
        let json = RawJson::parse(doc).unwrap_or_else(|err| panic!("{doc}: {err}"));
        assert_eq!(json.to_string(), doc);
        assert_eq!(json.as_bytes(), doc.as_bytes());
    }
}

#[test]
fn raw_json_rejects_malformed_documents() {
    for doc in ["", "{", "{} {}", "{a: 1}", "tru"] {
        let err = RawJson::parse(doc).err();
        assert!(
            err.is_some_and(|err| err.is(ErrorKind::InvalidFormat)),
            "{doc:?} accepted"
        );
    }
}

#[test]
fn raw_json_into_bytes() {
    let json = RawJson::parse(b"[1, 2]".to_vec()).unwrap_or_default();
    assert_eq!(json.len(), 6);
    assert_eq!(json.into_bytes(), b"[1, 2]".to_vec());
}
