//! End-to-end dispatch through the global registry.
//!
//! Every builtin native type association must create a tag of its kind,
//! and tags must survive the trip through a `TagSet`.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use nomix::{
    create_tag, get_tag_value, registry, Definition, ErrorKind, Kind, MetaSet, NativeType,
    Options, RawJson, RuleError, TagSet, Timestamp, Value, BUILTIN_TYPES,
};
use pretty_assertions::assert_eq;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn sample(native: NativeType) -> Value {
    match native {
        NativeType::Bool => Value::Bool(true),
        NativeType::Int => Value::Int(1),
        NativeType::Int8 => Value::Int8(1),
        NativeType::Int16 => Value::Int16(1),
        NativeType::Int32 => Value::Int32(1),
        NativeType::Int64 => Value::Int64(1),
        NativeType::Uint8 => Value::Uint8(1),
        NativeType::Float32 => Value::Float32(1.0),
        NativeType::Float64 => Value::Float64(1.0),
        NativeType::String => Value::from("a"),
        NativeType::Time => Value::Time(Timestamp::default()),
        NativeType::Json => Value::Json(RawJson::parse("{}").unwrap()),
        NativeType::Bytes => Value::Bytes(vec![1]),
        NativeType::IntSlice => Value::IntSlice(vec![1]),
        NativeType::Int8Slice => Value::Int8Slice(vec![1]),
        NativeType::Int16Slice => Value::Int16Slice(vec![1]),
        NativeType::Int32Slice => Value::Int32Slice(vec![1]),
        NativeType::Int64Slice => Value::Int64Slice(vec![1]),
        NativeType::Float32Slice => Value::Float32Slice(vec![1.0]),
        NativeType::Float64Slice => Value::Float64Slice(vec![1.0]),
        NativeType::BoolSlice => Value::BoolSlice(vec![true]),
        NativeType::StringSlice => Value::from(vec!["a"]),
        NativeType::TimeSlice => Value::TimeSlice(vec![Timestamp::default()]),
    }
}

#[test]
fn every_builtin_type_creates_its_kind() {
    init_tracing();
    let opts = Options::new();
    for &(native, kind) in BUILTIN_TYPES {
        let value = sample(native);
        assert_eq!(value.native_type(), native);

        let tag = registry()
            .create("A", value, &opts)
            .unwrap_or_else(|e| panic!("{native}: {e}"));
        assert_eq!(tag.tag_name(), "A", "{native}");
        assert_eq!(tag.tag_kind(), kind, "{native}");
    }
}

#[test]
fn create_tag_widens_small_integers() {
    init_tracing();
    let tag = create_tag("N", 7i16).unwrap();
    assert_eq!(tag.tag_kind(), Kind::INT64);
    assert_eq!(tag.tag_value(), Value::Int64(7));

    let tag = create_tag("F", 0.5f32).unwrap();
    assert_eq!(tag.tag_kind(), Kind::FLOAT64);
    assert_eq!(tag.tag_value(), Value::Float64(0.5));

    let tag = create_tag("B", true).unwrap();
    assert_eq!(tag.to_scalar().unwrap(), Value::Int64(1));
}

#[test]
fn create_tag_rejects_imprecise_float_source() {
    let reg = registry();
    let spec = reg.spec_for_kind(Kind::FLOAT64);
    let err = spec
        .tag_create("F", Value::Int64(1 << 60), &Options::new())
        .unwrap_err();
    assert!(err.is(ErrorKind::InvalidValue));
    assert_eq!(err.field_name(), Some("F"));
}

#[test]
fn registered_specs_parse_by_kind() {
    init_tracing();
    let opts = Options::new();
    let cases = [
        (Kind::BOOL, "T", Value::Bool(true)),
        (Kind::INT, "-3", Value::Int(-3)),
        (Kind::INT64, "42", Value::Int64(42)),
        (Kind::FLOAT64, "2.5", Value::Float64(2.5)),
        (Kind::STRING, "abc", Value::from("abc")),
    ];
    for (kind, input, want) in cases {
        let tag = registry()
            .spec_for_kind(kind)
            .tag_parse("P", input, &opts)
            .unwrap_or_else(|e| panic!("{kind}: {e}"));
        assert_eq!(tag.tag_value(), want, "{kind}");
    }
}

#[test]
fn tags_round_trip_through_a_set() {
    init_tracing();
    let mut set = TagSet::default();
    set.tag_set([
        create_tag("A", 1i32).unwrap(),
        create_tag("B", "x").unwrap(),
        create_tag("C", vec![1.5f64, 2.5]).unwrap(),
    ]);

    assert_eq!(get_tag_value::<i64>(&set, "A").unwrap(), 1);
    assert_eq!(get_tag_value::<String>(&set, "B").unwrap(), "x");
    assert_eq!(set.tag_get_float64_slice("C").unwrap().get(), &[1.5, 2.5]);

    let meta = MetaSet::new(Options::new().with_meta(set.meta_get_all().unwrap()));
    assert_eq!(meta.meta_count(), 3);
    assert_eq!(meta.meta_get_int64("A").unwrap(), 1);
    assert_eq!(meta.meta_get_string("B").unwrap(), "x");
}

fn non_negative(value: &Value) -> Result<(), RuleError> {
    match value {
        Value::Int64(v) if *v < 0 => Err("must not be negative".into()),
        _ => Ok(()),
    }
}

#[test]
fn definition_over_a_registered_spec() {
    init_tracing();
    let def = Definition::new("AGE", registry().spec_for_kind(Kind::INT64)).with_rule(non_negative);

    let tag = def.tag_parse("30", &Options::new()).unwrap();
    assert_eq!(tag.tag_name(), "AGE");

    let err = def.tag_create(Value::Int32(-1), &Options::new()).unwrap_err();
    assert!(err.is(ErrorKind::InvalidValue));
    assert_eq!(err.to_string(), "AGE: must not be negative");
}
