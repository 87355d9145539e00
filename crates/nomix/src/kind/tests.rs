use pretty_assertions::assert_eq;

use super::*;

#[test]
fn kind_size() {
    assert_eq!(std::mem::size_of::<Kind>(), 2);
}

#[test]
fn base_codes_are_distinct_bits() {
    let base = [
        Kind::STRING,
        Kind::INT64,
        Kind::FLOAT64,
        Kind::TIME,
        Kind::JSON,
        Kind::UUID,
        Kind::SLICE,
    ];
    for kind in base {
        assert_eq!(kind.bits().count_ones(), 1, "{kind}");
    }
    let mut all = Kind::empty();
    for kind in base {
        assert!(!all.intersects(kind), "{kind} overlaps");
        all |= kind;
    }
}

#[test]
fn derived_kinds_carry_base_bits() {
    assert!(Kind::BOOL.contains(Kind::INT64));
    assert!(Kind::INT.contains(Kind::INT64));
    assert_ne!(Kind::BOOL, Kind::INT);
    assert!(!Kind::FLOAT64.contains(Kind::INT64));
}

#[test]
fn slice_kinds() {
    assert_eq!(Kind::INT64_SLICE, Kind::INT64 | Kind::SLICE);
    assert_eq!(Kind::BOOL_SLICE, Kind::BOOL | Kind::SLICE);
    assert!(Kind::BYTE_SLICE.is_slice());
    assert!(Kind::TIME_SLICE.is_slice());
    assert!(!Kind::TIME.is_slice());
    assert!(!Kind::JSON.is_slice());
    assert_eq!(Kind::INT_SLICE.base(), Kind::INT);
    assert_eq!(Kind::STRING.base(), Kind::STRING);
}

#[test]
fn display_names() {
    let cases = [
        (Kind::STRING, "KindString"),
        (Kind::INT64, "KindInt64"),
        (Kind::FLOAT64, "KindFloat64"),
        (Kind::TIME, "KindTime"),
        (Kind::JSON, "KindJSON"),
        (Kind::UUID, "KindUUID"),
        (Kind::BOOL, "KindBool"),
        (Kind::INT, "KindInt"),
        (Kind::BYTE_SLICE, "KindByteSlice"),
        (Kind::STRING_SLICE, "KindStringSlice"),
        (Kind::INT64_SLICE, "KindInt64Slice"),
        (Kind::FLOAT64_SLICE, "KindFloat64Slice"),
        (Kind::TIME_SLICE, "KindTimeSlice"),
        (Kind::UUID_SLICE, "KindUUIDSlice"),
        (Kind::BOOL_SLICE, "KindBoolSlice"),
        (Kind::INT_SLICE, "KindIntSlice"),
    ];
    for (kind, want) in cases {
        assert_eq!(kind.to_string(), want);
    }
}

#[test]
fn unknown_kinds() {
    assert_eq!(Kind::empty().to_string(), "KindUnknown");
    assert_eq!(Kind::SLICE.to_string(), "KindUnknown");
    assert_eq!(Kind::from_bits_retain(0x4000).to_string(), "KindUnknown");
}

#[test]
fn debug_includes_bits() {
    assert_eq!(format!("{:?}", Kind::INT64), "KindInt64(4)");
    assert_eq!(format!("{:?}", Kind::BOOL), "KindBool(260)");
}
