//! Tag kind codes.
//!
//! A `Kind` is a small bitmask identifying the type of a tag value.
//!
//! # Layout
//!
//! - Bits 1-6: base kinds (string, int64, float64, time, JSON, UUID)
//! - Bit 7: sequence modifier (`SLICE`)
//! - Bits 8-9: derived kinds, always OR-ed with their base kind
//! - Bit 0: byte sequence, only meaningful together with `SLICE`
//!
//! Because a derived kind carries its base kind's bit, family tests are
//! simple masks: `Kind::BOOL.contains(Kind::INT64)` holds.

use std::fmt;

use bitflags::bitflags;

bitflags! {
    /// Type code of a tag value.
    ///
    /// Constants are fixed for the life of the process. Registries map a
    /// `Kind` to its implementation but never change the bit pattern.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord, Default)]
    pub struct Kind: u16 {
        // === Base kinds ===

        /// UTF-8 string.
        const STRING = 1 << 1;
        /// 64-bit signed integer.
        const INT64 = 1 << 2;
        /// 64-bit floating point.
        const FLOAT64 = 1 << 3;
        /// Timestamp with offset.
        const TIME = 1 << 4;
        /// Raw, syntactically valid JSON.
        const JSON = 1 << 5;
        /// Reserved; no implementation is registered.
        const UUID = 1 << 6;

        /// Sequence modifier.
        const SLICE = 1 << 7;

        // === Derived kinds ===

        /// Boolean, stored in the int64 family.
        const BOOL = (1 << 8) | Self::INT64.bits();
        /// Machine-sized integer, stored in the int64 family.
        const INT = (1 << 9) | Self::INT64.bits();

        // === Sequence kinds ===

        const BYTE_SLICE = (1 << 0) | Self::SLICE.bits();
        const STRING_SLICE = Self::STRING.bits() | Self::SLICE.bits();
        const INT64_SLICE = Self::INT64.bits() | Self::SLICE.bits();
        const FLOAT64_SLICE = Self::FLOAT64.bits() | Self::SLICE.bits();
        const TIME_SLICE = Self::TIME.bits() | Self::SLICE.bits();
        const UUID_SLICE = Self::UUID.bits() | Self::SLICE.bits();
        const BOOL_SLICE = Self::BOOL.bits() | Self::SLICE.bits();
        const INT_SLICE = Self::INT.bits() | Self::SLICE.bits();
    }
}

impl Kind {
    /// Check if this kind is a sequence of values.
    #[inline]
    pub const fn is_slice(self) -> bool {
        self.contains(Self::SLICE)
    }

    /// The kind with the sequence modifier cleared.
    #[inline]
    pub const fn base(self) -> Self {
        self.difference(Self::SLICE)
    }

    /// Get the name of this kind as a static string.
    pub const fn name(self) -> &'static str {
        // Match on raw bits: bitflags constants cannot be used as patterns.
        const STRING: u16 = Kind::STRING.bits();
        const INT64: u16 = Kind::INT64.bits();
        const FLOAT64: u16 = Kind::FLOAT64.bits();
        const TIME: u16 = Kind::TIME.bits();
        const UUID: u16 = Kind::UUID.bits();
        const JSON: u16 = Kind::JSON.bits();
        const BOOL: u16 = Kind::BOOL.bits();
        const INT: u16 = Kind::INT.bits();
        const BYTE_SLICE: u16 = Kind::BYTE_SLICE.bits();
        const STRING_SLICE: u16 = Kind::STRING_SLICE.bits();
        const INT64_SLICE: u16 = Kind::INT64_SLICE.bits();
        const FLOAT64_SLICE: u16 = Kind::FLOAT64_SLICE.bits();
        const TIME_SLICE: u16 = Kind::TIME_SLICE.bits();
        const UUID_SLICE: u16 = Kind::UUID_SLICE.bits();
        const BOOL_SLICE: u16 = Kind::BOOL_SLICE.bits();
        const INT_SLICE: u16 = Kind::INT_SLICE.bits();

        match self.bits() {
            STRING => "KindString",
            INT64 => "KindInt64",
            FLOAT64 => "KindFloat64",
            TIME => "KindTime",
            UUID => "KindUUID",
            JSON => "KindJSON",
            BOOL => "KindBool",
            INT => "KindInt",
            BYTE_SLICE => "KindByteSlice",
            STRING_SLICE => "KindStringSlice",
            INT64_SLICE => "KindInt64Slice",
            FLOAT64_SLICE => "KindFloat64Slice",
            TIME_SLICE => "KindTimeSlice",
            UUID_SLICE => "KindUUIDSlice",
            BOOL_SLICE => "KindBoolSlice",
            INT_SLICE => "KindIntSlice",
            _ => "KindUnknown",
        }
    }
}

impl fmt::Debug for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name(), self.bits())
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Kind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

// Kind must stay a two byte code.
const _: () = assert!(std::mem::size_of::<Kind>() == 2);

#[cfg(test)]
mod tests;
