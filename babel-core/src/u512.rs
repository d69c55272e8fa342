//! 512-bit unsigned integer arithmetic for the library address space.
//!
//! The full content domain is `29^80`, a 389-bit number, and the Feistel
//! round function stages products of two values below `29^40` (195 bits
//! each), so intermediates reach 391 bits. 512-bit limbs hold every
//! intermediate with room to spare; the arithmetic panics on overflow, and
//! the staging discipline in [`crate::feistel`] keeps overflow unreachable.

// Allow clippy warnings from the uint crate's construct_uint macro
#![allow(clippy::manual_div_ceil)]
#![allow(clippy::assign_op_pattern)]

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uint::construct_uint;

construct_uint! {
    /// 512-bit unsigned integer.
    ///
    /// Used for:
    /// - Addresses and content values in `[0, 29^80)`
    /// - Feistel halves and round keys in `[0, 29^40)`
    /// - Room indices (up to 113 decimal digits)
    pub struct U512(8);
}

impl U512 {
    /// Create a U512 from a u64 value.
    #[inline]
    pub const fn from_u64(value: u64) -> Self {
        U512([value, 0, 0, 0, 0, 0, 0, 0])
    }

    /// Convert to u64, returning None if the value doesn't fit.
    #[inline]
    pub fn to_u64(&self) -> Option<u64> {
        if self.0[1..].iter().all(|&limb| limb == 0) {
            Some(self.0[0])
        } else {
            None
        }
    }

    /// Parse a decimal digit string.
    ///
    /// Every byte must be an ASCII digit; this is checked in debug builds
    /// only. Intended for compile-time constants, not user input (use
    /// [`U512::from_dec_str`] for fallible parsing).
    pub fn from_decimal_digits(digits: &str) -> Self {
        debug_assert!(
            !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()),
            "digit string must be non-empty ASCII digits"
        );
        digits.bytes().fold(U512::zero(), |acc, b| {
            acc * U512::from(10u64) + U512::from(u64::from(b - b'0'))
        })
    }
}

// Custom serde implementation: decimal strings, so room indices survive
// JSON consumers that cannot represent 117-digit numbers.
impl Serialize for U512 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for U512 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct U512Visitor;

        impl<'de> serde::de::Visitor<'de> for U512Visitor {
            type Value = U512;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a decimal string of at most 155 digits")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<U512, E> {
                U512::from_dec_str(v).map_err(|_| E::invalid_value(serde::de::Unexpected::Str(v), &self))
            }

            fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<U512, E> {
                Ok(U512::from(v))
            }
        }

        deserializer.deserialize_str(U512Visitor)
    }
}
