//! Base-29 positional codec between lines and content values.
//!
//! A line of 80 symbols is one base-29 number with the most-significant
//! symbol first, so the all-blank line is 0 and the all-`z` line is
//! `29^80 - 1`. Encoding and decoding are exact inverses over the full
//! domain.

use crate::alphabet::{Line, LINE_LEN, RADIX};
use crate::domain;
use crate::u512::U512;

/// Encode a line as its content value.
///
/// The result is always in `[0, 29^80)`.
pub fn encode_symbols(line: &Line) -> U512 {
    let radix = U512::from(u64::from(RADIX));
    line.symbols().iter().fold(U512::zero(), |acc, &symbol| {
        acc * radix + U512::from(u64::from(symbol))
    })
}

/// Decode a content value back into its line.
///
/// The inverse of [`encode_symbols`]: high-order blanks come back as
/// leading blanks. Callers must pass a value in `[0, 29^80)`; this is
/// checked in debug builds only.
pub fn decode_symbols(value: U512) -> Line {
    debug_assert!(value < *domain::full(), "content value out of domain");
    let radix = U512::from(u64::from(RADIX));
    let mut symbols = [0u8; LINE_LEN];
    let mut rest = value;
    for slot in symbols.iter_mut().rev() {
        let (quotient, remainder) = rest.div_mod(radix);
        // remainder < 29 always fits one byte
        *slot = remainder.to_u64().unwrap_or(0) as u8;
        rest = quotient;
    }
    debug_assert!(rest.is_zero());
    Line::from_symbols(symbols)
}
