//! The two facade operations of the library.
//!
//! [`address_to_text`] walks coordinate -> address -> permuted content ->
//! line; [`text_to_address`] walks the same path backwards, normalizing
//! free text first. Round-tripping either way reproduces the input
//! exactly (up to normalization of the text).

use crate::alphabet::Line;
use crate::coords::Coordinates;
use crate::error::OutOfRange;
use crate::feistel;
use crate::symbols::{decode_symbols, encode_symbols};

/// The line of text at a coordinate.
///
/// The only failure is a coordinate outside the library; every in-range
/// coordinate has content.
pub fn address_to_text(coords: &Coordinates) -> Result<String, OutOfRange> {
    let address = coords.to_address()?;
    let content = feistel::encrypt(address);
    Ok(decode_symbols(content).to_string())
}

/// The unique coordinate whose content is the given text.
///
/// The text is normalized (lowercased, out-of-alphabet characters to
/// blanks, truncated and padded to 80), so every input maps somewhere and
/// this never fails. The permutation preserves the domain, so the
/// decrypted address always names a real coordinate.
pub fn text_to_address(text: &str) -> Coordinates {
    let content = encode_symbols(&Line::from_text(text));
    let address = feistel::decrypt(content);
    Coordinates::split(address)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::u512::U512;

    #[test]
    fn test_forward_round_trip() {
        let coords = Coordinates {
            room: U512::from(42u64),
            wall: 2,
            shelf: 1,
            volume: 17,
            page: 255,
            line: 21,
        };
        let text = address_to_text(&coords).unwrap();
        assert_eq!(text.chars().count(), 80);
        assert_eq!(text_to_address(&text), coords);
    }

    #[test]
    fn test_reverse_round_trip() {
        let text = "call me ishmael. some years ago, never mind how long precisely, i had";
        let coords = text_to_address(text);
        let back = address_to_text(&coords).unwrap();
        assert_eq!(&back[..text.len()], text);
        assert_eq!(back.len(), 80);
    }

    #[test]
    fn test_out_of_range_propagates() {
        let coords = Coordinates {
            room: U512::zero(),
            wall: 9,
            shelf: 0,
            volume: 0,
            page: 0,
            line: 0,
        };
        assert!(matches!(
            address_to_text(&coords),
            Err(OutOfRange::Field { field: "wall", .. })
        ));
    }

    #[test]
    fn test_total_over_arbitrary_text() {
        // Pathological inputs all land somewhere
        for text in ["", "\0\0\0", "日本語のテキスト", &"x".repeat(10_000)] {
            let coords = text_to_address(text);
            assert!(address_to_text(&coords).is_ok());
        }
    }

    #[test]
    fn test_known_text_location() {
        let coords = text_to_address("hello world");
        assert_eq!(
            coords.room.to_string(),
            "12529993671759826517358900132887714936923881052146068426274206367900469747561059514383894403146749129491417459"
        );
        assert_eq!(coords.wall, 3);
        assert_eq!(coords.shelf, 4);
        assert_eq!(coords.volume, 12);
        assert_eq!(coords.page, 63);
        assert_eq!(coords.line, 8);
    }
}
