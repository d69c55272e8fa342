//! The 29-symbol alphabet and fixed-length line handling.
//!
//! A symbol is a base-29 ordinal (0-28). The alphabet, in ordinal order, is
//! blank, comma, period, then the lowercase letters `a` through `z`. A line
//! is exactly 80 symbols; shorter text is padded with trailing blanks.

/// Number of symbols in the alphabet (the base of the content encoding).
pub const RADIX: u8 = 29;

/// Number of symbols in a line.
pub const LINE_LEN: usize = 80;

/// The alphabet in ordinal order. `ALPHABET[s]` is the character for
/// symbol `s`.
pub const ALPHABET: [u8; RADIX as usize] = *b" ,.abcdefghijklmnopqrstuvwxyz";

/// Convert a symbol ordinal to its character.
///
/// Symbols are produced by this crate and are always in range; the bound
/// is checked in debug builds only.
#[inline]
pub fn symbol_to_char(symbol: u8) -> char {
    debug_assert!(symbol < RADIX, "symbol must be < {}", RADIX);
    ALPHABET[symbol as usize] as char
}

/// Convert a character to its symbol ordinal, if it is in the alphabet.
pub fn char_to_symbol(ch: char) -> Option<u8> {
    match ch {
        ' ' => Some(0),
        ',' => Some(1),
        '.' => Some(2),
        'a'..='z' => Some(ch as u8 - b'a' + 3),
        _ => None,
    }
}

/// Normalize one character to a symbol ordinal.
///
/// ASCII uppercase letters fold to lowercase. Everything else outside the
/// alphabet (digits, other punctuation, whitespace variants, non-ASCII)
/// becomes a blank, so normalization is total.
#[inline]
pub fn fold_char(ch: char) -> u8 {
    let folded = if ch.is_ascii_uppercase() {
        ch.to_ascii_lowercase()
    } else {
        ch
    };
    char_to_symbol(folded).unwrap_or(0)
}

/// A line of exactly [`LINE_LEN`] symbols.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line {
    /// The symbol ordinals, each < [`RADIX`].
    symbols: [u8; LINE_LEN],
}

impl Line {
    /// Create a line of all blanks.
    pub fn blank() -> Self {
        Self {
            symbols: [0; LINE_LEN],
        }
    }

    /// Create a line from raw symbol ordinals.
    pub fn from_symbols(symbols: [u8; LINE_LEN]) -> Self {
        debug_assert!(
            symbols.iter().all(|&s| s < RADIX),
            "symbols must be < {}",
            RADIX
        );
        Self { symbols }
    }

    /// Normalize arbitrary text into a line.
    ///
    /// Text is truncated to the first [`LINE_LEN`] characters, each
    /// character is folded with [`fold_char`], and the result is padded
    /// with trailing blanks. Never fails.
    pub fn from_text(text: &str) -> Self {
        let mut symbols = [0u8; LINE_LEN];
        for (slot, ch) in symbols.iter_mut().zip(text.chars()) {
            *slot = fold_char(ch);
        }
        Self { symbols }
    }

    /// The symbol ordinals.
    pub fn symbols(&self) -> &[u8; LINE_LEN] {
        &self.symbols
    }

    /// Get the symbol at a position.
    pub fn get(&self, index: usize) -> Option<u8> {
        self.symbols.get(index).copied()
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for &symbol in &self.symbols {
            write!(f, "{}", symbol_to_char(symbol))?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Line({:?})", self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_order() {
        assert_eq!(symbol_to_char(0), ' ');
        assert_eq!(symbol_to_char(1), ',');
        assert_eq!(symbol_to_char(2), '.');
        assert_eq!(symbol_to_char(3), 'a');
        assert_eq!(symbol_to_char(28), 'z');
    }

    #[test]
    fn test_char_to_symbol_round_trip() {
        for symbol in 0..RADIX {
            let ch = symbol_to_char(symbol);
            assert_eq!(char_to_symbol(ch), Some(symbol));
        }
    }

    #[test]
    fn test_char_to_symbol_rejects_outside() {
        assert_eq!(char_to_symbol('A'), None);
        assert_eq!(char_to_symbol('0'), None);
        assert_eq!(char_to_symbol('!'), None);
        assert_eq!(char_to_symbol('\t'), None);
        assert_eq!(char_to_symbol('é'), None);
    }

    #[test]
    fn test_fold_char() {
        assert_eq!(fold_char('a'), 3);
        assert_eq!(fold_char('A'), 3);
        assert_eq!(fold_char('Z'), 28);
        assert_eq!(fold_char(','), 1);
        // Outside the alphabet folds to blank
        assert_eq!(fold_char('7'), 0);
        assert_eq!(fold_char('!'), 0);
        assert_eq!(fold_char('é'), 0);
        assert_eq!(fold_char('\n'), 0);
    }

    #[test]
    fn test_from_text_pads() {
        let line = Line::from_text("hi");
        assert_eq!(line.get(0), Some(10)); // h
        assert_eq!(line.get(1), Some(11)); // i
        assert_eq!(line.get(2), Some(0));
        assert_eq!(line.get(79), Some(0));
        assert_eq!(line.to_string().len(), LINE_LEN);
    }

    #[test]
    fn test_from_text_truncates() {
        let long = "a".repeat(200);
        let line = Line::from_text(&long);
        assert_eq!(line.symbols().iter().filter(|&&s| s == 3).count(), LINE_LEN);
    }

    #[test]
    fn test_from_text_normalizes() {
        let a = Line::from_text("Hello, World!");
        let b = Line::from_text("hello, world ");
        assert_eq!(a, b);
    }

    #[test]
    fn test_display_round_trip() {
        let text = "the quick brown fox, jumps over the lazy dog.";
        let line = Line::from_text(text);
        let rendered = line.to_string();
        assert!(rendered.starts_with(text));
        assert_eq!(Line::from_text(&rendered), line);
    }

    #[test]
    fn test_blank_is_all_zero() {
        assert_eq!(Line::blank().symbols(), &[0u8; LINE_LEN]);
        assert_eq!(Line::blank(), Line::from_text(""));
    }
}
