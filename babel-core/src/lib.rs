//! # Babel Core
//!
//! Deterministic, reversible mapping between library coordinates and line
//! content for the Babel library.
//!
//! Every possible 80-symbol line over the 29-symbol alphabet exists at
//! exactly one coordinate (room, wall, shelf, volume, page, line). Nothing
//! is stored: content is computed on demand from the coordinate, and the
//! coordinate is recovered exactly from the content. The mapping is a
//! format-preserving permutation of the integers `[0, 29^80)` built from an
//! 8-round Feistel network over base-29 halves.
//!
//! This crate provides the foundation for the other Babel crates:
//! - 512-bit arithmetic for the 390-bit address space
//! - The symbol alphabet and line normalization
//! - Base-29 symbol codec and mixed-radix coordinate codec
//! - The fixed key schedule and the Feistel permutation
//! - The two facade operations, [`address_to_text`] and [`text_to_address`]
//!
//! All operations are pure functions of their inputs. The key schedule and
//! derived domain constants are immutable process-wide values, so the whole
//! crate is safe for concurrent use without locking.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod alphabet;
pub mod coords;
pub mod domain;
pub mod error;
pub mod feistel;
pub mod keys;
pub mod library;
pub mod symbols;
pub mod u512;

// Re-export commonly used types at crate root
pub use alphabet::{Line, LINE_LEN, RADIX};
pub use coords::Coordinates;
pub use error::OutOfRange;
pub use library::{address_to_text, text_to_address};
pub use symbols::{decode_symbols, encode_symbols};
pub use u512::U512;
