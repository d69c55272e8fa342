//! Error types for the Babel core crate.

use std::fmt;

use crate::u512::U512;

/// A coordinate or address lies outside the library.
///
/// This is the only failure mode in the crate. It is a caller contract
/// violation rather than a retryable condition: the offending input names
/// a location that does not exist.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutOfRange {
    /// A small coordinate field is at or past its capacity.
    Field {
        /// Name of the offending field ("wall", "shelf", ...).
        field: &'static str,
        /// The rejected value.
        value: u32,
        /// Number of valid values for the field.
        capacity: u32,
    },
    /// The room index is at or past the room count.
    Room {
        /// The rejected room index.
        room: U512,
    },
    /// A composed address falls in the unused tail of the last room.
    Address {
        /// The rejected address.
        address: U512,
    },
}

impl fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutOfRange::Field {
                field,
                value,
                capacity,
            } => write!(f, "{} {} out of range (capacity {})", field, value, capacity),
            OutOfRange::Room { room } => write!(f, "room {} out of range", room),
            OutOfRange::Address { address } => {
                write!(f, "address {} outside the library", address)
            }
        }
    }
}

impl std::error::Error for OutOfRange {}
