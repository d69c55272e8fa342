//! Library coordinates and the mixed-radix address codec.
//!
//! A coordinate names one line in the hierarchy room / wall / shelf /
//! volume / page / line. Coordinates compose into a single address in
//! `[0, 29^80)` by positional weighting, with the room as the
//! most-significant digit; the inverse splits an address back into
//! fields by successive division. Both directions are exact integer
//! arithmetic.

use serde::{Deserialize, Serialize};

use crate::domain;
use crate::error::OutOfRange;
use crate::u512::U512;

/// Walls in a room.
pub const WALLS_PER_ROOM: u32 = 4;
/// Shelves on a wall.
pub const SHELVES_PER_WALL: u32 = 5;
/// Volumes on a shelf.
pub const VOLUMES_PER_SHELF: u32 = 32;
/// Pages in a volume.
pub const PAGES_PER_VOLUME: u32 = 410;
/// Lines on a page.
pub const LINES_PER_PAGE: u32 = 40;

/// Volumes in a room (4 walls x 5 shelves x 32 volumes).
pub const VOLUMES_PER_ROOM: u32 = WALLS_PER_ROOM * SHELVES_PER_WALL * VOLUMES_PER_SHELF;

/// Positional weight of one volume, in lines.
pub const LINES_PER_VOLUME: u64 = (PAGES_PER_VOLUME * LINES_PER_PAGE) as u64;
/// Positional weight of one shelf, in lines.
pub const LINES_PER_SHELF: u64 = LINES_PER_VOLUME * VOLUMES_PER_SHELF as u64;
/// Positional weight of one wall, in lines.
pub const LINES_PER_WALL: u64 = LINES_PER_SHELF * SHELVES_PER_WALL as u64;
/// Positional weight of one room, in lines.
pub const LINES_PER_ROOM: u64 = LINES_PER_WALL * WALLS_PER_ROOM as u64;

/// The location of one line in the library.
///
/// The room index is unbounded in practice (up to 113 decimal digits);
/// the remaining fields are small. Serializes with the room as a decimal
/// string.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinates {
    /// Room index, `0..rooms()`.
    pub room: U512,
    /// Wall within the room, `0..4`.
    pub wall: u32,
    /// Shelf on the wall, `0..5`.
    pub shelf: u32,
    /// Volume on the shelf, `0..32`.
    pub volume: u32,
    /// Page in the volume, `0..410`.
    pub page: u32,
    /// Line on the page, `0..40`.
    pub line: u32,
}

impl Coordinates {
    /// Compose this coordinate into its address.
    ///
    /// Errors if any field is at or past its capacity, or if the
    /// coordinate falls in the unused tail of the last room.
    pub fn to_address(&self) -> Result<U512, OutOfRange> {
        check_field("wall", self.wall, WALLS_PER_ROOM)?;
        check_field("shelf", self.shelf, SHELVES_PER_WALL)?;
        check_field("volume", self.volume, VOLUMES_PER_SHELF)?;
        check_field("page", self.page, PAGES_PER_VOLUME)?;
        check_field("line", self.line, LINES_PER_PAGE)?;
        if self.room >= *domain::rooms() {
            return Err(OutOfRange::Room { room: self.room });
        }

        // Sub-room offset fits u64: it is at most LINES_PER_ROOM - 1.
        let offset = u64::from(self.wall) * LINES_PER_WALL
            + u64::from(self.shelf) * LINES_PER_SHELF
            + u64::from(self.volume) * LINES_PER_VOLUME
            + u64::from(self.page) * u64::from(LINES_PER_PAGE)
            + u64::from(self.line);
        let address = self.room * U512::from(LINES_PER_ROOM) + U512::from(offset);

        // Only the last, partial room can compose past the end.
        if address >= *domain::full() {
            return Err(OutOfRange::Address { address });
        }
        Ok(address)
    }

    /// Split an address into its coordinate.
    ///
    /// Total over the whole domain: errors only if the address is at or
    /// past `29^80`.
    pub fn from_address(address: U512) -> Result<Self, OutOfRange> {
        if address >= *domain::full() {
            return Err(OutOfRange::Address { address });
        }
        Ok(Self::split(address))
    }

    /// Split an in-range address, finest field first.
    ///
    /// Callers must guarantee `address < 29^80`.
    pub(crate) fn split(address: U512) -> Self {
        let (rest, line) = div_mod_small(address, LINES_PER_PAGE);
        let (rest, page) = div_mod_small(rest, PAGES_PER_VOLUME);
        let (rest, volume) = div_mod_small(rest, VOLUMES_PER_SHELF);
        let (rest, shelf) = div_mod_small(rest, SHELVES_PER_WALL);
        let (room, wall) = div_mod_small(rest, WALLS_PER_ROOM);
        Self {
            room,
            wall,
            shelf,
            volume,
            page,
            line,
        }
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "room {}, wall {}, shelf {}, volume {}, page {}, line {}",
            self.room, self.wall, self.shelf, self.volume, self.page, self.line
        )
    }
}

fn check_field(field: &'static str, value: u32, capacity: u32) -> Result<(), OutOfRange> {
    if value < capacity {
        Ok(())
    } else {
        Err(OutOfRange::Field {
            field,
            value,
            capacity,
        })
    }
}

/// Divide by a small radix, returning the quotient and the remainder as u32.
fn div_mod_small(value: U512, radix: u32) -> (U512, u32) {
    let (quotient, remainder) = value.div_mod(U512::from(radix));
    // The remainder is < radix, so it always fits.
    (quotient, remainder.to_u64().unwrap_or(0) as u32)
}
