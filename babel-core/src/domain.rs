//! Derived domain constants.
//!
//! The full content domain, the Feistel half, and the room count are all
//! derived from the alphabet size and the line length. They are computed
//! once per process and shared read-only; every engine operation reads
//! them through these accessors.

use std::sync::OnceLock;

use crate::alphabet::{LINE_LEN, RADIX};
use crate::coords::LINES_PER_ROOM;
use crate::u512::U512;

static FULL: OnceLock<U512> = OnceLock::new();
static HALF: OnceLock<U512> = OnceLock::new();
static ROOMS: OnceLock<U512> = OnceLock::new();

/// The full content domain, `29^80` (one value per possible line).
pub fn full() -> &'static U512 {
    FULL.get_or_init(|| U512::from(u64::from(RADIX)).pow(U512::from(LINE_LEN as u64)))
}

/// The Feistel half, `29^40`. `full() == half() * half()`.
pub fn half() -> &'static U512 {
    HALF.get_or_init(|| U512::from(u64::from(RADIX)).pow(U512::from((LINE_LEN / 2) as u64)))
}

/// The number of rooms, `ceil(29^80 / 10_496_000)`.
///
/// `29^80` is odd and the lines-per-room weight is even, so the division
/// does not come out exact: the last room exists but only its first
/// `full() % LINES_PER_ROOM` line slots (7 937 601 of them) are inside
/// the library.
pub fn rooms() -> &'static U512 {
    ROOMS.get_or_init(|| {
        let per_room = U512::from(LINES_PER_ROOM);
        (*full() + per_room - U512::from(1u64)) / per_room
    })
}
