//! Per-room shelf section tags.
//!
//! The frontend renders a small plaque wherever a shelf starts a new
//! subcategory section. Tags are derived entirely from the slot arrays, so
//! they stay consistent with the shelved books by construction.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use babel_core::coords::{SHELVES_PER_WALL, VOLUMES_PER_SHELF, WALLS_PER_ROOM};

use crate::classify::FloorId;
use crate::plan::{FloorPlan, BOOKS_PER_ROOM};
use crate::slots::FloorSlots;

/// One shelf section marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShelfTag {
    /// Wall within the room.
    pub wall: u32,
    /// Shelf within the wall.
    pub shelf: u32,
    /// First volume of the section.
    pub vol_start: u32,
    /// Subcategory id of the section.
    pub sub_id: String,
    /// Display label, currently the same as the id.
    pub label: String,
}

/// Builds shelf section tags for every room, keyed by global room index.
///
/// Each shelf gets a tag at volume 0 and another wherever the slot
/// subcategory changes mid-shelf.
pub fn room_tags(
    plans: &[FloorPlan],
    slots: &BTreeMap<FloorId, FloorSlots>,
) -> BTreeMap<u32, Vec<ShelfTag>> {
    let volumes_per_wall = (VOLUMES_PER_SHELF * SHELVES_PER_WALL) as usize;
    let mut tags: BTreeMap<u32, Vec<ShelfTag>> = BTreeMap::new();

    for plan in plans {
        let floor_slots = match slots.get(&plan.floor) {
            Some(floor_slots) => floor_slots,
            None => continue,
        };
        let subs = &floor_slots.sub_id_by_slot;

        for room_offset in 0..plan.room_count {
            let global_room = plan.room_start + room_offset;
            let room_base = room_offset as usize * BOOKS_PER_ROOM;
            let entries = tags.entry(global_room).or_default();

            for wall in 0..WALLS_PER_ROOM {
                for shelf in 0..SHELVES_PER_WALL {
                    let shelf_base = room_base
                        + wall as usize * volumes_per_wall
                        + (shelf * VOLUMES_PER_SHELF) as usize;
                    let mut previous: Option<&str> = None;
                    for volume in 0..VOLUMES_PER_SHELF {
                        let sub = subs[shelf_base + volume as usize].as_str();
                        if volume == 0 || previous != Some(sub) {
                            entries.push(ShelfTag {
                                wall,
                                shelf,
                                vol_start: volume,
                                sub_id: sub.to_string(),
                                label: sub.to_string(),
                            });
                        }
                        previous = Some(sub);
                    }
                }
            }
        }
    }
    tags
}
