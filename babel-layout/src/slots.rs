//! Slot assignment: books onto shelf positions.
//!
//! Each floor is an array of `capacity` slots walked in wall/shelf/volume
//! order. A floor's own books come first, grouped into official subcategory
//! blocks with a shuffled interior, then slack capacity is filled by
//! cycling through donor floors and repeating their books. The result is
//! fully determined by the classified catalogue.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use babel_core::coords::{SHELVES_PER_WALL, VOLUMES_PER_SHELF};

use crate::classify::{Classified, FloorId};
use crate::plan::{FloorPlan, BOOKS_PER_ROOM};
use crate::shuffle::stable_shuffle;

/// Filled slot arrays for one floor. Both arrays are exactly `capacity`
/// long.
#[derive(Debug, Clone)]
pub struct FloorSlots {
    /// The floor these slots belong to.
    pub floor: FloorId,
    /// Total slots, matching the plan capacity.
    pub capacity: usize,
    /// Book id per slot. Donor-filled slots repeat ids from other floors;
    /// id 0 marks a slot no donor could fill.
    pub book_id_by_slot: Vec<u32>,
    /// Subcategory id per slot. Donor-filled slots carry a
    /// `RELATED:{floor}` marker.
    pub sub_id_by_slot: Vec<String>,
}

/// Position of a slot inside its floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotLocation {
    /// Room offset from the floor's first room.
    pub room_offset: u32,
    /// Wall within the room.
    pub wall: u32,
    /// Shelf within the wall.
    pub shelf: u32,
    /// Volume within the shelf.
    pub volume: u32,
}

/// A book's canonical shelf position, the first slot it occupies anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrimaryLocation {
    /// Global room index.
    pub room: u32,
    /// Wall within the room.
    pub wall: u32,
    /// Shelf within the wall.
    pub shelf: u32,
    /// Volume within the shelf.
    pub volume: u32,
    /// Floor the slot belongs to.
    pub floor_id: FloorId,
    /// Subcategory of the slot, possibly a `RELATED:` marker.
    pub sub_id: String,
}

/// Maps a floor-relative slot index to its room/wall/shelf/volume position.
pub fn slot_to_location(slot: usize) -> SlotLocation {
    let volumes_per_wall = (VOLUMES_PER_SHELF * SHELVES_PER_WALL) as usize;
    let room_offset = slot / BOOKS_PER_ROOM;
    let in_room = slot % BOOKS_PER_ROOM;
    let in_wall = in_room % volumes_per_wall;
    SlotLocation {
        room_offset: room_offset as u32,
        wall: (in_room / volumes_per_wall) as u32,
        shelf: (in_wall / VOLUMES_PER_SHELF as usize) as u32,
        volume: (in_wall % VOLUMES_PER_SHELF as usize) as u32,
    }
}

/// Builds the donor pools, one deterministically shuffled id list per
/// floor.
pub fn donor_pools(classified: &Classified) -> BTreeMap<FloorId, Vec<u32>> {
    FloorId::ALL
        .iter()
        .map(|&floor| {
            let seed = format!("donor:{}", floor);
            (floor, stable_shuffle(classified.floor_ids(floor), &seed))
        })
        .collect()
}

/// Lays out one floor: subcategory blocks first, then donor fill.
///
/// Own books are grouped into official blocks plus a trailing `Other`
/// block, each shuffled under a per-block seed. Remaining slots cycle
/// through the floor's donors round-robin, repeating donor books in pool
/// order; if every donor pool is empty the tail is padded with id 0 under
/// `Other`.
pub fn assign_slots(
    plan: &FloorPlan,
    classified: &Classified,
    pools: &BTreeMap<FloorId, Vec<u32>>,
) -> FloorSlots {
    let mut buckets: HashMap<&str, Vec<u32>> = HashMap::new();
    for &id in classified.floor_ids(plan.floor) {
        let sub = classified.subcategory_of(id);
        let key = if plan.officials.iter().any(|official| official.id == sub) {
            sub
        } else {
            "Other"
        };
        buckets.entry(key).or_default().push(id);
    }

    let mut book_id_by_slot = Vec::with_capacity(plan.capacity);
    let mut sub_id_by_slot = Vec::with_capacity(plan.capacity);

    let mut ordered: Vec<&str> =
        plan.officials.iter().map(|official| official.id.as_str()).collect();
    ordered.push("Other");
    for sub in ordered {
        let ids = buckets.remove(sub).unwrap_or_default();
        let seed = format!("{}:{}", plan.floor, sub);
        for id in stable_shuffle(&ids, &seed) {
            book_id_by_slot.push(id);
            sub_id_by_slot.push(sub.to_string());
        }
    }

    let donors = plan.floor.fill_from();
    let mut donor_cursor: HashMap<FloorId, usize> = HashMap::new();
    let mut rotation = 0usize;
    let mut empty_streak = 0usize;
    while book_id_by_slot.len() < plan.capacity && empty_streak < donors.len() {
        let donor = donors[rotation % donors.len()];
        rotation += 1;
        let pool = pools.get(&donor).map(Vec::as_slice).unwrap_or(&[]);
        if pool.is_empty() {
            empty_streak += 1;
            continue;
        }
        empty_streak = 0;
        let cursor = donor_cursor.entry(donor).or_insert(0);
        book_id_by_slot.push(pool[*cursor % pool.len()]);
        sub_id_by_slot.push(format!("RELATED:{}", donor));
        *cursor += 1;
    }
    while book_id_by_slot.len() < plan.capacity {
        book_id_by_slot.push(0);
        sub_id_by_slot.push("Other".to_string());
    }

    book_id_by_slot.truncate(plan.capacity);
    sub_id_by_slot.truncate(plan.capacity);

    FloorSlots {
        floor: plan.floor,
        capacity: plan.capacity,
        book_id_by_slot,
        sub_id_by_slot,
    }
}

/// First occurrence of every book across all floors, in floor order.
///
/// Donor-filled slots count, so a book repeated on an earlier floor keeps
/// that slot as its primary location even though its home floor comes
/// later. Pad slots (id 0) are skipped.
pub fn primary_locations(
    plans: &[FloorPlan],
    slots: &BTreeMap<FloorId, FloorSlots>,
) -> BTreeMap<u32, PrimaryLocation> {
    let mut primary = BTreeMap::new();
    for plan in plans {
        let floor_slots = match slots.get(&plan.floor) {
            Some(floor_slots) => floor_slots,
            None => continue,
        };
        for (slot, (&id, sub)) in floor_slots
            .book_id_by_slot
            .iter()
            .zip(&floor_slots.sub_id_by_slot)
            .enumerate()
        {
            if id == 0 || primary.contains_key(&id) {
                continue;
            }
            let location = slot_to_location(slot);
            primary.insert(
                id,
                PrimaryLocation {
                    room: plan.room_start + location.room_offset,
                    wall: location.wall,
                    shelf: location.shelf,
                    volume: location.volume,
                    floor_id: plan.floor,
                    sub_id: sub.clone(),
                },
            );
        }
    }
    primary
}
