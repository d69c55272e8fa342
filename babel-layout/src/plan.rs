//! Floor sizing and subcategory election.

use babel_core::coords;

use crate::classify::{Classified, FloorId};
use crate::layout::LayoutOptions;

/// Volumes in one room, and therefore books per room. Layout geometry is
/// the engine's room geometry.
pub const BOOKS_PER_ROOM: usize = coords::VOLUMES_PER_ROOM as usize;

/// One elected subcategory with its book count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subcategory {
    /// Stable subcategory id, also used as the display label.
    pub id: String,
    /// Books classified under this subcategory.
    pub count: usize,
}

/// Room range and subcategory election for one floor.
#[derive(Debug, Clone)]
pub struct FloorPlan {
    /// The floor this plan describes.
    pub floor: FloorId,
    /// First global room index of the floor.
    pub room_start: u32,
    /// Rooms on the floor, always at least one.
    pub room_count: u32,
    /// Books classified onto the floor.
    pub book_count: usize,
    /// Total slots, `room_count * BOOKS_PER_ROOM`.
    pub capacity: usize,
    /// Official subcategories, largest first.
    pub officials: Vec<Subcategory>,
    /// Books that fell outside every official subcategory.
    pub other_count: usize,
}

/// Sizes every floor in whole rooms and elects its official subcategories.
///
/// Floors are laid out contiguously in [`FloorId::ALL`] order. Each floor
/// gets at least one room even when empty, so the world never has a gap. A
/// subcategory becomes official when it holds at least
/// `options.min_sub_books` books, capped at the `options.top_subs` largest;
/// the rest pools into `Other`.
pub fn plan_floors(classified: &Classified, options: &LayoutOptions) -> Vec<FloorPlan> {
    let mut plans = Vec::with_capacity(FloorId::ALL.len());
    let mut room_start = 0u32;

    for floor in FloorId::ALL {
        let book_count = classified.floor_ids(floor).len();
        let room_count = book_count.div_ceil(BOOKS_PER_ROOM).max(1) as u32;
        let capacity = room_count as usize * BOOKS_PER_ROOM;

        // Largest first; ties broken by label so reruns agree.
        let mut counts = classified.floor_sub_counts(floor);
        counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        let officials: Vec<Subcategory> = counts
            .iter()
            .filter(|(_, count)| *count >= options.min_sub_books)
            .take(options.top_subs)
            .map(|(sub, count)| Subcategory { id: (*sub).to_string(), count: *count })
            .collect();
        let official_total: usize = officials.iter().map(|sub| sub.count).sum();

        plans.push(FloorPlan {
            floor,
            room_start,
            room_count,
            book_count,
            capacity,
            officials,
            other_count: book_count - official_total,
        });
        room_start += room_count;
    }
    plans
}
