//! Layout pipeline orchestration.

use std::collections::BTreeMap;
use std::path::Path;

use crate::artifacts;
use crate::classify::{classify_books, FloorId};
use crate::error::LayoutError;
use crate::meta::BookMeta;
use crate::plan::{plan_floors, FloorPlan};
use crate::slots::{assign_slots, donor_pools, primary_locations, FloorSlots, PrimaryLocation};
use crate::tags::{self, ShelfTag};

/// Tuning knobs for subcategory election.
#[derive(Debug, Clone)]
pub struct LayoutOptions {
    /// Maximum official subcategories per floor.
    pub top_subs: usize,
    /// Minimum books for a subcategory to become official; smaller ones
    /// merge into `Other`.
    pub min_sub_books: usize,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        LayoutOptions {
            top_subs: 8,
            min_sub_books: 200,
        }
    }
}

/// A fully computed library layout.
#[derive(Debug, Clone)]
pub struct Layout {
    /// Per-floor room ranges and subcategory elections, in floor order.
    pub plans: Vec<FloorPlan>,
    /// Filled slot arrays per floor.
    pub slots: BTreeMap<FloorId, FloorSlots>,
    /// First shelf position of every placed book.
    pub primary: BTreeMap<u32, PrimaryLocation>,
    /// Shelf section tags per global room.
    pub room_tags: BTreeMap<u32, Vec<ShelfTag>>,
    /// Total rooms across all floors.
    pub rooms_total: u32,
}

impl Layout {
    /// Runs the full pipeline: classify, plan, assign slots, derive
    /// primary locations and shelf tags.
    ///
    /// The computation is pure; the same books and options always produce
    /// the same layout.
    pub fn build(books: &[BookMeta], options: &LayoutOptions) -> Layout {
        let classified = classify_books(books);
        tracing::info!("Classified {} books onto {} floors", books.len(), FloorId::ALL.len());

        let plans = plan_floors(&classified, options);
        let rooms_total: u32 = plans.iter().map(|plan| plan.room_count).sum();
        tracing::info!("Planned {} rooms across {} floors", rooms_total, plans.len());

        let pools = donor_pools(&classified);
        let mut slots = BTreeMap::new();
        for plan in &plans {
            let floor_slots = assign_slots(plan, &classified, &pools);
            tracing::debug!(
                "Floor {}: {} books in {} slots",
                plan.floor,
                plan.book_count,
                floor_slots.capacity
            );
            slots.insert(plan.floor, floor_slots);
        }

        let primary = primary_locations(&plans, &slots);
        tracing::info!("Computed primary locations for {} books", primary.len());

        let room_tags = tags::room_tags(&plans, &slots);

        Layout {
            plans,
            slots,
            primary,
            room_tags,
            rooms_total,
        }
    }

    /// Serializes every artifact under `out_dir`.
    pub fn write_artifacts(&self, out_dir: &Path) -> Result<(), LayoutError> {
        artifacts::write_artifacts(self, out_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = LayoutOptions::default();
        assert_eq!(options.top_subs, 8);
        assert_eq!(options.min_sub_books, 200);
    }

    #[test]
    fn test_empty_catalogue_builds_a_padded_world() {
        let layout = Layout::build(&[], &LayoutOptions::default());

        assert_eq!(layout.rooms_total, 7);
        assert_eq!(layout.plans.len(), 7);
        assert!(layout.primary.is_empty());
        assert_eq!(layout.room_tags.len(), 7);
        for (room, tags) in &layout.room_tags {
            assert!(*room < 7);
            // Uniform pad subcategory, one tag per shelf.
            assert_eq!(tags.len(), 20);
        }
        for slots in layout.slots.values() {
            assert_eq!(slots.book_id_by_slot.len(), 640);
            assert!(slots.book_id_by_slot.iter().all(|&id| id == 0));
        }
    }

    #[test]
    fn test_build_is_deterministic() {
        let books = vec![
            BookMeta {
                id: 5,
                subjects: vec!["History of Spain".to_string()],
                ..BookMeta::default()
            },
            BookMeta {
                id: 6,
                subjects: vec!["English poetry".to_string()],
                ..BookMeta::default()
            },
            BookMeta { id: 7, ..BookMeta::default() },
        ];
        let first = Layout::build(&books, &LayoutOptions::default());
        let second = Layout::build(&books, &LayoutOptions::default());

        assert_eq!(first.rooms_total, second.rooms_total);
        assert_eq!(first.primary, second.primary);
        for floor in FloorId::ALL {
            assert_eq!(
                first.slots[&floor].book_id_by_slot,
                second.slots[&floor].book_id_by_slot
            );
            assert_eq!(
                first.slots[&floor].sub_id_by_slot,
                second.slots[&floor].sub_id_by_slot
            );
        }
    }

    #[test]
    fn test_every_slot_array_matches_plan_capacity() {
        let books: Vec<BookMeta> = (1..=100)
            .map(|id| BookMeta {
                id,
                subjects: vec!["Ghost stories".to_string()],
                ..BookMeta::default()
            })
            .collect();
        let layout = Layout::build(&books, &LayoutOptions::default());

        for plan in &layout.plans {
            let slots = &layout.slots[&plan.floor];
            assert_eq!(slots.capacity, plan.capacity);
            assert_eq!(slots.book_id_by_slot.len(), plan.capacity);
            assert_eq!(slots.sub_id_by_slot.len(), plan.capacity);
        }
    }
}
