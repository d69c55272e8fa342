//! Versioned JSON artifacts for the frontend.
//!
//! Four artifact families come out of a layout run: the floor directory,
//! the per-floor slot arrays, the primary location map and one tag file per
//! room. File names carry a `v1` version so the frontend can cache
//! aggressively and a future format bump never collides. Every file is
//! written through a `.tmp` sibling and renamed into place, so a crashed
//! run never leaves a half-written artifact behind.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::classify::FloorId;
use crate::error::LayoutError;
use crate::layout::Layout;
use crate::plan::BOOKS_PER_ROOM;
use crate::tags::ShelfTag;

/// File name of the floor directory artifact.
pub const FLOORS_FILE: &str = "floors7.v1.json";
/// File name of the per-floor slot arrays artifact.
pub const SLOTS_FILE: &str = "slots7.v1.json";
/// File name of the primary location map artifact.
pub const PRIMARY_FILE: &str = "primaryLocationByBookId.v1.json";
/// Directory holding the per-room tag files.
pub const TAGS_DIR: &str = "tags";

/// File name of one room's tag artifact.
pub fn room_tags_file(room: u32) -> String {
    format!("room-{:03}.v1.json", room)
}

/// Top-level floor directory: the seven floors plus world totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorsArtifact {
    /// Books per room.
    pub books_per_room: usize,
    /// Total rooms across all floors.
    pub rooms_total: u32,
    /// Floor descriptors in room order.
    pub floors: Vec<FloorArtifact>,
}

/// One floor's entry in the floor directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorArtifact {
    /// Stable floor id.
    pub id: FloorId,
    /// Display label.
    pub label: String,
    /// First global room index.
    pub room_start: u32,
    /// Rooms on the floor.
    pub room_count: u32,
    /// Books classified onto the floor.
    pub book_count: usize,
    /// Slot capacity, `roomCount * booksPerRoom`.
    pub capacity: usize,
    /// Donor floors for slack fill, in rotation order.
    pub fill_from: Vec<FloorId>,
    /// Official subcategories plus the trailing `Other` pool.
    pub subcategories: Vec<SubcategoryArtifact>,
}

/// One subcategory entry of a floor descriptor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubcategoryArtifact {
    /// Stable subcategory id.
    pub id: String,
    /// Display label, currently the same as the id.
    pub label: String,
    /// Books counted under the subcategory.
    pub count: usize,
}

/// Slot arrays for one floor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorSlotsArtifact {
    /// Stable floor id.
    pub floor_id: FloorId,
    /// Length of both slot arrays.
    pub capacity: usize,
    /// Book id per slot.
    pub book_id_by_slot: Vec<u32>,
    /// Subcategory id per slot.
    pub sub_id_by_slot: Vec<String>,
}

/// One room's shelf tags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomTagsArtifact {
    /// Global room index.
    pub room: u32,
    /// Section tags in wall/shelf/volume order.
    pub tags: Vec<ShelfTag>,
}

/// Builds the floor directory artifact from a layout.
pub fn floors_artifact(layout: &Layout) -> FloorsArtifact {
    let floors = layout
        .plans
        .iter()
        .map(|plan| {
            let mut subcategories: Vec<SubcategoryArtifact> = plan
                .officials
                .iter()
                .map(|sub| SubcategoryArtifact {
                    id: sub.id.clone(),
                    label: sub.id.clone(),
                    count: sub.count,
                })
                .collect();
            subcategories.push(SubcategoryArtifact {
                id: "Other".to_string(),
                label: "Other".to_string(),
                count: plan.other_count,
            });
            FloorArtifact {
                id: plan.floor,
                label: plan.floor.label().to_string(),
                room_start: plan.room_start,
                room_count: plan.room_count,
                book_count: plan.book_count,
                capacity: plan.capacity,
                fill_from: plan.floor.fill_from().to_vec(),
                subcategories,
            }
        })
        .collect();

    FloorsArtifact {
        books_per_room: BOOKS_PER_ROOM,
        rooms_total: layout.rooms_total,
        floors,
    }
}

/// Builds the per-floor slot arrays artifact, keyed by floor id.
pub fn slots_artifact(layout: &Layout) -> BTreeMap<FloorId, FloorSlotsArtifact> {
    layout
        .slots
        .iter()
        .map(|(&floor, slots)| {
            let artifact = FloorSlotsArtifact {
                floor_id: floor,
                capacity: slots.capacity,
                book_id_by_slot: slots.book_id_by_slot.clone(),
                sub_id_by_slot: slots.sub_id_by_slot.clone(),
            };
            (floor, artifact)
        })
        .collect()
}

/// Writes `bytes` to `path` through a `.tmp` sibling and an atomic rename.
fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), LayoutError> {
    let mut tmp_name = path.as_os_str().to_os_string();
    tmp_name.push(".tmp");
    let tmp = PathBuf::from(tmp_name);
    fs::write(&tmp, bytes)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

/// Writes every layout artifact under `out_dir`.
///
/// The floor directory is pretty-printed for humans; the slot arrays, the
/// primary map and the tag files are compact.
pub fn write_artifacts(layout: &Layout, out_dir: &Path) -> Result<(), LayoutError> {
    fs::create_dir_all(out_dir)?;
    let tags_dir = out_dir.join(TAGS_DIR);
    fs::create_dir_all(&tags_dir)?;

    let floors_path = out_dir.join(FLOORS_FILE);
    write_atomic(&floors_path, &serde_json::to_vec_pretty(&floors_artifact(layout))?)?;
    tracing::info!("Wrote {}", floors_path.display());

    let slots_path = out_dir.join(SLOTS_FILE);
    write_atomic(&slots_path, &serde_json::to_vec(&slots_artifact(layout))?)?;
    tracing::info!("Wrote {}", slots_path.display());

    let primary_path = out_dir.join(PRIMARY_FILE);
    write_atomic(&primary_path, &serde_json::to_vec(&layout.primary)?)?;
    tracing::info!("Wrote {} ({} books)", primary_path.display(), layout.primary.len());

    for (&room, tags) in &layout.room_tags {
        let artifact = RoomTagsArtifact { room, tags: tags.clone() };
        write_atomic(&tags_dir.join(room_tags_file(room)), &serde_json::to_vec(&artifact)?)?;
    }
    tracing::info!("Wrote {} room tag files under {}", layout.room_tags.len(), tags_dir.display());

    Ok(())
}
