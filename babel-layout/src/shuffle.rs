//! Deterministic order scrambling for slot assignment.
//!
//! The layout must not mirror catalogue insertion order, yet it has to be
//! reproducible across runs and platforms. Books are therefore ordered by a
//! seeded 32-bit FNV-1a key instead of a random shuffle. The hash runs over
//! Unicode code points, not UTF-8 bytes, so seeds containing non-ASCII
//! subcategory names key the same way everywhere.

/// Returns `ids` reordered by the FNV-1a key of `"{seed}:{id}"`.
///
/// The underlying sort is stable, so ids with colliding keys keep their
/// input order, and duplicate ids stay adjacent.
pub fn stable_shuffle(ids: &[u32], seed: &str) -> Vec<u32> {
    let mut shuffled = ids.to_vec();
    shuffled.sort_by_key(|&id| fnv_key(seed, id));
    shuffled
}

/// 32-bit FNV-1a over the code points of `"{seed}:{id}"`.
fn fnv_key(seed: &str, id: u32) -> u32 {
    let keyed = format!("{}:{}", seed, id);
    let mut hash: u32 = 2_166_136_261;
    for ch in keyed.chars() {
        hash ^= ch as u32;
        hash = hash.wrapping_mul(16_777_619);
    }
    hash
}
