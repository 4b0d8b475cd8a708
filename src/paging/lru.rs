/*!
 * LRU Replacement
 */

use super::traits::ReplacementPolicy;
use super::types::{FrameTable, PagingPolicy};
use crate::core::PageId;
use ahash::AHashMap;

/// Evicts the resident page with the oldest last reference.
///
/// Only recency metadata moves on a hit; pages never change slot.
#[derive(Debug, Default)]
pub struct Lru {
    last_used: AHashMap<PageId, usize>,
}

impl Lru {
    pub fn new(frame_count: usize) -> Self {
        Self {
            last_used: AHashMap::with_capacity(frame_count),
        }
    }
}

impl ReplacementPolicy for Lru {
    fn kind(&self) -> PagingPolicy {
        PagingPolicy::Lru
    }

    fn on_load(&mut self, _slot: usize, page: PageId, time: usize) {
        self.last_used.insert(page, time);
    }

    fn on_hit(&mut self, _slot: usize, page: PageId, time: usize) {
        self.last_used.insert(page, time);
    }

    fn on_evict(&mut self, _slot: usize, page: PageId) {
        self.last_used.remove(&page);
    }

    fn choose_victim(&mut self, frames: &FrameTable, _time: usize, _references: &[PageId]) -> usize {
        let mut victim: Option<(usize, usize)> = None;
        for (slot, page) in frames.occupied() {
            let used = self.last_used.get(&page).copied();
            debug_assert!(used.is_some(), "resident page {} has no recorded use", page);
            let used = used.unwrap_or(0);
            // Strict comparison: the earliest-scanned slot wins ties
            if victim.map_or(true, |(_, oldest)| used < oldest) {
                victim = Some((slot, used));
            }
        }
        debug_assert!(victim.is_some(), "victim requested from an empty frame table");
        victim.map(|(slot, _)| slot).unwrap_or(0)
    }
}
