/*!
 * Optimal Replacement
 */

use super::traits::ReplacementPolicy;
use super::types::{FrameTable, PagingPolicy};
use crate::core::PageId;

/// Evicts the page whose next reference lies farthest in the future.
///
/// A page that is never referenced again is evicted at once (first such slot
/// in scan order); otherwise the first slot with the farthest next use wins.
#[derive(Debug, Default)]
pub struct Optimal;

impl Optimal {
    pub fn new() -> Self {
        Self
    }
}

impl ReplacementPolicy for Optimal {
    fn kind(&self) -> PagingPolicy {
        PagingPolicy::Optimal
    }

    fn on_load(&mut self, _slot: usize, _page: PageId, _time: usize) {}

    fn choose_victim(&mut self, frames: &FrameTable, time: usize, references: &[PageId]) -> usize {
        let mut farthest: Option<(usize, usize)> = None;
        for (slot, page) in frames.occupied() {
            let next_use = references
                .iter()
                .skip(time + 1)
                .position(|&r| r == page)
                .map(|offset| time + 1 + offset);

            match next_use {
                None => return slot,
                Some(next) => {
                    if farthest.map_or(true, |(_, best)| next > best) {
                        farthest = Some((slot, next));
                    }
                }
            }
        }
        debug_assert!(farthest.is_some(), "victim requested from an empty frame table");
        farthest.map(|(slot, _)| slot).unwrap_or(0)
    }
}
