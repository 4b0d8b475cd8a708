/*!
 * FIFO Replacement
 */

use super::traits::ReplacementPolicy;
use super::types::{FrameTable, PagingPolicy};
use crate::core::PageId;
use std::collections::VecDeque;

/// Evicts the slot that was filled longest ago.
///
/// Slots are queued in fill order; a hit leaves the queue untouched.
#[derive(Debug, Default)]
pub struct Fifo {
    order: VecDeque<usize>,
}

impl Fifo {
    pub fn new(frame_count: usize) -> Self {
        Self {
            order: VecDeque::with_capacity(frame_count),
        }
    }
}

impl ReplacementPolicy for Fifo {
    fn kind(&self) -> PagingPolicy {
        PagingPolicy::Fifo
    }

    fn on_load(&mut self, slot: usize, _page: PageId, _time: usize) {
        self.order.push_back(slot);
    }

    fn choose_victim(&mut self, _frames: &FrameTable, _time: usize, _references: &[PageId]) -> usize {
        // Every occupied slot was queued on load, so a full table never finds this empty
        let victim = self.order.pop_front();
        debug_assert!(victim.is_some(), "victim requested with no loaded slots");
        victim.unwrap_or(0)
    }
}
