/*!
 * Paging Traits
 * Replacement policy abstraction used by the simulator loop
 */

use super::types::{FrameTable, PagingPolicy};
use crate::core::PageId;

/// Eviction rule plugged into the shared reference loop.
///
/// The simulator owns the frame table and all hit/fault bookkeeping; a policy
/// only tracks its own metadata and picks a victim slot when the table is full.
pub trait ReplacementPolicy {
    fn kind(&self) -> PagingPolicy;

    /// `page` was just placed in `slot` at `time`
    fn on_load(&mut self, slot: usize, page: PageId, time: usize);

    /// `page`, resident in `slot`, was referenced again at `time`
    fn on_hit(&mut self, _slot: usize, _page: PageId, _time: usize) {}

    /// `page` was evicted from `slot` to make room
    fn on_evict(&mut self, _slot: usize, _page: PageId) {}

    /// Pick the slot to evict when every frame is occupied
    fn choose_victim(&mut self, frames: &FrameTable, time: usize, references: &[PageId]) -> usize;
}
