/*!
 * Paging Module
 * Page-replacement simulation over a fixed-size frame table
 */

mod fifo;
mod lru;
mod optimal;
mod simulator;
pub mod traits;
pub mod types;

pub use fifo::Fifo;
pub use lru::Lru;
pub use optimal::Optimal;
pub use simulator::{simulate, simulate_paging};
pub use traits::ReplacementPolicy;
pub use types::{FrameTable, PageStep, PagingPolicy, PagingResult};
