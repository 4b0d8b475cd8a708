/*!
 * Paging Types
 * Domain types for page-replacement simulations
 */

use crate::core::{PageId, SimulationError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Page-replacement policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PagingPolicy {
    /// Evict the frame filled longest ago
    Fifo,
    /// Evict the least recently referenced page
    Lru,
    /// Evict the page whose next use is farthest away (Bélády)
    Optimal,
}

impl PagingPolicy {
    pub const ALL: [PagingPolicy; 3] = [Self::Fifo, Self::Lru, Self::Optimal];

    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fifo => "fifo",
            Self::Lru => "lru",
            Self::Optimal => "optimal",
        }
    }
}

impl FromStr for PagingPolicy {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fifo" => Ok(Self::Fifo),
            "lru" => Ok(Self::Lru),
            "optimal" | "opt" | "min" => Ok(Self::Optimal),
            _ => Err(SimulationError::unknown_policy("paging", s)),
        }
    }
}

impl fmt::Display for PagingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for PagingPolicy {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PagingPolicy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// Fixed-size table of page slots; `None` marks an empty frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameTable {
    slots: Vec<Option<PageId>>,
}

impl FrameTable {
    pub fn new(frame_count: usize) -> Self {
        Self {
            slots: vec![None; frame_count],
        }
    }

    /// Slot currently holding `page`
    #[inline]
    pub fn position(&self, page: PageId) -> Option<usize> {
        self.slots.iter().position(|&s| s == Some(page))
    }

    /// Leftmost empty slot
    #[inline]
    pub fn first_empty(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    /// Place `page` in `slot`, returning the page it displaced
    #[inline]
    pub fn replace(&mut self, slot: usize, page: PageId) -> Option<PageId> {
        self.slots[slot].replace(page)
    }

    /// Occupied slots as `(slot, page)` in slot order
    pub fn occupied(&self) -> impl Iterator<Item = (usize, PageId)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.map(|page| (i, page)))
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn snapshot(&self) -> Vec<Option<PageId>> {
        self.slots.clone()
    }
}

/// State after one reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageStep {
    pub reference: PageId,
    pub time: usize,
    /// Full frame table after this reference; `null` is an empty frame
    pub frames: Vec<Option<PageId>>,
    pub page_fault: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evicted: Option<PageId>,
}

/// Outcome of one page-replacement run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagingResult {
    pub policy: PagingPolicy,
    pub references: Vec<PageId>,
    pub frame_count: usize,
    pub steps: Vec<PageStep>,
    pub fault_count: usize,
    pub hit_count: usize,
}

impl PagingResult {
    /// Frame table after the last reference
    pub fn final_frames(&self) -> &[Option<PageId>] {
        self.steps.last().map(|s| s.frames.as_slice()).unwrap_or(&[])
    }

    pub fn fault_ratio(&self) -> f64 {
        ratio(self.fault_count, self.references.len())
    }

    pub fn hit_ratio(&self) -> f64 {
        ratio(self.hit_count, self.references.len())
    }
}

fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}
