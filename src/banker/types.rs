/*!
 * Banker Types
 */

use crate::core::ResourceVector;
use serde::{Deserialize, Serialize};

/// One process scan during the safety check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyStep {
    /// Index of the scanned process
    pub process: usize,
    pub need: ResourceVector,
    pub allocation: ResourceVector,
    /// Work pool immediately before the comparison
    pub available_before: ResourceVector,
    pub can_run: bool,
    /// Work pool after the process released its allocation (only if it ran)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_after: Option<ResourceVector>,
}

/// Verdict of a safety check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyReport {
    pub steps: Vec<SafetyStep>,
    pub is_safe: bool,
    /// Order in which processes became runnable
    pub sequence: Vec<usize>,
    /// `maximum - allocation` per process
    pub need: Vec<ResourceVector>,
}

impl SafetyReport {
    /// Safe sequence as `P<i>` labels, e.g. `P2 -> P0 -> P1`
    pub fn sequence_label(&self) -> String {
        self.sequence
            .iter()
            .map(|i| format!("P{}", i))
            .collect::<Vec<_>>()
            .join(" -> ")
    }

    /// Processes left unfinished when the scan stopped making progress
    pub fn blocked(&self) -> Vec<usize> {
        (0..self.need.len())
            .filter(|i| !self.sequence.contains(i))
            .collect()
    }
}
