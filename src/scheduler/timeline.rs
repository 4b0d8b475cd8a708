/*!
 * Timeline Builder
 * Collects CPU bursts and merges contiguous slices of the same process
 */

use super::types::{ProcessRecord, TimelineSegment};
use crate::core::Time;

/// Burst keyed by process index rather than label, so two processes that
/// happen to share a label are never merged together
#[derive(Debug, Clone, Copy)]
struct Burst {
    process: usize,
    start: Time,
    finish: Time,
}

#[derive(Debug, Default)]
pub(super) struct TimelineBuilder {
    bursts: Vec<Burst>,
}

impl TimelineBuilder {
    pub(super) fn with_capacity(capacity: usize) -> Self {
        Self {
            bursts: Vec::with_capacity(capacity),
        }
    }

    /// Record that `process` held the CPU over `[start, finish)`
    pub(super) fn push(&mut self, process: usize, start: Time, finish: Time) {
        if let Some(last) = self.bursts.last_mut() {
            if last.process == process && last.finish == start {
                last.finish = finish;
                return;
            }
        }
        self.bursts.push(Burst {
            process,
            start,
            finish,
        });
    }

    pub(super) fn finish(self, processes: &[ProcessRecord]) -> Vec<TimelineSegment> {
        self.bursts
            .into_iter()
            .map(|b| TimelineSegment::new(processes[b.process].id.clone(), b.start, b.finish))
            .collect()
    }
}
