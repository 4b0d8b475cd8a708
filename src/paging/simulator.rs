/*!
 * Page Replacement Simulator
 * Shared reference loop: hit/fault bookkeeping, frame filling, step trace
 */

use super::fifo::Fifo;
use super::lru::Lru;
use super::optimal::Optimal;
use super::traits::ReplacementPolicy;
use super::types::{FrameTable, PageStep, PagingPolicy, PagingResult};
use crate::core::{PageId, SimulationError, SimulationResult};
use crate::monitoring::SimulationSpan;
use tracing::{debug, info};

/// Simulate `references` against `frame_count` frames under the policy named
/// `policy_name` (case-insensitive: `fifo`, `lru`, `optimal`).
pub fn simulate_paging(
    references: &[PageId],
    frame_count: usize,
    policy_name: &str,
) -> SimulationResult<PagingResult> {
    let policy: PagingPolicy = policy_name.parse()?;
    simulate(references, frame_count, policy)
}

/// Simulate `references` against `frame_count` frames under `policy`
pub fn simulate(
    references: &[PageId],
    frame_count: usize,
    policy: PagingPolicy,
) -> SimulationResult<PagingResult> {
    let span = SimulationSpan::new("paging", policy.as_str());
    let _entered = span.enter();

    let outcome = validate(references, frame_count).map(|()| match policy {
        PagingPolicy::Fifo => run(references, frame_count, Fifo::new(frame_count)),
        PagingPolicy::Lru => run(references, frame_count, Lru::new(frame_count)),
        PagingPolicy::Optimal => run(references, frame_count, Optimal::new()),
    });

    match &outcome {
        Ok(result) => {
            span.record_success();
            info!(
                policy = %policy,
                references = references.len(),
                frames = frame_count,
                faults = result.fault_count,
                hits = result.hit_count,
                fault_ratio = result.fault_ratio(),
                "paging simulation complete"
            );
        }
        Err(err) => span.record_error(&err.to_string()),
    }
    outcome
}

fn validate(references: &[PageId], frame_count: usize) -> SimulationResult<()> {
    if frame_count == 0 {
        return Err(SimulationError::InvalidFrameCount(0));
    }
    if references.is_empty() {
        return Err(SimulationError::EmptyReferenceString);
    }
    Ok(())
}

fn run<P: ReplacementPolicy>(references: &[PageId], frame_count: usize, mut policy: P) -> PagingResult {
    let mut frames = FrameTable::new(frame_count);
    let mut steps = Vec::with_capacity(references.len());
    let mut faults = 0;
    let mut hits = 0;

    for (time, &page) in references.iter().enumerate() {
        if let Some(slot) = frames.position(page) {
            hits += 1;
            policy.on_hit(slot, page, time);
            debug!(time, page, slot, "hit");
            steps.push(PageStep {
                reference: page,
                time,
                frames: frames.snapshot(),
                page_fault: false,
                evicted: None,
            });
            continue;
        }

        faults += 1;
        let slot = match frames.first_empty() {
            Some(slot) => slot,
            None => policy.choose_victim(&frames, time, references),
        };
        let evicted = frames.replace(slot, page);
        if let Some(old) = evicted {
            policy.on_evict(slot, old);
        }
        policy.on_load(slot, page, time);
        debug!(time, page, slot, evicted = ?evicted, "fault");

        steps.push(PageStep {
            reference: page,
            time,
            frames: frames.snapshot(),
            page_fault: true,
            evicted,
        });
    }

    PagingResult {
        policy: policy.kind(),
        references: references.to_vec(),
        frame_count,
        steps,
        fault_count: faults,
        hit_count: hits,
    }
}
