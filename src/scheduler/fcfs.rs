/*!
 * First Come, First Served
 */

use super::types::{ProcessRecord, ScheduleResult, SchedulingPolicy, TimelineSegment};
use super::validate_processes;
use crate::core::SimulationResult;
use tracing::{debug, instrument};

/// Run processes to completion in arrival order.
///
/// Ties on arrival keep input order (stable sort). The returned table is in
/// that run order.
#[instrument(level = "debug", skip_all, fields(processes = processes.len()))]
pub fn fcfs(processes: &[ProcessRecord]) -> SimulationResult<ScheduleResult> {
    validate_processes(processes)?;

    let mut procs = processes.to_vec();
    procs.sort_by_key(|p| p.arrival);

    let mut clock = 0;
    let mut timeline = Vec::with_capacity(procs.len());

    for p in procs.iter_mut() {
        if clock < p.arrival {
            debug!(from = clock, to = p.arrival, "CPU idle until next arrival");
            clock = p.arrival;
        }
        let start = clock;
        clock += p.burst;
        p.complete(clock);
        debug!(pid = %p.id, start, finish = clock, "dispatched");
        timeline.push(TimelineSegment::new(p.id.clone(), start, clock));
    }

    Ok(ScheduleResult::new(SchedulingPolicy::Fcfs, procs, timeline))
}
