/*!
 * Round Robin
 * FIFO ready queue with a fixed time quantum
 */

use super::timeline::TimelineBuilder;
use super::types::{ProcessRecord, ScheduleResult, SchedulingPolicy};
use super::validate_processes;
use crate::core::{SimulationError, SimulationResult, Time};
use std::collections::VecDeque;
use tracing::{debug, instrument};

/// Run processes in quantum-sized slices.
///
/// Processes that arrive while a slice runs join the ready queue ahead of the
/// preempted process. The returned table is in arrival order.
#[instrument(level = "debug", skip_all, fields(processes = processes.len(), quantum))]
pub fn round_robin(processes: &[ProcessRecord], quantum: Time) -> SimulationResult<ScheduleResult> {
    if quantum == 0 {
        return Err(SimulationError::InvalidQuantum(0));
    }
    validate_processes(processes)?;

    let mut procs = processes.to_vec();
    procs.sort_by_key(|p| p.arrival);

    let n = procs.len();
    let mut remaining: Vec<Time> = procs.iter().map(|p| p.burst).collect();
    let mut ready: VecDeque<usize> = VecDeque::with_capacity(n);
    let mut timeline = TimelineBuilder::with_capacity(n);
    let mut next = 0;
    let mut clock = 0;

    loop {
        admit(&procs, &mut next, clock, &mut ready);

        let Some(idx) = ready.pop_front() else {
            if next >= n {
                break;
            }
            debug!(from = clock, to = procs[next].arrival, "CPU idle until next arrival");
            clock = procs[next].arrival;
            continue;
        };

        let slice = remaining[idx].min(quantum);
        let start = clock;
        clock += slice;
        remaining[idx] -= slice;
        timeline.push(idx, start, clock);
        debug!(pid = %procs[idx].id, start, finish = clock, left = remaining[idx], "slice");

        // New arrivals queue ahead of the process that just ran
        admit(&procs, &mut next, clock, &mut ready);

        if remaining[idx] > 0 {
            ready.push_back(idx);
        } else {
            procs[idx].complete(clock);
            debug!(pid = %procs[idx].id, finish = clock, "completed");
        }
    }

    let timeline = timeline.finish(&procs);
    Ok(ScheduleResult::new(SchedulingPolicy::RoundRobin, procs, timeline))
}

/// Enqueue every not-yet-admitted process that has arrived by `clock`
fn admit(procs: &[ProcessRecord], next: &mut usize, clock: Time, ready: &mut VecDeque<usize>) {
    while *next < procs.len() && procs[*next].arrival <= clock {
        ready.push_back(*next);
        *next += 1;
    }
}
