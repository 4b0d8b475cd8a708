/*!
 * Key-Based Selection
 * Shortest-job and priority scheduling, preemptive and non-preemptive
 *
 * Both families pick, among arrived and unfinished processes, the one with
 * the smallest selection key; ties go to the smallest input index.
 */

use super::timeline::TimelineBuilder;
use super::types::{ProcessRecord, ScheduleResult, SchedulingPolicy, TimelineSegment};
use super::validate_processes;
use crate::core::{SimulationResult, Time};
use tracing::{debug, instrument, trace};

/// What a selection-based policy minimises
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SelectionKey {
    /// Remaining burst time (full burst when non-preemptive)
    RemainingBurst,
    /// Priority value, lower runs first
    Priority,
}

impl SelectionKey {
    #[inline]
    fn rank(self, process: &ProcessRecord, remaining: Time) -> i128 {
        match self {
            Self::RemainingBurst => remaining as i128,
            Self::Priority => process.priority as i128,
        }
    }
}

/// Shortest job first, non-preemptive
#[instrument(level = "debug", skip_all, fields(processes = processes.len()))]
pub fn sjf(processes: &[ProcessRecord]) -> SimulationResult<ScheduleResult> {
    run_to_completion(processes, SelectionKey::RemainingBurst, SchedulingPolicy::Sjf)
}

/// Shortest remaining time first
#[instrument(level = "debug", skip_all, fields(processes = processes.len()))]
pub fn sjf_preemptive(processes: &[ProcessRecord]) -> SimulationResult<ScheduleResult> {
    run_per_unit(processes, SelectionKey::RemainingBurst, SchedulingPolicy::SjfPreemptive)
}

/// Priority scheduling, non-preemptive
#[instrument(level = "debug", skip_all, fields(processes = processes.len()))]
pub fn priority(processes: &[ProcessRecord]) -> SimulationResult<ScheduleResult> {
    run_to_completion(processes, SelectionKey::Priority, SchedulingPolicy::Priority)
}

/// Priority scheduling, re-evaluated every time unit
#[instrument(level = "debug", skip_all, fields(processes = processes.len()))]
pub fn priority_preemptive(processes: &[ProcessRecord]) -> SimulationResult<ScheduleResult> {
    run_per_unit(processes, SelectionKey::Priority, SchedulingPolicy::PriorityPreemptive)
}

/// Index of the eligible process with the smallest key at `clock`
fn select(
    procs: &[ProcessRecord],
    remaining: &[Time],
    clock: Time,
    key: SelectionKey,
) -> Option<usize> {
    procs
        .iter()
        .enumerate()
        .filter(|(i, p)| p.arrival <= clock && remaining[*i] > 0)
        .min_by_key(|(i, p)| (key.rank(p, remaining[*i]), *i))
        .map(|(i, _)| i)
}

/// Earliest arrival among processes that still have work left
fn next_arrival(procs: &[ProcessRecord], remaining: &[Time]) -> Option<Time> {
    procs
        .iter()
        .zip(remaining)
        .filter(|(_, &left)| left > 0)
        .map(|(p, _)| p.arrival)
        .min()
}

fn run_to_completion(
    processes: &[ProcessRecord],
    key: SelectionKey,
    policy: SchedulingPolicy,
) -> SimulationResult<ScheduleResult> {
    validate_processes(processes)?;

    let mut procs = processes.to_vec();
    let mut remaining: Vec<Time> = procs.iter().map(|p| p.burst).collect();
    let mut timeline = Vec::with_capacity(procs.len());
    let mut clock = 0;
    let mut completed = 0;

    while completed < procs.len() {
        let Some(idx) = select(&procs, &remaining, clock, key) else {
            // Nothing eligible: every unfinished process arrives later than `clock`
            match next_arrival(&procs, &remaining) {
                Some(arrival) => {
                    debug!(from = clock, to = arrival, "CPU idle until next arrival");
                    clock = arrival;
                    continue;
                }
                None => break,
            }
        };

        let start = clock;
        clock += remaining[idx];
        remaining[idx] = 0;
        completed += 1;

        let p = &mut procs[idx];
        p.complete(clock);
        debug!(pid = %p.id, start, finish = clock, "dispatched");
        timeline.push(TimelineSegment::new(p.id.clone(), start, clock));
    }

    Ok(ScheduleResult::new(policy, procs, timeline))
}

fn run_per_unit(
    processes: &[ProcessRecord],
    key: SelectionKey,
    policy: SchedulingPolicy,
) -> SimulationResult<ScheduleResult> {
    validate_processes(processes)?;

    let mut procs = processes.to_vec();
    let mut remaining: Vec<Time> = procs.iter().map(|p| p.burst).collect();
    let mut timeline = TimelineBuilder::with_capacity(procs.len());
    let mut clock = 0;
    let mut completed = 0;
    let mut running: Option<usize> = None;

    while completed < procs.len() {
        let Some(idx) = select(&procs, &remaining, clock, key) else {
            // Nothing becomes eligible before the next arrival, so skip the idle units
            running = None;
            match next_arrival(&procs, &remaining) {
                Some(arrival) => {
                    trace!(from = clock, to = arrival, "CPU idle");
                    clock = arrival;
                    continue;
                }
                None => break,
            }
        };

        if running != Some(idx) {
            debug!(pid = %procs[idx].id, clock, "context switch");
            running = Some(idx);
        }

        timeline.push(idx, clock, clock + 1);
        remaining[idx] -= 1;
        clock += 1;

        if remaining[idx] == 0 {
            completed += 1;
            running = None;
            procs[idx].complete(clock);
            debug!(pid = %procs[idx].id, finish = clock, "completed");
        }
    }

    let timeline = timeline.finish(&procs);
    Ok(ScheduleResult::new(policy, procs, timeline))
}
