/*!
 * CPU Scheduler
 * Deterministic simulation of six classic scheduling policies
 *
 * Every policy works on its own copy of the caller's process records and
 * returns the per-process table, the merged execution timeline, and the
 * mean waiting and turnaround times.
 */

mod fcfs;
mod round_robin;
mod selection;
mod timeline;
pub mod types;

pub use fcfs::fcfs;
pub use round_robin::round_robin;
pub use selection::{priority, priority_preemptive, sjf, sjf_preemptive};
pub use types::{ProcessRecord, ScheduleResult, SchedulingPolicy, TimelineSegment};

use crate::core::{SimulationError, SimulationResult, Time};
use crate::monitoring::SimulationSpan;
use tracing::info;

/// Run `processes` under `policy`.
///
/// `quantum` is required (and must be positive) for Round Robin and ignored
/// by every other policy.
pub fn run_schedule(
    policy: SchedulingPolicy,
    processes: &[ProcessRecord],
    quantum: Option<Time>,
) -> SimulationResult<ScheduleResult> {
    let span = SimulationSpan::new("scheduler", policy.as_str());
    let _entered = span.enter();

    let outcome = match policy {
        SchedulingPolicy::Fcfs => fcfs(processes),
        SchedulingPolicy::Sjf => sjf(processes),
        SchedulingPolicy::SjfPreemptive => sjf_preemptive(processes),
        SchedulingPolicy::Priority => priority(processes),
        SchedulingPolicy::PriorityPreemptive => priority_preemptive(processes),
        SchedulingPolicy::RoundRobin => round_robin(processes, quantum.unwrap_or(0)),
    };

    match &outcome {
        Ok(result) => {
            span.record_success();
            info!(
                policy = %policy,
                preemptive = policy.is_preemptive(),
                processes = result.table.len(),
                segments = result.timeline.len(),
                avg_waiting_time = result.avg_waiting_time,
                avg_turnaround_time = result.avg_turnaround_time,
                "schedule complete"
            );
        }
        Err(err) => span.record_error(&err.to_string()),
    }
    outcome
}

/// Reject the whole run if any record is malformed
///
/// The clock never passes the latest arrival plus the total burst time, so
/// that bound must fit in `Time` for every policy to run without overflow.
pub(crate) fn validate_processes(processes: &[ProcessRecord]) -> SimulationResult<()> {
    processes.iter().try_for_each(ProcessRecord::validate)?;

    let latest_arrival = processes.iter().map(|p| p.arrival).max().unwrap_or(0);
    processes
        .iter()
        .try_fold(latest_arrival, |horizon, p| {
            horizon.checked_add(p.burst).ok_or_else(|| {
                SimulationError::invalid_process(
                    &p.id,
                    "total burst time overflows the simulated clock",
                )
            })
        })
        .map(|_| ())
}
