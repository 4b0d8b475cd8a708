/*!
 * Scheduler Types
 * Domain types for CPU scheduling simulations
 */

use crate::core::{InlineString, Priority, SimulationError, SimulationResult, Time};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// CPU scheduling policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchedulingPolicy {
    /// First come, first served
    Fcfs,
    /// Shortest job first (non-preemptive)
    Sjf,
    /// Shortest remaining time first
    SjfPreemptive,
    /// Lowest priority value first (non-preemptive)
    Priority,
    /// Lowest priority value first, re-evaluated every time unit
    PriorityPreemptive,
    /// Round robin with a fixed quantum
    RoundRobin,
}

impl SchedulingPolicy {
    pub const ALL: [SchedulingPolicy; 6] = [
        Self::Fcfs,
        Self::Sjf,
        Self::SjfPreemptive,
        Self::Priority,
        Self::PriorityPreemptive,
        Self::RoundRobin,
    ];

    /// Convert to canonical string representation
    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fcfs => "fcfs",
            Self::Sjf => "sjf",
            Self::SjfPreemptive => "sjf_preemptive",
            Self::Priority => "priority",
            Self::PriorityPreemptive => "priority_preemptive",
            Self::RoundRobin => "round_robin",
        }
    }

    /// Whether the running process can lose the CPU before it finishes
    pub const fn is_preemptive(&self) -> bool {
        matches!(
            self,
            Self::SjfPreemptive | Self::PriorityPreemptive | Self::RoundRobin
        )
    }
}

impl FromStr for SchedulingPolicy {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "fcfs" | "fifo" | "first_come_first_served" => Ok(Self::Fcfs),
            "sjf" | "sjf_non_preemptive" | "shortest_job_first" => Ok(Self::Sjf),
            "sjf_preemptive" | "srtf" | "shortest_remaining_time_first" => Ok(Self::SjfPreemptive),
            "priority" | "prio" | "priority_non_preemptive" => Ok(Self::Priority),
            "priority_preemptive" | "prio_preemptive" => Ok(Self::PriorityPreemptive),
            "round_robin" | "roundrobin" | "rr" => Ok(Self::RoundRobin),
            _ => Err(SimulationError::unknown_policy("scheduling", s)),
        }
    }
}

impl fmt::Display for SchedulingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SchedulingPolicy {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SchedulingPolicy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// One schedulable process
///
/// `arrival`, `burst` and `priority` are supplied by the caller. The three
/// computed fields are filled in on the engine's own copy when the process
/// completes; the caller's records are never touched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRecord {
    pub id: InlineString,
    pub arrival: Time,
    pub burst: Time,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub waiting_time: Time,
    #[serde(default)]
    pub turnaround_time: Time,
    #[serde(default)]
    pub completion_time: Time,
}

impl ProcessRecord {
    pub fn new(id: impl Into<InlineString>, arrival: Time, burst: Time) -> Self {
        Self::with_priority(id, arrival, burst, 0)
    }

    pub fn with_priority(
        id: impl Into<InlineString>,
        arrival: Time,
        burst: Time,
        priority: Priority,
    ) -> Self {
        Self {
            id: id.into(),
            arrival,
            burst,
            priority,
            waiting_time: 0,
            turnaround_time: 0,
            completion_time: 0,
        }
    }

    /// Check caller-supplied fields
    pub fn validate(&self) -> SimulationResult<()> {
        if self.burst == 0 {
            return Err(SimulationError::invalid_process(
                &self.id,
                "burst time must be a positive integer",
            ));
        }
        if self.arrival.checked_add(self.burst).is_none() {
            return Err(SimulationError::invalid_process(
                &self.id,
                "arrival plus burst overflows the simulated clock",
            ));
        }
        Ok(())
    }

    /// Set the computed metrics once the process has finished at `completion`
    pub(crate) fn complete(&mut self, completion: Time) {
        self.completion_time = completion;
        self.turnaround_time = completion - self.arrival;
        self.waiting_time = self.turnaround_time - self.burst;
    }
}

/// One contiguous CPU burst in the execution timeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineSegment {
    pub pid: InlineString,
    pub start: Time,
    pub finish: Time,
}

impl TimelineSegment {
    pub fn new(pid: impl Into<InlineString>, start: Time, finish: Time) -> Self {
        Self {
            pid: pid.into(),
            start,
            finish,
        }
    }

    pub fn duration(&self) -> Time {
        self.finish - self.start
    }
}

/// Outcome of one scheduling run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleResult {
    pub policy: SchedulingPolicy,
    pub table: Vec<ProcessRecord>,
    pub timeline: Vec<TimelineSegment>,
    pub avg_waiting_time: f64,
    pub avg_turnaround_time: f64,
}

impl ScheduleResult {
    pub(crate) fn new(
        policy: SchedulingPolicy,
        table: Vec<ProcessRecord>,
        timeline: Vec<TimelineSegment>,
    ) -> Self {
        let avg_waiting_time = mean(table.iter().map(|p| p.waiting_time));
        let avg_turnaround_time = mean(table.iter().map(|p| p.turnaround_time));
        Self {
            policy,
            table,
            timeline,
            avg_waiting_time,
            avg_turnaround_time,
        }
    }

    /// Time at which the last process finished (0 for an empty run)
    pub fn makespan(&self) -> Time {
        self.timeline.iter().map(|s| s.finish).max().unwrap_or(0)
    }

    /// Look up a process row by label
    pub fn process(&self, id: &str) -> Option<&ProcessRecord> {
        self.table.iter().find(|p| p.id.as_str() == id)
    }
}

fn mean(values: impl ExactSizeIterator<Item = Time>) -> f64 {
    let n = values.len();
    if n == 0 {
        return 0.0;
    }
    values.map(|v| v as f64).sum::<f64>() / n as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_parsing() {
        assert_eq!("FCFS".parse::<SchedulingPolicy>().unwrap(), SchedulingPolicy::Fcfs);
        assert_eq!("srtf".parse::<SchedulingPolicy>().unwrap(), SchedulingPolicy::SjfPreemptive);
        assert_eq!(
            "Priority Preemptive".parse::<SchedulingPolicy>().unwrap(),
            SchedulingPolicy::PriorityPreemptive
        );
        assert_eq!("rr".parse::<SchedulingPolicy>().unwrap(), SchedulingPolicy::RoundRobin);
        assert!(matches!(
            "lottery".parse::<SchedulingPolicy>(),
            Err(SimulationError::UnknownPolicy { .. })
        ));
    }

    #[test]
    fn test_policy_round_trips_through_canonical_name() {
        for policy in SchedulingPolicy::ALL {
            assert_eq!(policy.as_str().parse::<SchedulingPolicy>().unwrap(), policy);
        }
    }

    #[test]
    fn test_preemptive_policies() {
        let preemptive: Vec<_> = SchedulingPolicy::ALL
            .into_iter()
            .filter(SchedulingPolicy::is_preemptive)
            .collect();
        assert_eq!(
            preemptive,
            vec![
                SchedulingPolicy::SjfPreemptive,
                SchedulingPolicy::PriorityPreemptive,
                SchedulingPolicy::RoundRobin
            ]
        );
    }

    #[test]
    fn test_zero_burst_rejected() {
        let err = ProcessRecord::new("P1", 0, 0).validate().unwrap_err();
        assert!(matches!(err, SimulationError::InvalidProcessData { .. }));
    }

    #[test]
    fn test_complete_sets_metrics() {
        let mut p = ProcessRecord::new("P2", 1, 3);
        p.complete(7);
        assert_eq!(p.completion_time, 7);
        assert_eq!(p.turnaround_time, 6);
        assert_eq!(p.waiting_time, 3);
    }

    #[test]
    fn test_empty_result_has_zero_averages() {
        let result = ScheduleResult::new(SchedulingPolicy::Fcfs, Vec::new(), Vec::new());
        assert_eq!(result.avg_waiting_time, 0.0);
        assert_eq!(result.avg_turnaround_time, 0.0);
        assert_eq!(result.makespan(), 0);
    }
}
