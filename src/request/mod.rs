/*!
 * Simulation Requests
 * Serializable call shapes for the three engines and a single dispatcher
 */

pub mod parse;

use crate::banker::{self, SafetyReport};
use crate::core::limits::PROCESS_LABEL_PREFIX;
use crate::core::{InlineString, PageId, Priority, ResourceVector, SimulationResult};
use crate::paging::{self, PagingResult};
use crate::scheduler::{self, ProcessRecord, ScheduleResult, SchedulingPolicy};
use serde::{Deserialize, Serialize};

/// A process as submitted in a request
///
/// Times are signed so that a negative arrival or a non-positive burst is
/// reported as invalid process data instead of failing to decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessInput {
    /// Defaults to `P<position+1>` when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<InlineString>,
    pub arrival: i64,
    pub burst: i64,
    #[serde(default)]
    pub priority: Priority,
}

impl ProcessInput {
    pub fn new(id: impl Into<InlineString>, arrival: i64, burst: i64) -> Self {
        Self {
            id: Some(id.into()),
            arrival,
            burst,
            priority: 0,
        }
    }

    fn to_record(&self, index: usize) -> SimulationResult<ProcessRecord> {
        let label = match &self.id {
            Some(id) => id.clone(),
            None => format!("{}{}", PROCESS_LABEL_PREFIX, index + 1).into(),
        };
        parse::checked_process(&label, self.arrival, self.burst, self.priority)
    }
}

/// One engine invocation, as a front end would submit it
///
/// Policy names stay as text until dispatch so that an unrecognised name is
/// reported as an unknown policy rather than a decoding failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "engine", rename_all = "snake_case")]
pub enum SimulationRequest {
    Schedule {
        policy: InlineString,
        processes: Vec<ProcessInput>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        quantum: Option<i64>,
    },
    Safety {
        allocation: Vec<ResourceVector>,
        maximum: Vec<ResourceVector>,
        available: ResourceVector,
    },
    Paging {
        references: Vec<PageId>,
        frame_count: i64,
        policy: InlineString,
    },
}

/// Result of a dispatched request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "engine", rename_all = "snake_case")]
pub enum SimulationOutcome {
    Schedule(ScheduleResult),
    Safety(SafetyReport),
    Paging(PagingResult),
}

impl SimulationRequest {
    pub fn engine(&self) -> &'static str {
        match self {
            Self::Schedule { .. } => "schedule",
            Self::Safety { .. } => "safety",
            Self::Paging { .. } => "paging",
        }
    }
}

/// Run the engine a request names
pub fn execute(request: &SimulationRequest) -> SimulationResult<SimulationOutcome> {
    match request {
        SimulationRequest::Schedule {
            policy,
            processes,
            quantum,
        } => {
            let policy: SchedulingPolicy = policy.parse()?;
            let processes = processes
                .iter()
                .enumerate()
                .map(|(i, p)| p.to_record(i))
                .collect::<SimulationResult<Vec<_>>>()?;
            // Only Round Robin reads the quantum
            let quantum = match policy {
                SchedulingPolicy::RoundRobin => quantum.map(parse::checked_quantum).transpose()?,
                _ => None,
            };
            scheduler::run_schedule(policy, &processes, quantum).map(SimulationOutcome::Schedule)
        }
        SimulationRequest::Safety {
            allocation,
            maximum,
            available,
        } => banker::check_safety(allocation, maximum, available).map(SimulationOutcome::Safety),
        SimulationRequest::Paging {
            references,
            frame_count,
            policy,
        } => {
            let frame_count = parse::checked_frame_count(*frame_count)?;
            paging::simulate_paging(references, frame_count, policy).map(SimulationOutcome::Paging)
        }
    }
}

/// Decode a JSON request and run it
pub fn execute_json(json: &str) -> SimulationResult<SimulationOutcome> {
    let request: SimulationRequest = serde_json::from_str(json)?;
    execute(&request)
}
