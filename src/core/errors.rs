/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use super::data_structures::InlineString;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type shared by every simulation engine
pub type SimulationResult<T> = Result<T, SimulationError>;

/// Malformed-input errors, detected before any simulation step runs
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SimulationError {
    #[error("Invalid time quantum: {0}")]
    #[diagnostic(
        code(scheduler::invalid_quantum),
        help("Round Robin needs a quantum of at least 1 time unit.")
    )]
    InvalidQuantum(i64),

    #[error("Invalid data for process {process}: {reason}")]
    #[diagnostic(
        code(scheduler::invalid_process_data),
        help("Arrival time must be a non-negative integer and burst time a positive integer.")
    )]
    InvalidProcessData {
        process: InlineString,
        reason: InlineString,
    },

    #[error("Malformed resource vector {vector}: expected length {expected}, got {actual}")]
    #[diagnostic(
        code(banker::malformed_resource_vector),
        help("Only one resource type is supported: every allocation, maximum and available vector holds exactly one value.")
    )]
    MalformedResourceVector {
        vector: InlineString,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid frame count: {0}")]
    #[diagnostic(
        code(paging::invalid_frame_count),
        help("The frame table needs at least one frame.")
    )]
    InvalidFrameCount(i64),

    #[error("Reference string is empty")]
    #[diagnostic(
        code(paging::empty_reference_string),
        help("Provide at least one page reference, e.g. \"7 0 1 2 0 3\".")
    )]
    EmptyReferenceString,

    #[error("Unknown {engine} policy: {name}")]
    #[diagnostic(
        code(simulation::unknown_policy),
        help("Scheduling: fcfs, sjf, sjf_preemptive, priority, priority_preemptive, round_robin. Paging: fifo, lru, optimal.")
    )]
    UnknownPolicy {
        engine: InlineString,
        name: InlineString,
    },

    #[error("Invalid input: {0}")]
    #[diagnostic(
        code(simulation::invalid_input),
        help("Check the request against the expected call shape.")
    )]
    InvalidInput(InlineString),
}

impl SimulationError {
    pub(crate) fn invalid_process(process: &str, reason: impl Into<InlineString>) -> Self {
        Self::InvalidProcessData {
            process: process.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn malformed_vector(vector: impl Into<InlineString>, actual: usize) -> Self {
        Self::MalformedResourceVector {
            vector: vector.into(),
            expected: crate::core::limits::RESOURCE_TYPES,
            actual,
        }
    }

    pub(crate) fn unknown_policy(engine: &str, name: &str) -> Self {
        Self::UnknownPolicy {
            engine: engine.into(),
            name: name.into(),
        }
    }
}

impl From<serde_json::Error> for SimulationError {
    fn from(err: serde_json::Error) -> Self {
        SimulationError::InvalidInput(err.to_string().into())
    }
}
