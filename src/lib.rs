/*!
 * OS Algorithm Simulation Core
 * Deterministic engines behind the OS-algorithms visualizer
 *
 * - CPU scheduling: FCFS, SJF, SRTF, Priority (both modes), Round Robin
 * - Deadlock avoidance: single-resource Banker's safety check
 * - Page replacement: FIFO, LRU, Optimal
 *
 * Every engine is a synchronous, pure function of its inputs.
 */

pub mod banker;
pub mod core;
pub mod monitoring;
pub mod paging;
pub mod request;
pub mod scheduler;

// Re-exports
pub use banker::{check_safety, SafetyReport, SafetyStep};
pub use crate::core::{InlineString, PageId, ResourceVector, SimulationError, SimulationResult, Time};
pub use monitoring::init_tracing;
pub use paging::{simulate, simulate_paging, PagingPolicy, PagingResult, PageStep};
pub use request::{execute, execute_json, ProcessInput, SimulationOutcome, SimulationRequest};
pub use scheduler::{run_schedule, ProcessRecord, ScheduleResult, SchedulingPolicy, TimelineSegment};
