/*!
 * Core Types
 * Common types used across the simulation engines
 */

/// Simulated clock value, in abstract time units
pub type Time = u64;

/// Process priority (lower value is scheduled first)
pub type Priority = i32;

/// Page identifier in a reference string
pub type PageId = u64;

/// Count of instances of a resource type.
///
/// Signed so that a malformed claim (maximum below allocation) still yields a
/// representable, negative need.
pub type ResourceUnits = i64;

/// Per-process (or pool) resource vector, one entry per resource type
pub type ResourceVector = Vec<ResourceUnits>;
