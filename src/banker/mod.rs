/*!
 * Banker's Algorithm
 * Deadlock-avoidance safety check for a single resource type
 */

mod safety;
pub mod types;

pub use safety::check_safety;
pub use types::{SafetyReport, SafetyStep};
