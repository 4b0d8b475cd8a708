/*!
 * Core Module
 * Fundamental simulation types, limits, and error handling
 */

pub mod data_structures;
pub mod errors;
pub mod limits;
pub mod types;

// Re-export for convenience
pub use data_structures::InlineString;
pub use errors::*;
pub use types::*;
