/*!
 * Simulation Limits and Defaults
 *
 * Centralized location for the constants shared by the engines, the input
 * parsers, and the command-line front end.
 */

// =============================================================================
// BANKER'S ALGORITHM
// =============================================================================

/// Number of resource types the safety checker understands.
/// Resource vectors keep their vector shape, but every one must have this length.
pub const RESOURCE_TYPES: usize = 1;

// =============================================================================
// CPU SCHEDULING
// =============================================================================

/// Round Robin quantum used by the CLI when `--quantum` is omitted
pub const DEFAULT_QUANTUM: u64 = 2;

/// Priority assigned to parsed processes whose priority field is blank
pub const DEFAULT_PRIORITY: i32 = 0;

/// Prefix for generated process labels (`P1`, `P2`, ...)
pub const PROCESS_LABEL_PREFIX: &str = "P";

// =============================================================================
// PAGE REPLACEMENT
// =============================================================================

/// Frame count used by the CLI when `--frames` is omitted
pub const DEFAULT_FRAME_COUNT: usize = 3;

/// Characters accepted between page numbers in a textual reference string
/// (in addition to whitespace)
pub const REFERENCE_SEPARATORS: &[char] = &[',', ';'];

// =============================================================================
// OBSERVABILITY
// =============================================================================

/// Set to `1` or `true` to switch trace output to JSON
pub const TRACE_JSON_ENV: &str = "OSVIZ_TRACE_JSON";

/// Default `EnvFilter` directive when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";
