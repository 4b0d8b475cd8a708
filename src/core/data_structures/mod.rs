/*!
 * Data Structures
 *
 * Small value types shared by the simulation engines:
 * - Inline strings for process labels ("P1", "P2", ...)
 *
 * # Performance
 *
 * - Inline strings: Avoids heap allocation for labels ≤23 bytes, which keeps
 *   the per-run deep copy of the process table cheap
 */

mod inline_string;

pub use inline_string::InlineString;
