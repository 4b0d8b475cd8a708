/*!
 * Text Input Parsing
 * Turns the free-form fields a front end collects into engine call shapes
 */

use crate::core::limits::{DEFAULT_PRIORITY, PROCESS_LABEL_PREFIX, REFERENCE_SEPARATORS};
use crate::core::{PageId, Priority, ResourceVector, SimulationError, SimulationResult, Time};
use crate::scheduler::ProcessRecord;

fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| c.is_whitespace() || REFERENCE_SEPARATORS.contains(&c))
        .filter(|t| !t.is_empty())
}

/// Parse a reference string such as `"7 0 1 2 0 3"` or `"7,0,1"`
pub fn parse_reference_string(text: &str) -> SimulationResult<Vec<PageId>> {
    let pages = tokens(text)
        .map(|t| {
            t.parse::<PageId>().map_err(|_| {
                SimulationError::InvalidInput(format!("invalid page reference '{}'", t).into())
            })
        })
        .collect::<SimulationResult<Vec<_>>>()?;

    if pages.is_empty() {
        return Err(SimulationError::EmptyReferenceString);
    }
    Ok(pages)
}

/// Parse a Round Robin quantum; zero and negative values are rejected
pub fn parse_quantum(text: &str) -> SimulationResult<Time> {
    checked_quantum(parse_integer(text, "quantum")?)
}

/// Parse a frame count; zero and negative values are rejected
pub fn parse_frame_count(text: &str) -> SimulationResult<usize> {
    checked_frame_count(parse_integer(text, "frame count")?)
}

/// Accept a signed quantum only if it is positive
pub fn checked_quantum(value: i64) -> SimulationResult<Time> {
    match Time::try_from(value) {
        Ok(q) if q > 0 => Ok(q),
        _ => Err(SimulationError::InvalidQuantum(value)),
    }
}

/// Accept a signed frame count only if it is positive
pub fn checked_frame_count(value: i64) -> SimulationResult<usize> {
    match usize::try_from(value) {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(SimulationError::InvalidFrameCount(value)),
    }
}

/// Build a process from signed fields: arrival must be non-negative and burst positive
pub fn checked_process(
    label: &str,
    arrival: i64,
    burst: i64,
    priority: Priority,
) -> SimulationResult<ProcessRecord> {
    let Ok(arrival) = Time::try_from(arrival) else {
        return Err(SimulationError::invalid_process(
            label,
            format!("arrival time {} is not a non-negative integer", arrival),
        ));
    };
    let burst = match Time::try_from(burst) {
        Ok(b) if b > 0 => b,
        _ => {
            return Err(SimulationError::invalid_process(
                label,
                format!("burst time {} is not a positive integer", burst),
            ))
        }
    };
    Ok(ProcessRecord::with_priority(label, arrival, burst, priority))
}

/// Build the process at `index` (labelled `P<index+1>`) from text fields.
///
/// A blank priority falls back to the default priority.
pub fn parse_process(
    index: usize,
    arrival: &str,
    burst: &str,
    priority: Option<&str>,
) -> SimulationResult<ProcessRecord> {
    let label = format!("{}{}", PROCESS_LABEL_PREFIX, index + 1);
    parse_labelled_process(&label, arrival, burst, priority)
}

/// Parse a compact process spec: `ARRIVAL:BURST[:PRIORITY]` or
/// `ID:ARRIVAL:BURST:PRIORITY`. Unlabelled specs are named `P<index+1>`.
pub fn parse_process_spec(index: usize, spec: &str) -> SimulationResult<ProcessRecord> {
    let fields: Vec<&str> = spec.split(':').map(str::trim).collect();
    match fields.as_slice() {
        [arrival, burst] => parse_process(index, arrival, burst, None),
        [arrival, burst, priority] if arrival.parse::<i64>().is_ok() => {
            parse_process(index, arrival, burst, Some(*priority))
        }
        [id, arrival, burst] => parse_labelled_process(id, arrival, burst, None),
        [id, arrival, burst, priority] => parse_labelled_process(id, arrival, burst, Some(*priority)),
        _ => Err(SimulationError::InvalidInput(
            format!("process spec '{}' must be ARRIVAL:BURST[:PRIORITY] or ID:ARRIVAL:BURST[:PRIORITY]", spec).into(),
        )),
    }
}

/// Parse one column of a single-resource table, e.g. `"1 2 2"` into `[[1], [2], [2]]`
pub fn parse_resource_column(text: &str, name: &str) -> SimulationResult<Vec<ResourceVector>> {
    tokens(text)
        .map(|t| parse_integer(t, name).map(|v| vec![v]))
        .collect()
}

fn parse_labelled_process(
    label: &str,
    arrival: &str,
    burst: &str,
    priority: Option<&str>,
) -> SimulationResult<ProcessRecord> {
    let arrival = arrival.trim().parse::<i64>().map_err(|_| {
        SimulationError::invalid_process(
            label,
            format!("arrival time '{}' is not a non-negative integer", arrival.trim()),
        )
    })?;
    let burst = burst.trim().parse::<i64>().map_err(|_| {
        SimulationError::invalid_process(
            label,
            format!("burst time '{}' is not a positive integer", burst.trim()),
        )
    })?;
    let priority = match priority.map(str::trim).filter(|p| !p.is_empty()) {
        None => DEFAULT_PRIORITY,
        Some(p) => p.parse().map_err(|_| {
            SimulationError::invalid_process(label, format!("priority '{}' is not an integer", p))
        })?,
    };

    checked_process(label, arrival, burst, priority)
}

fn parse_integer(text: &str, what: &str) -> SimulationResult<i64> {
    text.trim()
        .parse::<i64>()
        .map_err(|_| SimulationError::InvalidInput(format!("{} '{}' is not an integer", what, text.trim()).into()))
}
