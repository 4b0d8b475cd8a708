/*!
 * Safety Check
 *
 * Scans processes in index order, letting any process whose need fits in
 * the work pool run and release its allocation. Passes repeat from index 0
 * until one makes no progress. O(n²) scans worst case.
 */

use super::types::{SafetyReport, SafetyStep};
use crate::core::limits::RESOURCE_TYPES;
use crate::core::{ResourceUnits, ResourceVector, SimulationError, SimulationResult};
use crate::monitoring::SimulationSpan;
use tracing::{debug, info, warn};

/// Determine whether the state described by `allocation`, `maximum` and
/// `available` is safe, and if so in which order processes can finish.
///
/// Every vector must hold exactly one value. A negative need (maximum below
/// allocation) is accepted and always fits in the work pool.
pub fn check_safety(
    allocation: &[ResourceVector],
    maximum: &[ResourceVector],
    available: &[ResourceUnits],
) -> SimulationResult<SafetyReport> {
    let span = SimulationSpan::new("banker", "safety");
    let _entered = span.enter();

    let outcome = validate(allocation, maximum, available).map(|()| run(allocation, maximum, available));
    match &outcome {
        Ok(report) => {
            span.record_success();
            info!(
                is_safe = report.is_safe,
                sequence = %report.sequence_label(),
                steps = report.steps.len(),
                "safety check complete"
            );
        }
        Err(err) => span.record_error(&err.to_string()),
    }
    outcome
}

fn validate(
    allocation: &[ResourceVector],
    maximum: &[ResourceVector],
    available: &[ResourceUnits],
) -> SimulationResult<()> {
    if maximum.len() != allocation.len() {
        return Err(SimulationError::MalformedResourceVector {
            vector: "maximum".into(),
            expected: allocation.len(),
            actual: maximum.len(),
        });
    }
    for (name, rows) in [("allocation", allocation), ("maximum", maximum)] {
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != RESOURCE_TYPES) {
            return Err(SimulationError::malformed_vector(format!("{}[{}]", name, i), row.len()));
        }
    }
    if available.len() != RESOURCE_TYPES {
        return Err(SimulationError::malformed_vector("available", available.len()));
    }

    for (i, (m, a)) in maximum.iter().zip(allocation).enumerate() {
        if m[0].checked_sub(a[0]).is_none() {
            return Err(SimulationError::InvalidInput(
                format!("need of process {} overflows: maximum {} minus allocation {}", i, m[0], a[0]).into(),
            ));
        }
    }

    // Any subset of allocations may be released, so bound both extremes of the work pool
    let (gains, losses) = allocation.iter().map(|a| a[0]).fold(
        (Some(available[0]), Some(available[0])),
        |(hi, lo), units| {
            if units >= 0 {
                (hi.and_then(|h| h.checked_add(units)), lo)
            } else {
                (hi, lo.and_then(|l| l.checked_add(units)))
            }
        },
    );
    if gains.is_none() || losses.is_none() {
        return Err(SimulationError::InvalidInput(
            "available plus released allocations overflows the work pool".into(),
        ));
    }
    Ok(())
}

fn run(
    allocation: &[ResourceVector],
    maximum: &[ResourceVector],
    available: &[ResourceUnits],
) -> SafetyReport {
    let n = allocation.len();
    let need: Vec<ResourceVector> = maximum
        .iter()
        .zip(allocation)
        .map(|(m, a)| vec![m[0] - a[0]])
        .collect();

    for (i, row) in need.iter().enumerate() {
        if row[0] < 0 {
            warn!(process = i, need = row[0], "maximum claim below allocation; treating need as satisfiable");
        }
    }

    let mut work = available[0];
    let mut finished = vec![false; n];
    let mut sequence = Vec::with_capacity(n);
    let mut steps = Vec::new();

    let mut progressed = true;
    while progressed {
        progressed = false;
        for i in 0..n {
            if finished[i] {
                continue;
            }

            let before = work;
            let can_run = need[i][0] <= work;
            let available_after = if can_run {
                work += allocation[i][0];
                finished[i] = true;
                sequence.push(i);
                progressed = true;
                Some(vec![work])
            } else {
                None
            };

            debug!(process = i, need = need[i][0], work = before, can_run, "scanned");
            steps.push(SafetyStep {
                process: i,
                need: need[i].clone(),
                allocation: allocation[i].clone(),
                available_before: vec![before],
                can_run,
                available_after,
            });
        }
    }

    SafetyReport {
        steps,
        is_safe: finished.iter().all(|&f| f),
        sequence,
        need,
    }
}
