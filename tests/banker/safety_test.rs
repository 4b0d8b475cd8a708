/*!
 * Banker Safety Tests
 * Safe/unsafe verdicts, step traces, and malformed input
 */

use osviz_core::banker::check_safety;
use osviz_core::core::{ResourceUnits, ResourceVector};
use osviz_core::SimulationError;
use pretty_assertions::assert_eq;

fn column(values: &[ResourceUnits]) -> Vec<ResourceVector> {
    values.iter().map(|&v| vec![v]).collect()
}

#[test]
fn test_textbook_safe_state() {
    let allocation = column(&[1, 2, 2]);
    let maximum = column(&[3, 4, 2]);
    let report = check_safety(&allocation, &maximum, &[1]).unwrap();

    assert!(report.is_safe);
    assert_eq!(report.sequence, vec![2, 0, 1]);
    assert_eq!(report.need, column(&[2, 2, 0]));

    // Pass 1: P0 and P1 blocked, P2 runs. Pass 2: P0 and P1 run.
    let trace: Vec<(usize, bool, ResourceUnits)> = report
        .steps
        .iter()
        .map(|s| (s.process, s.can_run, s.available_before[0]))
        .collect();
    assert_eq!(
        trace,
        vec![(0, false, 1), (1, false, 1), (2, true, 1), (0, true, 3), (1, true, 4)]
    );
    assert_eq!(report.steps[4].available_after, Some(vec![6]));
}

#[test]
fn test_unsafe_state_reports_partial_sequence() {
    let allocation = column(&[1, 3, 2]);
    let maximum = column(&[2, 9, 9]);
    let report = check_safety(&allocation, &maximum, &[1]).unwrap();

    assert!(!report.is_safe);
    assert_eq!(report.sequence, vec![0]);
    assert_eq!(report.blocked(), vec![1, 2]);
    // Pass 1 scans all three, pass 2 scans the two blocked processes and stops
    assert_eq!(report.steps.len(), 5);
}

#[test]
fn test_replaying_safe_sequence_never_overdraws() {
    let allocation = column(&[0, 1, 2, 3, 1]);
    let maximum = column(&[7, 3, 4, 4, 2]);
    let available = [2];
    let report = check_safety(&allocation, &maximum, &available).unwrap();
    assert!(report.is_safe);

    let mut work = available[0];
    for &i in &report.sequence {
        assert!(report.need[i][0] <= work);
        work += allocation[i][0];
        assert!(work >= 0);
    }
}

#[test]
fn test_malformed_shapes_rejected() {
    let err = check_safety(&[vec![1, 0]], &[vec![2, 0]], &[1]).unwrap_err();
    assert!(matches!(err, SimulationError::MalformedResourceVector { actual: 2, .. }));

    let err = check_safety(&column(&[1]), &column(&[2]), &[]).unwrap_err();
    assert_eq!(err.to_string(), "Malformed resource vector available: expected length 1, got 0");
}

#[test]
fn test_report_serializes_without_empty_after() {
    let report = check_safety(&column(&[1]), &column(&[5]), &[0]).unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["is_safe"], false);
    assert!(json["steps"][0].get("available_after").is_none());
}
