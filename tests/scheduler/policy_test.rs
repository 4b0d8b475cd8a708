/*!
 * Scheduler Policy Tests
 * Dispatch, validation, and cross-policy invariants
 */

use osviz_core::scheduler::{run_schedule, ProcessRecord, SchedulingPolicy};
use osviz_core::SimulationError;
use pretty_assertions::assert_eq;

fn workload() -> Vec<ProcessRecord> {
    vec![
        ProcessRecord::with_priority("P1", 0, 6, 2),
        ProcessRecord::with_priority("P2", 2, 2, 1),
        ProcessRecord::with_priority("P3", 3, 8, 4),
        ProcessRecord::with_priority("P4", 12, 3, 3),
        ProcessRecord::with_priority("P5", 30, 1, 0),
    ]
}

#[test]
fn test_every_policy_accounts_for_all_burst_time() {
    let procs = workload();
    let total_burst: u64 = procs.iter().map(|p| p.burst).sum();

    for policy in SchedulingPolicy::ALL {
        let result = run_schedule(policy, &procs, Some(3)).unwrap();
        let busy: u64 = result.timeline.iter().map(|s| s.duration()).sum();
        assert_eq!(busy, total_burst, "{} lost CPU time", policy);
        assert_eq!(result.table.len(), procs.len());
        assert_eq!(result.makespan(), 31, "{} makespan", policy);
    }
}

#[test]
fn test_timelines_are_ordered_and_disjoint() {
    for policy in SchedulingPolicy::ALL {
        let result = run_schedule(policy, &workload(), Some(2)).unwrap();
        for pair in result.timeline.windows(2) {
            assert!(pair[0].finish <= pair[1].start, "{} overlaps: {:?}", policy, pair);
            if pair[0].finish == pair[1].start {
                assert_ne!(pair[0].pid, pair[1].pid, "{} left unmerged slices", policy);
            }
        }
    }
}

#[test]
fn test_no_segment_starts_before_arrival() {
    for policy in SchedulingPolicy::ALL {
        let result = run_schedule(policy, &workload(), Some(2)).unwrap();
        for segment in &result.timeline {
            let process = result.process(&segment.pid).unwrap();
            assert!(segment.start >= process.arrival);
        }
    }
}

#[test]
fn test_idle_cpu_before_late_arrival() {
    for policy in SchedulingPolicy::ALL {
        let result = run_schedule(policy, &workload(), Some(4)).unwrap();
        let last = result.timeline.last().unwrap();
        assert_eq!((last.pid.as_str(), last.start, last.finish), ("P5", 30, 31));
    }
}

#[test]
fn test_policy_names_dispatch() {
    let procs = workload();
    let by_name = run_schedule("SRTF".parse().unwrap(), &procs, None).unwrap();
    let direct = run_schedule(SchedulingPolicy::SjfPreemptive, &procs, None).unwrap();
    assert_eq!(by_name, direct);
}

#[test]
fn test_round_robin_quantum_errors() {
    let err = run_schedule(SchedulingPolicy::RoundRobin, &workload(), Some(0)).unwrap_err();
    assert_eq!(err, SimulationError::InvalidQuantum(0));
}

#[test]
fn test_result_serializes_for_front_end() {
    let result = run_schedule(SchedulingPolicy::Fcfs, &workload()[..2], None).unwrap();
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["policy"], "fcfs");
    assert_eq!(json["timeline"][0]["pid"], "P1");
    assert_eq!(json["table"][1]["waiting_time"], 4);
    assert_eq!(json["avg_waiting_time"], 2.0);
}
