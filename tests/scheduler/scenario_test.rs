/*!
 * Scheduler Scenario Tests
 * Worked textbook examples for every policy
 */

use osviz_core::scheduler::{
    fcfs, priority, priority_preemptive, round_robin, run_schedule, sjf, sjf_preemptive,
    ProcessRecord, ScheduleResult, SchedulingPolicy, TimelineSegment,
};
use osviz_core::Time;
use pretty_assertions::assert_eq;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-3
}

fn segments(result: &ScheduleResult) -> Vec<(String, Time, Time)> {
    result
        .timeline
        .iter()
        .map(|s| (s.pid.to_string(), s.start, s.finish))
        .collect()
}

fn seg(pid: &str, start: Time, finish: Time) -> (String, Time, Time) {
    (pid.to_string(), start, finish)
}

fn three_processes() -> Vec<ProcessRecord> {
    vec![
        ProcessRecord::new("P1", 0, 4),
        ProcessRecord::new("P2", 1, 3),
        ProcessRecord::new("P3", 2, 1),
    ]
}

#[test]
fn test_fcfs_textbook_example() {
    let result = fcfs(&three_processes()).unwrap();

    assert_eq!(
        result.timeline,
        vec![
            TimelineSegment::new("P1", 0, 4),
            TimelineSegment::new("P2", 4, 7),
            TimelineSegment::new("P3", 7, 8),
        ]
    );
    let waits: Vec<Time> = result.table.iter().map(|p| p.waiting_time).collect();
    assert_eq!(waits, vec![0, 3, 5]);
    assert!(close(result.avg_waiting_time, 2.667));
    assert!(close(result.avg_turnaround_time, 5.333));
}

#[test]
fn test_sjf_same_input() {
    let result = sjf(&three_processes()).unwrap();
    assert_eq!(
        segments(&result),
        vec![seg("P1", 0, 4), seg("P3", 4, 5), seg("P2", 5, 8)]
    );
    // Table stays in input order for selection-based policies
    let ids: Vec<&str> = result.table.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["P1", "P2", "P3"]);
}

#[test]
fn test_srtf_same_input() {
    let result = sjf_preemptive(&three_processes()).unwrap();
    // P3 arrives at 2 with burst 1 while P1 has 2 left: P3 preempts
    assert_eq!(
        segments(&result),
        vec![seg("P1", 0, 2), seg("P3", 2, 3), seg("P1", 3, 5), seg("P2", 5, 8)]
    );
    assert_eq!(result.process("P2").unwrap().waiting_time, 4);
}

#[test]
fn test_priority_modes_differ() {
    let procs = vec![
        ProcessRecord::with_priority("P1", 0, 5, 3),
        ProcessRecord::with_priority("P2", 1, 3, 1),
        ProcessRecord::with_priority("P3", 2, 2, 2),
    ];

    let non_preemptive = priority(&procs).unwrap();
    assert_eq!(
        segments(&non_preemptive),
        vec![seg("P1", 0, 5), seg("P2", 5, 8), seg("P3", 8, 10)]
    );

    let preemptive = priority_preemptive(&procs).unwrap();
    assert_eq!(
        segments(&preemptive),
        vec![seg("P1", 0, 1), seg("P2", 1, 4), seg("P3", 4, 6), seg("P1", 6, 10)]
    );
    assert_eq!(preemptive.process("P1").unwrap().turnaround_time, 10);
    assert_eq!(preemptive.process("P1").unwrap().waiting_time, 5);
}

#[test]
fn test_priority_tie_breaks_on_input_index() {
    let procs = vec![
        ProcessRecord::with_priority("A", 0, 2, 1),
        ProcessRecord::with_priority("B", 0, 2, 1),
    ];
    let result = priority_preemptive(&procs).unwrap();
    assert_eq!(segments(&result), vec![seg("A", 0, 2), seg("B", 2, 4)]);
}

#[test]
fn test_round_robin_new_arrival_queues_ahead_of_requeue() {
    let procs = vec![
        ProcessRecord::new("P1", 0, 4),
        ProcessRecord::new("P2", 2, 2),
    ];
    let result = round_robin(&procs, 2).unwrap();
    // P2 arrives exactly when P1's first slice ends and runs before P1 resumes
    assert_eq!(
        segments(&result),
        vec![seg("P1", 0, 2), seg("P2", 2, 4), seg("P1", 4, 6)]
    );
}

#[test]
fn test_round_robin_late_first_arrival() {
    let procs = vec![
        ProcessRecord::new("late", 4, 1),
        ProcessRecord::new("later", 9, 2),
    ];
    let result = round_robin(&procs, 3).unwrap();
    assert_eq!(segments(&result), vec![seg("late", 4, 5), seg("later", 9, 11)]);
    assert_eq!(result.avg_waiting_time, 0.0);
}

#[test]
fn test_caller_records_untouched() {
    let procs = three_processes();
    let before = procs.clone();
    for policy in SchedulingPolicy::ALL {
        run_schedule(policy, &procs, Some(2)).unwrap();
    }
    assert_eq!(procs, before);
    assert!(procs.iter().all(|p| p.waiting_time == 0 && p.turnaround_time == 0));
}
