/*!
 * Page Replacement Tests
 * Policy scenarios, step traces, and Bélády's anomaly
 */

use osviz_core::paging::{simulate, simulate_paging, PagingPolicy};
use osviz_core::{PageId, SimulationError};
use pretty_assertions::assert_eq;

const SHORT: [PageId; 6] = [1, 2, 3, 1, 2, 4];
const CLASSIC: [PageId; 20] = [7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2, 1, 2, 0, 1, 7, 0, 1];

#[test]
fn test_short_string_all_policies() {
    let fifo = simulate_paging(&SHORT, 3, "FIFO").unwrap();
    let lru = simulate_paging(&SHORT, 3, "LRU").unwrap();
    let optimal = simulate_paging(&SHORT, 3, "Optimal").unwrap();

    for result in [&fifo, &lru, &optimal] {
        assert_eq!(result.fault_count, 4);
        assert_eq!(result.hit_count, 2);
    }
    assert_eq!(fifo.final_frames(), &[Some(4), Some(2), Some(3)]);
    assert_eq!(lru.final_frames(), &[Some(1), Some(2), Some(4)]);
    assert_eq!(optimal.final_frames(), &[Some(4), Some(2), Some(3)]);
}

#[test]
fn test_classic_reference_string_fault_counts() {
    assert_eq!(simulate(&CLASSIC, 3, PagingPolicy::Fifo).unwrap().fault_count, 15);
    assert_eq!(simulate(&CLASSIC, 3, PagingPolicy::Lru).unwrap().fault_count, 12);
    assert_eq!(simulate(&CLASSIC, 3, PagingPolicy::Optimal).unwrap().fault_count, 9);
}

#[test]
fn test_fifo_belady_anomaly() {
    let refs: [PageId; 12] = [1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5];
    let three = simulate(&refs, 3, PagingPolicy::Fifo).unwrap();
    let four = simulate(&refs, 4, PagingPolicy::Fifo).unwrap();
    assert_eq!(three.fault_count, 9);
    assert_eq!(four.fault_count, 10);
}

#[test]
fn test_hits_never_move_pages() {
    for policy in PagingPolicy::ALL {
        let result = simulate(&CLASSIC, 3, policy).unwrap();
        for pair in result.steps.windows(2) {
            if !pair[1].page_fault {
                assert_eq!(pair[0].frames, pair[1].frames, "{} moved a page on a hit", policy);
            }
        }
    }
}

#[test]
fn test_step_trace_shape() {
    let result = simulate(&SHORT, 5, PagingPolicy::Lru).unwrap();
    assert_eq!(result.steps.len(), SHORT.len());
    for (t, step) in result.steps.iter().enumerate() {
        assert_eq!(step.time, t);
        assert_eq!(step.reference, SHORT[t]);
        assert_eq!(step.frames.len(), 5);
    }
    // Four distinct pages never fill the fifth frame
    assert_eq!(result.final_frames()[3], Some(4));
    assert_eq!(result.final_frames()[4], None);
    assert!(result.steps.iter().all(|s| s.evicted.is_none()));
}

#[test]
fn test_single_frame() {
    let result = simulate(&[1, 1, 2, 1], 1, PagingPolicy::Optimal).unwrap();
    assert_eq!(result.fault_count, 3);
    assert_eq!(result.steps[2].evicted, Some(1));
    assert_eq!(result.steps[3].evicted, Some(2));
}

#[test]
fn test_input_errors() {
    assert_eq!(
        simulate_paging(&SHORT, 0, "lru").unwrap_err(),
        SimulationError::InvalidFrameCount(0)
    );
    assert_eq!(
        simulate_paging(&[], 3, "fifo").unwrap_err(),
        SimulationError::EmptyReferenceString
    );
    let err = simulate_paging(&SHORT, 3, "mru").unwrap_err();
    assert_eq!(err.to_string(), "Unknown paging policy: mru");
}

#[test]
fn test_result_json_uses_null_for_empty_frames() {
    let result = simulate(&[3], 2, PagingPolicy::Fifo).unwrap();
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["policy"], "fifo");
    assert_eq!(json["steps"][0]["frames"], serde_json::json!([3, null]));
}
