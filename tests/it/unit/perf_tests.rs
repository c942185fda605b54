//! Unit tests for perf module.

use pillboard::perf::{PerfMonitor, ScopedTimer, measure};

#[test]
fn test_time_returns_closure_result() {
    let mut monitor = PerfMonitor::new();
    let value = monitor.time("sum", || (1..=10).sum::<u32>());
    assert_eq!(value, 55);

    let stats = monitor.get_operation_stats("sum").unwrap();
    assert_eq!(stats.count(), 1);
    assert!(stats.average() >= 0.0);
}

#[test]
fn test_operation_stats_recording() {
    let mut monitor = PerfMonitor::new();

    monitor.record_operation("test_op", 5.0);
    monitor.record_operation("test_op", 10.0);
    monitor.record_operation("test_op", 15.0);

    let stats = monitor.get_operation_stats("test_op").unwrap();

    // Average should be (5 + 10 + 15) / 3 = 10
    assert!((stats.average() - 10.0).abs() < 0.001);
    assert_eq!(stats.min(), 5.0);
    assert_eq!(stats.max(), 15.0);
}

#[test]
fn test_operations_tracked_separately() {
    let mut monitor = PerfMonitor::new();
    monitor.record_operation("pointer_up", 1.0);
    monitor.record_operation("pointer_up", 3.0);
    monitor.record_operation("split", 2.0);

    assert_eq!(monitor.get_operation_stats("pointer_up").unwrap().count(), 2);
    assert_eq!(monitor.get_operation_stats("split").unwrap().count(), 1);
    assert!(monitor.get_operation_stats("pointer_down").is_none());
}

#[test]
fn test_scoped_timer_creation() {
    // High threshold, so dropping it never warns
    let timer = ScopedTimer::new("test_op", 1000.0);
    assert!(timer.elapsed_ms() >= 0.0);
}

#[test]
fn test_measure() {
    let (result, ms) = measure(|| "done");
    assert_eq!(result, "done");
    assert!(ms >= 0.0);
}
