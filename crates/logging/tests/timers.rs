//! Integration tests for named timers.

use std::thread;
use std::time::Duration;

use logging::{DurationReport, Level, Logger, TimeUnit};
use proptest::prelude::*;
use test_support::CaptureBuffer;

fn plain_logger() -> (Logger, CaptureBuffer) {
    let logger = Logger::new();
    let capture = CaptureBuffer::new();
    logger.set_writer(capture.clone());
    logger.disable_color();
    (logger, capture)
}

/// A ten millisecond sleep reads back as roughly ten milliseconds.
#[test]
fn sleep_is_measured_in_milliseconds() {
    let (logger, capture) = plain_logger();
    logger.start_timer("t");
    thread::sleep(Duration::from_millis(10));
    let millis = logger
        .end_timer_in("t", TimeUnit::Milliseconds)
        .expect("timer was started");

    assert!(millis >= 10, "measured {millis}ms");
    assert!(millis < 1_000, "measured {millis}ms");
    assert!(capture.is_empty());
}

/// A second end reports a miss exactly once.
#[test]
fn second_end_reports_miss() {
    let (logger, capture) = plain_logger();
    logger.start_timer("job");
    assert!(logger.end_timer("job").is_some());
    assert!(logger.end_timer("job").is_none());
    assert_eq!(capture.lines(), vec!["[ERROR] Label job not found!"]);
}

/// Restarting a timer resets its start point.
#[test]
fn restart_resets_start() {
    let (logger, _capture) = plain_logger();
    logger.start_timer("r");
    thread::sleep(Duration::from_millis(20));
    logger.start_timer("r");
    let elapsed = logger.peek_timer("r").expect("timer running");
    assert!(elapsed < Duration::from_millis(20));
    assert_eq!(logger.running_timers(), 1);
}

/// Duration lines obey a custom level gate.
#[test]
fn duration_report_respects_level() {
    let (logger, capture) = plain_logger();
    logger.set_minimum_level(Level::Error);
    logger.start_timer("quiet");
    let report = DurationReport::new().level(Level::Info);
    assert!(logger.log_duration("quiet", &report).is_some());
    assert!(capture.is_empty());
}

/// Timers on different labels work from many threads at once.
#[test]
fn concurrent_timers_on_distinct_labels() {
    let (logger, capture) = plain_logger();
    thread::scope(|scope| {
        for worker in 0..8 {
            let logger = &logger;
            scope.spawn(move || {
                let label = logger.start_timer(format!("worker-{worker}"));
                assert!(logger.peek_timer(&label).is_some());
                assert!(logger.end_timer(&label).is_some());
            });
        }
    });
    assert_eq!(logger.running_timers(), 0);
    assert!(capture.is_empty());
}

/// Racing ends on one label succeed exactly once.
#[test]
fn racing_ends_succeed_once() {
    let (logger, capture) = plain_logger();
    logger.start_timer("shared");
    let successes = thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| logger.end_timer("shared").is_some()))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("worker panicked"))
            .filter(|ended| *ended)
            .count()
    });
    assert_eq!(successes, 1);
    assert_eq!(capture.lines().len(), 3);
}

proptest! {
    #[test]
    fn conversion_truncates(nanos in 0u64..=u64::MAX / 2) {
        let duration = Duration::from_nanos(nanos);
        for unit in [
            TimeUnit::Nanoseconds,
            TimeUnit::Microseconds,
            TimeUnit::Milliseconds,
            TimeUnit::Seconds,
            TimeUnit::Hours,
        ] {
            let value = unit.convert(duration);
            let per_unit = unit.nanos_per_unit();
            prop_assert!(value * per_unit <= u128::from(nanos));
            prop_assert!(u128::from(nanos) < (value + 1) * per_unit);
        }
    }
}
