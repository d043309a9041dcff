//! End-to-end scenarios against isolated loggers.

use std::thread;
use std::time::Duration;

use test_support::{CaptureBuffer, log_dir};
use ticklog::{Level, Logger, LoggerConfig, TargetKind, TimeUnit};

fn plain_logger() -> (Logger, CaptureBuffer) {
    let logger = Logger::new();
    let capture = CaptureBuffer::new();
    logger.set_writer(capture.clone());
    logger.disable_color();
    (logger, capture)
}

#[test]
fn warning_debug_and_always() {
    let (logger, capture) = plain_logger();
    ticklog::warn!(in logger; "x=", 5, "\n");
    ticklog::debug!(in logger; "hidden\n");
    ticklog::log!(in logger; "always\n");
    assert_eq!(capture.contents(), "[WARNING] x=5\nalways\n");
}

#[test]
fn ten_millisecond_timer() {
    let (logger, capture) = plain_logger();
    logger.start_timer("t");
    thread::sleep(Duration::from_millis(10));
    let millis = logger
        .end_timer_in("t", TimeUnit::Milliseconds)
        .expect("never the invalid sentinel");
    assert!(millis >= 9, "measured {millis}ms");
    assert!(millis < 1_000, "measured {millis}ms");
    assert!(capture.is_empty());
}

#[test]
fn unknown_timer_yields_sentinel_and_one_error_line() {
    let (logger, capture) = plain_logger();
    assert_eq!(logger.peek_timer("never"), None);
    assert_eq!(logger.end_timer("never"), None);
    assert_eq!(
        capture.lines(),
        vec![
            "[ERROR] Label never not found!",
            "[ERROR] Label never not found!",
        ]
    );
}

#[test]
fn file_switch_and_back_to_console() {
    let dir = log_dir();
    let logger = Logger::new();
    let path = logger.open_file(dir.path().join("a/b"), "run.log").expect("opened");
    logger.info(&[&"persisted\n"]);
    logger.close_file();

    assert_eq!(std::fs::read_to_string(path).unwrap(), "[INFO] persisted\n");
    assert_eq!(logger.target(), TargetKind::Console);
    assert!(!logger.color_enabled());
}

#[test]
fn custom_writer_survives_file_close() {
    let dir = log_dir();
    let (logger, capture) = plain_logger();
    logger.open_default_file(dir.path()).expect("opened");
    logger.set_writer(capture.clone());
    logger.close_file();

    assert_eq!(logger.target(), TargetKind::Writer);
    logger.info(&[&"still captured\n"]);
    assert_eq!(capture.contents(), "[INFO] still captured\n");
}

#[test]
fn configuration_from_lookup() {
    let config = LoggerConfig::from_lookup(|name| match name {
        "TICKLOG_LEVEL" => Some("critical".to_owned()),
        "NO_COLOR" => Some("1".to_owned()),
        _ => None,
    })
    .expect("valid environment");

    let logger = Logger::from_config(&config).expect("no file configured");
    let capture = CaptureBuffer::new();
    logger.set_writer(capture.clone());

    logger.error(&[&"dropped\n"]);
    logger.critical(&[&"kept\n"]);
    assert_eq!(logger.minimum_level(), Level::Critical);
    assert_eq!(capture.contents(), "[CRITICAL] kept\n");
}
