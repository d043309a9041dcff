//! Integration tests for the minimum-level gate.

use logging::{Level, Logger};
use proptest::prelude::*;
use test_support::CaptureBuffer;

fn plain_logger() -> (Logger, CaptureBuffer) {
    let logger = Logger::new();
    let capture = CaptureBuffer::new();
    logger.set_writer(capture.clone());
    logger.disable_color();
    (logger, capture)
}

fn level_strategy() -> impl Strategy<Value = Level> {
    proptest::sample::select(Level::ALL.to_vec())
}

proptest! {
    #[test]
    fn output_appears_iff_level_reaches_minimum(minimum in level_strategy(), level in level_strategy()) {
        let (logger, capture) = plain_logger();
        logger.set_minimum_level(minimum);
        logger.log(level, &[&"line\n"]);

        let expected = level == Level::Always || (minimum != Level::Always && level >= minimum);
        prop_assert_eq!(!capture.is_empty(), expected);
        prop_assert_eq!(logger.enabled(level), expected);
    }

    #[test]
    fn always_entry_point_ignores_minimum(minimum in level_strategy()) {
        let (logger, capture) = plain_logger();
        logger.set_minimum_level(minimum);
        logger.always(&[&"always\n"]);
        prop_assert_eq!(capture.contents(), "always\n");
    }
}

/// Lowering the minimum again restores output.
#[test]
fn lowering_minimum_restores_output() {
    let (logger, capture) = plain_logger();
    logger.set_minimum_level(Level::Critical);
    logger.warn(&[&"dropped\n"]);
    assert!(capture.is_empty());

    logger.set_minimum_level(Level::Warn);
    logger.warn(&[&"kept\n"]);
    assert_eq!(capture.contents(), "[WARNING] kept\n");
}

/// Every severity uses its own default label.
#[test]
fn default_labels_per_level() {
    let (logger, capture) = plain_logger();
    logger.set_minimum_level(Level::Debug);

    logger.debug(&[&"1\n"]);
    logger.info(&[&"2\n"]);
    logger.warn(&[&"3\n"]);
    logger.error(&[&"4\n"]);
    logger.critical(&[&"5\n"]);
    logger.fatal(&[&"6\n"]);

    assert_eq!(
        capture.lines(),
        vec![
            "[DEBUG] 1",
            "[INFO] 2",
            "[WARNING] 3",
            "[ERROR] 4",
            "[CRITICAL] 5",
            "[FATAL] 6",
        ]
    );
}

/// Filtered calls do not touch the current-severity register.
#[test]
fn filtered_call_has_no_side_effect() {
    let (logger, _capture) = plain_logger();
    logger.error(&[&"x"]);
    logger.debug(&[&"y"]);
    assert_eq!(logger.current_level(), Level::Error);
}

/// Level names parse case-insensitively and round-trip through Display.
#[test]
fn level_names_round_trip() {
    for level in Level::ALL {
        let parsed: Level = level.to_string().to_uppercase().parse().expect("known level");
        assert_eq!(parsed, level);
    }
}
