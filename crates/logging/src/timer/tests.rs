use super::*;

fn at(base: Instant, millis: u64) -> Instant {
    base + Duration::from_millis(millis)
}

#[test]
fn unit_suffixes() {
    assert_eq!(TimeUnit::Nanoseconds.suffix(), "ns");
    assert_eq!(TimeUnit::Microseconds.suffix(), "us");
    assert_eq!(TimeUnit::Milliseconds.suffix(), "ms");
    assert_eq!(TimeUnit::Seconds.suffix(), "s");
    assert_eq!(TimeUnit::Hours.suffix(), "h");
}

#[test]
fn convert_truncates_instead_of_rounding() {
    let duration = Duration::from_micros(10_999);
    assert_eq!(TimeUnit::Milliseconds.convert(duration), 10);
    assert_eq!(TimeUnit::Microseconds.convert(duration), 10_999);
    assert_eq!(TimeUnit::Nanoseconds.convert(duration), 10_999_000);
    assert_eq!(TimeUnit::Seconds.convert(Duration::from_millis(1_999)), 1);
    assert_eq!(TimeUnit::Hours.convert(Duration::from_secs(7_199)), 1);
}

#[test]
fn default_unit_is_milliseconds() {
    assert_eq!(TimeUnit::default(), TimeUnit::Milliseconds);
}

#[test]
fn end_removes_timer() {
    let base = Instant::now();
    let mut timers = TimerRegistry::new();
    timers.start("load", base);

    assert_eq!(timers.end("load", at(base, 15)), Some(Duration::from_millis(15)));
    assert!(!timers.contains("load"));
    assert_eq!(timers.end("load", at(base, 20)), None);
}

#[test]
fn peek_keeps_timer() {
    let base = Instant::now();
    let mut timers = TimerRegistry::new();
    timers.start("load", base);

    assert_eq!(timers.peek("load", at(base, 5)), Some(Duration::from_millis(5)));
    assert!(timers.contains("load"));
    assert_eq!(timers.end("load", at(base, 8)), Some(Duration::from_millis(8)));
}

#[test]
fn restart_overwrites_silently() {
    let base = Instant::now();
    let mut timers = TimerRegistry::new();
    timers.start("t", base);
    timers.start("t", at(base, 10));

    assert_eq!(timers.len(), 1);
    assert_eq!(timers.peek("t", at(base, 12)), Some(Duration::from_millis(2)));
}

#[test]
fn elapsed_never_negative() {
    let base = Instant::now();
    let mut timers = TimerRegistry::new();
    timers.start("future", at(base, 50));
    assert_eq!(timers.end("future", base), Some(Duration::ZERO));
}

#[test]
fn missing_label_yields_none() {
    let timers = TimerRegistry::new();
    assert!(timers.is_empty());
    assert_eq!(timers.peek("absent", Instant::now()), None);
}

#[test]
fn clear_drops_all_timers() {
    let mut timers = TimerRegistry::new();
    timers.start("a", Instant::now());
    timers.start("b", Instant::now());
    timers.clear();
    assert!(timers.is_empty());
}

#[test]
fn report_defaults() {
    let report = DurationReport::default();
    assert_eq!(report.report_level(), Level::Always);
    assert_eq!(report.report_unit(), TimeUnit::Milliseconds);
    assert_eq!(report.prefix_for("load"), "load: ");
    assert_eq!(report.suffix_text(), "ms");
}

#[test]
fn report_default_suffix_follows_unit() {
    let report = DurationReport::new().unit(TimeUnit::Microseconds);
    assert_eq!(report.suffix_text(), "us");
}

#[test]
fn report_custom_prefix_and_suffix() {
    let report = DurationReport::new()
        .level(Level::Info)
        .prefix("took ")
        .suffix(" millis");
    assert_eq!(report.report_level(), Level::Info);
    assert_eq!(report.prefix_for("load"), "took ");
    assert_eq!(report.suffix_text(), " millis");
}

#[test]
fn report_empty_prefix_falls_back_to_label() {
    let report = DurationReport::new().prefix("");
    assert_eq!(report.prefix_for("parse"), "parse: ");
}
