//! Timer operations of [`Logger`].

use std::time::{Duration, Instant};

use super::Logger;
use crate::levels::Level;
use crate::timer::{DurationReport, TimeUnit};

impl Logger {
    /// Starts (or restarts) the timer `label` and returns the label.
    pub fn start_timer(&self, label: impl Into<String>) -> String {
        let label = label.into();
        let started = Instant::now();
        self.state
            .lock()
            .borrow_mut()
            .timers
            .start(label.clone(), started);
        label
    }

    /// Stops the timer `label` and returns its elapsed time.
    ///
    /// An unknown label is reported at [`Level::Error`] and yields `None`.
    pub fn end_timer(&self, label: &str) -> Option<Duration> {
        let now = Instant::now();
        let guard = self.state.lock();
        let elapsed = guard.borrow_mut().timers.end(label, now);
        if elapsed.is_none() {
            self.report_missing_timer(label);
        }
        elapsed
    }

    /// Returns the elapsed time of the timer `label` and keeps it running.
    ///
    /// An unknown label is reported at [`Level::Error`] and yields `None`.
    pub fn peek_timer(&self, label: &str) -> Option<Duration> {
        let now = Instant::now();
        let guard = self.state.lock();
        let elapsed = guard.borrow().timers.peek(label, now);
        if elapsed.is_none() {
            self.report_missing_timer(label);
        }
        elapsed
    }

    /// [`Logger::end_timer`] truncated to `unit`.
    pub fn end_timer_in(&self, label: &str, unit: TimeUnit) -> Option<u128> {
        self.end_timer(label).map(|elapsed| unit.convert(elapsed))
    }

    /// [`Logger::peek_timer`] truncated to `unit`.
    pub fn peek_timer_in(&self, label: &str, unit: TimeUnit) -> Option<u128> {
        self.peek_timer(label).map(|elapsed| unit.convert(elapsed))
    }

    /// Reports whether the timer `label` is running.
    #[must_use]
    pub fn timer_running(&self, label: &str) -> bool {
        self.state.lock().borrow().timers.contains(label)
    }

    /// Number of running timers.
    #[must_use]
    pub fn running_timers(&self) -> usize {
        self.state.lock().borrow().timers.len()
    }

    /// Stops every running timer without reporting anything.
    pub fn clear_timers(&self) {
        self.state.lock().borrow_mut().timers.clear();
    }

    /// Stops the timer `label` and logs its elapsed time as described by `report`.
    ///
    /// Returns the printed value, or `None` when the label was unknown (the
    /// miss itself has already been reported).
    pub fn log_duration(&self, label: &str, report: &DurationReport) -> Option<u128> {
        let value = report.report_unit().convert(self.end_timer(label)?);
        self.log_report(label, report, value);
        Some(value)
    }

    /// Like [`Logger::log_duration`] but keeps the timer running.
    pub fn log_duration_persistent(&self, label: &str, report: &DurationReport) -> Option<u128> {
        let value = report.report_unit().convert(self.peek_timer(label)?);
        self.log_report(label, report, value);
        Some(value)
    }

    fn log_report(&self, label: &str, report: &DurationReport, value: u128) {
        let prefix = report.prefix_for(label);
        self.emit(
            report.report_level(),
            true,
            &[&prefix, &value, &report.suffix_text(), &"\n"],
        );
    }

    fn report_missing_timer(&self, label: &str) {
        self.emit(Level::Error, true, &[&"Label ", &label, &" not found!\n"]);
    }
}
