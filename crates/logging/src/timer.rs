//! crates/logging/src/timer.rs
//! Named timers measuring elapsed monotonic time.

use std::borrow::Cow;
use std::time::{Duration, Instant};

use rustc_hash::FxHashMap;

use crate::levels::Level;

/// Unit a measured duration is truncated to.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    /// Nanoseconds (`ns`).
    Nanoseconds,
    /// Microseconds (`us`).
    Microseconds,
    /// Milliseconds (`ms`).
    #[default]
    Milliseconds,
    /// Seconds (`s`).
    Seconds,
    /// Hours (`h`).
    Hours,
}

impl TimeUnit {
    /// Short unit name appended after a printed duration.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Nanoseconds => "ns",
            Self::Microseconds => "us",
            Self::Milliseconds => "ms",
            Self::Seconds => "s",
            Self::Hours => "h",
        }
    }

    /// Number of nanoseconds in one unit.
    #[must_use]
    pub const fn nanos_per_unit(self) -> u128 {
        match self {
            Self::Nanoseconds => 1,
            Self::Microseconds => 1_000,
            Self::Milliseconds => 1_000_000,
            Self::Seconds => 1_000_000_000,
            Self::Hours => 3_600_000_000_000,
        }
    }

    /// Converts `duration` to this unit, truncating toward zero.
    #[must_use]
    pub const fn convert(self, duration: Duration) -> u128 {
        duration.as_nanos() / self.nanos_per_unit()
    }
}

/// Mapping from timer label to its start instant.
///
/// Labels are unique: starting an existing label restarts it.
#[derive(Clone, Debug, Default)]
pub struct TimerRegistry {
    starts: FxHashMap<String, Instant>,
}

impl TimerRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `started` against `label`, replacing any running timer of that name.
    pub fn start(&mut self, label: impl Into<String>, started: Instant) {
        self.starts.insert(label.into(), started);
    }

    /// Removes `label` and returns the time elapsed between its start and `now`.
    pub fn end(&mut self, label: &str, now: Instant) -> Option<Duration> {
        self.starts
            .remove(label)
            .map(|started| now.saturating_duration_since(started))
    }

    /// Returns the time elapsed between the start of `label` and `now`, keeping the timer.
    #[must_use]
    pub fn peek(&self, label: &str, now: Instant) -> Option<Duration> {
        self.starts
            .get(label)
            .map(|started| now.saturating_duration_since(*started))
    }

    /// Reports whether a timer named `label` is running.
    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.starts.contains_key(label)
    }

    /// Number of running timers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.starts.len()
    }

    /// Returns `true` when no timer is running.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }

    /// Drops every running timer.
    pub fn clear(&mut self) {
        self.starts.clear();
    }
}

/// How a measured duration is printed by
/// [`Logger::log_duration`](crate::Logger::log_duration) and
/// [`Logger::log_duration_persistent`](crate::Logger::log_duration_persistent).
///
/// The line is `<prefix><value><suffix>` followed by a newline. Without an
/// explicit prefix the prefix is `"<label>: "`; without an explicit suffix it
/// is the unit suffix such as `ms`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DurationReport {
    level: Level,
    unit: TimeUnit,
    prefix: Option<String>,
    suffix: Option<String>,
}

impl DurationReport {
    /// Report at [`Level::Always`] in milliseconds with default prefix and suffix.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            level: Level::Always,
            unit: TimeUnit::Milliseconds,
            prefix: None,
            suffix: None,
        }
    }

    /// Sets the level the line is logged at.
    #[must_use]
    pub const fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Sets the unit the duration is truncated to.
    #[must_use]
    pub const fn unit(mut self, unit: TimeUnit) -> Self {
        self.unit = unit;
        self
    }

    /// Sets the text printed before the value. An empty prefix selects the default.
    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Sets the text printed between the value and the newline.
    #[must_use]
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    /// Level the line is logged at.
    #[must_use]
    pub const fn report_level(&self) -> Level {
        self.level
    }

    /// Unit the duration is truncated to.
    #[must_use]
    pub const fn report_unit(&self) -> TimeUnit {
        self.unit
    }

    pub(crate) fn prefix_for<'a>(&'a self, label: &str) -> Cow<'a, str> {
        match self.prefix.as_deref() {
            Some(prefix) if !prefix.is_empty() => Cow::Borrowed(prefix),
            _ => Cow::Owned(format!("{label}: ")),
        }
    }

    pub(crate) fn suffix_text(&self) -> &str {
        self.suffix.as_deref().unwrap_or(self.unit.suffix())
    }
}

impl Default for DurationReport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
