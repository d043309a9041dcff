//! crates/logging/src/levels.rs
//! Severity levels and the per-level label/color registry.

use std::fmt;
use std::str::FromStr;

/// Severity of a log call.
///
/// The six severities from [`Debug`](Self::Debug) to [`Fatal`](Self::Fatal)
/// are totally ordered. [`Always`](Self::Always) sorts last but is not a
/// severity: it marks output that bypasses the minimum-level gate.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Level {
    /// Diagnostic detail.
    Debug,
    /// Normal operation.
    #[default]
    Info,
    /// Something unexpected that does not stop the program.
    Warn,
    /// A failed operation.
    Error,
    /// A failure affecting a whole subsystem.
    Critical,
    /// A failure the program cannot recover from.
    Fatal,
    /// Unconditional output, never filtered.
    Always,
}

impl Level {
    /// Every level, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Debug,
        Self::Info,
        Self::Warn,
        Self::Error,
        Self::Critical,
        Self::Fatal,
        Self::Always,
    ];

    /// The ordered severities, without [`Level::Always`].
    pub const SEVERITIES: [Self; 6] = [
        Self::Debug,
        Self::Info,
        Self::Warn,
        Self::Error,
        Self::Critical,
        Self::Fatal,
    ];

    /// Position of the level inside [`Level::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns `true` for the unconditional [`Level::Always`].
    #[must_use]
    pub const fn is_always(self) -> bool {
        matches!(self, Self::Always)
    }

    /// Reports whether a call at this level passes a gate set to `minimum`.
    ///
    /// [`Level::Always`] passes every gate.
    #[must_use]
    pub fn passes(self, minimum: Self) -> bool {
        self.is_always() || self >= minimum
    }

    /// Lower-case name accepted by [`Level::from_str`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Critical => "critical",
            Self::Fatal => "fatal",
            Self::Always => "always",
        }
    }

    /// Label printed inside `[...]` before a message by default.
    #[must_use]
    pub const fn default_label(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARNING",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
            Self::Fatal => "FATAL",
            Self::Always => "OUT",
        }
    }

    /// ANSI color sequence used by default.
    #[must_use]
    pub const fn default_color(self) -> &'static str {
        match self {
            // cyan
            Self::Debug => "\x1b[36m",
            // green
            Self::Info => "\x1b[32m",
            // yellow
            Self::Warn => "\x1b[33m",
            // red
            Self::Error => "\x1b[31m",
            // bold red
            Self::Critical => "\x1b[1;31m",
            // underlined bold red
            Self::Fatal => "\x1b[4;1;31m",
            // blue
            Self::Always => "\x1b[34m",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a level name is not recognised.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unknown log level '{input}'")]
pub struct ParseLevelError {
    input: String,
}

impl ParseLevelError {
    /// Returns the text that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        let level = match name.as_str() {
            "debug" => Self::Debug,
            "info" => Self::Info,
            "warn" | "warning" => Self::Warn,
            "error" => Self::Error,
            "critical" => Self::Critical,
            "fatal" => Self::Fatal,
            "always" | "out" | "log" => Self::Always,
            _ => {
                return Err(ParseLevelError {
                    input: s.to_owned(),
                });
            }
        };
        Ok(level)
    }
}

/// Display label and color escape sequence for every [`Level`].
///
/// Strings are stored verbatim; escape sequences are opaque data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelRegistry {
    labels: [String; 7],
    colors: [String; 7],
}

impl LevelRegistry {
    /// Creates a registry holding the default labels and colors.
    #[must_use]
    pub fn new() -> Self {
        Self {
            labels: Level::ALL.map(|level| level.default_label().to_owned()),
            colors: Level::ALL.map(|level| level.default_color().to_owned()),
        }
    }

    /// Returns the label for `level`.
    #[must_use]
    pub fn label(&self, level: Level) -> &str {
        &self.labels[level.index()]
    }

    /// Returns the color sequence for `level`.
    #[must_use]
    pub fn color(&self, level: Level) -> &str {
        &self.colors[level.index()]
    }

    /// Returns the color sequence for `level`, or an empty string when color is off.
    #[must_use]
    pub fn color_if(&self, level: Level, enabled: bool) -> &str {
        if enabled { self.color(level) } else { "" }
    }

    /// Replaces the label for `level`.
    pub fn set_label(&mut self, level: Level, label: impl Into<String>) {
        self.labels[level.index()] = label.into();
    }

    /// Replaces the color sequence for `level`.
    pub fn set_color(&mut self, level: Level, color: impl Into<String>) {
        self.colors[level.index()] = color.into();
    }

    /// Restores the default label and color of every level.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for LevelRegistry {
    fn default() -> Self {
        Self::new()
    }
}
