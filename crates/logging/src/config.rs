//! crates/logging/src/config.rs
//! Declarative logger configuration built from directives or the environment.

use std::collections::BTreeMap;
use std::path::PathBuf;

use logging_sink::{ConsoleStream, DEFAULT_LOG_FILE_NAME};

use crate::levels::{Level, ParseLevelError};

/// Environment variable holding the minimum level.
pub const ENV_LEVEL: &str = "TICKLOG_LEVEL";
/// Environment variable switching color on or off.
pub const ENV_COLOR: &str = "TICKLOG_COLOR";
/// Environment variable selecting `stdout` or `stderr`.
pub const ENV_CONSOLE: &str = "TICKLOG_CONSOLE";
/// Environment variable naming a log directory.
pub const ENV_FILE: &str = "TICKLOG_FILE";
/// Conventional variable disabling color when set to a non-empty value.
pub const ENV_NO_COLOR: &str = "NO_COLOR";

/// Errors raised while parsing configuration directives.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A level name could not be parsed.
    #[error(transparent)]
    InvalidLevel(#[from] ParseLevelError),
    /// A directive had no `=value` part.
    #[error("directive '{0}' is missing a value")]
    MissingValue(String),
    /// The directive key is not recognised.
    #[error("unknown configuration directive '{0}'")]
    UnknownDirective(String),
    /// An on/off switch held something else.
    #[error("invalid value '{value}' for '{key}': expected on or off")]
    InvalidSwitch {
        /// Directive key.
        key: String,
        /// Rejected value.
        value: String,
    },
    /// The console stream was neither `stdout` nor `stderr`.
    #[error("invalid console stream '{0}': expected stdout or stderr")]
    InvalidConsole(String),
}

/// Location of the log file.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogFileConfig {
    /// Directory created on demand.
    pub directory: PathBuf,
    /// File name inside `directory`.
    #[cfg_attr(feature = "serde", serde(default = "default_file_name"))]
    pub file_name: PathBuf,
}

impl LogFileConfig {
    /// Log file named [`DEFAULT_LOG_FILE_NAME`] inside `directory`.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            file_name: default_file_name(),
        }
    }

    /// Replaces the file name.
    #[must_use]
    pub fn with_file_name(mut self, file_name: impl Into<PathBuf>) -> Self {
        self.file_name = file_name.into();
        self
    }
}

fn default_file_name() -> PathBuf {
    PathBuf::from(DEFAULT_LOG_FILE_NAME)
}

/// Complete description of a logger setup.
///
/// ```
/// use logging::{Level, LoggerConfig};
///
/// let config = LoggerConfig::from_directives("level=warn, color=off, label.warn=W")?;
/// assert_eq!(config.minimum_level, Level::Warn);
/// assert!(!config.color);
/// assert_eq!(config.labels[&Level::Warn], "W");
/// # Ok::<(), logging::ConfigError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LoggerConfig {
    /// Calls below this level produce no output.
    pub minimum_level: Level,
    /// Whether console output is colored.
    pub color: bool,
    /// Console stream used when no file or writer is active.
    pub console: ConsoleStream,
    /// Log file opened when the configuration is applied.
    pub log_file: Option<LogFileConfig>,
    /// Label overrides.
    pub labels: BTreeMap<Level, String>,
    /// Color sequence overrides.
    pub colors: BTreeMap<Level, String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            minimum_level: Level::Info,
            color: true,
            console: ConsoleStream::Stdout,
            log_file: None,
            labels: BTreeMap::new(),
            colors: BTreeMap::new(),
        }
    }
}

impl LoggerConfig {
    /// Applies one `key=value` directive.
    ///
    /// Recognised keys are `level`, `color`, `console`, `file` (a directory),
    /// `file_name`, `label.<level>` and `color.<level>`. Color values may spell
    /// the escape character as `\e`, `\x1b` or `\033`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for unknown keys and malformed values; the
    /// configuration is left unchanged in that case.
    pub fn apply_directive(&mut self, directive: &str) -> Result<(), ConfigError> {
        let directive = directive.trim();
        let Some((key, value)) = directive.split_once('=') else {
            return Err(ConfigError::MissingValue(directive.to_owned()));
        };
        let key = key.trim();
        let value = value.trim();

        match key {
            "level" => self.minimum_level = value.parse()?,
            "color" => self.color = parse_switch(key, value)?,
            "console" => {
                self.console = ConsoleStream::from_name(value)
                    .ok_or_else(|| ConfigError::InvalidConsole(value.to_owned()))?;
            }
            "file" => {
                let file_name = self
                    .log_file
                    .take()
                    .map_or_else(default_file_name, |file| file.file_name);
                self.log_file = Some(LogFileConfig::new(value).with_file_name(file_name));
            }
            "file_name" => {
                let file = self
                    .log_file
                    .take()
                    .unwrap_or_else(|| LogFileConfig::new(PathBuf::new()));
                self.log_file = Some(file.with_file_name(value));
            }
            _ => {
                if let Some(level) = key.strip_prefix("label.") {
                    self.labels.insert(level.parse()?, value.to_owned());
                } else if let Some(level) = key.strip_prefix("color.") {
                    self.colors.insert(level.parse()?, unescape(value));
                } else {
                    return Err(ConfigError::UnknownDirective(key.to_owned()));
                }
            }
        }
        Ok(())
    }

    /// Builds a configuration from comma-separated directives.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] encountered.
    pub fn from_directives(directives: &str) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        for directive in directives.split(',').filter(|part| !part.trim().is_empty()) {
            config.apply_directive(directive)?;
        }
        Ok(config)
    }

    /// Builds a configuration from variables supplied by `lookup`.
    ///
    /// Reads [`ENV_LEVEL`], [`ENV_COLOR`], [`ENV_CONSOLE`] and [`ENV_FILE`].
    /// A non-empty [`ENV_NO_COLOR`] turns color off unless [`ENV_COLOR`] is set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable holds an invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if lookup(ENV_NO_COLOR).is_some_and(|value| !value.is_empty()) {
            config.color = false;
        }

        for (variable, key) in [
            (ENV_LEVEL, "level"),
            (ENV_COLOR, "color"),
            (ENV_CONSOLE, "console"),
            (ENV_FILE, "file"),
        ] {
            if let Some(value) = lookup(variable) {
                config.apply_directive(&format!("{key}={value}"))?;
            }
        }
        Ok(config)
    }

    /// Builds a configuration from the process environment.
    ///
    /// # Errors
    ///
    /// See [`LoggerConfig::from_lookup`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }
}

fn parse_switch(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Ok(true),
        "off" | "false" | "no" | "0" => Ok(false),
        _ => Err(ConfigError::InvalidSwitch {
            key: key.to_owned(),
            value: value.to_owned(),
        }),
    }
}

fn unescape(value: &str) -> String {
    value
        .replace("\\x1b", "\x1b")
        .replace("\\033", "\x1b")
        .replace("\\e", "\x1b")
}
