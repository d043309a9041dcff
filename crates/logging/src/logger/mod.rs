//! crates/logging/src/logger/mod.rs
//! The log engine: level gate, stream lock and line rendering.
//!
//! # Design
//!
//! All mutable state (sink, level registry, minimum level, current severity and
//! timers) lives in one [`State`] value behind a
//! [`parking_lot::ReentrantMutex`]. The lock is re-entrant so a call that is
//! already holding it can log again on the same thread, which is how timer
//! misses and file errors are reported. Because a re-entrant guard only hands
//! out shared references, the state sits in a [`RefCell`] and is borrowed in
//! short scopes that never span user code.
//!
//! # Invariants
//!
//! - Values are rendered to text before the state is borrowed, so a
//!   `Display` implementation may itself log through the same logger.
//! - The lock is released on every exit path, including the level gate.
//! - A log call made by the active writer while it is writing finds the
//!   state borrowed and is dropped.
//! - Write and flush errors on the active target are discarded.

mod timers;

use std::cell::RefCell;
use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};

use logging_sink::{ConsoleStream, RESET, Sink, SinkError, TargetKind};
use parking_lot::ReentrantMutex;

use crate::config::LoggerConfig;
use crate::format::Loggable;
use crate::levels::{Level, LevelRegistry};
use crate::timer::TimerRegistry;

pub(crate) struct State {
    sink: Sink,
    levels: LevelRegistry,
    minimum: Level,
    current: Level,
    timers: TimerRegistry,
}

impl State {
    fn new(sink: Sink) -> Self {
        Self {
            sink,
            levels: LevelRegistry::new(),
            minimum: Level::Info,
            current: Level::Info,
            timers: TimerRegistry::new(),
        }
    }

    /// Writes one rendered value. `labeled` selects the `[LABEL] ` path.
    fn write_value(&mut self, level: Level, labeled: bool, text: &str) {
        let Self { sink, levels, .. } = self;
        let color = sink.color_enabled();
        let escape = levels.color(level).as_bytes();

        if labeled {
            let decoration = format!("[{}] ", levels.label(level));
            let _ = if color {
                sink.write_colored(decoration.as_bytes(), escape, RESET.as_bytes())
            } else {
                sink.write(decoration.as_bytes())
            };
        }

        let _ = if color {
            sink.write_colored(text.as_bytes(), escape, RESET.as_bytes())
        } else {
            sink.write(text.as_bytes())
        };
    }
}

/// A self-contained logger.
///
/// Every method takes `&self` and is safe to call from many threads at once;
/// lines written by one call are never interleaved with another call's.
///
/// ```
/// use logging::{Level, Logger};
/// use test_support::CaptureBuffer;
///
/// let logger = Logger::new();
/// let capture = CaptureBuffer::new();
/// logger.set_writer(capture.clone());
/// logger.disable_color();
///
/// logger.warn(&[&"x=", &5, &"\n"]);
/// logger.debug(&[&"hidden\n"]);
/// logger.always(&[&"always\n"]);
///
/// assert_eq!(capture.contents(), "[WARNING] x=5\nalways\n");
/// assert_eq!(logger.minimum_level(), Level::Info);
/// ```
pub struct Logger {
    state: ReentrantMutex<RefCell<State>>,
}

impl Logger {
    /// Creates a logger writing colored output to stdout at [`Level::Info`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_sink(Sink::new())
    }

    /// Creates a logger around an existing sink.
    #[must_use]
    pub fn with_sink(sink: Sink) -> Self {
        Self {
            state: ReentrantMutex::new(RefCell::new(State::new(sink))),
        }
    }

    /// Builds a logger from `config`.
    ///
    /// # Errors
    ///
    /// Returns the [`SinkError`] raised while opening the configured log file.
    pub fn from_config(config: &LoggerConfig) -> Result<Self, SinkError> {
        let logger = Self::new();
        logger.apply_config(config)?;
        Ok(logger)
    }

    /// Applies every setting of `config` to this logger.
    ///
    /// The log file is opened last, so a configured file always ends up with
    /// color disabled.
    ///
    /// # Errors
    ///
    /// Returns the [`SinkError`] raised while opening the configured log file.
    /// The remaining settings have been applied by then.
    pub fn apply_config(&self, config: &LoggerConfig) -> Result<(), SinkError> {
        {
            let guard = self.state.lock();
            let mut state = guard.borrow_mut();
            state.minimum = config.minimum_level;
            for (level, label) in &config.labels {
                state.levels.set_label(*level, label.as_str());
            }
            for (level, color) in &config.colors {
                state.levels.set_color(*level, color.as_str());
            }
            state.sink.set_console(config.console);
            state.sink.set_color(config.color);
        }

        if let Some(file) = &config.log_file {
            self.open_file(&file.directory, &file.file_name)?;
        }
        Ok(())
    }

    /// Core entry point: gates, renders and writes `values` at `level`.
    ///
    /// Only the first value carries the `[LABEL] ` decoration, and only when
    /// `with_label` is set.
    pub(crate) fn emit(&self, level: Level, with_label: bool, values: &[&dyn Loggable]) {
        let guard = self.state.lock();
        {
            // Fails only for a call made from inside the sink's writer.
            let Ok(mut state) = guard.try_borrow_mut() else {
                return;
            };
            if !level.passes(state.minimum) {
                return;
            }
            state.current = level;
        }

        for (position, value) in values.iter().enumerate() {
            let text = value.render();
            if let Ok(mut state) = guard.try_borrow_mut() {
                state.write_value(level, with_label && position == 0, &text);
            }
        }

        if let Ok(mut state) = guard.try_borrow_mut() {
            let _ = state.sink.flush();
        }
    }

    /// Logs `values` at `level` with the level label.
    pub fn log(&self, level: Level, values: &[&dyn Loggable]) {
        self.emit(level, true, values);
    }

    /// Logs `values` at [`Level::Debug`].
    pub fn debug(&self, values: &[&dyn Loggable]) {
        self.emit(Level::Debug, true, values);
    }

    /// Logs `values` at [`Level::Info`].
    pub fn info(&self, values: &[&dyn Loggable]) {
        self.emit(Level::Info, true, values);
    }

    /// Logs `values` at [`Level::Warn`].
    pub fn warn(&self, values: &[&dyn Loggable]) {
        self.emit(Level::Warn, true, values);
    }

    /// Logs `values` at [`Level::Error`].
    pub fn error(&self, values: &[&dyn Loggable]) {
        self.emit(Level::Error, true, values);
    }

    /// Logs `values` at [`Level::Critical`].
    pub fn critical(&self, values: &[&dyn Loggable]) {
        self.emit(Level::Critical, true, values);
    }

    /// Logs `values` at [`Level::Fatal`].
    pub fn fatal(&self, values: &[&dyn Loggable]) {
        self.emit(Level::Fatal, true, values);
    }

    /// Logs `values` unconditionally and without a label.
    pub fn always(&self, values: &[&dyn Loggable]) {
        self.emit(Level::Always, false, values);
    }

    /// Sets the minimum level and returns the level now in effect.
    pub fn set_minimum_level(&self, level: Level) -> Level {
        let guard = self.state.lock();
        guard.borrow_mut().minimum = level;
        level
    }

    /// Returns the minimum level.
    #[must_use]
    pub fn minimum_level(&self) -> Level {
        self.state.lock().borrow().minimum
    }

    /// Level of the most recent call that passed the gate.
    #[must_use]
    pub fn current_level(&self) -> Level {
        self.state.lock().borrow().current
    }

    /// Reports whether a call at `level` would produce output.
    #[must_use]
    pub fn enabled(&self, level: Level) -> bool {
        level.passes(self.minimum_level())
    }

    /// Replaces the label printed for `level`.
    pub fn set_label(&self, level: Level, label: impl Into<String>) {
        self.state.lock().borrow_mut().levels.set_label(level, label);
    }

    /// Replaces the color sequence used for `level`.
    pub fn set_color(&self, level: Level, color: impl Into<String>) {
        self.state.lock().borrow_mut().levels.set_color(level, color);
    }

    /// Returns the label printed for `level`.
    #[must_use]
    pub fn label(&self, level: Level) -> String {
        self.state.lock().borrow().levels.label(level).to_owned()
    }

    /// Returns the color sequence for `level`, empty while color is disabled.
    #[must_use]
    pub fn color(&self, level: Level) -> String {
        let guard = self.state.lock();
        let state = guard.borrow();
        state
            .levels
            .color_if(level, state.sink.color_enabled())
            .to_owned()
    }

    /// Restores the default labels and colors.
    pub fn reset_levels(&self) {
        self.state.lock().borrow_mut().levels.reset();
    }

    /// Turns color output on.
    pub fn enable_color(&self) {
        self.set_color_enabled(true);
    }

    /// Turns color output off.
    pub fn disable_color(&self) {
        self.set_color_enabled(false);
    }

    /// Turns color output on or off.
    pub fn set_color_enabled(&self, enabled: bool) {
        self.state.lock().borrow_mut().sink.set_color(enabled);
    }

    /// Reports whether color output is on.
    #[must_use]
    pub fn color_enabled(&self) -> bool {
        self.state.lock().borrow().sink.color_enabled()
    }

    /// Redirects output to `writer`, returning the writer it replaces.
    pub fn set_target(&self, writer: Box<dyn Write + Send>) -> Option<Box<dyn Write + Send>> {
        self.state.lock().borrow_mut().sink.set_target(writer)
    }

    /// Redirects output to `writer`, returning the writer it replaces.
    pub fn set_writer<W>(&self, writer: W) -> Option<Box<dyn Write + Send>>
    where
        W: Write + Send + 'static,
    {
        self.set_target(Box::new(writer))
    }

    /// Makes the console the active target, returning any custom writer.
    pub fn use_console(&self) -> Option<Box<dyn Write + Send>> {
        self.state.lock().borrow_mut().sink.use_console()
    }

    /// Selects the console stream used when the console is active.
    pub fn set_console(&self, console: ConsoleStream) {
        self.state.lock().borrow_mut().sink.set_console(console);
    }

    /// Kind of the active target.
    #[must_use]
    pub fn target(&self) -> TargetKind {
        self.state.lock().borrow().sink.target()
    }

    /// Opens `directory/file_name` as the active target and disables color.
    ///
    /// # Errors
    ///
    /// On failure the error is also logged at [`Level::Error`] through the
    /// current target, which stays active.
    pub fn open_file(
        &self,
        directory: impl AsRef<Path>,
        file_name: impl AsRef<Path>,
    ) -> Result<PathBuf, SinkError> {
        let directory = directory.as_ref();
        let file_name = file_name.as_ref();

        let guard = self.state.lock();
        let opened = guard.borrow_mut().sink.open_file(directory, file_name);
        if let Err(error) = &opened {
            let attempted = directory.join(file_name);
            self.error(&[
                &"failed to open log file '",
                &attempted.display(),
                &"': ",
                error.io_error(),
                &"\n",
            ]);
        }
        opened
    }

    /// Opens [`DEFAULT_LOG_FILE_NAME`](logging_sink::DEFAULT_LOG_FILE_NAME) inside `directory`.
    ///
    /// # Errors
    ///
    /// See [`Logger::open_file`].
    pub fn open_default_file(&self, directory: impl AsRef<Path>) -> Result<PathBuf, SinkError> {
        self.open_file(directory, logging_sink::DEFAULT_LOG_FILE_NAME)
    }

    /// Flushes and closes the log file, reverting to the console if it was active.
    pub fn close_file(&self) {
        self.state.lock().borrow_mut().sink.close_file();
    }

    /// Path of the open log file.
    #[must_use]
    pub fn file_path(&self) -> Option<PathBuf> {
        self.state.lock().borrow().sink.file_path().map(Path::to_path_buf)
    }

    /// Flushes the active target.
    pub fn flush(&self) {
        let _ = self.state.lock().borrow_mut().sink.flush();
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.state.lock();
        match guard.try_borrow() {
            Ok(state) => f
                .debug_struct("Logger")
                .field("minimum", &state.minimum)
                .field("current", &state.current)
                .field("sink", &state.sink)
                .field("timers", &state.timers.len())
                .finish(),
            Err(_) => f.debug_struct("Logger").finish_non_exhaustive(),
        }
    }
}
