use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

mod file;
mod target;
mod writing;

pub use target::{ConsoleStream, TargetKind};

/// The single output destination of a logger.
///
/// A sink starts out writing to standard output with color enabled. The
/// active target can be redirected to an arbitrary writer with
/// [`set_target`](Self::set_target), to a log file with
/// [`open_file`](Self::open_file), and back to the console with
/// [`use_console`](Self::use_console) or [`close_file`](Self::close_file).
///
/// The sink performs no locking of its own.
pub struct Sink {
    console: ConsoleStream,
    active: Active,
    file: Option<LogFile>,
    color: bool,
}

enum Active {
    Console,
    File,
    Writer(Box<dyn Write + Send>),
}

struct LogFile {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl Sink {
    /// Creates a sink writing to standard output with color enabled.
    #[must_use]
    pub fn new() -> Self {
        Self::with_console(ConsoleStream::Stdout)
    }

    /// Creates a sink writing to the given console stream with color enabled.
    #[must_use]
    pub fn with_console(console: ConsoleStream) -> Self {
        Self {
            console,
            active: Active::Console,
            file: None,
            color: true,
        }
    }

    /// Reports whether color escape sequences should be emitted.
    #[must_use]
    pub const fn color_enabled(&self) -> bool {
        self.color
    }

    /// Enables or disables color output.
    pub fn set_color(&mut self, enabled: bool) {
        self.color = enabled;
    }

    /// Enables color output.
    pub fn enable_color(&mut self) {
        self.set_color(true);
    }

    /// Disables color output.
    pub fn disable_color(&mut self) {
        self.set_color(false);
    }
}

impl Default for Sink {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sink")
            .field("console", &self.console)
            .field("target", &self.target())
            .field("file", &self.file.as_ref().map(|file| &file.path))
            .field("color", &self.color)
            .finish()
    }
}
