use std::io::Write;

use super::{Active, Sink};

/// Console stream used when no file or custom writer is active.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ConsoleStream {
    /// Standard output.
    #[default]
    Stdout,
    /// Standard error.
    Stderr,
}

impl ConsoleStream {
    /// Parses `stdout` or `stderr` (ASCII case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("stdout") {
            Some(Self::Stdout)
        } else if name.eq_ignore_ascii_case("stderr") {
            Some(Self::Stderr)
        } else {
            None
        }
    }
}

/// Which kind of target a [`Sink`] currently writes to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TargetKind {
    /// The configured console stream.
    Console,
    /// The open log file.
    File,
    /// A writer installed through [`Sink::set_target`].
    Writer,
}

impl Sink {
    /// Returns the kind of the active target.
    #[must_use]
    pub const fn target(&self) -> TargetKind {
        match self.active {
            Active::Console => TargetKind::Console,
            Active::File => TargetKind::File,
            Active::Writer(_) => TargetKind::Writer,
        }
    }

    /// Returns the console stream used as the fallback target.
    #[must_use]
    pub const fn console(&self) -> ConsoleStream {
        self.console
    }

    /// Selects the console stream. Takes effect immediately when the console is active.
    pub fn set_console(&mut self, console: ConsoleStream) {
        self.console = console;
    }

    /// Replaces the active target with `writer`.
    ///
    /// The previously installed custom writer, if any, is handed back so
    /// output collected before the switch can be inspected. An open log file
    /// stays open (only deactivated) and can be closed later with
    /// [`close_file`](Self::close_file). The color flag is left as is.
    pub fn set_target(&mut self, writer: Box<dyn Write + Send>) -> Option<Box<dyn Write + Send>> {
        self.swap_active(Active::Writer(writer))
    }

    /// Makes the console the active target, returning a replaced custom writer.
    pub fn use_console(&mut self) -> Option<Box<dyn Write + Send>> {
        self.swap_active(Active::Console)
    }

    fn swap_active(&mut self, active: Active) -> Option<Box<dyn Write + Send>> {
        match std::mem::replace(&mut self.active, active) {
            Active::Writer(previous) => Some(previous),
            Active::Console | Active::File => None,
        }
    }
}
