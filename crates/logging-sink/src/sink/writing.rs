use std::io::{self, Write};

use super::{Active, ConsoleStream, Sink};

impl Sink {
    /// Writes `bytes` to the active target unchanged.
    pub fn write(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.with_writer(|writer| writer.write_all(bytes))
    }

    /// Writes `bytes` wrapped between `color` and `reset`.
    ///
    /// The sequences are passed through verbatim; deciding whether color is
    /// wanted at all is left to the caller (see [`color_enabled`](Self::color_enabled)).
    pub fn write_colored(&mut self, bytes: &[u8], color: &[u8], reset: &[u8]) -> io::Result<()> {
        self.with_writer(|writer| {
            writer.write_all(color)?;
            writer.write_all(bytes)?;
            writer.write_all(reset)
        })
    }

    /// Flushes the active target.
    pub fn flush(&mut self) -> io::Result<()> {
        self.with_writer(|writer| writer.flush())
    }

    fn with_writer<F>(&mut self, f: F) -> io::Result<()>
    where
        F: FnOnce(&mut dyn Write) -> io::Result<()>,
    {
        match &mut self.active {
            Active::Console => write_console(self.console, f),
            Active::File => match self.file.as_mut() {
                Some(file) => f(&mut file.writer),
                None => write_console(self.console, f),
            },
            Active::Writer(writer) => f(writer.as_mut()),
        }
    }
}

fn write_console<F>(console: ConsoleStream, f: F) -> io::Result<()>
where
    F: FnOnce(&mut dyn Write) -> io::Result<()>,
{
    match console {
        ConsoleStream::Stdout => f(&mut io::stdout().lock()),
        ConsoleStream::Stderr => f(&mut io::stderr().lock()),
    }
}
