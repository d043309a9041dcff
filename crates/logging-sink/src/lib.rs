#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging-sink/src/lib.rs
//!
//! # Overview
//!
//! `logging-sink` owns the single output destination of the ticklog logger.
//! A [`Sink`] writes raw bytes either to the console (stdout or stderr), to
//! an open log file, or to a caller supplied [`std::io::Write`] target, and it
//! carries the flag that decides whether ANSI color sequences are emitted.
//!
//! # Design
//!
//! The sink is a plain value without interior locking. The logger engine keeps
//! it behind its stream lock, so every method takes `&mut self` and callers
//! coordinate concurrent use themselves. Switching targets swaps the active
//! writer in place, mirroring a stream whose buffer is redirected mid-run.
//!
//! # Invariants
//!
//! - Exactly one target is active at a time.
//! - Opening a log file disables color; closing it never re-enables color.
//! - Closing the log file while it is active reverts the target to the console.
//! - A failed [`Sink::open_file`] leaves the active target untouched.
//!
//! # Errors
//!
//! [`Sink::open_file`] reports [`SinkError`] values naming the offending path
//! together with the underlying [`std::io::Error`]. Writes surface
//! [`std::io::Error`] from the active target unchanged.
//!
//! # Examples
//!
//! ```
//! use logging_sink::{Sink, TargetKind, RESET};
//!
//! let mut sink = Sink::new();
//! sink.set_target(Box::new(Vec::<u8>::new()));
//! assert_eq!(sink.target(), TargetKind::Writer);
//!
//! sink.write_colored(b"ready\n", b"\x1b[32m", RESET.as_bytes())?;
//! sink.use_console();
//! assert_eq!(sink.target(), TargetKind::Console);
//! # Ok::<(), std::io::Error>(())
//! ```

mod error;
mod sink;

pub use error::SinkError;
pub use sink::{ConsoleStream, Sink, TargetKind};

/// ANSI sequence restoring the terminal's default rendition.
pub const RESET: &str = "\x1b[0m";

/// File name used when a log file is opened without an explicit name.
pub const DEFAULT_LOG_FILE_NAME: &str = "Log.log";
