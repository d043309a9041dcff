#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging/src/lib.rs
//!
//! # Overview
//!
//! `logging` is a small process-wide logger: leveled, optionally colored
//! console or file output plus named timers for rough duration measurement.
//! Values of any [`Display`](std::fmt::Display) type are concatenated into a
//! line; values without a textual form go through the [`Opaque`], [`CText`]
//! and [`Debugged`] adapters.
//!
//! # Design
//!
//! A [`Logger`] owns every piece of mutable state behind one re-entrant stream
//! lock: the [`Sink`](logging_sink::Sink) from the `logging-sink` crate, the
//! [`LevelRegistry`] of labels and colors, the minimum level, the current
//! severity and the [`TimerRegistry`]. Tests and libraries can build isolated
//! loggers; applications normally use the process-wide one from [`global`],
//! either directly or through the [`info!`]-style macros.
//!
//! # Invariants
//!
//! - A call below the minimum level produces no output and changes nothing.
//!   [`Level::Always`] passes every gate.
//! - Only the first value of a call carries the `[LABEL] ` decoration.
//! - Output of concurrent calls is never interleaved.
//! - Opening a log file disables color; closing it does not re-enable color.
//!
//! # Errors
//!
//! Logging itself never fails. Timer misses and log file failures are
//! reported as [`Level::Error`] lines through the logger; timers then return
//! `None` and [`Logger::open_file`] additionally returns the
//! [`SinkError`](logging_sink::SinkError). Configuration parsing reports
//! [`ConfigError`].
//!
//! # Examples
//!
//! ```
//! use logging::{DurationReport, Level, Logger, TimeUnit};
//! use test_support::CaptureBuffer;
//!
//! let logger = Logger::new();
//! let capture = CaptureBuffer::new();
//! logger.set_writer(capture.clone());
//! logger.disable_color();
//! logger.set_minimum_level(Level::Warn);
//!
//! logging::info!(in logger; "skipped\n");
//! logging::error!(in logger; "disk ", 2, " failed\n");
//!
//! logger.start_timer("scan");
//! logger.log_duration("scan", &DurationReport::new().unit(TimeUnit::Hours));
//!
//! assert_eq!(capture.contents(), "[ERROR] disk 2 failed\n[OUT] scan: 0h\n");
//! ```

mod config;
mod format;
mod global;
mod levels;
mod logger;
mod macros;
mod timer;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use config::{
    ConfigError, ENV_COLOR, ENV_CONSOLE, ENV_FILE, ENV_LEVEL, ENV_NO_COLOR, LogFileConfig,
    LoggerConfig,
};
pub use format::{CText, Debugged, Loggable, Opaque, opaque};
pub use global::{
    close_file, disable_color, enable_color, end_timer, global, init, init_with_config,
    log_duration, log_duration_persistent, open_file, peek_timer, set_color, set_label,
    set_minimum_level, start_timer,
};
pub use levels::{Level, LevelRegistry, ParseLevelError};
pub use logger::Logger;
pub use logging_sink::{ConsoleStream, DEFAULT_LOG_FILE_NAME, RESET, SinkError, TargetKind};
pub use timer::{DurationReport, TimeUnit, TimerRegistry};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{LoggerLayer, init_tracing};
