#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `ticklog` is a minimal process-wide logger with leveled, optionally colored
//! console or file output and named timers. This crate is a facade over the
//! workspace members:
//!
//! - `logging` provides the [`Logger`], levels, formatting adapters, timers,
//!   configuration, the process-wide instance and the logging macros;
//! - `logging-sink` provides the console/file [`Sink`].
//!
//! # Examples
//!
//! ```
//! use ticklog::{Level, Logger};
//! use test_support::CaptureBuffer;
//!
//! let logger = Logger::new();
//! let capture = CaptureBuffer::new();
//! logger.set_writer(capture.clone());
//! logger.disable_color();
//!
//! ticklog::warn!(in logger; "x=", 5, "\n");
//! ticklog::debug!(in logger; "hidden\n");
//! ticklog::log!(in logger; "always\n");
//!
//! assert_eq!(capture.contents(), "[WARNING] x=5\nalways\n");
//! assert_eq!(logger.minimum_level(), Level::Info);
//! ```

pub use logging::*;
pub use logging_sink::Sink;
