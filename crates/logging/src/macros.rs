//! crates/logging/src/macros.rs
//! Variadic logging macros.
//!
//! Every macro accepts a comma-separated list of [`Loggable`](crate::Loggable)
//! values and writes them in order. Without a target the process-wide logger
//! from [`global`](crate::global) is used; `in logger;` selects another one.
//!
//! ```
//! use logging::Logger;
//! use test_support::CaptureBuffer;
//!
//! let logger = Logger::new();
//! let capture = CaptureBuffer::new();
//! logger.set_writer(capture.clone());
//! logger.disable_color();
//!
//! let retries = 3;
//! logging::warn!(in logger; "retries=", retries, "\n");
//! logging::log!(in logger; "done\n");
//! assert_eq!(capture.contents(), "[WARNING] retries=3\ndone\n");
//! ```

#[doc(hidden)]
#[macro_export]
macro_rules! __emit {
    ($method:ident, in $logger:expr; $($value:expr),+) => {
        $logger.$method(&[$(&$value as &dyn $crate::Loggable),+])
    };
    ($method:ident, $($value:expr),+) => {
        $crate::global().$method(&[$(&$value as &dyn $crate::Loggable),+])
    };
}

/// Logs the values at [`Level::Debug`](crate::Level::Debug).
#[macro_export]
macro_rules! debug {
    (in $logger:expr; $($value:expr),+ $(,)?) => {
        $crate::__emit!(debug, in $logger; $($value),+)
    };
    ($($value:expr),+ $(,)?) => {
        $crate::__emit!(debug, $($value),+)
    };
}

/// Logs the values at [`Level::Info`](crate::Level::Info).
#[macro_export]
macro_rules! info {
    (in $logger:expr; $($value:expr),+ $(,)?) => {
        $crate::__emit!(info, in $logger; $($value),+)
    };
    ($($value:expr),+ $(,)?) => {
        $crate::__emit!(info, $($value),+)
    };
}

/// Logs the values at [`Level::Warn`](crate::Level::Warn).
#[macro_export]
macro_rules! warn {
    (in $logger:expr; $($value:expr),+ $(,)?) => {
        $crate::__emit!(warn, in $logger; $($value),+)
    };
    ($($value:expr),+ $(,)?) => {
        $crate::__emit!(warn, $($value),+)
    };
}

/// Logs the values at [`Level::Error`](crate::Level::Error).
#[macro_export]
macro_rules! error {
    (in $logger:expr; $($value:expr),+ $(,)?) => {
        $crate::__emit!(error, in $logger; $($value),+)
    };
    ($($value:expr),+ $(,)?) => {
        $crate::__emit!(error, $($value),+)
    };
}

/// Logs the values at [`Level::Critical`](crate::Level::Critical).
#[macro_export]
macro_rules! critical {
    (in $logger:expr; $($value:expr),+ $(,)?) => {
        $crate::__emit!(critical, in $logger; $($value),+)
    };
    ($($value:expr),+ $(,)?) => {
        $crate::__emit!(critical, $($value),+)
    };
}

/// Logs the values at [`Level::Fatal`](crate::Level::Fatal).
#[macro_export]
macro_rules! fatal {
    (in $logger:expr; $($value:expr),+ $(,)?) => {
        $crate::__emit!(fatal, in $logger; $($value),+)
    };
    ($($value:expr),+ $(,)?) => {
        $crate::__emit!(fatal, $($value),+)
    };
}

/// Logs the values unconditionally, without a label.
#[macro_export]
macro_rules! log {
    (in $logger:expr; $($value:expr),+ $(,)?) => {
        $crate::__emit!(always, in $logger; $($value),+)
    };
    ($($value:expr),+ $(,)?) => {
        $crate::__emit!(always, $($value),+)
    };
}
