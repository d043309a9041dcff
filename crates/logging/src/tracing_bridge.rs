//! crates/logging/src/tracing_bridge.rs
//! Bridge forwarding `tracing` events into a [`Logger`].
//!
//! [`LoggerLayer`] is a `tracing-subscriber` layer. Each event becomes one log
//! line at the mapped level: the `message` field first, then every other
//! field as ` key=value`, then a newline.
//!
//! ```
//! use std::sync::Arc;
//!
//! use logging::{Logger, LoggerLayer};
//! use test_support::CaptureBuffer;
//! use tracing_subscriber::layer::SubscriberExt;
//!
//! let logger = Arc::new(Logger::new());
//! let capture = CaptureBuffer::new();
//! logger.set_writer(capture.clone());
//! logger.disable_color();
//!
//! let subscriber = tracing_subscriber::registry().with(LoggerLayer::shared(logger));
//! tracing::subscriber::with_default(subscriber, || {
//!     tracing::warn!(attempt = 3, "retrying");
//! });
//! assert_eq!(capture.contents(), "[WARNING] retrying attempt=3\n");
//! ```

use std::fmt::{self, Write as _};
use std::sync::Arc;

use tracing::Subscriber;
use tracing::field::{Field, Visit};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::TryInitError;

use crate::global::global;
use crate::levels::Level;
use crate::logger::Logger;

enum Destination {
    Global,
    Shared(Arc<Logger>),
}

/// A tracing layer writing events through a [`Logger`].
pub struct LoggerLayer {
    destination: Destination,
}

impl LoggerLayer {
    /// Layer writing to the process-wide logger.
    #[must_use]
    pub const fn global() -> Self {
        Self {
            destination: Destination::Global,
        }
    }

    /// Layer writing to `logger`.
    #[must_use]
    pub const fn shared(logger: Arc<Logger>) -> Self {
        Self {
            destination: Destination::Shared(logger),
        }
    }

    fn logger(&self) -> &Logger {
        match &self.destination {
            Destination::Global => global(),
            Destination::Shared(logger) => logger.as_ref(),
        }
    }

    /// Maps a tracing level onto a logger level.
    fn map_level(level: &tracing::Level) -> Level {
        match *level {
            tracing::Level::TRACE | tracing::Level::DEBUG => Level::Debug,
            tracing::Level::INFO => Level::Info,
            tracing::Level::WARN => Level::Warn,
            tracing::Level::ERROR => Level::Error,
        }
    }
}

impl Default for LoggerLayer {
    fn default() -> Self {
        Self::global()
    }
}

impl fmt::Debug for LoggerLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let destination = match self.destination {
            Destination::Global => "global",
            Destination::Shared(_) => "shared",
        };
        f.debug_struct("LoggerLayer")
            .field("destination", &destination)
            .finish()
    }
}

impl<S> Layer<S> for LoggerLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let level = Self::map_level(event.metadata().level());
        let logger = self.logger();
        if !logger.enabled(level) {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);
        logger.log(level, &[&visitor.finish()]);
    }
}

/// Collects the message and the remaining fields of an event.
#[derive(Default)]
struct EventVisitor {
    message: String,
    fields: String,
}

impl EventVisitor {
    fn finish(self) -> String {
        let mut line = self.message;
        line.push_str(&self.fields);
        line.push('\n');
        line
    }
}

impl Visit for EventVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={value}", field.name());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{value:?}");
        } else {
            let _ = write!(self.fields, " {}={value:?}", field.name());
        }
    }
}

/// Installs a [`LoggerLayer`] over the process-wide logger as the global
/// `tracing` subscriber.
///
/// # Errors
///
/// Fails when a global `tracing` subscriber is already set.
pub fn init_tracing() -> Result<(), TryInitError> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(LoggerLayer::global())
        .try_init()
}
