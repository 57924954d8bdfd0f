//! Logger construction and leveled emission.
//!
//! A [`Logger`] owns one logging engine (a `tracing` dispatcher built from
//! a registry + fmt layer composition) plus a verbosity threshold. The
//! engine preset is selected at construction from a [`Mode`] and an
//! [`Encoding`]; a logger is immutable afterwards, so changing mode means
//! constructing a new logger.
//!
//! Records are emitted through the logger's own dispatcher, not the global
//! `tracing` subscriber, so loggers work in isolation: two loggers with
//! different presets never interfere, and no global subscriber needs to be
//! installed.

use std::io;
use std::panic::Location;
use std::process;
use std::time::Duration;

use tracing::dispatcher::{self, Dispatch};
use tracing_subscriber::filter::{FilterExt, LevelFilter};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::{Layer, SubscriberExt};

use crate::field::{Field, FieldList};
use crate::mode::{Encoding, Mode, Verbosity};
use crate::sampling::Sampler;

/// Target attached to every record emitted through the facade.
const LOG_TARGET: &str = "quill";

/// Production sampling defaults: per one-second window, the first 100
/// occurrences of an identical message are emitted, then every 100th.
const SAMPLING_INITIAL: u64 = 100;
const SAMPLING_THEREAFTER: u64 = 100;
const SAMPLING_WINDOW: Duration = Duration::from_secs(1);

/// Severities the facade can emit at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Severity {
    Debug,
    Info,
    Warn,
    Error,
}

/// Emits one record at the given level through whichever dispatcher is
/// current, attributing it to `caller` and rendering `fields` when any
/// are present.
macro_rules! emit_event {
    ($level:ident, $caller:expr, $message:expr, $fields:expr) => {
        if $fields.is_empty() {
            tracing::$level!(
                target: LOG_TARGET,
                caller.file = $caller.file(),
                caller.line = $caller.line(),
                "{}",
                $message
            );
        } else {
            tracing::$level!(
                target: LOG_TARGET,
                caller.file = $caller.file(),
                caller.line = $caller.line(),
                fields = %FieldList($fields),
                "{}",
                $message
            );
        }
    };
}

/// A leveled, structured logger with a fixed engine preset.
///
/// Cloning is cheap: clones share the same engine (the dispatcher is
/// reference-counted) and verbosity.
///
/// # Example
///
/// ```
/// use quill::{Encoding, Field, Logger, Mode};
///
/// let log = Logger::new(Mode::Development, Encoding::Console, 2);
/// log.info("package installed", &[Field::str("name", "ortho-eu")]);
/// log.debug(2, "cache primed", &[Field::int("entries", 4096)]);
/// log.debug(5, "suppressed: requested level exceeds verbosity", &[]);
/// ```
#[derive(Debug, Clone)]
pub struct Logger {
    verbosity: Verbosity,
    engine: Dispatch,
}

impl Logger {
    /// Creates a logger for the given mode and encoding, writing to
    /// standard error.
    pub fn new(mode: Mode, encoding: Encoding, verbosity: Verbosity) -> Self {
        Self::with_writer(mode, encoding, verbosity, io::stderr)
    }

    /// Creates a logger writing to the given destination instead of
    /// standard error.
    ///
    /// The writer is handed to the engine's fmt layer; everything else
    /// matches [`Logger::new`]. In `Disabled` mode the writer is never
    /// used.
    pub fn with_writer<W>(mode: Mode, encoding: Encoding, verbosity: Verbosity, writer: W) -> Self
    where
        W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
    {
        Self {
            verbosity,
            engine: build_engine(mode, encoding, writer),
        }
    }

    /// A logger that discards every record.
    ///
    /// Equivalent to `Logger::new(Mode::Disabled, Encoding::Console, 0)`.
    pub fn noop() -> Self {
        Self::new(Mode::Disabled, Encoding::Console, 0)
    }

    /// The configured verbosity threshold.
    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    /// Logs at INFO level.
    #[track_caller]
    pub fn info(&self, message: &str, fields: &[Field]) {
        self.emit(Severity::Info, Location::caller(), message, fields);
    }

    /// Logs at WARN level.
    #[track_caller]
    pub fn warn(&self, message: &str, fields: &[Field]) {
        self.emit(Severity::Warn, Location::caller(), message, fields);
    }

    /// Logs at ERROR level.
    #[track_caller]
    pub fn error(&self, message: &str, fields: &[Field]) {
        self.emit(Severity::Error, Location::caller(), message, fields);
    }

    /// Logs at ERROR level with a `fatal=true` marker field, then
    /// terminates the process with exit code 1.
    #[track_caller]
    pub fn fatal(&self, message: &str, fields: &[Field]) -> ! {
        let caller = Location::caller();
        let mut fields = fields.to_vec();
        fields.push(Field::bool("fatal", true));
        self.emit(Severity::Error, caller, message, &fields);
        process::exit(1)
    }

    /// Logs at DEBUG level if the logger's verbosity is at least
    /// `requested`.
    ///
    /// The comparison happens before any engine call, so a suppressed
    /// debug call costs nothing beyond evaluating its arguments.
    #[track_caller]
    pub fn debug(&self, requested: Verbosity, message: &str, fields: &[Field]) {
        if self.verbosity >= requested {
            self.emit(Severity::Debug, Location::caller(), message, fields);
        }
    }

    fn emit(
        &self,
        severity: Severity,
        caller: &'static Location<'static>,
        message: &str,
        fields: &[Field],
    ) {
        dispatcher::with_default(&self.engine, || match severity {
            Severity::Debug => emit_event!(debug, caller, message, fields),
            Severity::Info => emit_event!(info, caller, message, fields),
            Severity::Warn => emit_event!(warn, caller, message, fields),
            Severity::Error => emit_event!(error, caller, message, fields),
        });
    }
}

/// Builds the engine dispatcher for a mode/encoding pair.
fn build_engine<W>(mode: Mode, encoding: Encoding, writer: W) -> Dispatch
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let (min_level, ansi, sampled) = match mode {
        Mode::Disabled => return Dispatch::none(),
        Mode::Development => (LevelFilter::DEBUG, true, false),
        Mode::Production => (LevelFilter::INFO, false, true),
    };

    // File/line reporting stays off: the engine would attribute records to
    // this module, while the caller fields carry the real call site.
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(false);

    let registry = tracing_subscriber::registry();

    match (encoding, sampled) {
        (Encoding::Json, true) => {
            let layer = fmt_layer.json().with_filter(min_level.and(sampler()));
            Dispatch::new(registry.with(layer))
        }
        (Encoding::Json, false) => {
            let layer = fmt_layer.json().with_filter(min_level);
            Dispatch::new(registry.with(layer))
        }
        (Encoding::Console, true) => {
            let layer = fmt_layer.with_filter(min_level.and(sampler()));
            Dispatch::new(registry.with(layer))
        }
        (Encoding::Console, false) => {
            let layer = fmt_layer.with_filter(min_level);
            Dispatch::new(registry.with(layer))
        }
    }
}

fn sampler() -> Sampler {
    Sampler::new(SAMPLING_INITIAL, SAMPLING_THEREAFTER, SAMPLING_WINDOW)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logger_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Logger>();
    }

    #[test]
    fn test_every_mode_and_encoding_constructs() {
        for mode in [Mode::Development, Mode::Production, Mode::Disabled] {
            for encoding in [Encoding::Json, Encoding::Console] {
                let log = Logger::with_writer(mode, encoding, 0, io::sink);
                log.warn("construction probe", &[]);
            }
        }
    }

    #[test]
    fn test_noop_logger_accepts_calls() {
        let log = Logger::noop();
        log.info("discarded", &[]);
        log.warn("discarded", &[Field::int("n", 1)]);
        log.error("discarded", &[]);
        log.debug(0, "discarded", &[]);
    }

    #[test]
    fn test_verbosity_accessor() {
        let log = Logger::with_writer(Mode::Development, Encoding::Console, 7, io::sink);
        assert_eq!(log.verbosity(), 7);
    }

    #[test]
    fn test_clones_share_verbosity() {
        let log = Logger::noop();
        let clone = log.clone();
        assert_eq!(clone.verbosity(), log.verbosity());
    }
}
