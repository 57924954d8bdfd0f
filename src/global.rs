//! Process-wide default logger and the free-function logging API.
//!
//! The default slot starts life holding a disabled logger, so logging is
//! silent until [`set_mode`] (or [`set_default`]) installs a real one.
//! The slot is an atomic reference swap: replacing the default while other
//! threads are logging is well-defined — each call sees either the old or
//! the new logger, never a torn reference. Loggers captured before a swap
//! keep their original engine.

use std::sync::{Arc, LazyLock};

use arc_swap::ArcSwap;

use crate::field::Field;
use crate::logger::Logger;
use crate::mode::{Encoding, Mode, Verbosity};

static DEFAULT: LazyLock<ArcSwap<Logger>> =
    LazyLock::new(|| ArcSwap::from_pointee(Logger::noop()));

/// Replaces the process-wide default logger with a freshly constructed
/// one for the given mode, encoding, and verbosity.
pub fn set_mode(mode: Mode, encoding: Encoding, verbosity: Verbosity) {
    set_default(Logger::new(mode, encoding, verbosity));
}

/// Installs an already-constructed logger as the process-wide default.
///
/// Useful when the default should write somewhere other than standard
/// error (see [`Logger::with_writer`]).
pub fn set_default(logger: Logger) {
    DEFAULT.store(Arc::new(logger));
}

/// Logs at INFO level through the default logger.
#[track_caller]
pub fn info(message: &str, fields: &[Field]) {
    DEFAULT.load().info(message, fields);
}

/// Logs at WARN level through the default logger.
#[track_caller]
pub fn warn(message: &str, fields: &[Field]) {
    DEFAULT.load().warn(message, fields);
}

/// Logs at ERROR level through the default logger.
#[track_caller]
pub fn error(message: &str, fields: &[Field]) {
    DEFAULT.load().error(message, fields);
}

/// Logs at ERROR level with a `fatal=true` marker through the default
/// logger, then terminates the process with exit code 1.
#[track_caller]
pub fn fatal(message: &str, fields: &[Field]) -> ! {
    DEFAULT.load().fatal(message, fields)
}

/// Logs at DEBUG level through the default logger if its verbosity is at
/// least `requested`.
#[track_caller]
pub fn debug(requested: Verbosity, message: &str, fields: &[Field]) {
    DEFAULT.load().debug(requested, message, fields);
}
