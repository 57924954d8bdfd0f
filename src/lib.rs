//! Quill - leveled structured logging over the `tracing` stack
//!
//! This library is a thin facade over `tracing`/`tracing-subscriber`:
//! it selects an engine preset from an operation mode and encoding, gates
//! debug records behind a verbosity threshold, and keeps a process-wide
//! default logger that can be swapped at runtime.
//!
//! # High-Level API
//!
//! Most applications install a default logger once at startup and use the
//! free functions everywhere else:
//!
//! ```
//! use quill::{Encoding, Field, Mode};
//!
//! quill::set_mode(Mode::Development, Encoding::Console, 2);
//!
//! quill::info("scenery mounted", &[Field::str("package", "ortho-eu")]);
//! quill::debug(1, "tile cache hit", &[Field::int("tiles", 512)]);
//! ```
//!
//! Explicit [`Logger`] instances have identical semantics and are handy
//! when a component should log independently of the process default:
//!
//! ```
//! use quill::{Encoding, Logger, Mode};
//!
//! let log = Logger::new(Mode::Production, Encoding::Json, 0);
//! log.warn("provider slow", &[]);
//! ```
//!
//! [`LogWriter`] adapts a logger to `std::io::Write` for APIs that only
//! accept a byte sink, routing whole buffers to INFO or ERROR.
//!
//! # Architecture
//!
//! - `mode`: operation modes, encodings, verbosity, config errors
//! - `field`: closed typed key/value field set
//! - `logger`: engine construction and leveled emission
//! - `sampling`: repeated-record sampling for production mode
//! - `global`: process-wide default slot and free functions
//! - `settings`: environment-driven configuration
//! - `writer`: `io::Write` adapter

mod field;
mod global;
mod logger;
mod mode;
mod sampling;
mod settings;
mod writer;

pub use field::{Field, FieldValue};
pub use global::{debug, error, fatal, info, set_default, set_mode, warn};
pub use logger::Logger;
pub use mode::{ConfigError, Encoding, Mode, Verbosity};
pub use settings::{Settings, ENV_ENCODING, ENV_MODE, ENV_VERBOSITY};
pub use writer::{LogWriter, WriteTarget};

/// Version of the quill library.
///
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_not_empty() {
        assert!(!VERSION.is_empty(), "Version should not be empty");
    }

    #[test]
    fn test_root_exports_are_usable() {
        let log = Logger::noop();
        log.info("probe", &[Field::bool("ok", true)]);
    }
}
