//! Environment-driven logging configuration.
//!
//! Reads the operation mode, encoding, and verbosity from `QUILL_MODE`,
//! `QUILL_ENCODING`, and `QUILL_VERBOSITY`. Unset variables fall back to
//! the defaults (production, console, verbosity 0); malformed values are
//! reported as [`ConfigError`] rather than silently ignored.

use std::env;

use crate::global;
use crate::mode::{ConfigError, Encoding, Mode, Verbosity};

/// Environment variable selecting the operation mode.
pub const ENV_MODE: &str = "QUILL_MODE";

/// Environment variable selecting the output encoding.
pub const ENV_ENCODING: &str = "QUILL_ENCODING";

/// Environment variable selecting the debug verbosity threshold.
pub const ENV_VERBOSITY: &str = "QUILL_VERBOSITY";

/// Logging configuration resolved from the environment or assembled
/// directly by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Operation mode preset.
    pub mode: Mode,
    /// Record output encoding.
    pub encoding: Encoding,
    /// Debug verbosity threshold.
    pub verbosity: Verbosity,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mode: Mode::Production,
            encoding: Encoding::Console,
            verbosity: 0,
        }
    }
}

impl Settings {
    /// Resolves settings from the environment.
    ///
    /// Unset variables keep their defaults; set-but-malformed variables
    /// produce an error.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut settings = Self::default();

        if let Ok(value) = env::var(ENV_MODE) {
            settings.mode = value.parse()?;
        }

        if let Ok(value) = env::var(ENV_ENCODING) {
            settings.encoding = value.parse()?;
        }

        if let Ok(value) = env::var(ENV_VERBOSITY) {
            settings.verbosity = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidVerbosity(value.clone()))?;
        }

        Ok(settings)
    }

    /// Installs these settings as the process-wide default logger.
    pub fn apply(&self) {
        global::set_mode(self.mode, self.encoding, self.verbosity);
    }
}
