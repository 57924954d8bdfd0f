//! Operation modes, output encodings, and the verbosity threshold type.
//!
//! A [`Mode`] selects a complete engine preset (minimum severity, sampling,
//! colour) while an [`Encoding`] selects how records are serialized. Both
//! parse from their canonical lowercase names so they can be driven from
//! configuration or the environment.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Verbosity threshold for debug logging.
///
/// 0 is the quietest level and 9 the noisiest by convention. A debug call
/// emits only when the logger's configured verbosity is greater than or
/// equal to the level requested at the call site.
pub type Verbosity = u8;

/// Errors produced when parsing logging configuration values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Unknown operation mode name.
    #[error("unknown log mode '{0}' (expected development, production, or disabled)")]
    UnknownMode(String),

    /// Unknown encoding name.
    #[error("unknown log encoding '{0}' (expected json or console)")]
    UnknownEncoding(String),

    /// Verbosity value that is not an integer in range.
    #[error("invalid verbosity '{0}' (expected an integer in 0..=255)")]
    InvalidVerbosity(String),
}

/// Logger operation mode.
///
/// The mode picks the engine preset: minimum emitted severity, whether
/// repeated-record sampling is active, and whether output is coloured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Everything from DEBUG up, coloured console output.
    Development,
    /// INFO and up, repeated-record sampling, no colour.
    Production,
    /// Every record is discarded.
    Disabled,
}

impl FromStr for Mode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Ok(Mode::Development),
            "production" | "prod" => Ok(Mode::Production),
            "disabled" | "off" => Ok(Mode::Disabled),
            _ => Err(ConfigError::UnknownMode(s.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mode::Development => "development",
            Mode::Production => "production",
            Mode::Disabled => "disabled",
        };
        f.write_str(name)
    }
}

/// Record output encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// One JSON object per record.
    Json,
    /// Human-oriented single-line text.
    Console,
}

impl FromStr for Encoding {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Encoding::Json),
            "console" | "text" => Ok(Encoding::Console),
            _ => Err(ConfigError::UnknownEncoding(s.to_string())),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Encoding::Json => "json",
            Encoding::Console => "console",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parses_canonical_names() {
        assert_eq!("development".parse::<Mode>().unwrap(), Mode::Development);
        assert_eq!("production".parse::<Mode>().unwrap(), Mode::Production);
        assert_eq!("disabled".parse::<Mode>().unwrap(), Mode::Disabled);
    }

    #[test]
    fn test_mode_parses_aliases_and_case() {
        assert_eq!("dev".parse::<Mode>().unwrap(), Mode::Development);
        assert_eq!("PROD".parse::<Mode>().unwrap(), Mode::Production);
        assert_eq!("Off".parse::<Mode>().unwrap(), Mode::Disabled);
        assert_eq!(" production ".parse::<Mode>().unwrap(), Mode::Production);
    }

    #[test]
    fn test_mode_rejects_unknown_names() {
        let err = "staging".parse::<Mode>().unwrap_err();
        assert_eq!(err, ConfigError::UnknownMode("staging".to_string()));
    }

    #[test]
    fn test_mode_display_round_trips() {
        for mode in [Mode::Development, Mode::Production, Mode::Disabled] {
            assert_eq!(mode.to_string().parse::<Mode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_encoding_parses_names() {
        assert_eq!("json".parse::<Encoding>().unwrap(), Encoding::Json);
        assert_eq!("console".parse::<Encoding>().unwrap(), Encoding::Console);
        assert_eq!("text".parse::<Encoding>().unwrap(), Encoding::Console);
        assert_eq!("JSON".parse::<Encoding>().unwrap(), Encoding::Json);
    }

    #[test]
    fn test_encoding_rejects_unknown_names() {
        let err = "yaml".parse::<Encoding>().unwrap_err();
        assert_eq!(err, ConfigError::UnknownEncoding("yaml".to_string()));
    }

    #[test]
    fn test_encoding_display_round_trips() {
        for encoding in [Encoding::Json, Encoding::Console] {
            assert_eq!(encoding.to_string().parse::<Encoding>().unwrap(), encoding);
        }
    }

    #[test]
    fn test_config_error_messages_name_the_input() {
        let err = "verbose".parse::<Mode>().unwrap_err();
        assert!(err.to_string().contains("verbose"));
    }
}
