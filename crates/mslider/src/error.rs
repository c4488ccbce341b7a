#![forbid(unsafe_code)]

//! Top-level error type.

use std::fmt;

use mslider_core::error::ConfigError;

/// Anything that can go wrong while configuring a slider group.
#[derive(Debug)]
pub enum Error {
    /// The configuration was well-formed but rejected.
    Config(ConfigError),
    /// The configuration could not be parsed.
    Parse(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "invalid slider configuration: {err}"),
            Self::Parse(err) => write!(f, "unreadable slider configuration: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Parse(err) => Some(err),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

/// Standard result type for mslider APIs.
pub type Result<T> = std::result::Result<T, Error>;
