//! Crate-level error types.

use std::fmt;

/// Errors produced by the genesis crate.
///
/// The choreography core never fails; these cover configuration I/O and the
/// driver binary.
#[derive(Debug)]
pub enum GenesisError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// A command-line argument or API argument could not be interpreted.
    InvalidArgument(String),
    /// Frame dump serialization failure.
    Serialize(String),
}

impl fmt::Display for GenesisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::InvalidArgument(msg) => {
                write!(f, "invalid argument: {msg}")
            }
            Self::Serialize(msg) => write!(f, "serialization error: {msg}"),
        }
    }
}

impl std::error::Error for GenesisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GenesisError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for GenesisError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialize(e.to_string())
    }
}
