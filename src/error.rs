//! Error types for loading scenarios and writing snapshot output.
//!
//! The per-tick physics path is total and never returns these.

use std::fmt;

/// Errors that can occur while loading a scenario or streaming snapshots.
#[derive(Debug)]
pub enum SimError {
    /// Failed to read or write a file or stream.
    Io(std::io::Error),
    /// Scenario file is not valid TOML for the expected layout.
    Parse(toml::de::Error),
    /// Snapshot could not be encoded as JSON.
    Encode(serde_json::Error),
    /// Parsed values that the simulation cannot run with.
    Invalid(String),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::Io(e) => write!(f, "I/O error: {}", e),
            SimError::Parse(e) => write!(f, "Failed to parse scenario: {}", e),
            SimError::Encode(e) => write!(f, "Failed to encode snapshot: {}", e),
            SimError::Invalid(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for SimError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimError::Io(e) => Some(e),
            SimError::Parse(e) => Some(e),
            SimError::Encode(e) => Some(e),
            SimError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for SimError {
    fn from(e: std::io::Error) -> Self {
        SimError::Io(e)
    }
}

impl From<toml::de::Error> for SimError {
    fn from(e: toml::de::Error) -> Self {
        SimError::Parse(e)
    }
}

impl From<serde_json::Error> for SimError {
    fn from(e: serde_json::Error) -> Self {
        SimError::Encode(e)
    }
}
