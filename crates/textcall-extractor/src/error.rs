//! Error types for the Extractor

use crate::disambiguator::CueScore;
use textcall_domain::InvocationError;
use thiserror::Error;

/// Errors that can occur while building an extractor or loading its configuration
///
/// Extraction itself never fails; these only surface at construction time.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A protocol literal produced an invalid pattern
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// I/O error while reading a configuration file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Why a candidate region was discarded
///
/// Rejections are logged and dropped; they are never returned to callers.
#[derive(Error, Debug)]
pub(crate) enum Rejection {
    /// Payload is not valid JSON
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// Payload parsed but is not a JSON object
    #[error("payload is not a JSON object")]
    NotAnObject,

    /// Function-name field missing or not a string
    #[error("missing or non-string '{0}' field")]
    MissingName(String),

    /// Parameters field missing or not an object
    #[error("missing or non-object '{0}' field")]
    MissingParameters(String),

    /// Domain invariant violated (empty name)
    #[error(transparent)]
    Invalid(#[from] InvocationError),

    /// Surrounding text reads as discussion rather than a call
    #[error("surrounding text reads as discussion ({0})")]
    Discussion(CueScore),
}
