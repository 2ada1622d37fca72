//! Configuration for the Extractor

use crate::error::ExtractorError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration for the Extractor
///
/// Every field has a default, so a TOML file only needs to name what it overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Sentinel opening a marker-delimited call (alone on its line)
    pub start_marker: String,

    /// Sentinel closing a marker-delimited call (alone on its line)
    pub end_marker: String,

    /// Annotation tags accepted after an opening code fence
    pub fence_tags: Vec<String>,

    /// Payload key holding the function name
    pub name_key: String,

    /// Payload key holding the parameters object
    pub params_key: String,

    /// Characters of context taken on each side of an inline candidate
    pub window_radius: usize,

    /// Words signalling that a call is being made
    pub invocation_cues: Vec<String>,

    /// Words signalling hypothetical or explanatory framing
    pub discussion_cues: Vec<String>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            start_marker: "TOOL_CALL_START".to_string(),
            end_marker: "TOOL_CALL_END".to_string(),
            fence_tags: vec!["json".to_string(), "tool_call".to_string()],
            name_key: "function".to_string(),
            params_key: "params".to_string(),
            window_radius: 100,
            invocation_cues: ["using", "calling", "execute", "run", "invoke"]
                .into_iter()
                .map(String::from)
                .collect(),
            discussion_cues: ["could", "might", "would", "should", "example"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ExtractorError> {
        for (field, marker) in [
            ("start_marker", &self.start_marker),
            ("end_marker", &self.end_marker),
        ] {
            if marker.is_empty() {
                return Err(invalid(format!("{} must not be empty", field)));
            }
            if marker.chars().any(char::is_whitespace) {
                return Err(invalid(format!("{} must not contain whitespace", field)));
            }
        }
        if self.start_marker == self.end_marker {
            return Err(invalid("start_marker and end_marker must differ".to_string()));
        }

        if self.name_key.is_empty() || self.params_key.is_empty() {
            return Err(invalid("name_key and params_key must not be empty".to_string()));
        }
        if self.name_key == self.params_key {
            return Err(invalid("name_key and params_key must differ".to_string()));
        }

        if let Some(tag) = self
            .fence_tags
            .iter()
            .find(|t| t.is_empty() || t.chars().any(char::is_whitespace))
        {
            return Err(invalid(format!(
                "fence tag {:?} must be non-empty and contain no whitespace",
                tag
            )));
        }

        if self.invocation_cues.iter().any(|c| c.trim().is_empty())
            || self.discussion_cues.iter().any(|c| c.trim().is_empty())
        {
            return Err(invalid("cue words must not be blank".to_string()));
        }

        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ExtractorError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ExtractorError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ExtractorError> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }
}

fn invalid(message: String) -> ExtractorError {
    ExtractorError::Config(message)
}
