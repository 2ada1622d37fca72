//! Core Extractor implementation

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::strategies::{FencedStrategy, InlineStrategy, MarkerStrategy};
use textcall_domain::{Invocation, Strategy};
use tracing::debug;

/// The Extractor recovers tool calls from free-form model output
///
/// Strategies run in descending order of reliability and the first one that
/// recognizes anything wins; weaker strategies are never mixed in. The
/// extractor holds only compiled patterns, so one instance can serve any
/// number of threads.
#[derive(Debug, Clone)]
pub struct Extractor {
    config: ExtractorConfig,
    marker: MarkerStrategy,
    fenced: FencedStrategy,
    inline: InlineStrategy,
}

impl Extractor {
    /// Create a new Extractor, validating the config and compiling its patterns
    pub fn new(config: ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate()?;

        Ok(Self {
            marker: MarkerStrategy::new(&config)?,
            fenced: FencedStrategy::new(&config)?,
            inline: InlineStrategy::new(&config)?,
            config,
        })
    }

    /// Create an Extractor for the default `TOOL_CALL_START` / `TOOL_CALL_END` protocol
    pub fn with_defaults() -> Result<Self, ExtractorError> {
        Self::new(ExtractorConfig::default())
    }

    /// Active configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract invocations from text
    ///
    /// Returns the result of the first strategy that finds at least one call,
    /// in source order, or an empty vector. Malformed candidates are skipped.
    pub fn extract(&self, text: &str) -> Vec<Invocation> {
        let found = Strategy::ALL
            .into_iter()
            .map(|strategy| (strategy, self.extract_with(strategy, text)))
            .find(|(_, calls)| !calls.is_empty());

        match found {
            Some((strategy, calls)) => {
                debug!("Strategy '{}' matched {} invocation(s)", strategy, calls.len());
                calls
            }
            None => {
                debug!("No invocations found in {} chars of text", text.len());
                Vec::new()
            }
        }
    }

    /// Run a single strategy, bypassing the cascade
    pub fn extract_with(&self, strategy: Strategy, text: &str) -> Vec<Invocation> {
        match strategy {
            Strategy::MarkerDelimited => self.marker.scan(text),
            Strategy::FencedBlock => self.fenced.scan(text),
            Strategy::InlineEmbedded => self.inline.scan(text),
        }
    }
}
