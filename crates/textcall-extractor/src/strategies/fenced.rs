//! Fenced calls: a JSON object inside a ```` ```json ```` block

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::parser::{parse_payload, PayloadKeys};
use regex::Regex;
use textcall_domain::{Invocation, Strategy};
use tracing::debug;

/// Scans code fences, optionally tagged, whose body is a single JSON object
#[derive(Debug, Clone)]
pub(crate) struct FencedStrategy {
    pattern: Regex,
    opening: Regex,
    keys: PayloadKeys,
}

impl FencedStrategy {
    pub fn new(config: &ExtractorConfig) -> Result<Self, ExtractorError> {
        let tags = if config.fence_tags.is_empty() {
            String::new()
        } else {
            let alternatives: Vec<String> =
                config.fence_tags.iter().map(|t| regex::escape(t)).collect();
            format!("(?:{})?", alternatives.join("|"))
        };

        // The body stops at the first closing fence line, never crossing into the next block
        let pattern = Regex::new(&format!(
            r"(?ms)^[ \t]*```{tags}[ \t\r]*\n(.*?)^[ \t]*```[ \t\r]*$"
        ))?;
        let opening = Regex::new(&format!(r"^[ \t]*```{tags}[ \t\r]*$"))?;

        Ok(Self {
            pattern,
            opening,
            keys: PayloadKeys::from_config(config),
        })
    }

    pub fn scan(&self, text: &str) -> Vec<Invocation> {
        self.pattern
            .captures_iter(text)
            .filter_map(|caps| {
                let body = caps.get(1)?;
                match parse_payload(
                    self.innermost(body.as_str()),
                    &self.keys,
                    Strategy::FencedBlock,
                ) {
                    Ok(call) => Some(call),
                    Err(reason) => {
                        debug!("Skipping fenced candidate at offset {}: {}", body.start(), reason);
                        None
                    }
                }
            })
            .collect()
    }

    /// Drop everything up to the last opening fence line inside a region
    ///
    /// The closing fence of a block with a foreign tag (```` ```python ````)
    /// reads as a bare opening fence; the real payload follows the last
    /// opening line before the closing fence.
    fn innermost<'a>(&self, body: &'a str) -> &'a str {
        let mut offset = 0;
        let mut payload_start = 0;
        for line in body.split_inclusive('\n') {
            offset += line.len();
            if self.opening.is_match(line.trim_end_matches('\n')) {
                payload_start = offset;
            }
        }
        &body[payload_start..]
    }
}
