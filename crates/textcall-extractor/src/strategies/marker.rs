//! Marker-delimited calls: `TOOL_CALL_START` ... `TOOL_CALL_END`

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::parser::{parse_payload, PayloadKeys};
use regex::Regex;
use textcall_domain::{Invocation, Strategy};
use tracing::debug;

/// Scans for payloads enclosed by start/end sentinels, each alone on its line
#[derive(Debug, Clone)]
pub(crate) struct MarkerStrategy {
    pattern: Regex,
    start_marker: String,
    keys: PayloadKeys,
}

impl MarkerStrategy {
    pub fn new(config: &ExtractorConfig) -> Result<Self, ExtractorError> {
        let pattern = Regex::new(&format!(
            r"(?ms)^[ \t]*{start}\s*\n(.*?)\n[ \t]*{end}[ \t\r]*$",
            start = regex::escape(&config.start_marker),
            end = regex::escape(&config.end_marker),
        ))?;

        Ok(Self {
            pattern,
            start_marker: config.start_marker.clone(),
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
                    Strategy::MarkerDelimited,
                ) {
                    Ok(call) => Some(call),
                    Err(reason) => {
                        debug!("Skipping marker candidate at offset {}: {}", body.start(), reason);
                        None
                    }
                }
            })
            .collect()
    }

    /// Drop everything up to the last start sentinel inside a region
    ///
    /// An unterminated start followed by a closed pair is matched as one long
    /// region; the closed occurrence is the part after the final start line.
    fn innermost<'a>(&self, body: &'a str) -> &'a str {
        let mut offset = 0;
        let mut payload_start = 0;
        for line in body.split_inclusive('\n') {
            offset += line.len();
            if line.trim() == self.start_marker {
                payload_start = offset;
            }
        }
        &body[payload_start..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn strategy() -> MarkerStrategy {
        MarkerStrategy::new(&ExtractorConfig::default()).unwrap()
    }

    #[test]
    fn test_single_block() {
        let text = r#"
I'll remember that for you.

TOOL_CALL_START
{
  "function": "core_memory_append",
  "params": {
    "name": "user_facts",
    "content": "likes pizza"
  }
}
TOOL_CALL_END

Done! I've updated your memory.
"#;

        let calls = strategy().scan(text);
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].name(), "core_memory_append");
        assert_eq!(calls[0].parameter("content"), Some(&json!("likes pizza")));
        assert_eq!(calls[0].confidence(), 1.0);
    }

    #[test]
    fn test_crlf_line_endings() {
        let text = "TOOL_CALL_START\r\n{\"function\": \"ping\", \"params\": {}}\r\nTOOL_CALL_END\r\n";
        let calls = strategy().scan(text);
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].name(), "ping");
    }

    #[test]
    fn test_indented_markers() {
        let text = "  TOOL_CALL_START\n  {\"function\": \"ping\", \"params\": {}}\n  TOOL_CALL_END";
        assert_eq!(strategy().scan(text).len(), 1);
    }

    #[test]
    fn test_unterminated_marker() {
        let text = "TOOL_CALL_START\n{\"function\": \"ping\", \"params\": {}}\n";
        assert!(strategy().scan(text).is_empty());
    }

    #[test]
    fn test_unterminated_then_closed_pair() {
        let text = "TOOL_CALL_START\n{\"function\": \"lost\"\n\
                    TOOL_CALL_START\n{\"function\": \"kept\", \"params\": {}}\nTOOL_CALL_END\n";
        let calls = strategy().scan(text);
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].name(), "kept");
    }

    #[test]
    fn test_markers_must_own_their_lines() {
        let text = "Sending TOOL_CALL_START\n{\"function\": \"ping\", \"params\": {}}\nTOOL_CALL_END now";
        assert!(strategy().scan(text).is_empty());
    }

    #[test]
    fn test_markers_are_case_sensitive() {
        let text = "tool_call_start\n{\"function\": \"ping\", \"params\": {}}\ntool_call_end";
        assert!(strategy().scan(text).is_empty());
    }

    #[test]
    fn test_broken_block_does_not_stop_scan() {
        let text = "TOOL_CALL_START\n{\"function\": \"broken\",\nTOOL_CALL_END\n\
                    TOOL_CALL_START\n{\"params\": {}}\nTOOL_CALL_END\n\
                    TOOL_CALL_START\n{\"function\": \"ok\", \"params\": {\"n\": 1}}\nTOOL_CALL_END\n";
        let calls = strategy().scan(text);
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].name(), "ok");
    }

    #[test]
    fn test_custom_markers() {
        let config = ExtractorConfig {
            start_marker: "<<CALL>>".to_string(),
            end_marker: "<</CALL>>".to_string(),
            ..ExtractorConfig::default()
        };
        let strategy = MarkerStrategy::new(&config).unwrap();

        let text = "<<CALL>>\n{\"function\": \"ping\", \"params\": {}}\n<</CALL>>";
        assert_eq!(strategy.scan(text).len(), 1);

        let text = "TOOL_CALL_START\n{\"function\": \"ping\", \"params\": {}}\nTOOL_CALL_END";
        assert!(strategy.scan(text).is_empty());
    }
}
