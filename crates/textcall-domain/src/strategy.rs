//! Strategy module - pattern families and their confidence tiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// The pattern family that recognized an invocation
///
/// Strategies are tried in descending order of reliability. Each carries a
/// fixed confidence; scores are never blended or recomputed.
/// - MarkerDelimited: explicit sentinel protocol
/// - FencedBlock: JSON inside a code fence
/// - InlineEmbedded: compact JSON fragment in prose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    /// `TOOL_CALL_START` / `TOOL_CALL_END` sentinels
    #[serde(rename = "marker")]
    MarkerDelimited,

    /// ```` ```json ```` fenced payload
    #[serde(rename = "fenced")]
    FencedBlock,

    /// `{"function": ..., "params": {...}}` inside a sentence
    #[serde(rename = "inline")]
    InlineEmbedded,
}

impl Strategy {
    /// All strategies in cascade order
    pub const ALL: [Strategy; 3] = [
        Strategy::MarkerDelimited,
        Strategy::FencedBlock,
        Strategy::InlineEmbedded,
    ];

    /// Fixed confidence attached to every invocation this strategy produces
    pub fn confidence(&self) -> f64 {
        match self {
            Strategy::MarkerDelimited => 1.0,
            Strategy::FencedBlock => 0.8,
            Strategy::InlineEmbedded => 0.6,
        }
    }

    /// Get the strategy name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::MarkerDelimited => "marker",
            Strategy::FencedBlock => "fenced",
            Strategy::InlineEmbedded => "inline",
        }
    }

    /// Parse a strategy from its short name
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "marker" => Some(Strategy::MarkerDelimited),
            "fenced" => Some(Strategy::FencedBlock),
            "inline" => Some(Strategy::InlineEmbedded),
            _ => None,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid strategy: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cascade_order_is_descending_confidence() {
        let confidences: Vec<f64> = Strategy::ALL.iter().map(|s| s.confidence()).collect();
        assert_eq!(confidences, vec![1.0, 0.8, 0.6]);
    }

    #[test]
    fn test_strategy_parsing() {
        assert_eq!(Strategy::parse("marker"), Some(Strategy::MarkerDelimited));
        assert_eq!(Strategy::parse("FENCED"), Some(Strategy::FencedBlock));
        assert_eq!("inline".parse::<Strategy>(), Ok(Strategy::InlineEmbedded));
        assert!("regex".parse::<Strategy>().is_err());
    }

    #[test]
    fn test_display_matches_serde_name() {
        for strategy in Strategy::ALL {
            let json = serde_json::to_string(&strategy).unwrap();
            assert_eq!(json, format!("\"{}\"", strategy));
        }
    }
}
