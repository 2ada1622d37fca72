//! Output formatting for the CLI.

use crate::error::Result;
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};
use textcall_domain::{Invocation, Strategy};

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON array of invocations
    Json,
    /// Table format
    Table,
    /// Function names only, one per line
    Quiet,
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format extracted invocations.
    pub fn format_invocations(&self, calls: &[Invocation]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(calls)?),
            OutputFormat::Table => self.format_table(calls),
            OutputFormat::Quiet => Ok(calls
                .iter()
                .map(Invocation::name)
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    fn format_table(&self, calls: &[Invocation]) -> Result<String> {
        if calls.is_empty() {
            return Ok(self.colorize("No tool calls found.", "yellow"));
        }

        let mut builder = Builder::default();
        builder.push_record(["Name", "Strategy", "Confidence", "Parameters"]);

        for call in calls {
            builder.push_record([
                call.name().to_string(),
                self.strategy_label(call.strategy()),
                format!("{:.1}", call.confidence()),
                serde_json::to_string(call.parameters())?,
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        Ok(table.to_string())
    }

    /// Strategy name, colored by tier.
    fn strategy_label(&self, strategy: Strategy) -> String {
        let color = match strategy {
            Strategy::MarkerDelimited => "green",
            Strategy::FencedBlock => "cyan",
            Strategy::InlineEmbedded => "yellow",
        };
        self.colorize(strategy.as_str(), color)
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use textcall_domain::Parameters;

    fn create_test_call() -> Invocation {
        let params: Parameters = json!({"message": "Hello!"}).as_object().cloned().unwrap();
        Invocation::new("send_message", params, Strategy::InlineEmbedded).unwrap()
    }

    #[test]
    fn test_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_invocations(&[create_test_call()]).unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value[0]["name"], "send_message");
        assert_eq!(value[0]["confidence"], 0.6);
        assert_eq!(value[0]["strategy"], "inline");
    }

    #[test]
    fn test_json_format_empty() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        assert_eq!(formatter.format_invocations(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_invocations(&[create_test_call()]).unwrap();
        assert!(output.contains("send_message"));
        assert!(output.contains("inline"));
        assert!(output.contains("0.6"));
        assert!(output.contains(r#"{"message":"Hello!"}"#));
    }

    #[test]
    fn test_table_format_empty() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_invocations(&[]).unwrap();
        assert_eq!(output, "No tool calls found.");
    }

    #[test]
    fn test_quiet_format() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let calls = vec![create_test_call(), create_test_call()];
        let output = formatter.format_invocations(&calls).unwrap();
        assert_eq!(output, "send_message\nsend_message");
    }

    #[test]
    fn test_no_color() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.error("boom"), "✗ boom");
    }
}
