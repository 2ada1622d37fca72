//! CLI argument definitions and parsing.

use clap::Parser;
use std::path::PathBuf;
use textcall_domain::Strategy;

/// textcall - Extract tool calls from language model output.
#[derive(Debug, Parser)]
#[command(name = "textcall")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// File containing model output (reads stdin when omitted or "-")
    pub file: Option<PathBuf>,

    /// Extractor configuration file (TOML)
    #[arg(short, long, env = "TEXTCALL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Run a single strategy instead of the cascade
    #[arg(short, long, value_enum)]
    pub strategy: Option<StrategyArg>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: CliFormat,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Log skipped candidates to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// JSON array (default)
    Json,
    /// Table format
    Table,
    /// Quiet format (names only)
    Quiet,
}

/// Strategy selection for `--strategy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum StrategyArg {
    /// TOOL_CALL_START / TOOL_CALL_END markers
    Marker,
    /// Fenced JSON blocks
    Fenced,
    /// Inline JSON fragments
    Inline,
}

impl From<CliFormat> for crate::output::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Json => crate::output::OutputFormat::Json,
            CliFormat::Table => crate::output::OutputFormat::Table,
            CliFormat::Quiet => crate::output::OutputFormat::Quiet,
        }
    }
}

impl From<StrategyArg> for Strategy {
    fn from(strategy: StrategyArg) -> Self {
        match strategy {
            StrategyArg::Marker => Strategy::MarkerDelimited,
            StrategyArg::Fenced => Strategy::FencedBlock,
            StrategyArg::Inline => Strategy::InlineEmbedded,
        }
    }
}
