//! Extraction command implementation.

use crate::cli::Cli;
use crate::error::Result;
use crate::output::Formatter;
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use textcall_extractor::{Extractor, ExtractorConfig};
use tracing::{debug, info};

/// Build an extractor from an optional TOML config file.
pub fn load_extractor(config_path: Option<&Path>) -> Result<Extractor> {
    let config = match config_path {
        Some(path) => {
            info!("Loading extractor config from {}", path.display());
            ExtractorConfig::from_file(path)?
        }
        None => ExtractorConfig::default(),
    };

    Ok(Extractor::new(config)?)
}

/// Read model output from a file, or stdin when the path is absent or "-".
pub fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => Ok(fs::read_to_string(path)?),
        _ => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

/// Extract invocations from `text` and render them.
pub fn execute_extract(
    cli: &Cli,
    extractor: &Extractor,
    text: &str,
    formatter: &Formatter,
) -> Result<String> {
    let calls = match cli.strategy {
        Some(strategy) => extractor.extract_with(strategy.into(), text),
        None => extractor.extract(text),
    };

    debug!("Extracted {} invocation(s)", calls.len());
    formatter.format_invocations(&calls)
}
