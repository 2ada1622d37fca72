//! textcall CLI - Extract tool calls from language model output.

use anyhow::Context;
use clap::Parser;
use textcall_cli::commands;
use textcall_cli::{Cli, Formatter};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing (log to stderr so stdout stays machine-readable)
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let formatter = Formatter::new(cli.format.into(), !cli.no_color);

    match run(&cli, &formatter) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("{}", formatter.error(&format!("{:#}", e)));
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli, formatter: &Formatter) -> anyhow::Result<String> {
    let extractor = commands::load_extractor(cli.config.as_deref())
        .context("failed to build extractor")?;

    let text = commands::read_input(cli.file.as_deref()).context("failed to read input")?;

    Ok(commands::execute_extract(cli, &extractor, &text, formatter)?)
}
