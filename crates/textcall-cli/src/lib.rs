//! textcall CLI library.
//!
//! This library provides the pieces of the `textcall` command: argument
//! parsing, input loading, and output formatting for extracted invocations.

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;

pub use cli::Cli;
pub use error::{CliError, Result};
pub use output::{Formatter, OutputFormat};
