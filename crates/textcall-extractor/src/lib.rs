//! textcall Extractor
//!
//! Recovers structured tool calls from the text of language models that have
//! no native tool-calling support.
//!
//! # Overview
//!
//! A model prompted to call tools in plain text does so with varying
//! discipline. The Extractor tries three pattern families, most reliable
//! first, and trusts the first one that matches:
//!
//! | Strategy         | Shape                                           | Confidence |
//! |------------------|-------------------------------------------------|------------|
//! | Marker-delimited | `TOOL_CALL_START` / JSON / `TOOL_CALL_END`      | 1.0        |
//! | Fenced block     | ```` ```json ```` fence around a JSON object    | 0.8        |
//! | Inline           | `{"function": ..., "params": {...}}` in a line  | 0.6        |
//!
//! Inline candidates are additionally checked by the [`Disambiguator`], which
//! rejects fragments the model is only talking about.
//!
//! # Architecture
//!
//! ```text
//! model text → Extractor → [marker | fenced | inline] → Vec<Invocation>
//!                                               ↑
//!                                        Disambiguator
//! ```
//!
//! Extraction is infallible: malformed payloads are logged at `debug` and
//! skipped.
//!
//! # Example Usage
//!
//! ```
//! use textcall_extractor::{Extractor, ExtractorConfig};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let extractor = Extractor::new(ExtractorConfig::default())?;
//!
//! let text = "Saving that.\n\
//!             TOOL_CALL_START\n\
//!             {\"function\": \"core_memory_append\", \"params\": {\"content\": \"likes pizza\"}}\n\
//!             TOOL_CALL_END\n";
//!
//! let calls = extractor.extract(text);
//! assert_eq!(calls.len(), 1);
//! assert_eq!(calls[0].name(), "core_memory_append");
//! assert_eq!(calls[0].confidence(), 1.0);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]

mod config;
mod disambiguator;
mod error;
mod extractor;
mod parser;
mod strategies;


pub use config::ExtractorConfig;
pub use disambiguator::{context_window, CueScore, Disambiguator};
pub use error::ExtractorError;
pub use extractor::Extractor;
pub use textcall_domain::{Invocation, Parameters, Strategy};

use std::sync::LazyLock;

static DEFAULT_EXTRACTOR: LazyLock<Extractor> = LazyLock::new(|| {
    Extractor::with_defaults().expect("default extractor configuration is valid")
});

/// Extract invocations using the default configuration
///
/// The default extractor is compiled once per process and shared read-only.
pub fn extract(text: &str) -> Vec<Invocation> {
    DEFAULT_EXTRACTOR.extract(text)
}
