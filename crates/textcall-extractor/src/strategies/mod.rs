//! Pattern strategies, one per confidence tier
//!
//! Each strategy has the same contract: scan a text and return the
//! invocations it recognizes in source order. Candidates that fail to parse
//! are logged at `debug` and skipped.

mod fenced;
mod inline;
mod marker;

pub(crate) use fenced::FencedStrategy;
pub(crate) use inline::InlineStrategy;
pub(crate) use marker::MarkerStrategy;
