//! textcall Domain Layer
//!
//! This crate contains the domain model shared by the extraction engine and
//! its callers. It is deliberately small: one entity and the confidence tiers
//! that qualify it.
//!
//! ## Key Concepts
//!
//! - **Invocation**: a recovered tool/function call (name + parameters + confidence)
//! - **Strategy**: the pattern family that recognized a call, which fixes its confidence
//!
//! ## Tiers
//!
//! | Strategy          | Confidence |
//! |-------------------|------------|
//! | `MarkerDelimited` | 1.0        |
//! | `FencedBlock`     | 0.8        |
//! | `InlineEmbedded`  | 0.6        |

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod invocation;
pub mod strategy;

// Re-exports for convenience
pub use invocation::{Invocation, InvocationError, Parameters};
pub use strategy::Strategy;
