//! Invocation module - a tool call recovered from model output

use crate::strategy::Strategy;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use serde_json::{Map, Value};
use thiserror::Error;

/// Named call parameters, kept in source key order
pub type Parameters = Map<String, Value>;

/// Errors raised when constructing an invocation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvocationError {
    /// The function name was empty
    #[error("Invocation name must not be empty")]
    EmptyName,
}

/// A single tool/function call recovered from free-form text
///
/// Invocations are immutable once built. The confidence is derived from the
/// originating [`Strategy`] and cannot be set independently.
///
/// # Examples
///
/// ```
/// use textcall_domain::{Invocation, Parameters, Strategy};
///
/// let mut params = Parameters::new();
/// params.insert("query".to_string(), "pizza".into());
///
/// let call = Invocation::new("archival_memory_search", params, Strategy::FencedBlock).unwrap();
/// assert_eq!(call.name(), "archival_memory_search");
/// assert_eq!(call.confidence(), 0.8);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    name: String,
    parameters: Parameters,
    strategy: Strategy,
}

impl Invocation {
    /// Create a new invocation
    ///
    /// Returns [`InvocationError::EmptyName`] if `name` is empty or only whitespace.
    pub fn new(
        name: impl Into<String>,
        parameters: Parameters,
        strategy: Strategy,
    ) -> Result<Self, InvocationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(InvocationError::EmptyName);
        }

        Ok(Self {
            name,
            parameters,
            strategy,
        })
    }

    /// Name of the requested function
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Named parameters for the call
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Look up a single parameter
    pub fn parameter(&self, key: &str) -> Option<&Value> {
        self.parameters.get(key)
    }

    /// Strategy that recognized this call
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Confidence in [0.0, 1.0], fixed by the strategy
    pub fn confidence(&self) -> f64 {
        self.strategy.confidence()
    }
}

impl Serialize for Invocation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Invocation", 4)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("parameters", &self.parameters)?;
        state.serialize_field("confidence", &self.confidence())?;
        state.serialize_field("strategy", &self.strategy)?;
        state.end()
    }
}
