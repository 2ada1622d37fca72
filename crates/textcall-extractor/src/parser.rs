//! Parse candidate payloads into invocations

use crate::config::ExtractorConfig;
use crate::error::Rejection;
use serde_json::Value;
use textcall_domain::{Invocation, Parameters, Strategy};

/// Payload key names shared by the structured strategies
#[derive(Debug, Clone)]
pub(crate) struct PayloadKeys {
    pub name: String,
    pub params: String,
}

impl PayloadKeys {
    pub fn from_config(config: &ExtractorConfig) -> Self {
        Self {
            name: config.name_key.clone(),
            params: config.params_key.clone(),
        }
    }
}

/// Parse a complete call payload: `{"function": "...", "params": {...}}`
///
/// Extra keys are ignored.
pub(crate) fn parse_payload(
    raw: &str,
    keys: &PayloadKeys,
    strategy: Strategy,
) -> Result<Invocation, Rejection> {
    let json: Value = serde_json::from_str(raw.trim())?;

    let Value::Object(mut obj) = json else {
        return Err(Rejection::NotAnObject);
    };

    let name = match obj.remove(&keys.name) {
        Some(Value::String(name)) => name,
        _ => return Err(Rejection::MissingName(keys.name.clone())),
    };

    let parameters = match obj.remove(&keys.params) {
        Some(Value::Object(params)) => params,
        _ => return Err(Rejection::MissingParameters(keys.params.clone())),
    };

    Ok(Invocation::new(name, parameters, strategy)?)
}

/// Parse a bare parameters fragment: `{"message": "Hello!"}`
pub(crate) fn parse_parameters(raw: &str, keys: &PayloadKeys) -> Result<Parameters, Rejection> {
    match serde_json::from_str::<Value>(raw)? {
        Value::Object(params) => Ok(params),
        _ => Err(Rejection::MissingParameters(keys.params.clone())),
    }
}
