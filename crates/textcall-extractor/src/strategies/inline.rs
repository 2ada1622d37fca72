//! Inline calls: `{"function": "name", "params": {...}}` embedded in prose

use crate::config::ExtractorConfig;
use crate::disambiguator::{context_window, Disambiguator};
use crate::error::{ExtractorError, Rejection};
use crate::parser::{parse_parameters, PayloadKeys};
use regex::Regex;
use textcall_domain::{Invocation, Strategy};
use tracing::debug;

/// Scans prose for compact single-line call fragments
///
/// The params fragment must be a flat object; nested braces are not matched.
#[derive(Debug, Clone)]
pub(crate) struct InlineStrategy {
    pattern: Regex,
    keys: PayloadKeys,
    disambiguator: Disambiguator,
    window_radius: usize,
}

impl InlineStrategy {
    pub fn new(config: &ExtractorConfig) -> Result<Self, ExtractorError> {
        let pattern = Regex::new(&format!(
            r#"\{{"{name}":[ \t]*"([^"\n]+)",[ \t]*"{params}":[ \t]*(\{{[^}}\n]+\}})\}}"#,
            name = regex::escape(&config.name_key),
            params = regex::escape(&config.params_key),
        ))?;

        Ok(Self {
            pattern,
            keys: PayloadKeys::from_config(config),
            disambiguator: Disambiguator::from_config(config),
            window_radius: config.window_radius,
        })
    }

    pub fn scan(&self, text: &str) -> Vec<Invocation> {
        self.pattern
            .captures_iter(text)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let name = caps.get(1)?.as_str();
                let fragment = caps.get(2)?.as_str();

                match self.accept(text, whole.start(), name, fragment) {
                    Ok(call) => Some(call),
                    Err(reason) => {
                        debug!("Skipping inline candidate at offset {}: {}", whole.start(), reason);
                        None
                    }
                }
            })
            .collect()
    }

    fn accept(
        &self,
        text: &str,
        at: usize,
        name: &str,
        fragment: &str,
    ) -> Result<Invocation, Rejection> {
        let parameters = parse_parameters(fragment, &self.keys)?;

        let window = context_window(text, at, self.window_radius);
        let score = self.disambiguator.score(window);
        if !score.is_invocation() {
            return Err(Rejection::Discussion(score));
        }

        Ok(Invocation::new(name, parameters, Strategy::InlineEmbedded)?)
    }
}
