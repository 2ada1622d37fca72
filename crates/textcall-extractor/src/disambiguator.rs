//! Separate executed calls from calls that are merely being talked about
//!
//! Inline JSON is the loosest signal the extractor accepts. A model that
//! explains "you could send `{"function": ...}`" produces the same fragment as
//! one that actually issues the call, so the text around the fragment is
//! scored with two small vocabularies before the candidate is kept.
//!
//! The heuristic is conservative: ties (including no cues at all) count as
//! discussion.

use crate::config::ExtractorConfig;
use std::fmt;

/// Cue counts for one disambiguation window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CueScore {
    /// Distinct invocation cues present
    pub invocation: usize,
    /// Distinct discussion cues present
    pub discussion: usize,
}

impl CueScore {
    /// Invocation wins only on a strict majority
    pub fn is_invocation(&self) -> bool {
        self.invocation > self.discussion
    }
}

impl fmt::Display for CueScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invocation cues: {}, discussion cues: {}",
            self.invocation, self.discussion
        )
    }
}

/// Lexical classifier for inline call candidates
#[derive(Debug, Clone)]
pub struct Disambiguator {
    invocation_cues: Vec<String>,
    discussion_cues: Vec<String>,
}

impl Disambiguator {
    /// Create a disambiguator from two cue vocabularies
    ///
    /// Cues are matched case-insensitively as substrings.
    pub fn new<I, D>(invocation_cues: I, discussion_cues: D) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        D: IntoIterator,
        D::Item: AsRef<str>,
    {
        Self {
            invocation_cues: normalize(invocation_cues),
            discussion_cues: normalize(discussion_cues),
        }
    }

    /// Build from the cue lists in an extractor configuration
    pub fn from_config(config: &ExtractorConfig) -> Self {
        Self::new(&config.invocation_cues, &config.discussion_cues)
    }

    /// Count which cues occur in the window
    ///
    /// Each cue counts at most once however often it repeats.
    pub fn score(&self, window: &str) -> CueScore {
        let window = window.to_lowercase();

        CueScore {
            invocation: count_present(&window, &self.invocation_cues),
            discussion: count_present(&window, &self.discussion_cues),
        }
    }

    /// Whether the window reads as an executed call
    pub fn classify(&self, window: &str) -> bool {
        self.score(window).is_invocation()
    }
}

impl Default for Disambiguator {
    fn default() -> Self {
        Self::from_config(&ExtractorConfig::default())
    }
}

fn count_present(window: &str, cues: &[String]) -> usize {
    cues.iter().filter(|cue| window.contains(cue.as_str())).count()
}

fn normalize<T>(cues: T) -> Vec<String>
where
    T: IntoIterator,
    T::Item: AsRef<str>,
{
    let mut out: Vec<String> = Vec::new();
    for cue in cues {
        let cue = cue.as_ref().trim().to_lowercase();
        if !cue.is_empty() && !out.contains(&cue) {
            out.push(cue);
        }
    }
    out
}

/// Slice `radius` characters either side of byte offset `at`
///
/// The window is clipped to the text and measured in characters, so it never
/// splits a multi-byte code point. An `at` past the end or inside a code
/// point is moved back to the nearest char boundary.
pub fn context_window(text: &str, at: usize, radius: usize) -> &str {
    let mut at = at.min(text.len());
    while !text.is_char_boundary(at) {
        at -= 1;
    }

    let start = text[..at]
        .char_indices()
        .rev()
        .take(radius)
        .last()
        .map_or(at, |(i, _)| i);
    let end = text[at..]
        .char_indices()
        .nth(radius)
        .map_or(text.len(), |(i, _)| at + i);

    &text[start..end]
}
