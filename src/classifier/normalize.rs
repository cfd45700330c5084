use std::sync::LazyLock;

use regex::Regex;

static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z0-9']+").expect("Invalid word token regex"));

/// Lower-cased view of caller text with restartable word tokenization.
///
/// The same input always yields the same token sequence, so classification
/// stays byte-for-byte reproducible.
#[derive(Debug, Clone)]
pub struct NormalizedText {
    lowered: String,
}

impl NormalizedText {
    pub fn new(raw: &str) -> Self {
        Self {
            lowered: raw.to_lowercase(),
        }
    }

    /// True for empty or whitespace-only input. Resolvers short-circuit to
    /// their default result without scoring when this holds.
    pub fn is_empty(&self) -> bool {
        self.lowered.trim().is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.lowered
    }

    /// Substring containment against the lowered text.
    pub fn contains(&self, needle: &str) -> bool {
        self.lowered.contains(needle)
    }

    /// Finite, restartable sequence of word tokens.
    pub fn tokens(&self) -> impl Iterator<Item = &str> + '_ {
        WORD_RE.find_iter(&self.lowered).map(|m| m.as_str())
    }
}
