//! Word translation lookup

use std::collections::HashMap;

use tracing::debug;

/// One-directional word translation map
///
/// Later additions for the same source word replace earlier ones.
#[derive(Debug, Clone, Default)]
pub struct Translator {
    words: HashMap<String, String>,
}

impl Translator {
    /// Create an empty translator
    pub fn new() -> Self {
        Self {
            words: HashMap::new(),
        }
    }

    /// Add the translation from `from` to `to`
    pub fn add_word(&mut self, from: impl Into<String>, to: impl Into<String>) {
        let from = from.into();
        debug!(%from, "Translator::add_word: called");
        self.words.insert(from, to.into());
    }

    /// Look up the stored translation, if any
    pub fn translate(&self, from: &str) -> Option<&str> {
        self.words.get(from).map(String::as_str)
    }

    /// Number of stored translations
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the translator holds no translations
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
