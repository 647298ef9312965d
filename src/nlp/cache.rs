use std::sync::Arc;

use parking_lot::Mutex;
use rustc_hash::FxHashMap;

use super::tagger::tokenizer_for;
use super::token::NlpToken;
use super::NlLanguage;

/// Memoization cache for tokenization results.
///
/// Keyed by (language, whitespace-normalized text); append-only, so entries
/// never invalidate. The cache is injected into the linguistic engine
/// rather than living in a module-level singleton, so tests get isolated
/// instances.
#[derive(Default)]
pub struct TokenCache {
    entries: Mutex<FxHashMap<(NlLanguage, String), Arc<[NlpToken]>>>,
}

impl TokenCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenize `text`, reusing a previous result for identical input.
    pub fn tokenize(&self, language: NlLanguage, text: &str) -> Arc<[NlpToken]> {
        let key = (language, normalize(text));
        if let Some(found) = self.entries.lock().get(&key) {
            return Arc::clone(found);
        }
        let tokens: Arc<[NlpToken]> = tokenizer_for(language).tokenize(&key.1).into();
        self.entries
            .lock()
            .entry(key)
            .or_insert_with(|| Arc::clone(&tokens));
        tokens
    }

    /// Number of distinct (language, text) entries.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

/// Trim and collapse internal whitespace; token content is unaffected, so
/// texts differing only in spacing share a cache entry.
fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
