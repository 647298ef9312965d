//! Natural-language tokenization and part-of-speech tagging.
//!
//! The linguistic rule engine works on token streams, not raw strings. Each
//! supported language dispatches to its own rule-based tagger backend; a
//! token keeps the *set* of possible universal POS tags so that ambiguity
//! is preserved and resolved only at pattern-match time.
//!
//! Tokenization of identical strings dominates repeated validation cost, so
//! results go through an injected [`TokenCache`] keyed by (language,
//! whitespace-normalized text).

mod cache;
mod lexicon;
mod tagger;
mod token;

pub use cache::TokenCache;
pub use tagger::{Tokenizer, tokenizer_for};
pub use token::{NlpToken, PosTag};

/// Natural language of a System's free text. English is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NlLanguage {
    #[default]
    English,
    German,
    French,
    Spanish,
    Italian,
    Portuguese,
}

impl NlLanguage {
    pub fn as_str(self) -> &'static str {
        match self {
            NlLanguage::English => "English",
            NlLanguage::German => "German",
            NlLanguage::French => "French",
            NlLanguage::Spanish => "Spanish",
            NlLanguage::Italian => "Italian",
            NlLanguage::Portuguese => "Portuguese",
        }
    }
}
