//! Rule-based tokenizer/POS-tagger backends, one per supported language.

use smol_str::SmolStr;

use super::NlLanguage;
use super::lexicon::{self, Lexicon};
use super::token::{NlpToken, PosTag};

/// A natural-language tokenizer producing tagged tokens.
pub trait Tokenizer: Send + Sync {
    fn language(&self) -> NlLanguage;
    fn tokenize(&self, text: &str) -> Vec<NlpToken>;
}

/// Get the backend for a language. Backends are static; each language gets
/// a distinct one (distinct lexicon and lemmatizer rules).
pub fn tokenizer_for(language: NlLanguage) -> &'static dyn Tokenizer {
    static EN: RuleTagger = RuleTagger::new(NlLanguage::English, &lexicon::ENGLISH);
    static DE: RuleTagger = RuleTagger::new(NlLanguage::German, &lexicon::GERMAN);
    static FR: RuleTagger = RuleTagger::new(NlLanguage::French, &lexicon::FRENCH);
    static ES: RuleTagger = RuleTagger::new(NlLanguage::Spanish, &lexicon::SPANISH);
    static IT: RuleTagger = RuleTagger::new(NlLanguage::Italian, &lexicon::ITALIAN);
    static PT: RuleTagger = RuleTagger::new(NlLanguage::Portuguese, &lexicon::PORTUGUESE);
    match language {
        NlLanguage::English => &EN,
        NlLanguage::German => &DE,
        NlLanguage::French => &FR,
        NlLanguage::Spanish => &ES,
        NlLanguage::Italian => &IT,
        NlLanguage::Portuguese => &PT,
    }
}

/// Lexicon-plus-suffix-heuristics tagger.
pub struct RuleTagger {
    language: NlLanguage,
    lexicon: &'static Lexicon,
}

impl RuleTagger {
    pub const fn new(language: NlLanguage, lexicon: &'static Lexicon) -> Self {
        Self { language, lexicon }
    }

    fn tag_word(&self, word: &str, lower: &str) -> Vec<PosTag> {
        let lex = self.lexicon;
        let mut tags = Vec::new();

        if word.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',') {
            return vec![PosTag::Numeral];
        }

        // Model identifiers referenced inside free text ("FR_01", "uc2Step")
        // are proper nouns for matching purposes.
        if is_model_identifier(word) {
            return vec![PosTag::ProperNoun, PosTag::Symbol];
        }

        if lex.determiners.contains(&lower) {
            push(&mut tags, PosTag::Determiner);
        }
        if lex.pronouns.contains(&lower) {
            push(&mut tags, PosTag::Pronoun);
        }
        if lex.adpositions.contains(&lower) {
            push(&mut tags, PosTag::Adposition);
        }
        if lex.coord_conjunctions.contains(&lower) {
            push(&mut tags, PosTag::CoordConjunction);
        }
        if lex.subord_conjunctions.contains(&lower) {
            push(&mut tags, PosTag::SubordConjunction);
        }
        if lex.auxiliaries.contains(&lower) {
            push(&mut tags, PosTag::Auxiliary);
            push(&mut tags, PosTag::Verb);
        }
        if lex.adverbs.contains(&lower) {
            push(&mut tags, PosTag::Adverb);
        }

        // Open classes via suffixes; several may apply, ambiguity stays.
        if tags.is_empty() {
            if lex.adverb_suffixes.iter().any(|s| lower.ends_with(s)) {
                push(&mut tags, PosTag::Adverb);
            }
            if lex.adjective_suffixes.iter().any(|s| lower.ends_with(s)) {
                push(&mut tags, PosTag::Adjective);
            }
            if lex.noun_suffixes.iter().any(|s| lower.ends_with(s)) {
                push(&mut tags, PosTag::Noun);
            }
            if lex.verb_suffixes.iter().any(|s| lower.ends_with(s)) {
                push(&mut tags, PosTag::Verb);
            }
            if word.chars().next().is_some_and(char::is_uppercase) {
                push(&mut tags, PosTag::ProperNoun);
            }
        }

        // Unknown open-class word: could be noun or verb.
        if tags.is_empty() || tags == [PosTag::ProperNoun] {
            push(&mut tags, PosTag::Noun);
            push(&mut tags, PosTag::Verb);
        }
        tags
    }

    fn lemma(&self, lower: &str) -> SmolStr {
        let stripped = match self.language {
            NlLanguage::English => english_lemma(lower),
            // Romance/German lemmatization here is plural stripping only;
            // the closed-class lists carry the inflected forms that matter.
            _ => {
                if lower.len() > 3 && lower.ends_with('s') {
                    &lower[..lower.len() - 1]
                } else {
                    lower
                }
            }
        };
        SmolStr::new(stripped)
    }
}

impl Tokenizer for RuleTagger {
    fn language(&self) -> NlLanguage {
        self.language
    }

    fn tokenize(&self, text: &str) -> Vec<NlpToken> {
        let mut tokens = Vec::new();
        for raw in split_words(text) {
            let lower = raw.to_lowercase();
            let (lemma, tags) = if raw.chars().all(|c| !c.is_alphanumeric()) {
                (SmolStr::new(&raw), vec![PosTag::Punctuation])
            } else {
                (self.lemma(&lower), self.tag_word(&raw, &lower))
            };
            tokens.push(NlpToken {
                text: SmolStr::new(&raw),
                lemma,
                tags,
            });
        }
        tokens
    }
}

/// Split into word and punctuation tokens. Identifier characters (including
/// `_` and digits) stay glued so model ids survive as single tokens.
fn split_words(text: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    for c in text.chars() {
        if c.is_alphanumeric() || c == '_' || c == '\'' {
            current.push(c);
        } else {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            if !c.is_whitespace() {
                words.push(c.to_string());
            }
        }
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// Does this word look like a DSL identifier rather than prose? True for
/// mixed-case/underscore/digit forms like `FR_01` that are valid
/// identifiers but not plain capitalized words.
fn is_model_identifier(word: &str) -> bool {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !unicode_ident::is_xid_start(first) && first != '_' {
        return false;
    }
    if !chars.clone().all(|c| unicode_ident::is_xid_continue(c)) {
        return false;
    }
    word.contains('_') || word.chars().any(|c| c.is_ascii_digit())
}

fn push(tags: &mut Vec<PosTag>, tag: PosTag) {
    if !tags.contains(&tag) {
        tags.push(tag);
    }
}

fn english_lemma(lower: &str) -> &str {
    if let Some(stem) = lower.strip_suffix("ies")
        && stem.len() >= 2
    {
        // "entities" -> "entit"; close enough for lemma comparison since
        // both sides go through the same rules.
        return stem;
    }
    if let Some(stem) = lower.strip_suffix("sses") {
        return &lower[..stem.len() + 2];
    }
    if let Some(stem) = lower.strip_suffix("ing")
        && stem.len() >= 3
    {
        return stem;
    }
    if let Some(stem) = lower.strip_suffix("ed")
        && stem.len() >= 3
    {
        return stem;
    }
    if let Some(stem) = lower.strip_suffix('s')
        && stem.len() >= 3
        && !stem.ends_with('s')
        && !stem.ends_with('u')
    {
        return stem;
    }
    lower
}
