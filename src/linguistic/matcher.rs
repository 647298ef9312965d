//! Pattern-part matching against token streams and raw id substrings.
//!
//! Matching is greedy per part: when several expansions of one part
//! succeed (element properties, fragment alternatives), the one consuming
//! the most input wins.

use smol_str::SmolStr;

use crate::ast::{ConceptClass, ConceptKind, PatternPart, RuleProperty};
use crate::base::DocumentId;
use crate::nlp::{NlLanguage, NlpToken, PosTag, TokenCache};
use crate::workspace::Workspace;

/// Everything a failing part *would* have accepted, for building the
/// detailed diagnostic.
#[derive(Debug, Clone, Default)]
pub struct Expectation {
    pub words: Vec<SmolStr>,
    pub tags: Vec<PosTag>,
    pub elements: Vec<(ConceptClass, RuleProperty)>,
    /// Unresolvable fragment references, by their written text.
    pub fragments: Vec<SmolStr>,
}

impl Expectation {
    /// Human-readable enumeration of the alternatives.
    pub fn describe(&self) -> String {
        let mut parts = Vec::new();
        for word in &self.words {
            parts.push(format!("word '{word}'"));
        }
        for tag in &self.tags {
            parts.push(format!("a {}", tag.display()));
        }
        for (class, property) in &self.elements {
            parts.push(format!("the {} of a {}", property.as_str(), class.display()));
        }
        for fragment in &self.fragments {
            parts.push(format!("fragment '{fragment}'"));
        }
        parts.join(" or ")
    }

    pub fn only_words(&self) -> bool {
        !self.words.is_empty()
            && self.tags.is_empty()
            && self.elements.is_empty()
            && self.fragments.is_empty()
    }

    pub fn only_elements(&self) -> bool {
        !self.elements.is_empty()
            && self.words.is_empty()
            && self.tags.is_empty()
            && self.fragments.is_empty()
    }
}

/// Why a pattern did not match.
#[derive(Debug, Clone)]
pub enum MatchFailure {
    /// A part found nothing acceptable at input position `at` (token index
    /// for token matching, byte offset for id matching).
    Mismatch { at: usize, expectation: Expectation },
    /// Every part matched but input remains beyond position `consumed`.
    Excess { consumed: usize },
}

/// Shared context for matching one property value.
pub struct Matcher<'a> {
    pub workspace: &'a Workspace,
    pub document: DocumentId,
    pub cache: &'a TokenCache,
    pub language: NlLanguage,
}

impl<'a> Matcher<'a> {
    // ========================================================================
    // TOKEN MATCHING (name/description properties)
    // ========================================================================

    /// Walk `parts` against `tokens` index-by-index.
    pub fn match_tokens(
        &self,
        parts: &[PatternPart],
        tokens: &[NlpToken],
    ) -> Result<(), MatchFailure> {
        let mut pos = 0;
        for part in parts {
            match self.match_part(part, tokens, pos) {
                Some(next) => pos = next,
                None => {
                    return Err(MatchFailure::Mismatch {
                        at: pos,
                        expectation: self.expectation_of(part),
                    });
                }
            }
        }
        if pos < tokens.len() {
            return Err(MatchFailure::Excess { consumed: pos });
        }
        Ok(())
    }

    /// The position after `part`, or `None` when nothing matches. Ambiguous
    /// expansions resolve to the longest match.
    fn match_part(&self, part: &PatternPart, tokens: &[NlpToken], pos: usize) -> Option<usize> {
        match part {
            PatternPart::Word(word) => self.match_surface(word, tokens, pos),
            PatternPart::PartOfSpeech(tag) => {
                (pos < tokens.len() && tokens[pos].has_tag(*tag)).then_some(pos + 1)
            }
            PatternPart::ElementProperty { class, property } => self
                .workspace
                .concepts_of(self.document, *class)
                .into_iter()
                .filter_map(|id| {
                    let value = self.workspace.concept(id).property_value(*property)?.to_owned();
                    self.match_value(&value, *property, tokens, pos)
                })
                .max(),
            PatternPart::FragmentRef(reference) => {
                let id = reference.target()?;
                let ConceptKind::LinguisticFragment { alternatives } =
                    &self.workspace.concept(id).kind
                else {
                    panic!(
                        "fragment reference resolved to a {}",
                        self.workspace.concept(id).class().display()
                    );
                };
                alternatives
                    .iter()
                    .filter_map(|alt| self.match_part(alt, tokens, pos))
                    .max()
            }
        }
    }

    /// Match an element's property value against the token stream: lemma
    /// comparison when the reference goes through `name`, surface text
    /// otherwise.
    pub fn match_value(
        &self,
        value: &str,
        property: RuleProperty,
        tokens: &[NlpToken],
        pos: usize,
    ) -> Option<usize> {
        if property == RuleProperty::Name {
            let value_tokens = self.cache.tokenize(self.language, value);
            let end = pos + value_tokens.len();
            if end > tokens.len() {
                return None;
            }
            value_tokens
                .iter()
                .zip(&tokens[pos..end])
                .all(|(v, t)| v.lemma == t.lemma)
                .then_some(end)
        } else {
            self.match_surface(value, tokens, pos)
        }
    }

    /// A literal word/phrase may span several tokens; compare surface text
    /// case-insensitively.
    fn match_surface(&self, phrase: &str, tokens: &[NlpToken], pos: usize) -> Option<usize> {
        let words: Vec<&str> = phrase.split_whitespace().collect();
        if words.is_empty() {
            return Some(pos);
        }
        let end = pos + words.len();
        if end > tokens.len() {
            return None;
        }
        words
            .iter()
            .zip(&tokens[pos..end])
            .all(|(w, t)| t.text.eq_ignore_ascii_case(w))
            .then_some(end)
    }

    // ========================================================================
    // SUBSTRING MATCHING (id property)
    // ========================================================================

    /// Walk `parts` over raw substrings of `value`; no tokenization of the
    /// whole input, no skippable gaps.
    pub fn match_id(&self, parts: &[PatternPart], value: &str) -> Result<(), MatchFailure> {
        let mut pos = 0;
        for part in parts {
            match self.match_id_part(part, &value[pos..]) {
                Some(consumed) => pos += consumed,
                None => {
                    return Err(MatchFailure::Mismatch {
                        at: pos,
                        expectation: self.expectation_of(part),
                    });
                }
            }
        }
        if pos < value.len() {
            return Err(MatchFailure::Excess { consumed: pos });
        }
        Ok(())
    }

    /// Bytes of `rest` the part consumes, or `None`.
    fn match_id_part(&self, part: &PatternPart, rest: &str) -> Option<usize> {
        match part {
            PatternPart::Word(word) => rest.starts_with(word.as_str()).then(|| word.len()),
            PatternPart::PartOfSpeech(tag) => {
                // Tokenize what is left and consume through the first token
                // carrying the tag.
                let tokens = self.cache.tokenize(self.language, rest);
                let token = tokens.iter().find(|t| t.has_tag(*tag))?;
                let start = rest.find(token.text.as_str())?;
                Some(start + token.text.len())
            }
            PatternPart::ElementProperty { class, property } => self
                .workspace
                .concepts_of(self.document, *class)
                .into_iter()
                .filter_map(|id| {
                    let value = self.workspace.concept(id).property_value(*property)?;
                    rest.starts_with(value).then(|| value.len())
                })
                .max(),
            PatternPart::FragmentRef(reference) => {
                let id = reference.target()?;
                let ConceptKind::LinguisticFragment { alternatives } =
                    &self.workspace.concept(id).kind
                else {
                    panic!(
                        "fragment reference resolved to a {}",
                        self.workspace.concept(id).class().display()
                    );
                };
                alternatives
                    .iter()
                    .filter_map(|alt| self.match_id_part(alt, rest))
                    .max()
            }
        }
    }

    // ========================================================================
    // EXPECTATIONS
    // ========================================================================

    fn expectation_of(&self, part: &PatternPart) -> Expectation {
        let mut expectation = Expectation::default();
        self.collect_expectation(part, &mut expectation);
        expectation
    }

    fn collect_expectation(&self, part: &PatternPart, into: &mut Expectation) {
        match part {
            PatternPart::Word(word) => into.words.push(word.clone()),
            PatternPart::PartOfSpeech(tag) => into.tags.push(*tag),
            PatternPart::ElementProperty { class, property } => {
                into.elements.push((*class, *property));
            }
            PatternPart::FragmentRef(reference) => match reference.target() {
                Some(id) => {
                    let ConceptKind::LinguisticFragment { alternatives } =
                        &self.workspace.concept(id).kind
                    else {
                        panic!(
                            "fragment reference resolved to a {}",
                            self.workspace.concept(id).class().display()
                        );
                    };
                    for alt in alternatives {
                        self.collect_expectation(alt, into);
                    }
                }
                None => into
                    .fragments
                    .push(SmolStr::new(reference.text().unwrap_or(""))),
            },
        }
    }
}
