//! Linguistic-rule declarations as they appear in the model.
//!
//! A `LinguisticRule` constrains the allowed grammatical form of one
//! property of one element kind; its patterns are matched by the
//! [`linguistic`](crate::linguistic) engine.

use smol_str::SmolStr;

use super::concept::ConceptClass;
use super::reference::Reference;
use crate::nlp::PosTag;

/// Author-declared severity of a linguistic rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleSeverity {
    Error,
    Warning,
}

/// The property of an element a linguistic rule targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleProperty {
    /// The identifier itself; matched over raw substrings, not tokens.
    Id,
    /// The display name (alias falling back to the identifier).
    Name,
    Description,
}

impl RuleProperty {
    pub fn as_str(self) -> &'static str {
        match self {
            RuleProperty::Id => "id",
            RuleProperty::Name => "name",
            RuleProperty::Description => "description",
        }
    }
}

/// One ordered alternative of a linguistic rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinguisticPattern {
    pub parts: Vec<PatternPart>,
}

/// A single element of a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternPart {
    /// A literal word (or phrase), compared on surface text.
    Word(SmolStr),
    /// Any token carrying the given universal POS tag.
    PartOfSpeech(PosTag),
    /// The chosen property value of any visible element of the given class.
    ElementProperty {
        class: ConceptClass,
        property: RuleProperty,
    },
    /// A reference to a named fragment; any of the fragment's alternative
    /// parts may match.
    FragmentRef(Reference),
}
