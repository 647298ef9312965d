use smol_str::SmolStr;

/// Universal part-of-speech tags (UPOS).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosTag {
    Adjective,
    Adposition,
    Adverb,
    Auxiliary,
    CoordConjunction,
    Determiner,
    Interjection,
    Noun,
    Numeral,
    Particle,
    Pronoun,
    ProperNoun,
    Punctuation,
    SubordConjunction,
    Symbol,
    Verb,
    Other,
}

impl PosTag {
    pub fn display(self) -> &'static str {
        match self {
            PosTag::Adjective => "adjective",
            PosTag::Adposition => "adposition",
            PosTag::Adverb => "adverb",
            PosTag::Auxiliary => "auxiliary",
            PosTag::CoordConjunction => "coordinating conjunction",
            PosTag::Determiner => "determiner",
            PosTag::Interjection => "interjection",
            PosTag::Noun => "noun",
            PosTag::Numeral => "numeral",
            PosTag::Particle => "particle",
            PosTag::Pronoun => "pronoun",
            PosTag::ProperNoun => "proper noun",
            PosTag::Punctuation => "punctuation",
            PosTag::SubordConjunction => "subordinating conjunction",
            PosTag::Symbol => "symbol",
            PosTag::Verb => "verb",
            PosTag::Other => "other",
        }
    }
}

/// One token of an analyzed string.
///
/// Ephemeral: produced per validation call (or pulled from the token
/// cache), never stored in the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NlpToken {
    /// The surface text as written.
    pub text: SmolStr,
    /// Lower-cased lemma (rule-based; exact morphology is the backend's
    /// business).
    pub lemma: SmolStr,
    /// Possible tags, as a disjunction: one acceptable tag makes the token
    /// match a POS pattern part.
    pub tags: Vec<PosTag>,
}

impl NlpToken {
    pub fn has_tag(&self, tag: PosTag) -> bool {
        self.tags.contains(&tag)
    }
}
