use smol_str::SmolStr;

use super::linguistic::{LinguisticPattern, PatternPart, RuleProperty, RuleSeverity};
use super::reference::{Reference, SystemRef};
use crate::base::{ConceptId, DocumentId, Span};
use crate::nlp::NlLanguage;

/// A named modeling element owned by a System.
///
/// The identity fields are shared by every kind; the payload lives in
/// [`ConceptKind`]. `name` is the ID (unique within the owning System after
/// include-expansion), `name_alias` the display name.
#[derive(Debug, Clone)]
pub struct Concept {
    pub name: SmolStr,
    pub name_alias: Option<SmolStr>,
    pub description: Option<SmolStr>,
    pub owner: DocumentId,
    pub kind: ConceptKind,
    /// Span of the whole declaration.
    pub span: Span,
    /// Span of the name token, used to anchor diagnostics and quick fixes.
    pub name_span: Span,
    pub description_span: Option<Span>,
}

impl Concept {
    pub fn new(owner: DocumentId, name: impl Into<SmolStr>, kind: ConceptKind) -> Self {
        Self {
            name: name.into(),
            name_alias: None,
            description: None,
            owner,
            kind,
            span: Span::default(),
            name_span: Span::default(),
            description_span: None,
        }
    }

    pub fn class(&self) -> ConceptClass {
        self.kind.class()
    }

    /// The value a linguistic rule targeting `property` checks on this
    /// concept. `Name` falls back to the identifier when no alias is set.
    pub fn property_value(&self, property: RuleProperty) -> Option<&str> {
        match property {
            RuleProperty::Id => Some(&self.name),
            RuleProperty::Name => Some(self.name_alias.as_deref().unwrap_or(&self.name)),
            RuleProperty::Description => self.description.as_deref(),
        }
    }

    /// Span of the property value, for quick-fix anchoring.
    pub fn property_span(&self, property: RuleProperty) -> Option<Span> {
        match property {
            RuleProperty::Id | RuleProperty::Name => Some(self.name_span),
            RuleProperty::Description => self.description_span,
        }
    }

    /// The reference cell this concept carries for a hierarchy relation.
    ///
    /// Returns `None` for kinds that do not participate in the relation.
    pub fn relation(&self, relation: RelationKind) -> Option<&Reference> {
        use ConceptKind::*;
        match relation {
            RelationKind::IsA => match &self.kind {
                Actor { is_a }
                | DataEntity { is_a }
                | Stakeholder { is_a, .. }
                | Vulnerability { is_a, .. }
                | GlossaryTerm { is_a, .. } => Some(is_a),
                _ => None,
            },
            RelationKind::PartOf => match &self.kind {
                Constraint { part_of, .. }
                | FunctionalRequirement { part_of }
                | GlossaryTerm { part_of, .. }
                | Goal { part_of, .. }
                | QualityRequirement { part_of, .. }
                | Risk { part_of, .. }
                | Stakeholder { part_of, .. }
                | UserStory { part_of }
                | Vulnerability { part_of, .. } => Some(part_of),
                _ => None,
            },
            RelationKind::Next => match &self.kind {
                Step { next } => Some(next),
                _ => None,
            },
        }
    }

    /// Type/subtype information, for kinds that carry it.
    pub fn type_info(&self) -> Option<&TypeInfo> {
        use ConceptKind::*;
        match &self.kind {
            Constraint { type_info, .. }
            | Goal { type_info, .. }
            | QualityRequirement { type_info, .. }
            | Risk { type_info, .. }
            | Stakeholder { type_info, .. }
            | Vulnerability { type_info, .. } => Some(type_info),
            _ => None,
        }
    }
}

/// Payload of a concept, exhaustive over every concrete kind the DSL knows.
///
/// Adding a kind here makes the compiler point at every match that must
/// learn about it.
#[derive(Debug, Clone)]
pub enum ConceptKind {
    Actor {
        is_a: Reference,
    },
    DataEntity {
        is_a: Reference,
    },
    Stakeholder {
        is_a: Reference,
        part_of: Reference,
        type_info: TypeInfo,
    },
    Vulnerability {
        is_a: Reference,
        part_of: Reference,
        type_info: TypeInfo,
    },
    GlossaryTerm {
        is_a: Reference,
        part_of: Reference,
        /// Alternative spellings the glossary discourages in favor of the
        /// term's own name/alias.
        synonyms: Vec<SmolStr>,
        /// Element classes the term applies to; empty means all.
        applicable_to: Vec<ConceptClass>,
    },
    FunctionalRequirement {
        part_of: Reference,
    },
    Goal {
        part_of: Reference,
        type_info: TypeInfo,
    },
    QualityRequirement {
        part_of: Reference,
        type_info: TypeInfo,
    },
    Risk {
        part_of: Reference,
        type_info: TypeInfo,
    },
    Constraint {
        part_of: Reference,
        type_info: TypeInfo,
    },
    UserStory {
        part_of: Reference,
    },
    Step {
        next: Reference,
    },
    UseCase {
        extends: Vec<Reference>,
        /// Names of extension points; references to them are restricted to
        /// steps textually prefixed by the use case's name.
        extension_points: Vec<SmolStr>,
    },
    StateMachine {
        /// Owned states; exported qualified below the machine's name.
        states: Vec<ConceptId>,
    },
    State {
        is_initial: bool,
        is_final: bool,
    },
    SystemsRelation {
        source: SystemRef,
        target: SystemRef,
    },
    RequirementsRelation {
        source: Reference,
        target: Reference,
    },
    SystemSet {
        members: Vec<SystemRef>,
    },
    /// A user-extensible named subcategory usable in place of a builtin
    /// type/subtype literal.
    Stereotype,
    LinguisticLanguage {
        language: NlLanguage,
    },
    LinguisticRule {
        severity: RuleSeverity,
        target_class: ConceptClass,
        property: RuleProperty,
        patterns: Vec<LinguisticPattern>,
    },
    LinguisticFragment {
        /// Alternative parts; matching any one of them matches the fragment.
        alternatives: Vec<PatternPart>,
    },
    IncludeAll {
        system: SystemRef,
    },
    IncludeElement {
        system: SystemRef,
        element: Reference,
        expected: ConceptClass,
    },
    Other,
}

impl ConceptKind {
    pub fn class(&self) -> ConceptClass {
        use ConceptKind::*;
        match self {
            Actor { .. } => ConceptClass::Actor,
            DataEntity { .. } => ConceptClass::DataEntity,
            Stakeholder { .. } => ConceptClass::Stakeholder,
            Vulnerability { .. } => ConceptClass::Vulnerability,
            GlossaryTerm { .. } => ConceptClass::GlossaryTerm,
            FunctionalRequirement { .. } => ConceptClass::FunctionalRequirement,
            Goal { .. } => ConceptClass::Goal,
            QualityRequirement { .. } => ConceptClass::QualityRequirement,
            Risk { .. } => ConceptClass::Risk,
            Constraint { .. } => ConceptClass::Constraint,
            UserStory { .. } => ConceptClass::UserStory,
            Step { .. } => ConceptClass::Step,
            UseCase { .. } => ConceptClass::UseCase,
            StateMachine { .. } => ConceptClass::StateMachine,
            State { .. } => ConceptClass::State,
            SystemsRelation { .. } => ConceptClass::SystemsRelation,
            RequirementsRelation { .. } => ConceptClass::RequirementsRelation,
            SystemSet { .. } => ConceptClass::SystemSet,
            Stereotype => ConceptClass::Stereotype,
            LinguisticLanguage { .. } => ConceptClass::LinguisticLanguage,
            LinguisticRule { .. } => ConceptClass::LinguisticRule,
            LinguisticFragment { .. } => ConceptClass::LinguisticFragment,
            IncludeAll { .. } => ConceptClass::IncludeAll,
            IncludeElement { .. } => ConceptClass::IncludeElement,
            Other => ConceptClass::Other,
        }
    }
}

/// Field-less tag parallel to [`ConceptKind`], used for filters, scope
/// queries and rule targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConceptClass {
    Actor,
    DataEntity,
    Stakeholder,
    Vulnerability,
    GlossaryTerm,
    FunctionalRequirement,
    Goal,
    QualityRequirement,
    Risk,
    Constraint,
    UserStory,
    Step,
    UseCase,
    StateMachine,
    State,
    SystemsRelation,
    RequirementsRelation,
    SystemSet,
    Stereotype,
    LinguisticLanguage,
    LinguisticRule,
    LinguisticFragment,
    IncludeAll,
    IncludeElement,
    Other,
}

impl ConceptClass {
    /// Human-readable kind name for diagnostics.
    pub fn display(self) -> &'static str {
        match self {
            ConceptClass::Actor => "actor",
            ConceptClass::DataEntity => "data entity",
            ConceptClass::Stakeholder => "stakeholder",
            ConceptClass::Vulnerability => "vulnerability",
            ConceptClass::GlossaryTerm => "glossary term",
            ConceptClass::FunctionalRequirement => "functional requirement",
            ConceptClass::Goal => "goal",
            ConceptClass::QualityRequirement => "quality requirement",
            ConceptClass::Risk => "risk",
            ConceptClass::Constraint => "constraint",
            ConceptClass::UserStory => "user story",
            ConceptClass::Step => "step",
            ConceptClass::UseCase => "use case",
            ConceptClass::StateMachine => "state machine",
            ConceptClass::State => "state",
            ConceptClass::SystemsRelation => "systems relation",
            ConceptClass::RequirementsRelation => "requirements relation",
            ConceptClass::SystemSet => "system set",
            ConceptClass::Stereotype => "stereotype",
            ConceptClass::LinguisticLanguage => "linguistic language",
            ConceptClass::LinguisticRule => "linguistic rule",
            ConceptClass::LinguisticFragment => "linguistic fragment",
            ConceptClass::IncludeAll => "include all",
            ConceptClass::IncludeElement => "include element",
            ConceptClass::Other => "element",
        }
    }

    /// DSL surface keyword, used when a quick fix synthesizes a
    /// declaration stub.
    pub fn keyword(self) -> &'static str {
        match self {
            ConceptClass::Actor => "Actor",
            ConceptClass::DataEntity => "DataEntity",
            ConceptClass::Stakeholder => "Stakeholder",
            ConceptClass::Vulnerability => "Vulnerability",
            ConceptClass::GlossaryTerm => "Term",
            ConceptClass::FunctionalRequirement => "FR",
            ConceptClass::Goal => "Goal",
            ConceptClass::QualityRequirement => "QR",
            ConceptClass::Risk => "Risk",
            ConceptClass::Constraint => "Constraint",
            ConceptClass::UserStory => "UserStory",
            ConceptClass::Step => "Step",
            ConceptClass::UseCase => "UseCase",
            ConceptClass::StateMachine => "StateMachine",
            ConceptClass::State => "State",
            ConceptClass::SystemsRelation => "SystemsRelation",
            ConceptClass::RequirementsRelation => "RequirementsRelation",
            ConceptClass::SystemSet => "SystemSet",
            ConceptClass::Stereotype => "Stereotype",
            ConceptClass::LinguisticLanguage => "Language",
            ConceptClass::LinguisticRule => "Rule",
            ConceptClass::LinguisticFragment => "Fragment",
            ConceptClass::IncludeAll => "IncludeAll",
            ConceptClass::IncludeElement => "Include",
            ConceptClass::Other => "Element",
        }
    }

    /// Kinds whose references are bound to single-segment identifiers; a
    /// candidate whose relative name still contains a `.` is not a direct
    /// child and gets filtered out of scope.
    pub fn is_single_segment(self) -> bool {
        matches!(self, ConceptClass::State | ConceptClass::Step)
    }
}

/// The three independent single-parent hierarchy relations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationKind {
    IsA,
    PartOf,
    Next,
}

impl RelationKind {
    /// The AST property name the relation's diagnostics attach to.
    pub fn property(self) -> &'static str {
        match self {
            RelationKind::IsA => "isA",
            RelationKind::PartOf => "partOf",
            RelationKind::Next => "next",
        }
    }

    /// Verb phrase for self-reference messages.
    pub fn self_phrase(self) -> &'static str {
        match self {
            RelationKind::IsA => "extends itself",
            RelationKind::PartOf => "is part of itself",
            RelationKind::Next => "has a cycle referencing itself",
        }
    }

    /// Noun phrase for cycle messages.
    pub fn hierarchy_phrase(self) -> &'static str {
        match self {
            RelationKind::IsA => "is-a hierarchy",
            RelationKind::PartOf => "part-of hierarchy",
            RelationKind::Next => "step sequence",
        }
    }
}

/// Type plus optional subtype, as carried by typed concept kinds.
#[derive(Debug, Clone, Default)]
pub struct TypeInfo {
    pub ty: Option<ElementType>,
    pub sub_ty: Option<ElementType>,
}

/// A type or subtype value: a DSL-builtin literal or a reference to a
/// user-declared [`ConceptKind::Stereotype`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementType {
    Literal(SmolStr),
    Stereotype(Reference),
}
