//! Include-aware enumeration and shared lookups.
//!
//! `IncludeAll`/`IncludeElement` concepts are transparent proxies: every
//! "all concepts of kind K in this System" query sees the included
//! concepts instead of the proxy nodes. Expansion goes exactly one level
//! deep; an `IncludeAll` inside an included System is not followed.

use smol_str::SmolStr;

use super::Workspace;
use crate::ast::{ConceptClass, ConceptKind, ElementType};
use crate::base::{ConceptId, DocumentId};
use crate::nlp::NlLanguage;

impl Workspace {
    /// The include-expanded concept list of a System: direct concepts with
    /// every resolvable include proxy replaced by its target(s).
    pub fn expanded_concepts(&self, document: DocumentId) -> Vec<ConceptId> {
        let mut result = Vec::new();
        for &id in &self.system(document).concepts {
            match &self.concept(id).kind {
                ConceptKind::IncludeAll { system } => {
                    if let Some(target) = system.target() {
                        result.extend(self.system(target).concepts.iter().copied());
                    }
                }
                ConceptKind::IncludeElement { element, .. } => {
                    if let Some(target) = element.target() {
                        result.push(target);
                    }
                }
                _ => result.push(id),
            }
        }
        result
    }

    /// All concepts of one class visible in a System, include-expanded.
    ///
    /// This is the enumeration every kind-specific accessor and the
    /// linguistic engine's visible-element lookups share.
    pub fn concepts_of(&self, document: DocumentId, class: ConceptClass) -> Vec<ConceptId> {
        self.expanded_concepts(document)
            .into_iter()
            .filter(|&id| self.concept(id).class() == class)
            .collect()
    }

    /// Resolve a type/subtype value to its display string: the literal
    /// itself, or the name of the referenced stereotype.
    ///
    /// A resolved stereotype reference pointing at a non-stereotype concept
    /// means the host's linker and this model drifted apart; that is a
    /// fault, not a diagnostic.
    pub fn type_label(&self, ty: &ElementType) -> Option<SmolStr> {
        match ty {
            ElementType::Literal(text) => Some(text.clone()),
            ElementType::Stereotype(reference) => {
                let id = reference.target()?;
                let concept = self.concept(id);
                if !matches!(concept.kind, ConceptKind::Stereotype) {
                    panic!(
                        "stereotype reference resolved to a {} ('{}')",
                        concept.class().display(),
                        concept.name
                    );
                }
                Some(concept.name.clone())
            }
        }
    }

    /// The natural language declared for a System's free text; English when
    /// no declaration is present.
    pub fn system_language(&self, document: DocumentId) -> NlLanguage {
        self.system(document)
            .concepts
            .iter()
            .find_map(|&id| match self.concept(id).kind {
                ConceptKind::LinguisticLanguage { language } => Some(language),
                _ => None,
            })
            .unwrap_or_default()
    }
}
