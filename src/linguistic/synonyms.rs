//! Glossary-driven terminology consistency.
//!
//! Every glossary term may list discouraged synonyms; free text using one
//! of them gets a warning pointing at the preferred spelling. This scan is
//! independent of the rule engine: it fires whether or not a linguistic
//! rule matched the same property.

use crate::ast::{ConceptKind, RuleProperty};
use crate::base::{ConceptId, DocumentId};
use crate::diagnostics::{Issue, IssueCollector, codes};
use crate::workspace::Workspace;

pub fn check_synonyms(
    workspace: &Workspace,
    document: DocumentId,
    concept_id: ConceptId,
    issues: &mut IssueCollector,
) {
    use crate::ast::ConceptClass;

    let concept = workspace.concept(concept_id);
    for term_id in workspace.concepts_of(document, ConceptClass::GlossaryTerm) {
        if term_id == concept_id {
            continue;
        }
        let term = workspace.concept(term_id);
        let ConceptKind::GlossaryTerm { synonyms, applicable_to, .. } = &term.kind else {
            continue;
        };
        if !applicable_to.is_empty() && !applicable_to.contains(&concept.class()) {
            continue;
        }
        let preferred = term.name_alias.as_deref().unwrap_or(&term.name);
        for property in [RuleProperty::Name, RuleProperty::Description] {
            let Some(value) = concept.property_value(property) else {
                continue;
            };
            for synonym in synonyms {
                if contains_ignore_case(value, synonym) {
                    issues.add(
                        Issue::warning(
                            document,
                            concept_id,
                            codes::LINT_INCONSISTENT_TERM,
                            format!("'{synonym}' is a discouraged synonym of '{preferred}'"),
                        )
                        .with_property(property.as_str())
                        .with_data(vec![synonym.to_string(), preferred.to_string()]),
                    );
                }
            }
        }
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }
    let haystack = haystack.to_lowercase();
    haystack.contains(&needle.to_lowercase())
}
