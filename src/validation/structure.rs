//! Structural checks: state machines, use-case extensions, language
//! declarations.

use crate::ast::{ConceptClass, ConceptKind, Reference};
use crate::base::{ConceptId, DocumentId};
use crate::diagnostics::{Issue, IssueCollector, codes};
use crate::workspace::Workspace;

pub fn check_concept(
    workspace: &Workspace,
    document: DocumentId,
    id: ConceptId,
    issues: &mut IssueCollector,
) {
    let concept = workspace.concept(id);
    match &concept.kind {
        ConceptKind::StateMachine { states } => {
            check_state_machine(workspace, document, id, states, issues);
        }
        ConceptKind::UseCase { extends, .. } => {
            check_use_case(document, id, extends, workspace, issues);
        }
        _ => {}
    }
}

/// A state machine needs at least one initial and at least one final
/// state; each missing flag is its own warning.
fn check_state_machine(
    workspace: &Workspace,
    document: DocumentId,
    id: ConceptId,
    states: &[ConceptId],
    issues: &mut IssueCollector,
) {
    let name = &workspace.concept(id).name;
    let has_initial = states.iter().any(|&s| {
        matches!(
            workspace.concept(s).kind,
            ConceptKind::State { is_initial: true, .. }
        )
    });
    let has_final = states.iter().any(|&s| {
        matches!(
            workspace.concept(s).kind,
            ConceptKind::State { is_final: true, .. }
        )
    });
    if !has_initial {
        issues.add(Issue::warning(
            document,
            id,
            codes::MISSING_INITIAL_STATE,
            format!("state machine '{name}' has no initial state"),
        ));
    }
    if !has_final {
        issues.add(Issue::warning(
            document,
            id,
            codes::MISSING_FINAL_STATE,
            format!("state machine '{name}' has no final state"),
        ));
    }
}

fn check_use_case(
    document: DocumentId,
    id: ConceptId,
    extends: &[Reference],
    workspace: &Workspace,
    issues: &mut IssueCollector,
) {
    if extends.iter().any(|e| e.target() == Some(id)) {
        issues.add(
            Issue::error(
                document,
                id,
                codes::USECASE_SELF_EXTENSION,
                format!(
                    "use case '{}' lists itself among its own extensions",
                    workspace.concept(id).name
                ),
            )
            .with_property("extends"),
        );
    }
}

/// At most one linguistic-language declaration per System; every
/// declaration after the first is flagged.
pub fn check_language_declarations(
    workspace: &Workspace,
    document: DocumentId,
    issues: &mut IssueCollector,
) {
    let declarations: Vec<ConceptId> = workspace
        .system(document)
        .concepts
        .iter()
        .copied()
        .filter(|&id| workspace.concept(id).class() == ConceptClass::LinguisticLanguage)
        .collect();
    for &extra in declarations.iter().skip(1) {
        issues.add(Issue::error(
            document,
            extra,
            codes::MULTIPLE_LANGUAGES,
            "only one linguistic language may be declared per system",
        ));
    }
}
