//! Builders for hand-assembled workspace snapshots.
//!
//! Tests construct the linked model directly, the way the host's linker
//! would deliver it, so every helper returns arena handles.

use reqsl::ast::{Concept, ConceptKind, Import, Reference, System};
use reqsl::base::{ConceptId, DocumentId};
use reqsl::diagnostics::Issue;
use reqsl::workspace::Workspace;

pub fn document(ws: &mut Workspace, name: &str) -> DocumentId {
    ws.add_document(format!("mem://{name}.reqsl"), System::new(name))
}

pub fn concept(ws: &mut Workspace, doc: DocumentId, name: &str, kind: ConceptKind) -> ConceptId {
    ws.add_concept(Concept::new(doc, name, kind)).unwrap()
}

pub fn actor(ws: &mut Workspace, doc: DocumentId, name: &str) -> ConceptId {
    concept(ws, doc, name, ConceptKind::Actor { is_a: Reference::Absent })
}

pub fn data_entity(ws: &mut Workspace, doc: DocumentId, name: &str) -> ConceptId {
    concept(ws, doc, name, ConceptKind::DataEntity { is_a: Reference::Absent })
}

pub fn functional_requirement(ws: &mut Workspace, doc: DocumentId, name: &str) -> ConceptId {
    concept(
        ws,
        doc,
        name,
        ConceptKind::FunctionalRequirement { part_of: Reference::Absent },
    )
}

/// A state machine with states given as `(name, is_initial, is_final)`.
pub fn state_machine(
    ws: &mut Workspace,
    doc: DocumentId,
    name: &str,
    states: &[(&str, bool, bool)],
) -> ConceptId {
    let ids = states
        .iter()
        .map(|&(state, is_initial, is_final)| {
            ws.add_owned_concept(Concept::new(
                doc,
                state,
                ConceptKind::State { is_initial, is_final },
            ))
            .unwrap()
        })
        .collect();
    concept(ws, doc, name, ConceptKind::StateMachine { states: ids })
}

pub fn add_import(ws: &mut Workspace, doc: DocumentId, path: &str) {
    ws.system_mut(doc).imports.push(Import::parse(path).unwrap());
}

pub fn link_is_a(ws: &mut Workspace, from: ConceptId, to: ConceptId) {
    match &mut ws.concept_mut(from).kind {
        ConceptKind::Actor { is_a }
        | ConceptKind::DataEntity { is_a }
        | ConceptKind::Stakeholder { is_a, .. }
        | ConceptKind::Vulnerability { is_a, .. }
        | ConceptKind::GlossaryTerm { is_a, .. } => *is_a = Reference::Resolved(to),
        other => panic!("kind {:?} carries no isA", other.class()),
    }
}

pub fn link_part_of(ws: &mut Workspace, from: ConceptId, to: ConceptId) {
    match &mut ws.concept_mut(from).kind {
        ConceptKind::Constraint { part_of, .. }
        | ConceptKind::FunctionalRequirement { part_of }
        | ConceptKind::GlossaryTerm { part_of, .. }
        | ConceptKind::Goal { part_of, .. }
        | ConceptKind::QualityRequirement { part_of, .. }
        | ConceptKind::Risk { part_of, .. }
        | ConceptKind::Stakeholder { part_of, .. }
        | ConceptKind::UserStory { part_of }
        | ConceptKind::Vulnerability { part_of, .. } => *part_of = Reference::Resolved(to),
        other => panic!("kind {:?} carries no partOf", other.class()),
    }
}

pub fn link_next(ws: &mut Workspace, from: ConceptId, to: ConceptId) {
    match &mut ws.concept_mut(from).kind {
        ConceptKind::Step { next } => *next = Reference::Resolved(to),
        other => panic!("kind {:?} carries no next", other.class()),
    }
}

pub fn codes_of(issues: &[Issue]) -> Vec<&'static str> {
    issues.iter().map(|issue| issue.code).collect()
}

pub fn count_code(issues: &[Issue], code: &str) -> usize {
    issues.iter().filter(|issue| issue.code == code).count()
}

pub fn find_code<'a>(issues: &'a [Issue], code: &str) -> Option<&'a Issue> {
    issues.iter().find(|issue| issue.code == code)
}
