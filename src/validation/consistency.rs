//! Type/subtype consistency, ID uniqueness and relation endpoint checks.

use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use crate::ast::{ConceptKind, TypeInfo};
use crate::base::{ConceptId, DocumentId};
use crate::diagnostics::{Issue, IssueCollector, IssueNode, codes};
use crate::workspace::Workspace;

/// A subtype is consistent when its resolved name textually contains the
/// type's resolved name (`FunctionalOther` contains `Functional`). The DSL
/// constructs subtype names by extending the type name, so containment is
/// the deliberate check here, not equality.
fn subtype_consistent(workspace: &Workspace, info: &TypeInfo) -> Option<(SmolStr, SmolStr)> {
    let ty = workspace.type_label(info.ty.as_ref()?)?;
    let sub = workspace.type_label(info.sub_ty.as_ref()?)?;
    if sub.contains(ty.as_str()) {
        None
    } else {
        Some((ty, sub))
    }
}

pub fn check_subtype(
    workspace: &Workspace,
    document: DocumentId,
    id: ConceptId,
    issues: &mut IssueCollector,
) {
    let concept = workspace.concept(id);
    let Some(info) = concept.type_info() else {
        return;
    };
    if let Some((ty, sub)) = subtype_consistent(workspace, info) {
        issues.add(
            Issue::error(
                document,
                id,
                codes::INVALID_SUBTYPE,
                format!("subtype '{sub}' does not match type '{ty}'"),
            )
            .with_property("subType"),
        );
    }
}

/// The System carries type/subtype itself.
pub fn check_system_type(
    workspace: &Workspace,
    document: DocumentId,
    issues: &mut IssueCollector,
) {
    let info = &workspace.system(document).type_info;
    if let Some((ty, sub)) = subtype_consistent(workspace, info) {
        issues.add(
            Issue::error(
                document,
                IssueNode::System(document),
                codes::INVALID_SUBTYPE,
                format!("subtype '{sub}' does not match type '{ty}'"),
            )
            .with_property("subType"),
        );
    }
}

/// Flat duplicate-ID scan over the include-expanded concept list of a
/// System. Every locally-owned member of a colliding name group is
/// flagged; a concept is never flagged against itself.
pub fn check_uniqueness(
    workspace: &Workspace,
    document: DocumentId,
    issues: &mut IssueCollector,
) {
    let mut by_name: FxHashMap<SmolStr, Vec<ConceptId>> = FxHashMap::default();
    for id in workspace.expanded_concepts(document) {
        by_name
            .entry(workspace.concept(id).name.clone())
            .or_default()
            .push(id);
    }
    for (name, group) in by_name {
        if group.len() < 2 {
            continue;
        }
        for id in group {
            if workspace.concept(id).owner == document {
                issues.add(
                    Issue::error(
                        document,
                        id,
                        codes::DUPLICATE_ID,
                        format!("duplicate ID '{name}'"),
                    )
                    .with_property("name"),
                );
            }
        }
    }
}

/// Relations with an explicit source/target pair must connect two
/// different nodes.
pub fn check_relation_endpoints(
    workspace: &Workspace,
    document: DocumentId,
    id: ConceptId,
    issues: &mut IssueCollector,
) {
    let concept = workspace.concept(id);
    let same = match &concept.kind {
        ConceptKind::SystemsRelation { source, target } => {
            source.target().is_some() && source.target() == target.target()
        }
        ConceptKind::RequirementsRelation { source, target } => {
            source.target().is_some() && source.target() == target.target()
        }
        _ => return,
    };
    if same {
        issues.add(
            Issue::error(
                document,
                id,
                codes::RELATION_SAME_ENDPOINTS,
                format!("relation '{}' has the same source and target", concept.name),
            )
            .with_property("target"),
        );
    }
}
