//! Generic cycle detection over the single-parent hierarchy relations.
//!
//! One routine serves every (kind, relation) pair: follow the relation
//! chain from the origin with a visited-name set, reporting either a
//! distinguished self-reference or a cycle. An unresolved or absent link
//! ends the walk without a finding.

use rustc_hash::FxHashSet;
use smol_str::SmolStr;

use crate::ast::RelationKind;
use crate::base::{ConceptId, DocumentId};
use crate::diagnostics::{Issue, IssueCollector, codes};
use crate::workspace::Workspace;

/// Check the `relation` chain starting at `origin`.
///
/// Both the self-reference and the cycle diagnostic attach to the origin
/// node and the relation's property, never to a node further down the
/// chain.
pub fn check_cycle(
    workspace: &Workspace,
    document: DocumentId,
    origin: ConceptId,
    relation: RelationKind,
    issues: &mut IssueCollector,
) {
    let concept = workspace.concept(origin);
    let Some(reference) = concept.relation(relation) else {
        return;
    };

    if reference.target() == Some(origin) {
        issues.add(
            Issue::error(
                document,
                origin,
                codes::HIERARCHY_SELF_REFERENCE,
                format!("'{}' {}", concept.name, relation.self_phrase()),
            )
            .with_property(relation.property()),
        );
        return;
    }

    let mut visited: FxHashSet<SmolStr> = FxHashSet::default();
    visited.insert(concept.name.clone());
    let mut current = reference.target();
    while let Some(id) = current {
        let node = workspace.concept(id);
        if !visited.insert(node.name.clone()) {
            issues.add(
                Issue::error(
                    document,
                    origin,
                    codes::HIERARCHY_CYCLE,
                    format!(
                        "cycle in the {} of '{}'",
                        relation.hierarchy_phrase(),
                        concept.name
                    ),
                )
                .with_property(relation.property()),
            );
            return;
        }
        current = node.relation(relation).and_then(|r| r.target());
    }
}
