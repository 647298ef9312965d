//! Per-document export computation.
//!
//! A document exports its System under the System's own (possibly dotted)
//! name and every named node reachable from it under a dotted qualified
//! name. Qualified names join ancestor names with `.`; names directly
//! under the System are prefixed with the System name exactly once.

use crate::ast::ConceptKind;
use crate::base::{ConceptId, DocumentId};
use crate::workspace::Workspace;

/// What an exported name points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportTarget {
    System(DocumentId),
    Concept(ConceptId),
}

/// One (qualified name, node) pair exported by a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedSymbol {
    pub qualified_name: String,
    pub target: ExportTarget,
}

/// Walk every named node reachable from the document root and collect its
/// exported qualified name.
pub fn compute_exports(workspace: &Workspace, document: DocumentId) -> Vec<ExportedSymbol> {
    let system = workspace.system(document);
    let mut exports = vec![ExportedSymbol {
        qualified_name: system.name.to_string(),
        target: ExportTarget::System(document),
    }];

    for &id in &system.concepts {
        let concept = workspace.concept(id);
        let qualified = format!("{}.{}", system.name, concept.name);
        // Nested nodes join their ancestor chain below the concept name.
        if let ConceptKind::StateMachine { states } = &concept.kind {
            for &state_id in states {
                let state = workspace.concept(state_id);
                exports.push(ExportedSymbol {
                    qualified_name: format!("{}.{}", qualified, state.name),
                    target: ExportTarget::Concept(state_id),
                });
            }
        }
        exports.push(ExportedSymbol {
            qualified_name: qualified,
            target: ExportTarget::Concept(id),
        });
    }
    exports
}
