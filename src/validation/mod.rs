//! Hierarchy & consistency validation.
//!
//! One validator instance runs a full pass over a workspace snapshot.
//! Every check is local to one entity: a violation on one concept never
//! prevents other concepts from being checked, and a check that cannot
//! proceed for lack of optional data simply reports nothing.

mod consistency;
mod hierarchy;
mod structure;

pub use hierarchy::check_cycle;

use crate::ast::RelationKind;
use crate::base::DocumentId;
use crate::diagnostics::{Issue, IssueCollector};
use crate::workspace::Workspace;

pub struct Validator<'w> {
    workspace: &'w Workspace,
    issues: IssueCollector,
}

impl<'w> Validator<'w> {
    pub fn new(workspace: &'w Workspace) -> Self {
        Self {
            workspace,
            issues: IssueCollector::new(),
        }
    }

    /// Validate every document and return the accumulated issues.
    pub fn validate_all(mut self) -> Vec<Issue> {
        for document in self.workspace.document_ids() {
            self.validate_document(document);
        }
        self.issues.take()
    }

    /// Run all checks for one document.
    pub fn validate_document(&mut self, document: DocumentId) {
        tracing::debug!(
            system = %self.workspace.system(document).name,
            "validating document"
        );
        consistency::check_system_type(self.workspace, document, &mut self.issues);
        consistency::check_uniqueness(self.workspace, document, &mut self.issues);
        structure::check_language_declarations(self.workspace, document, &mut self.issues);

        for &id in &self.workspace.system(document).concepts {
            for relation in [RelationKind::IsA, RelationKind::PartOf, RelationKind::Next] {
                hierarchy::check_cycle(self.workspace, document, id, relation, &mut self.issues);
            }
            consistency::check_subtype(self.workspace, document, id, &mut self.issues);
            consistency::check_relation_endpoints(self.workspace, document, id, &mut self.issues);
            structure::check_concept(self.workspace, document, id, &mut self.issues);
        }
    }

    /// Issues collected so far (useful when driving document-by-document).
    pub fn issues(&self) -> &IssueCollector {
        &self.issues
    }
}
