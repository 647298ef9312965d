//! Scope computation for cross-reference sites.

use smol_str::SmolStr;

use super::exports::{ExportTarget, compute_exports};
use super::imports::{best_import, relative_name};
use super::{Scope, ScopeEntry};
use crate::ast::{ConceptClass, ConceptKind};
use crate::base::{ConceptId, DocumentId};
use crate::workspace::Workspace;

/// What kind of node a reference site expects to hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    System,
    /// A concept of one specific class.
    Concept(ConceptClass),
    /// Any concept; used by reference kinds that accept every element.
    AnyConcept,
}

/// A cross-reference site, as handed over by the host per reference.
#[derive(Debug, Clone, Copy)]
pub struct RefSite {
    pub document: DocumentId,
    /// The concept containing the reference, when there is one.
    pub container: Option<ConceptId>,
    /// AST property holding the reference.
    pub property: &'static str,
    pub expected: TargetKind,
}

/// Computes the visible candidate set for reference sites against one
/// workspace snapshot.
pub struct ScopeProvider<'w> {
    workspace: &'w Workspace,
}

impl<'w> ScopeProvider<'w> {
    pub fn new(workspace: &'w Workspace) -> Self {
        Self { workspace }
    }

    /// The ordered, de-duplicated candidate set visible at `site`.
    ///
    /// A site whose document cannot be found yields an empty scope; the
    /// reference then stays unresolved and generic unresolved-reference
    /// reporting (outside this core) picks it up.
    pub fn scope_for(&self, site: &RefSite) -> Scope {
        if self.workspace.get_document(site.document).is_none() {
            return Scope::new();
        }

        if let Some(scope) = self.include_scope(site) {
            tracing::trace!(property = site.property, len = scope.len(), "include scope");
            return scope;
        }

        let mut scope = Scope::new();
        self.push_local(site, &mut scope);
        self.push_global(site, &mut scope);
        self.apply_filters(site, &mut scope);
        tracing::trace!(property = site.property, len = scope.len(), "scope computed");
        scope
    }

    /// The `element` reference of an `IncludeElement` resolves against
    /// exactly the matching concepts of the referenced System, nothing
    /// else.
    fn include_scope(&self, site: &RefSite) -> Option<Scope> {
        let container = self.workspace.concept(site.container?);
        let ConceptKind::IncludeElement {
            system, expected, ..
        } = &container.kind
        else {
            return None;
        };
        if site.property != "element" {
            return None;
        }
        let target = system.target()?;
        let mut scope = Scope::new();
        for &id in &self.workspace.system(target).concepts {
            let concept = self.workspace.concept(id);
            if concept.class() == *expected {
                scope.insert(ScopeEntry {
                    name: concept.name.clone(),
                    target: ExportTarget::Concept(id),
                    class: Some(concept.class()),
                });
            }
        }
        Some(scope)
    }

    /// Document-local names: always visible, qualified and unqualified.
    fn push_local(&self, site: &RefSite, scope: &mut Scope) {
        let system = self.workspace.system(site.document);
        scope.insert(ScopeEntry {
            name: system.name.clone(),
            target: ExportTarget::System(site.document),
            class: None,
        });
        for &id in &system.concepts {
            let concept = self.workspace.concept(id);
            self.insert_local(scope, &system.name, None, id);
            if let ConceptKind::StateMachine { states } = &concept.kind {
                for &state_id in states {
                    self.insert_local(scope, &system.name, Some(&concept.name), state_id);
                }
            }
        }
    }

    fn insert_local(
        &self,
        scope: &mut Scope,
        system_name: &str,
        parent: Option<&str>,
        id: ConceptId,
    ) {
        let concept = self.workspace.concept(id);
        let class = Some(concept.class());
        let target = ExportTarget::Concept(id);
        let mut names = vec![concept.name.clone()];
        if let Some(parent) = parent {
            names.push(SmolStr::new(format!("{}.{}", parent, concept.name)));
            names.push(SmolStr::new(format!(
                "{}.{}.{}",
                system_name, parent, concept.name
            )));
        } else {
            names.push(SmolStr::new(format!("{}.{}", system_name, concept.name)));
        }
        for name in names {
            scope.insert(ScopeEntry {
                name,
                target,
                class,
            });
        }
    }

    /// Exports of every loaded document, rewritten relative to a matching
    /// import or to the site's own enclosing System.
    fn push_global(&self, site: &RefSite, scope: &mut Scope) {
        let own_system = self.workspace.system(site.document);
        let own_prefix = format!("{}.", own_system.name);
        for document in self.workspace.document_ids() {
            for export in compute_exports(self.workspace, document) {
                let class = match export.target {
                    ExportTarget::System(_) => None,
                    ExportTarget::Concept(id) => Some(self.workspace.concept(id).class()),
                };
                let qualified = export.qualified_name.as_str();
                if let Some(import) = best_import(&own_system.imports, qualified) {
                    if let Some(relative) = relative_name(import, qualified) {
                        scope.insert(ScopeEntry {
                            name: SmolStr::new(relative),
                            target: export.target,
                            class,
                        });
                    }
                } else if let Some(relative) = qualified.strip_prefix(&own_prefix) {
                    scope.insert(ScopeEntry {
                        name: SmolStr::new(relative),
                        target: export.target,
                        class,
                    });
                }
                scope.insert(ScopeEntry {
                    name: SmolStr::new(qualified),
                    target: export.target,
                    class,
                });
            }
        }
    }

    fn apply_filters(&self, site: &RefSite, scope: &mut Scope) {
        // Kind filter: a site that names a concept class only sees that
        // class; System sites only see Systems.
        match site.expected {
            TargetKind::System => scope.retain(|entry| entry.class.is_none()),
            TargetKind::Concept(class) => scope.retain(|entry| entry.class == Some(class)),
            TargetKind::AnyConcept => scope.retain(|entry| entry.class.is_some()),
        }

        // Single-segment reference kinds only bind direct children.
        let single_segment = match site.expected {
            TargetKind::System => true,
            TargetKind::Concept(class) => class.is_single_segment(),
            TargetKind::AnyConcept => false,
        };
        if single_segment {
            scope.retain(|entry| !entry.name.contains('.'));
        }

        // Extension points of a use case are the steps textually prefixed
        // by the use case's name.
        if let Some(container) = site.container {
            let concept = self.workspace.concept(container);
            if matches!(concept.kind, ConceptKind::UseCase { .. })
                && site.property == "extensionPoint"
            {
                let prefix = concept.name.clone();
                scope.retain(|entry| {
                    entry.class == Some(ConceptClass::Step)
                        && entry
                            .name
                            .rsplit('.')
                            .next()
                            .is_some_and(|last| last.starts_with(prefix.as_str()))
                });
            }
        }
    }
}
