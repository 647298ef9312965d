//! Symbol/Scope index.
//!
//! Given the full set of loaded documents this module computes, per
//! document, the exported (qualified name, node) pairs, and for every
//! cross-reference site the ordered, de-duplicated [`Scope`] of candidate
//! targets, applying import filtering and include expansion.

mod exports;
mod imports;
mod provider;

pub use exports::{ExportTarget, ExportedSymbol, compute_exports};
pub use imports::{best_import, import_matches, relative_name};
pub use provider::{RefSite, ScopeProvider, TargetKind};

use indexmap::IndexMap;
use smol_str::SmolStr;

use crate::ast::ConceptClass;

/// One candidate binding visible at a reference site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeEntry {
    /// The name the reference text is compared against (relative to the
    /// site, so possibly shorter than the export name).
    pub name: SmolStr,
    pub target: ExportTarget,
    /// `None` when the target is a System.
    pub class: Option<ConceptClass>,
}

/// The ordered, de-duplicated set of candidate target descriptions visible
/// at a reference site. Earlier insertions win: local bindings shadow
/// global ones of the same name.
#[derive(Debug, Clone, Default)]
pub struct Scope {
    entries: IndexMap<SmolStr, ScopeEntry>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a candidate; an existing binding for the same name wins.
    pub fn insert(&mut self, entry: ScopeEntry) {
        self.entries.entry(entry.name.clone()).or_insert(entry);
    }

    /// Resolve a textual reference against this scope.
    pub fn resolve(&self, name: &str) -> Option<&ScopeEntry> {
        self.entries.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScopeEntry> {
        self.entries.values()
    }

    /// Drop every entry the predicate rejects, preserving order.
    pub fn retain(&mut self, mut keep: impl FnMut(&ScopeEntry) -> bool) {
        self.entries.retain(|_, entry| keep(entry));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
