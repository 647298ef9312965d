use smol_str::SmolStr;

use crate::base::{ConceptId, DocumentId};

/// A cross-reference cell as delivered by the parser/linker.
///
/// Linking happens outside this crate; by the time the semantic core runs,
/// every reference is in one of three states and stays there for the whole
/// validation pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Reference {
    /// The linker resolved the reference to a concept.
    Resolved(ConceptId),
    /// Reference text was present but did not resolve.
    Unresolved(SmolStr),
    /// The optional reference was not written at all.
    #[default]
    Absent,
}

impl Reference {
    /// The resolved target, if any.
    pub fn target(&self) -> Option<ConceptId> {
        match self {
            Reference::Resolved(id) => Some(*id),
            _ => None,
        }
    }

    /// The reference text as written, for unresolved references.
    pub fn text(&self) -> Option<&str> {
        match self {
            Reference::Unresolved(text) => Some(text),
            _ => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Reference::Absent)
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Reference::Resolved(_))
    }
}

/// A reference to a whole System (one System per document).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SystemRef {
    Resolved(DocumentId),
    Unresolved(SmolStr),
    #[default]
    Absent,
}

impl SystemRef {
    pub fn target(&self) -> Option<DocumentId> {
        match self {
            SystemRef::Resolved(id) => Some(*id),
            _ => None,
        }
    }
}
