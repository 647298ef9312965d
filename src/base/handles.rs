//! Arena handles for documents and concepts.
//!
//! All concepts across all loaded documents live in one arena owned by the
//! workspace; a handle is an index into that arena. Handles are `Copy` and
//! cheap to pass through every analysis layer.

/// Identifier of a loaded document (one System per document).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId(u32);

impl DocumentId {
    pub fn new(index: usize) -> Self {
        Self(index as u32)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Identifier of a concept in the workspace arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConceptId(u32);

impl ConceptId {
    pub fn new(index: usize) -> Self {
        Self(index as u32)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}
