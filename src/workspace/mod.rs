//! Workspace — an immutable snapshot of every loaded document.
//!
//! The workspace owns the concept arena (single source of truth, addressed
//! by [`ConceptId`]) and the per-document [`System`]s. It is built once per
//! validation pass by the host and treated as read-only by every analysis;
//! cross-document scope resolution is only defined against a stable
//! snapshot.

mod accessors;

use smol_str::SmolStr;

use crate::ast::{Concept, Document, ModelError, System};
use crate::base::{ConceptId, DocumentId};

#[derive(Debug, Default)]
pub struct Workspace {
    documents: Vec<Document>,
    /// Arena storage for all concepts across all documents.
    concepts: Vec<Concept>,
}

impl Workspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document with an empty System body; concepts are attached
    /// afterwards via [`Workspace::add_concept`].
    pub fn add_document(&mut self, uri: impl Into<SmolStr>, system: System) -> DocumentId {
        let id = DocumentId::new(self.documents.len());
        self.documents.push(Document {
            uri: uri.into(),
            system,
        });
        id
    }

    /// Add a concept to the arena and append it to its owner's concept
    /// list.
    pub fn add_concept(&mut self, concept: Concept) -> Result<ConceptId, ModelError> {
        let owner = concept.owner;
        let id = self.add_owned_concept(concept)?;
        self.documents[owner.index()].system.concepts.push(id);
        Ok(id)
    }

    /// Add a concept to the arena without listing it at System level.
    ///
    /// Used for nested nodes (states of a state machine) that are owned by
    /// their parent concept.
    pub fn add_owned_concept(&mut self, concept: Concept) -> Result<ConceptId, ModelError> {
        if concept.owner.index() >= self.documents.len() {
            return Err(ModelError::UnknownDocument {
                index: concept.owner.index(),
            });
        }
        let id = ConceptId::new(self.concepts.len());
        self.concepts.push(concept);
        Ok(id)
    }

    /// Get a concept by handle. Handles are only ever minted by this
    /// workspace; a stale one is a programming fault, not user data.
    pub fn concept(&self, id: ConceptId) -> &Concept {
        &self.concepts[id.index()]
    }

    /// Fallible concept lookup, for host-supplied ids.
    pub fn get_concept(&self, id: ConceptId) -> Option<&Concept> {
        self.concepts.get(id.index())
    }

    /// Mutable concept access, used by the external linker to fill
    /// reference cells.
    pub fn concept_mut(&mut self, id: ConceptId) -> &mut Concept {
        &mut self.concepts[id.index()]
    }

    pub fn document(&self, id: DocumentId) -> &Document {
        &self.documents[id.index()]
    }

    pub fn get_document(&self, id: DocumentId) -> Option<&Document> {
        self.documents.get(id.index())
    }

    pub fn system(&self, id: DocumentId) -> &System {
        &self.documents[id.index()].system
    }

    pub fn system_mut(&mut self, id: DocumentId) -> &mut System {
        &mut self.documents[id.index()].system
    }

    pub fn document_ids(&self) -> impl Iterator<Item = DocumentId> + '_ {
        (0..self.documents.len()).map(DocumentId::new)
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// Find the document whose System carries the given (possibly dotted)
    /// name.
    pub fn document_by_system_name(&self, name: &str) -> Option<DocumentId> {
        self.document_ids()
            .find(|id| self.system(*id).name == name)
    }
}
