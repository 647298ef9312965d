//! AST data model for the requirements DSL.
//!
//! The parser (an external collaborator) produces this tree; the semantic
//! core never mutates it except to fill cross-reference cells. One document
//! owns exactly one top-level [`System`]; every named modeling element in a
//! System is a [`Concept`] stored in the workspace arena and addressed by
//! [`ConceptId`](crate::base::ConceptId).

mod concept;
mod error;
mod linguistic;
mod reference;
mod system;

pub use concept::{Concept, ConceptClass, ConceptKind, ElementType, RelationKind, TypeInfo};
pub use error::ModelError;
pub use linguistic::{LinguisticPattern, PatternPart, RuleProperty, RuleSeverity};
pub use reference::{Reference, SystemRef};
pub use system::{Document, Import, System};
