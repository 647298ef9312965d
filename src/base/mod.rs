//! Foundation types for the ReqSL semantic core.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`DocumentId`], [`ConceptId`] - arena handles
//! - [`Position`], [`Span`] - line/column positions for AST nodes
//!
//! This module has NO dependencies on other reqsl modules.

mod handles;
mod position;

pub use handles::{ConceptId, DocumentId};
pub use position::{Position, Span};

// Re-export the byte-offset type used for in-value offsets
pub use text_size::TextSize;
