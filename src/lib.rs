//! # reqsl-base
//!
//! Semantic core for the ReqSL requirements-modeling DSL: scope and import
//! resolution, hierarchy and consistency validation, the linguistic rule
//! engine, and diagnostic/quick-fix synthesis. Parsing and the editor
//! protocol live in the host; this crate works on a linked [`Workspace`]
//! snapshot.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! linguistic  → Rule engine: pattern matching, synonym scan
//!   ↓
//! validation  → Hierarchy cycles, consistency, structural checks
//!   ↓
//! scope       → Exports, import filtering, per-site scopes
//!   ↓
//! workspace   → Document/concept arena, include expansion
//!   ↓
//! diagnostics → Issue taxonomy, collectors, quick fixes
//!   ↓
//! nlp         → Tokenization, POS tagging, token cache
//!   ↓
//! ast         → Concepts, references, rule declarations
//!   ↓
//! base        → Handles, Span/Position
//! ```

// ============================================================================
// MODULES (dependency order: base → ast → nlp → diagnostics → workspace
// → scope → validation → linguistic)
// ============================================================================

/// Foundation types: arena handles, Span/Position
pub mod base;

/// AST data model: concepts, references, linguistic rule declarations
pub mod ast;

/// Natural-language tokenization and POS tagging
pub mod nlp;

/// Issue taxonomy, collectors, quick-fix synthesis
pub mod diagnostics;

/// Workspace snapshot: document/concept arena, include expansion
pub mod workspace;

/// Symbol exports, import filtering, per-site scope computation
pub mod scope;

/// Hierarchy and consistency validation
pub mod validation;

/// Linguistic rule engine and glossary synonym scan
pub mod linguistic;

// Re-export the types a host embedding the core touches directly
pub use base::{ConceptId, DocumentId, Position, Span};
pub use diagnostics::{Issue, IssueCollector, IssueNode, Severity, TextEdit, quick_fix};
pub use linguistic::LinguisticEngine;
pub use nlp::{NlLanguage, TokenCache};
pub use scope::{Scope, ScopeProvider};
pub use validation::Validator;
pub use workspace::Workspace;
