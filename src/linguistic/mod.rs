//! Linguistic rule engine.
//!
//! User-declared rules constrain the free-text properties (id, name,
//! description) of model elements by patterns built from literal words,
//! part-of-speech tags, references to other elements' properties, and
//! reusable fragments. The [`Matcher`] walks patterns over tokenized text,
//! the [`LinguisticEngine`] turns failures into diagnostics with
//! machine-applicable payloads, and the synonym scan enforces glossary
//! terminology.

mod engine;
mod matcher;
mod synonyms;

pub use engine::LinguisticEngine;
pub use matcher::{Expectation, MatchFailure, Matcher};
