use thiserror::Error;

/// Errors raised while assembling or querying the model.
///
/// These cover misuse of the construction API and malformed input the
/// parser contract forbids (e.g. an interior wildcard import). Validation
/// findings are never errors; they become [`Issue`](crate::diagnostics::Issue)s.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("wildcard is only allowed as the last segment of an import: '{path}'")]
    InteriorWildcard { path: String },

    #[error("empty import path")]
    EmptyImport,

    #[error("unknown document id {index}")]
    UnknownDocument { index: usize },

    #[error("unknown concept id {index}")]
    UnknownConcept { index: usize },
}
