use smol_str::SmolStr;

use super::concept::TypeInfo;
use super::error::ModelError;
use crate::base::{ConceptId, Span};

/// A parsed document: a stable URI plus the one System it declares.
#[derive(Debug, Clone)]
pub struct Document {
    pub uri: SmolStr,
    pub system: System,
}

/// The top-level named container of a document.
///
/// A System's name may itself be dotted (`A.B`); exported concept names are
/// qualified relative to it.
#[derive(Debug, Clone)]
pub struct System {
    pub name: SmolStr,
    pub name_alias: Option<SmolStr>,
    pub vendor: Option<SmolStr>,
    pub version: Option<SmolStr>,
    pub description: Option<SmolStr>,
    pub reusable: bool,
    pub is_final: bool,
    pub type_info: TypeInfo,
    pub imports: Vec<Import>,
    /// Direct concepts, in declaration order. Include-expansion happens at
    /// query time, never here.
    pub concepts: Vec<ConceptId>,
    pub span: Span,
}

impl System {
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            name_alias: None,
            vendor: None,
            version: None,
            description: None,
            reusable: false,
            is_final: false,
            type_info: TypeInfo::default(),
            imports: Vec::new(),
            concepts: Vec::new(),
            span: Span::default(),
        }
    }

    /// Segments of the (possibly dotted) System name.
    pub fn name_segments(&self) -> impl Iterator<Item = &str> {
        self.name.split('.')
    }
}

/// A dotted namespace import, optionally ending in a wildcard segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    pub segments: Vec<SmolStr>,
    pub wildcard: bool,
    pub span: Span,
}

impl Import {
    /// Parse a dotted import path such as `A.B.Foo` or `A.B.*`.
    ///
    /// A wildcard is only legal as the last segment; anywhere else the
    /// parser contract is broken and we refuse the import.
    pub fn parse(path: &str) -> Result<Self, ModelError> {
        if path.is_empty() {
            return Err(ModelError::EmptyImport);
        }
        let raw: Vec<&str> = path.split('.').collect();
        let wildcard = raw.last() == Some(&"*");
        let segments: Vec<SmolStr> = if wildcard {
            raw[..raw.len() - 1].iter().map(|s| SmolStr::new(s)).collect()
        } else {
            raw.iter().map(|s| SmolStr::new(s)).collect()
        };
        if segments.is_empty() || segments.iter().any(|s| s == "*") {
            return Err(ModelError::InteriorWildcard {
                path: path.to_string(),
            });
        }
        Ok(Self {
            segments,
            wildcard,
            span: Span::default(),
        })
    }

    /// The namespace part of the import (all segments, wildcard excluded).
    pub fn namespace(&self) -> String {
        self.segments.join(".")
    }
}
