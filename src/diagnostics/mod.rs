//! Diagnostics — structured issues produced by the validators.
//!
//! Every finding is an [`Issue`]: severity, message, taxonomy code, the
//! offended node/property, and an optional positional `data` payload that
//! is the sole input for mechanical quick-fix synthesis.

pub mod codes;
mod quickfix;

pub use quickfix::{TextEdit, quick_fix};

use crate::base::{ConceptId, DocumentId};

/// The node an issue attaches to: a concept, or the System itself for
/// document-level findings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IssueNode {
    System(DocumentId),
    Concept(ConceptId),
}

impl From<ConceptId> for IssueNode {
    fn from(id: ConceptId) -> Self {
        IssueNode::Concept(id)
    }
}

impl IssueNode {
    pub fn concept(self) -> Option<ConceptId> {
        match self {
            IssueNode::Concept(id) => Some(id),
            IssueNode::System(_) => None,
        }
    }
}

/// Severity level of an issue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    /// Convert to LSP severity number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            Severity::Error => 1,
            Severity::Warning => 2,
            Severity::Info => 3,
        }
    }
}

/// A single validation finding.
#[derive(Clone, Debug)]
pub struct Issue {
    pub severity: Severity,
    pub message: String,
    /// Taxonomy code, one of [`codes`].
    pub code: &'static str,
    pub document: DocumentId,
    /// The offended node.
    pub node: IssueNode,
    /// AST property the issue attaches to, when narrower than the node.
    pub property: Option<&'static str>,
    /// Positional payload following the per-code convention; input to
    /// [`quick_fix`].
    pub data: Vec<String>,
}

impl Issue {
    pub fn error(
        document: DocumentId,
        node: impl Into<IssueNode>,
        code: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self::new(Severity::Error, document, node, code, message)
    }

    pub fn warning(
        document: DocumentId,
        node: impl Into<IssueNode>,
        code: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self::new(Severity::Warning, document, node, code, message)
    }

    pub fn info(
        document: DocumentId,
        node: impl Into<IssueNode>,
        code: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self::new(Severity::Info, document, node, code, message)
    }

    pub fn new(
        severity: Severity,
        document: DocumentId,
        node: impl Into<IssueNode>,
        code: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            message: message.into(),
            code,
            document,
            node: node.into(),
            property: None,
            data: Vec::new(),
        }
    }

    pub fn with_property(mut self, property: &'static str) -> Self {
        self.property = Some(property);
        self
    }

    pub fn with_data(mut self, data: Vec<String>) -> Self {
        self.data = data;
        self
    }
}

/// Collects issues during a validation pass.
#[derive(Clone, Debug, Default)]
pub struct IssueCollector {
    issues: Vec<Issue>,
}

impl IssueCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, issue: Issue) {
        self.issues.push(issue);
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn for_document(&self, document: DocumentId) -> Vec<&Issue> {
        self.issues
            .iter()
            .filter(|i| i.document == document)
            .collect()
    }

    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
            .count()
    }

    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(|i| i.severity == Severity::Error)
    }

    /// Take all issues, leaving the collector empty.
    pub fn take(&mut self) -> Vec<Issue> {
        std::mem::take(&mut self.issues)
    }
}
