use serde::{Deserialize, Serialize};

use crate::tree::SyntaxNode;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Hint,
    Info,
    Warning,
    Error,
}

/// Positional annotation over a `[from, to)` range of the source text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Diagnostic {
    pub from: usize,
    pub to: usize,
    pub message: String,
    pub severity: Severity,
}

impl Diagnostic {
    pub fn new(from: usize, to: usize, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            from,
            to,
            message: message.into(),
            severity,
        }
    }

    pub fn error(from: usize, to: usize, message: impl Into<String>) -> Self {
        Self::new(from, to, Severity::Error, message)
    }

    /// Error spanning the whole range of `node`.
    pub fn error_at(node: &SyntaxNode, message: impl Into<String>) -> Self {
        Self::error(node.from, node.to, message)
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Read-only view of the document being edited, handed to linters by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorView<'a> {
    doc: &'a str,
}

impl<'a> EditorView<'a> {
    pub fn new(doc: &'a str) -> Self {
        Self { doc }
    }

    pub fn doc(&self) -> &'a str {
        self.doc
    }
}
