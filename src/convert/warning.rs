use std::fmt;

use seqn_protocol::diagnostic::{Diagnostic, Severity};
use seqn_protocol::tree::{NodeKind, SyntaxNode};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WarningReason {
    /// Argument node with no usable text.
    MalformedArgument,
    /// Repeat argument nested past [`MAX_REPEAT_DEPTH`](crate::convert::MAX_REPEAT_DEPTH).
    RepeatTooDeep,
}

/// Recoverable problem met while emitting FPrime. The offending node is left
/// out of the output.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ConversionWarning {
    pub from: usize,
    pub to: usize,
    pub kind: NodeKind,
    pub reason: WarningReason,
}

impl ConversionWarning {
    pub fn new(node: &SyntaxNode, reason: WarningReason) -> Self {
        Self {
            from: node.from,
            to: node.to,
            kind: node.kind,
            reason,
        }
    }

    /// Warning-severity diagnostic over the dropped node.
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::new(self.from, self.to, Severity::Warning, self.to_string())
    }
}

impl fmt::Display for ConversionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason {
            WarningReason::MalformedArgument => {
                write!(f, "Could not parse arg for node with name {}", self.kind)
            }
            WarningReason::RepeatTooDeep => write!(
                f,
                "Could not parse repeat arg for node with name {}: nested too deeply",
                self.kind
            ),
        }
    }
}
