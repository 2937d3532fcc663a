use std::ops::Range;

use serde::{Deserialize, Serialize};

use super::kind::NodeKind;
use super::view::CommandNode;

/// Immutable node of a parsed SeqN document.
///
/// `from`/`to` form a half-open byte range into the source text the tree was
/// parsed from. Children are kept in document order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SyntaxNode {
    pub kind: NodeKind,
    pub from: usize,
    pub to: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    /// Create a leaf node.
    pub fn new(kind: NodeKind, from: usize, to: usize) -> Self {
        Self {
            kind,
            from,
            to,
            children: Vec::new(),
        }
    }

    /// Attach children, replacing any existing ones.
    pub fn with_children(mut self, children: Vec<SyntaxNode>) -> Self {
        self.children = children;
        self
    }

    pub fn children(&self) -> &[SyntaxNode] {
        &self.children
    }

    pub fn first_child(&self) -> Option<&SyntaxNode> {
        self.children.first()
    }

    /// First direct child of the given kind.
    pub fn child(&self, kind: NodeKind) -> Option<&SyntaxNode> {
        self.children.iter().find(|child| child.kind == kind)
    }

    /// All direct children of the given kind.
    pub fn children_of(&self, kind: NodeKind) -> impl Iterator<Item = &SyntaxNode> {
        self.children.iter().filter(move |child| child.kind == kind)
    }

    pub fn range(&self) -> Range<usize> {
        self.from..self.to
    }

    /// Source slice covered by the node. `None` when the range does not fit
    /// the text or splits a character.
    pub fn text<'s>(&self, source: &'s str) -> Option<&'s str> {
        source.get(self.from..self.to)
    }

    /// Typed view when the node is a `Command`.
    pub fn as_command(&self) -> Option<CommandNode<'_>> {
        CommandNode::cast(self)
    }

    /// `Command` nodes under the direct `Commands` child, in document order.
    pub fn command_nodes(&self) -> impl Iterator<Item = CommandNode<'_>> {
        self.child(NodeKind::Commands)
            .into_iter()
            .flat_map(|commands| commands.children.iter())
            .filter_map(SyntaxNode::as_command)
    }
}

/// A parsed SeqN document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct SyntaxTree {
    top: SyntaxNode,
}

impl SyntaxTree {
    pub fn new(top: SyntaxNode) -> Self {
        Self { top }
    }

    pub fn top_node(&self) -> &SyntaxNode {
        &self.top
    }

    /// The `Commands` block, if the document has one.
    pub fn commands(&self) -> Option<&SyntaxNode> {
        self.top.child(NodeKind::Commands)
    }
}

impl From<SyntaxNode> for SyntaxTree {
    fn from(top: SyntaxNode) -> Self {
        SyntaxTree::new(top)
    }
}
