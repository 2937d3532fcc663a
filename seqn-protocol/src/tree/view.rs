use super::kind::NodeKind;
use super::node::SyntaxNode;

/// Typed view over a `Command` node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandNode<'a> {
    node: &'a SyntaxNode,
}

impl<'a> CommandNode<'a> {
    pub fn cast(node: &'a SyntaxNode) -> Option<Self> {
        (node.kind == NodeKind::Command).then_some(Self { node })
    }

    pub fn node(&self) -> &'a SyntaxNode {
        self.node
    }

    pub fn time_tag(&self) -> Option<TimeTagNode<'a>> {
        self.node.child(NodeKind::TimeTag).map(|node| TimeTagNode { node })
    }

    pub fn stem(&self) -> Option<&'a SyntaxNode> {
        self.node.child(NodeKind::Stem)
    }

    pub fn args(&self) -> Option<&'a SyntaxNode> {
        self.node.child(NodeKind::Args)
    }

    /// Trailing comment attached to the command.
    pub fn description(&self) -> Option<&'a SyntaxNode> {
        self.node.child(NodeKind::LineComment)
    }
}

/// Typed view over a `TimeTag` node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeTagNode<'a> {
    node: &'a SyntaxNode,
}

/// The single time form carried by a `TimeTag`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeTagVariant<'a> {
    Absolute(&'a SyntaxNode),
    Relative(&'a SyntaxNode),
    Complete(&'a SyntaxNode),
    Epoch(&'a SyntaxNode),
}

impl<'a> TimeTagNode<'a> {
    pub fn node(&self) -> &'a SyntaxNode {
        self.node
    }

    pub fn variant(&self) -> Option<TimeTagVariant<'a>> {
        let node = self.node;
        node.child(NodeKind::TimeAbsolute)
            .map(TimeTagVariant::Absolute)
            .or_else(|| node.child(NodeKind::TimeRelative).map(TimeTagVariant::Relative))
            .or_else(|| node.child(NodeKind::TimeComplete).map(TimeTagVariant::Complete))
            .or_else(|| node.child(NodeKind::TimeEpoch).map(TimeTagVariant::Epoch))
    }

    /// The `TimeComplete` child, else the `TimeEpoch` child.
    pub fn unsupported(&self) -> Option<&'a SyntaxNode> {
        self.node
            .child(NodeKind::TimeComplete)
            .or_else(|| self.node.child(NodeKind::TimeEpoch))
    }
}

impl<'a> TimeTagVariant<'a> {
    pub fn node(&self) -> &'a SyntaxNode {
        match self {
            TimeTagVariant::Absolute(node)
            | TimeTagVariant::Relative(node)
            | TimeTagVariant::Complete(node)
            | TimeTagVariant::Epoch(node) => node,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time_tag(children: Vec<SyntaxNode>) -> SyntaxNode {
        SyntaxNode::new(NodeKind::Command, 0, 20).with_children(vec![
            SyntaxNode::new(NodeKind::TimeTag, 0, 10).with_children(children),
            SyntaxNode::new(NodeKind::Stem, 10, 20),
        ])
    }

    #[test]
    fn cast_rejects_other_kinds() {
        let stem = SyntaxNode::new(NodeKind::Stem, 0, 3);
        assert!(CommandNode::cast(&stem).is_none());
    }

    #[test]
    fn resolves_relative_variant() {
        let node = time_tag(vec![SyntaxNode::new(NodeKind::TimeRelative, 0, 9)]);
        let command = node.as_command().unwrap();
        let variant = command.time_tag().and_then(|tag| tag.variant());
        assert!(matches!(variant, Some(TimeTagVariant::Relative(n)) if n.to == 9));
        assert!(command.time_tag().unwrap().unsupported().is_none());
    }

    #[test]
    fn prefers_complete_over_epoch() {
        let node = time_tag(vec![
            SyntaxNode::new(NodeKind::TimeEpoch, 4, 8),
            SyntaxNode::new(NodeKind::TimeComplete, 0, 2),
        ]);
        let tag = node.as_command().unwrap().time_tag().unwrap();
        assert_eq!(tag.unsupported().map(|n| n.kind), Some(NodeKind::TimeComplete));
    }

    #[test]
    fn command_without_time_tag() {
        let node = SyntaxNode::new(NodeKind::Command, 0, 5)
            .with_children(vec![SyntaxNode::new(NodeKind::Stem, 0, 5)]);
        let command = node.as_command().unwrap();
        assert!(command.time_tag().is_none());
        assert!(command.args().is_none());
        assert_eq!(command.stem().map(|s| s.to), Some(5));
    }
}
