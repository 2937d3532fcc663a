#![allow(dead_code)]

use seqn_protocol::tree::{NodeKind, SyntaxNode, SyntaxTree};

/// Argument token written into a test sequence.
#[derive(Debug, Clone)]
pub enum Arg {
    Token(NodeKind, &'static str),
    Repeat(Vec<Arg>),
}

pub fn number(text: &'static str) -> Arg {
    Arg::Token(NodeKind::Number, text)
}

pub fn enumeration(text: &'static str) -> Arg {
    Arg::Token(NodeKind::Enum, text)
}

pub fn string(text: &'static str) -> Arg {
    Arg::Token(NodeKind::String, text)
}

pub fn repeat(items: Vec<Arg>) -> Arg {
    Arg::Repeat(items)
}

/// Writes SeqN source line by line and records the tree a parser would
/// produce for it, with offsets into the written text.
#[derive(Debug, Default)]
pub struct SequenceBuilder {
    source: String,
    steps: Vec<SyntaxNode>,
}

impl SequenceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// `time` is the time tag kind and its text, including the marker.
    /// `description` includes its leading `#`.
    pub fn command(
        mut self,
        time: Option<(NodeKind, &str)>,
        stem: &str,
        args: &[Arg],
        description: Option<&str>,
    ) -> Self {
        self.newline();
        let start = self.source.len();
        let mut children = Vec::new();

        if let Some((kind, text)) = time {
            let (from, to) = self.push(text);
            children.push(
                SyntaxNode::new(NodeKind::TimeTag, from, to)
                    .with_children(vec![SyntaxNode::new(kind, from, to)]),
            );
            self.source.push(' ');
        }

        let (from, to) = self.push(stem);
        children.push(SyntaxNode::new(NodeKind::Stem, from, to));

        if !args.is_empty() {
            self.source.push(' ');
            let from = self.source.len();
            let nodes = self.args(args);
            children.push(
                SyntaxNode::new(NodeKind::Args, from, self.source.len()).with_children(nodes),
            );
        }

        if let Some(description) = description {
            self.source.push(' ');
            let (from, to) = self.push(description);
            children.push(SyntaxNode::new(NodeKind::LineComment, from, to));
        }

        let end = self.source.len();
        self.steps
            .push(SyntaxNode::new(NodeKind::Command, start, end).with_children(children));
        self
    }

    /// Standalone comment line, including its leading `#`.
    pub fn comment(mut self, text: &str) -> Self {
        self.newline();
        let (from, to) = self.push(text);
        self.steps.push(SyntaxNode::new(NodeKind::LineComment, from, to));
        self
    }

    /// Line that is kept in the source but parsed as `kind`.
    pub fn other(mut self, kind: NodeKind, text: &str) -> Self {
        self.newline();
        let (from, to) = self.push(text);
        self.steps.push(SyntaxNode::new(kind, from, to));
        self
    }

    pub fn build(self) -> (SyntaxTree, String) {
        let len = self.source.len();
        let commands = SyntaxNode::new(NodeKind::Commands, 0, len).with_children(self.steps);
        let root = SyntaxNode::new(NodeKind::Sequence, 0, len).with_children(vec![commands]);
        (SyntaxTree::new(root), self.source)
    }

    fn newline(&mut self) {
        if !self.source.is_empty() {
            self.source.push('\n');
        }
    }

    fn push(&mut self, text: &str) -> (usize, usize) {
        let from = self.source.len();
        self.source.push_str(text);
        (from, self.source.len())
    }

    fn args(&mut self, args: &[Arg]) -> Vec<SyntaxNode> {
        let mut nodes = Vec::with_capacity(args.len());
        for (index, arg) in args.iter().enumerate() {
            if index > 0 {
                self.source.push(' ');
            }
            nodes.push(self.arg(arg));
        }
        nodes
    }

    fn arg(&mut self, arg: &Arg) -> SyntaxNode {
        match arg {
            Arg::Token(kind, text) => {
                let (from, to) = self.push(text);
                SyntaxNode::new(*kind, from, to)
            }
            Arg::Repeat(items) => {
                let from = self.source.len();
                self.source.push('[');
                let children = self.args(items);
                self.source.push(']');
                SyntaxNode::new(NodeKind::RepeatArg, from, self.source.len())
                    .with_children(children)
            }
        }
    }
}
