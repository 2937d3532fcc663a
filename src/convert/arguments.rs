use std::fmt;

use seqn_protocol::dictionary::FswCommandArgument;
use seqn_protocol::tree::{NodeKind, SyntaxNode};
use tracing::warn;

use super::warning::{ConversionWarning, WarningReason};

/// Deepest repeat-argument nesting that is still converted.
pub const MAX_REPEAT_DEPTH: usize = 8;

/// Command argument on its way to FPrime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Argument {
    /// Token copied verbatim from the source.
    Scalar(String),
    /// Repeat argument as its repetitions, each holding one value per
    /// dictionary sub-argument.
    Repeat(Vec<Vec<Argument>>),
}

impl Argument {
    pub fn groups(&self) -> Option<&[Vec<Argument>]> {
        match self {
            Argument::Scalar(_) => None,
            Argument::Repeat(groups) => Some(groups),
        }
    }
}

impl fmt::Display for Argument {
    /// Repeats flatten to one bracketed list: `[[a b] [c d]]` becomes `[a,b,c,d]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Argument::Scalar(text) => f.write_str(text),
            Argument::Repeat(groups) => {
                let flat = groups
                    .iter()
                    .map(|group| join(group))
                    .collect::<Vec<_>>()
                    .join(",");
                write!(f, "[{}]", flat)
            }
        }
    }
}

/// Comma-joined FPrime text of `arguments`.
pub fn join(arguments: &[Argument]) -> String {
    arguments
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Reads argument nodes, grouping repeat values by their dictionary arity.
///
/// Without a dictionary definition a repeat argument is a single group holding
/// every value. Nodes that cannot be read are dropped and recorded as warnings.
pub struct ArgumentFlattener<'a> {
    source: &'a str,
    warnings: Vec<ConversionWarning>,
}

impl<'a> ArgumentFlattener<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            warnings: Vec::new(),
        }
    }

    /// Arguments under an `Args` node; the `i`-th child is paired with the
    /// `i`-th definition.
    pub fn command_arguments(
        &mut self,
        args: &SyntaxNode,
        definitions: &[FswCommandArgument],
    ) -> Vec<Argument> {
        args.children()
            .iter()
            .enumerate()
            .filter_map(|(index, node)| self.argument(node, definitions.get(index), 0))
            .collect()
    }

    /// A single `RepeatArg` node. `None` when it is nested too deeply to convert.
    pub fn repeat(
        &mut self,
        node: &SyntaxNode,
        definition: Option<&FswCommandArgument>,
    ) -> Option<Argument> {
        self.repeat_at(node, definition, 1)
    }

    pub fn warnings(&self) -> &[ConversionWarning] {
        &self.warnings
    }

    pub fn into_warnings(self) -> Vec<ConversionWarning> {
        self.warnings
    }

    fn argument(
        &mut self,
        node: &SyntaxNode,
        definition: Option<&FswCommandArgument>,
        depth: usize,
    ) -> Option<Argument> {
        if node.kind == NodeKind::RepeatArg {
            return self.repeat_at(node, definition, depth + 1);
        }

        match node.text(self.source) {
            Some(text) if !text.is_empty() && node.kind != NodeKind::Error => {
                Some(Argument::Scalar(text.to_string()))
            }
            _ => {
                self.record(node, WarningReason::MalformedArgument);
                None
            }
        }
    }

    fn repeat_at(
        &mut self,
        node: &SyntaxNode,
        definition: Option<&FswCommandArgument>,
        depth: usize,
    ) -> Option<Argument> {
        if depth > MAX_REPEAT_DEPTH {
            self.record(node, WarningReason::RepeatTooDeep);
            return None;
        }

        let arity = definition.and_then(FswCommandArgument::arity);
        let sub_definitions = definition
            .and_then(FswCommandArgument::repeat_arguments)
            .unwrap_or_default();

        let mut groups: Vec<Vec<Argument>> = Vec::new();
        for (index, child) in node.children().iter().enumerate() {
            let starts_group = match arity {
                Some(arity) => index % arity == 0,
                None => index == 0,
            };
            if starts_group {
                groups.push(Vec::new());
            }

            let sub_definition = arity.and_then(|arity| sub_definitions.get(index % arity));
            if let Some(argument) = self.argument(child, sub_definition, depth) {
                if let Some(group) = groups.last_mut() {
                    group.push(argument);
                }
            }
        }

        Some(Argument::Repeat(groups))
    }

    fn record(&mut self, node: &SyntaxNode, reason: WarningReason) {
        let warning = ConversionWarning::new(node, reason);
        warn!(kind = %node.kind, from = node.from, to = node.to, "{}", warning);
        self.warnings.push(warning);
    }
}
