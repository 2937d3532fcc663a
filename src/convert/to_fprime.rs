use seqn_protocol::dictionary::CommandDictionary;
use seqn_protocol::tree::{CommandNode, NodeKind, SyntaxNode, SyntaxTree};
use tracing::debug;

use super::arguments::{join, ArgumentFlattener};
use super::warning::ConversionWarning;
use crate::time::encode_time_tag;

/// Placeholder for a time tag or stem FPrime cannot express.
pub const UNKNOWN: &str = "UNKNOWN";

/// FPrime text together with the problems met while producing it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Emission {
    pub text: String,
    pub warnings: Vec<ConversionWarning>,
}

/// Convert a parsed SeqN sequence to FPrime, one line per command or comment.
///
/// Nodes other than commands and standalone comments produce no line.
pub fn emit(
    tree: &SyntaxTree,
    sequence: &str,
    dictionary: Option<&CommandDictionary>,
    sequence_name: &str,
) -> Emission {
    let mut flattener = ArgumentFlattener::new(sequence);
    let lines: Vec<String> = tree
        .commands()
        .map(SyntaxNode::children)
        .unwrap_or_default()
        .iter()
        .filter_map(|node| emit_step(node, sequence, dictionary, &mut flattener))
        .collect();

    let warnings = flattener.into_warnings();
    debug!(
        sequence = sequence_name,
        lines = lines.len(),
        warnings = warnings.len(),
        "converted sequence to fprime"
    );

    Emission {
        text: lines.join("\n"),
        warnings,
    }
}

/// Asynchronous host entry point; warnings are only logged.
pub async fn convert_sequence_to_fprime(
    tree: &SyntaxTree,
    sequence: &str,
    dictionary: Option<&CommandDictionary>,
    sequence_name: &str,
) -> String {
    emit(tree, sequence, dictionary, sequence_name).text
}

fn emit_step(
    node: &SyntaxNode,
    text: &str,
    dictionary: Option<&CommandDictionary>,
    flattener: &mut ArgumentFlattener<'_>,
) -> Option<String> {
    match node.kind {
        NodeKind::Command => node
            .as_command()
            .map(|command| emit_command(command, text, dictionary, flattener)),
        NodeKind::LineComment => Some(format!(";{}", description(node, text))),
        _ => None,
    }
}

fn emit_command(
    command: CommandNode<'_>,
    text: &str,
    dictionary: Option<&CommandDictionary>,
    flattener: &mut ArgumentFlattener<'_>,
) -> String {
    let time = encode_time_tag(command, text)
        .map(|time| time.trim().to_string())
        .filter(|time| !time.is_empty())
        .unwrap_or_else(|| UNKNOWN.to_string());

    let stem = command
        .stem()
        .and_then(|node| node.text(text))
        .unwrap_or(UNKNOWN);

    let definitions = dictionary
        .and_then(|dictionary| dictionary.get(stem))
        .map(|command| command.arguments.as_slice())
        .unwrap_or_default();
    let args = command
        .args()
        .map(|node| join(&flattener.command_arguments(node, definitions)))
        .unwrap_or_default();

    let mut line = format!("{} {} {}", time, stem.replacen('_', ".", 1), args);
    if let Some(description) = command
        .description()
        .map(|node| description(node, text))
        .filter(|description| !description.is_empty())
    {
        line.push_str(" ;");
        line.push_str(&description);
    }
    line
}

/// Comment text without its `#` marker, unescaped and trimmed.
fn description(node: &SyntaxNode, text: &str) -> String {
    let mut chars = node.text(text).unwrap_or_default().chars();
    chars.next();
    remove_escaped_quotes(chars.as_str())
}

/// Replace `\"` with `"` and trim.
pub fn remove_escaped_quotes(text: &str) -> String {
    text.replace("\\\"", "\"").trim().to_string()
}
