//! The adaptation the host editor loads: named input and output formats
//! with their converters and linters.

use async_trait::async_trait;
use seqn_protocol::diagnostic::{Diagnostic, EditorView};
use seqn_protocol::dictionary::CommandDictionary;
use seqn_protocol::tree::{SyntaxNode, SyntaxTree};
use seqn_rules::{LintEngine, Linter};

use crate::convert::{convert_fprime_to_sequence, convert_sequence_to_fprime};

pub const INPUT_FORMAT_NAME: &str = "SeqN Overrides";
pub const OUTPUT_FORMAT_NAME: &str = "FPP Output";

/// Format the host converts into SeqN when a file is opened.
#[async_trait]
pub trait InputFormat: Send + Sync {
    fn name(&self) -> &str;

    async fn to_input_format(&self, text: &str) -> String;

    fn linter(&self) -> Option<&dyn Linter> {
        None
    }
}

/// Format the host converts a SeqN sequence into.
#[async_trait]
pub trait OutputFormat: Send + Sync {
    fn name(&self) -> &str;

    async fn to_output_format(
        &self,
        tree: &SyntaxTree,
        sequence: &str,
        dictionary: Option<&CommandDictionary>,
        sequence_name: &str,
    ) -> String;

    fn linter(&self) -> &dyn Linter;
}

/// FPrime text in, SeqN out; sequences are linted for FPrime time tags.
#[derive(Debug, Default)]
pub struct SeqnOverrides {
    linter: LintEngine,
}

#[async_trait]
impl InputFormat for SeqnOverrides {
    fn name(&self) -> &str {
        INPUT_FORMAT_NAME
    }

    async fn to_input_format(&self, text: &str) -> String {
        convert_fprime_to_sequence(text).await
    }

    fn linter(&self) -> Option<&dyn Linter> {
        Some(&self.linter)
    }
}

/// SeqN tree in, FPrime text out.
#[derive(Debug, Default)]
pub struct FppOutput {
    linter: EmptyLinter,
}

#[async_trait]
impl OutputFormat for FppOutput {
    fn name(&self) -> &str {
        OUTPUT_FORMAT_NAME
    }

    async fn to_output_format(
        &self,
        tree: &SyntaxTree,
        sequence: &str,
        dictionary: Option<&CommandDictionary>,
        sequence_name: &str,
    ) -> String {
        convert_sequence_to_fprime(tree, sequence, dictionary, sequence_name).await
    }

    fn linter(&self) -> &dyn Linter {
        &self.linter
    }
}

/// Linter of the FPrime output view. It reports nothing and does not carry
/// over the diagnostics it is given.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmptyLinter;

impl Linter for EmptyLinter {
    fn lint(
        &self,
        _diagnostics: Vec<Diagnostic>,
        _dictionary: Option<&CommandDictionary>,
        _view: &EditorView<'_>,
        _node: &SyntaxNode,
    ) -> Vec<Diagnostic> {
        Vec::new()
    }
}

/// Descriptor handed to the host.
pub struct Adaptation {
    pub input_format: Box<dyn InputFormat>,
    pub output_format: Vec<Box<dyn OutputFormat>>,
}

impl Adaptation {
    /// The SeqN/FPrime adaptation.
    pub fn fprime() -> Self {
        Self {
            input_format: Box::new(SeqnOverrides::default()),
            output_format: vec![Box::new(FppOutput::default())],
        }
    }

    /// Output format registered under `name`.
    pub fn output(&self, name: &str) -> Option<&dyn OutputFormat> {
        self.output_format
            .iter()
            .find(|format| format.name() == name)
            .map(|format| format.as_ref())
    }
}

impl Default for Adaptation {
    fn default() -> Self {
        Self::fprime()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seqn_protocol::diagnostic::Severity;
    use seqn_protocol::tree::NodeKind;

    #[test]
    fn exposes_named_formats() {
        let adaptation = Adaptation::fprime();
        assert_eq!(adaptation.input_format.name(), INPUT_FORMAT_NAME);
        assert!(adaptation.input_format.linter().is_some());
        assert!(adaptation.output(OUTPUT_FORMAT_NAME).is_some());
        assert!(adaptation.output("JSON").is_none());
    }

    #[test]
    fn output_linter_clears_diagnostics() {
        let adaptation = Adaptation::fprime();
        let output = adaptation.output(OUTPUT_FORMAT_NAME).unwrap();
        let existing = vec![
            Diagnostic::new(1, 2, Severity::Info, "info"),
            Diagnostic::error(0, 1, "error"),
        ];
        let root = SyntaxNode::new(NodeKind::Sequence, 0, 0);

        let diagnostics = output
            .linter()
            .lint(existing, None, &EditorView::new(""), &root);
        assert!(diagnostics.is_empty());
    }

    #[tokio::test]
    async fn input_format_rewrites_fprime() {
        let adaptation = Adaptation::fprime();
        let text = adaptation
            .input_format
            .to_input_format("R1 demo.CMD 1,2 ;hi")
            .await;
        assert_eq!(text, "R1 demo_CMD 1 2 #hi");
    }
}
