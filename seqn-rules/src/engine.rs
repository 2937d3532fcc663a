use seqn_protocol::diagnostic::{Diagnostic, EditorView};
use seqn_protocol::dictionary::CommandDictionary;
use seqn_protocol::tree::SyntaxNode;
use tracing::debug;

use crate::rule::LintRule;

/// Host-facing lint hook: extends `diagnostics` and hands the list back.
pub trait Linter: Send + Sync {
    fn lint(
        &self,
        diagnostics: Vec<Diagnostic>,
        dictionary: Option<&CommandDictionary>,
        view: &EditorView<'_>,
        node: &SyntaxNode,
    ) -> Vec<Diagnostic>;
}

/// Runs a set of [`LintRule`]s over every command of a sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintEngine {
    rules: Vec<LintRule>,
}

impl LintEngine {
    pub fn new(rules: Vec<LintRule>) -> Self {
        Self { rules }
    }

    /// Engine with every time-tag rule FPrime requires.
    pub fn fprime() -> Self {
        Self::new(LintRule::all())
    }

    pub fn rules(&self) -> &[LintRule] {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Append findings for the document rooted at `root` to `diagnostics`.
    pub fn check(&self, root: &SyntaxNode, diagnostics: &mut Vec<Diagnostic>) {
        for command in root.command_nodes() {
            for rule in &self.rules {
                if let Some(diagnostic) = rule.check(command) {
                    debug!(
                        rule = rule.name(),
                        from = diagnostic.from,
                        to = diagnostic.to,
                        "lint rule matched"
                    );
                    diagnostics.push(diagnostic);
                }
            }
        }
    }
}

impl Default for LintEngine {
    fn default() -> Self {
        Self::fprime()
    }
}

impl Linter for LintEngine {
    fn lint(
        &self,
        mut diagnostics: Vec<Diagnostic>,
        _dictionary: Option<&CommandDictionary>,
        _view: &EditorView<'_>,
        node: &SyntaxNode,
    ) -> Vec<Diagnostic> {
        self.check(node, &mut diagnostics);
        diagnostics
    }
}
