use seqn_protocol::diagnostic::Diagnostic;
use seqn_protocol::tree::CommandNode;

pub const MISSING_TIME_TAG_MESSAGE: &str = "Missing 'Time Tag' for command";
pub const UNSUPPORTED_TIME_TAG_MESSAGE: &str =
    "Time Complete and Time Epoch are not supported in FPrime";

/// Structural check applied to each command of a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LintRule {
    /// Every command needs a time tag in FPrime.
    MissingTimeTag,
    /// `TimeComplete` and `TimeEpoch` tags have no FPrime form.
    UnsupportedTimeTag,
}

impl LintRule {
    pub fn all() -> Vec<LintRule> {
        vec![LintRule::MissingTimeTag, LintRule::UnsupportedTimeTag]
    }

    pub fn name(self) -> &'static str {
        match self {
            LintRule::MissingTimeTag => "missing_time_tag",
            LintRule::UnsupportedTimeTag => "unsupported_time_tag",
        }
    }

    /// Evaluate the rule against a single command.
    pub fn check(self, command: CommandNode<'_>) -> Option<Diagnostic> {
        match self {
            LintRule::MissingTimeTag => match command.time_tag() {
                Some(_) => None,
                None => Some(Diagnostic::error_at(
                    command.node(),
                    MISSING_TIME_TAG_MESSAGE,
                )),
            },
            LintRule::UnsupportedTimeTag => command
                .time_tag()
                .and_then(|tag| tag.unsupported())
                .map(|node| Diagnostic::error_at(node, UNSUPPORTED_TIME_TAG_MESSAGE)),
        }
    }
}
