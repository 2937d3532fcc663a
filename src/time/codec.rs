use std::fmt;

use seqn_protocol::tree::{CommandNode, SyntaxNode, TimeTagVariant};
use tracing::debug;

use super::duration::{validate_time, Duration, TimeType};

/// Time tag of a command in its FPrime form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeTag {
    /// Epoch-relative timestamp, kept verbatim.
    Absolute(String),
    /// Offset from the completion of the previous command.
    Relative(Duration),
}

impl TimeTag {
    /// Read the time tag of a SeqN command.
    ///
    /// `None` when the command has no tag, carries a `TimeComplete`/`TimeEpoch`
    /// tag, or its relative time matches neither duration form.
    pub fn from_command(command: CommandNode<'_>, source: &str) -> Option<TimeTag> {
        match command.time_tag()?.variant()? {
            TimeTagVariant::Absolute(node) => {
                tag_body(node, source).map(|body| TimeTag::Absolute(body.to_string()))
            }
            TimeTagVariant::Relative(node) => {
                let body = tag_body(node, source)?;
                let duration = relative_duration(body);
                if duration.is_none() {
                    debug!(time = body, "relative time tag matches no duration form");
                }
                duration.map(TimeTag::Relative)
            }
            TimeTagVariant::Complete(_) | TimeTagVariant::Epoch(_) => None,
        }
    }
}

impl fmt::Display for TimeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeTag::Absolute(timestamp) => write!(f, "A{}", timestamp),
            TimeTag::Relative(duration) => write!(f, "R{}", duration),
        }
    }
}

/// FPrime text of a command's time tag, if it has one FPrime can express.
pub fn encode_time_tag(command: CommandNode<'_>, source: &str) -> Option<String> {
    TimeTag::from_command(command, source).map(|tag| tag.to_string())
}

/// Full durations keep their components as written; simplified ones are balanced.
fn relative_duration(text: &str) -> Option<Duration> {
    if validate_time(text, TimeType::Relative) {
        return Duration::parse(text).ok();
    }
    if validate_time(text, TimeType::RelativeSimple) {
        return Duration::parse(text).ok().map(|duration| duration.balance());
    }
    None
}

/// Node text without its leading marker character, trimmed.
fn tag_body<'s>(node: &SyntaxNode, source: &'s str) -> Option<&'s str> {
    let mut chars = node.text(source)?.chars();
    chars.next();
    Some(chars.as_str().trim())
}
