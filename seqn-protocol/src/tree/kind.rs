use std::fmt;

use serde::{Deserialize, Serialize};

/// Node names produced by the SeqN grammar.
///
/// The set is closed: a tree handed over by the host that carries any other
/// name fails to deserialize instead of silently matching nothing. Kinds the
/// converter has no use for are still listed so whole documents load.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum NodeKind {
    // Document structure
    Sequence,
    Commands,
    ImmediateCommands,
    HardwareCommands,
    LineComment,
    // Metadata and models
    Metadata,
    MetaEntry,
    Key,
    Value,
    Models,
    Model,
    Variable,
    Offset,
    // Declarations
    IdDeclaration,
    ParameterDeclaration,
    LocalDeclaration,
    VariableName,
    Type,
    EnumName,
    Range,
    Values,
    // Steps
    Command,
    Activate,
    Load,
    GroundBlock,
    GroundEvent,
    Request,
    SequenceName,
    Engine,
    Epoch,
    GroundName,
    Name,
    RequestName,
    Steps,
    Arguments,
    Description,
    Stem,
    Args,
    RepeatArg,
    // Values
    String,
    Number,
    Boolean,
    Enum,
    Hex,
    Null,
    Array,
    Object,
    Property,
    PropertyName,
    // Time tags
    TimeTag,
    TimeAbsolute,
    TimeRelative,
    TimeComplete,
    TimeEpoch,
    TimeGroundEpoch,
    /// Error token inserted by the parser's recovery.
    #[serde(rename = "⚠")]
    Error,
}

impl NodeKind {
    /// Grammar name of the node, as the host parser spells it.
    pub fn name(self) -> &'static str {
        match self {
            NodeKind::Sequence => "Sequence",
            NodeKind::Commands => "Commands",
            NodeKind::ImmediateCommands => "ImmediateCommands",
            NodeKind::HardwareCommands => "HardwareCommands",
            NodeKind::LineComment => "LineComment",
            NodeKind::Metadata => "Metadata",
            NodeKind::MetaEntry => "MetaEntry",
            NodeKind::Key => "Key",
            NodeKind::Value => "Value",
            NodeKind::Models => "Models",
            NodeKind::Model => "Model",
            NodeKind::Variable => "Variable",
            NodeKind::Offset => "Offset",
            NodeKind::IdDeclaration => "IdDeclaration",
            NodeKind::ParameterDeclaration => "ParameterDeclaration",
            NodeKind::LocalDeclaration => "LocalDeclaration",
            NodeKind::VariableName => "VariableName",
            NodeKind::Type => "Type",
            NodeKind::EnumName => "EnumName",
            NodeKind::Range => "Range",
            NodeKind::Values => "Values",
            NodeKind::Command => "Command",
            NodeKind::Activate => "Activate",
            NodeKind::Load => "Load",
            NodeKind::GroundBlock => "GroundBlock",
            NodeKind::GroundEvent => "GroundEvent",
            NodeKind::Request => "Request",
            NodeKind::SequenceName => "SequenceName",
            NodeKind::Engine => "Engine",
            NodeKind::Epoch => "Epoch",
            NodeKind::GroundName => "GroundName",
            NodeKind::Name => "Name",
            NodeKind::RequestName => "RequestName",
            NodeKind::Steps => "Steps",
            NodeKind::Arguments => "Arguments",
            NodeKind::Description => "Description",
            NodeKind::Stem => "Stem",
            NodeKind::Args => "Args",
            NodeKind::RepeatArg => "RepeatArg",
            NodeKind::String => "String",
            NodeKind::Number => "Number",
            NodeKind::Boolean => "Boolean",
            NodeKind::Enum => "Enum",
            NodeKind::Hex => "Hex",
            NodeKind::Null => "Null",
            NodeKind::Array => "Array",
            NodeKind::Object => "Object",
            NodeKind::Property => "Property",
            NodeKind::PropertyName => "PropertyName",
            NodeKind::TimeTag => "TimeTag",
            NodeKind::TimeAbsolute => "TimeAbsolute",
            NodeKind::TimeRelative => "TimeRelative",
            NodeKind::TimeComplete => "TimeComplete",
            NodeKind::TimeEpoch => "TimeEpoch",
            NodeKind::TimeGroundEpoch => "TimeGroundEpoch",
            NodeKind::Error => "⚠",
        }
    }

    /// Whether the node is a scalar argument token.
    pub fn is_scalar_argument(self) -> bool {
        matches!(
            self,
            NodeKind::String | NodeKind::Number | NodeKind::Boolean | NodeKind::Enum | NodeKind::Hex
        )
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
