use serde::{Deserialize, Serialize};

/// Argument types known to the command dictionary.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ArgumentType {
    Boolean,
    Enum,
    Fill,
    FixedString,
    Float,
    Integer,
    Numeric,
    Repeat,
    Time,
    Unsigned,
    VarString,
}

/// Definition of a single command argument.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FswCommandArgument {
    pub name: String,
    pub arg_type: ArgumentType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Sub-argument layout, only meaningful for `repeat` arguments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat: Option<RepeatDefinition>,
}

/// Layout of one repetition of a repeat argument.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct RepeatDefinition {
    #[serde(default)]
    pub arguments: Vec<FswCommandArgument>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
}

impl FswCommandArgument {
    pub fn new(name: impl Into<String>, arg_type: ArgumentType) -> Self {
        Self {
            name: name.into(),
            arg_type,
            description: None,
            repeat: None,
        }
    }

    /// Build a repeat argument whose repetitions contain `arguments`.
    pub fn repeat(name: impl Into<String>, arguments: Vec<FswCommandArgument>) -> Self {
        Self {
            name: name.into(),
            arg_type: ArgumentType::Repeat,
            description: None,
            repeat: Some(RepeatDefinition {
                arguments,
                min: None,
                max: None,
            }),
        }
    }

    pub fn is_repeat(&self) -> bool {
        self.arg_type == ArgumentType::Repeat
    }

    /// Sub-argument definitions of a repeat argument.
    pub fn repeat_arguments(&self) -> Option<&[FswCommandArgument]> {
        if !self.is_repeat() {
            return None;
        }
        self.repeat
            .as_ref()
            .map(|definition| definition.arguments.as_slice())
    }

    /// Number of values per repetition. `None` means unbounded.
    pub fn arity(&self) -> Option<usize> {
        self.repeat_arguments()
            .map(<[FswCommandArgument]>::len)
            .filter(|len| *len > 0)
    }
}
