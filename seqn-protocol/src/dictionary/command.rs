use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::argument::FswCommandArgument;

/// Flight software command definition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FswCommand {
    pub stem: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub arguments: Vec<FswCommandArgument>,
}

impl FswCommand {
    pub fn new(stem: impl Into<String>, arguments: Vec<FswCommandArgument>) -> Self {
        Self {
            stem: stem.into(),
            description: None,
            arguments,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryHeader {
    #[serde(default)]
    pub mission_name: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

/// On-disk layout of a command dictionary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryDocument {
    #[serde(default)]
    pub header: Option<DictionaryHeader>,
    pub fsw_commands: Vec<FswCommand>,
}

/// Read-only catalog of commands keyed by stem.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandDictionary {
    header: Option<DictionaryHeader>,
    commands: HashMap<String, FswCommand>,
}

impl CommandDictionary {
    /// Build a dictionary from commands. A later duplicate stem replaces an earlier one.
    pub fn new(commands: impl IntoIterator<Item = FswCommand>) -> Self {
        let commands = commands
            .into_iter()
            .map(|command| (command.stem.clone(), command))
            .collect();
        Self {
            header: None,
            commands,
        }
    }

    pub fn with_header(mut self, header: DictionaryHeader) -> Self {
        self.header = Some(header);
        self
    }

    pub fn header(&self) -> Option<&DictionaryHeader> {
        self.header.as_ref()
    }

    /// Exact stem lookup.
    pub fn get(&self, stem: &str) -> Option<&FswCommand> {
        self.commands.get(stem)
    }

    /// Argument definition at `index` for the command `stem`.
    pub fn argument(&self, stem: &str, index: usize) -> Option<&FswCommandArgument> {
        self.get(stem).and_then(|command| command.arguments.get(index))
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn commands(&self) -> impl Iterator<Item = &FswCommand> {
        self.commands.values()
    }
}

impl From<DictionaryDocument> for CommandDictionary {
    fn from(document: DictionaryDocument) -> Self {
        let dictionary = CommandDictionary::new(document.fsw_commands);
        match document.header {
            Some(header) => dictionary.with_header(header),
            None => dictionary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::ArgumentType;
    use serde_json::json;

    #[test]
    fn looks_up_arguments_by_exact_stem() {
        let dictionary = CommandDictionary::new(vec![FswCommand::new(
            "demo_CMD",
            vec![FswCommandArgument::new("level", ArgumentType::Integer)],
        )]);

        assert_eq!(
            dictionary.argument("demo_CMD", 0).map(|arg| arg.name.as_str()),
            Some("level")
        );
        assert!(dictionary.argument("demo_CMD", 1).is_none());
        assert!(dictionary.get("demo.CMD").is_none());
        assert!(dictionary.get("DEMO_CMD").is_none());
    }

    #[test]
    fn converts_document_with_header() {
        let document: DictionaryDocument = serde_json::from_value(json!({
            "header": {"missionName": "demo", "version": "1.2"},
            "fswCommands": [
                {"stem": "cmdDisp_CMD_NO_OP", "arguments": []},
                {"stem": "cmdDisp_CMD_TEST_CMD_1", "arguments": [
                    {"name": "a", "arg_type": "integer"}
                ]}
            ]
        }))
        .unwrap();

        let dictionary = CommandDictionary::from(document);
        assert_eq!(dictionary.len(), 2);
        assert_eq!(
            dictionary.header().and_then(|h| h.mission_name.as_deref()),
            Some("demo")
        );
    }
}
