use std::fs;
use std::path::{Path, PathBuf};

use seqn_protocol::dictionary::{CommandDictionary, DictionaryDocument, FswCommand};
use seqn_protocol::tree::SyntaxTree;
use thiserror::Error;
use tracing::debug;

/// Errors returned when reading dictionaries or syntax trees from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("path does not exist: {0}")]
    MissingPath(String),
    #[error("failed to read {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse command dictionary from {path}: {message}")]
    Dictionary { path: String, message: String },
    #[error("failed to parse syntax tree from {path}: {message}")]
    Tree { path: String, message: String },
}

impl LoadError {
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LoadError::Io {
            path: path.into().display().to_string(),
            source,
        }
    }
}

/// Reads a command dictionary from a JSON or YAML file.
pub fn load_dictionary(path: impl AsRef<Path>) -> Result<CommandDictionary, LoadError> {
    let path = path.as_ref();
    let raw = read(path)?;
    let dictionary = parse_dictionary(&raw).map_err(|message| LoadError::Dictionary {
        path: path.display().to_string(),
        message,
    })?;
    debug!(path = %path.display(), commands = dictionary.len(), "loaded command dictionary");
    Ok(dictionary)
}

/// Parses a dictionary document, a bare list of commands, or a single command.
pub fn parse_dictionary(raw: &str) -> Result<CommandDictionary, String> {
    let mut attempts = Vec::new();

    if let Ok(document) = serde_yaml::from_str::<DictionaryDocument>(raw) {
        return Ok(CommandDictionary::from(document));
    }

    attempts.push("dictionary document".to_string());

    if let Ok(list) = serde_yaml::from_str::<Vec<FswCommand>>(raw) {
        return Ok(CommandDictionary::new(list));
    }

    attempts.push("list".to_string());

    if let Ok(command) = serde_yaml::from_str::<FswCommand>(raw) {
        return Ok(CommandDictionary::new(vec![command]));
    }

    attempts.push("single".to_string());

    Err(format!(
        "unable to parse dictionary using {:?} formats",
        attempts
    ))
}

/// Reads a parsed SeqN syntax tree serialized as JSON by the host parser.
pub fn load_tree(path: impl AsRef<Path>) -> Result<SyntaxTree, LoadError> {
    let path = path.as_ref();
    let raw = read(path)?;
    serde_json::from_str(&raw).map_err(|err| LoadError::Tree {
        path: path.display().to_string(),
        message: err.to_string(),
    })
}

fn read(path: &Path) -> Result<String, LoadError> {
    if !path.exists() {
        return Err(LoadError::MissingPath(path.display().to_string()));
    }
    fs::read_to_string(path).map_err(|err| LoadError::from_io(path, err))
}
