use std::io;

use thiserror::Error;

use crate::loader::LoadError;

/// Result type used across the SeqN core crate.
pub type Result<T> = std::result::Result<T, SeqnError>;

/// Canonical error representation shared by the adaptation crates.
#[derive(Debug, Error)]
pub enum SeqnError {
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    #[error("command dictionary error: {0}")]
    DictionaryError(String),

    #[error("syntax tree error: {0}")]
    TreeError(String),

    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("general error: {0}")]
    GeneralError(String),
}

impl From<LoadError> for SeqnError {
    fn from(err: LoadError) -> Self {
        match err {
            LoadError::Dictionary { .. } => SeqnError::DictionaryError(err.to_string()),
            LoadError::Tree { .. } => SeqnError::TreeError(err.to_string()),
            LoadError::MissingPath(_) | LoadError::Io { .. } => {
                SeqnError::GeneralError(err.to_string())
            }
        }
    }
}

/// Dedicated configuration error used by the configuration module.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for environment variable {key}: {value}")]
    InvalidEnvVar { key: String, value: String },

    #[error("environment variable {key} is not valid unicode")]
    NotUnicode { key: String },
}

impl From<ConfigError> for SeqnError {
    fn from(value: ConfigError) -> Self {
        SeqnError::ConfigError(value.to_string())
    }
}
