use std::env::{self, VarError};
use std::path::PathBuf;

use crate::errors::{ConfigError, SeqnError};

/// Prefix of the environment variables read by [`AdaptationConfig::from_env`].
pub const DEFAULT_ENV_PREFIX: &str = "SEQN_";

const DEFAULT_SEQUENCE_NAME: &str = "sequence";

/// Settings shared by the command-line host and embedding applications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdaptationConfig {
    /// Default command dictionary, used when no dictionary is given explicitly.
    pub dictionary_path: Option<PathBuf>,
    pub log_level: Option<String>,
    /// Sequence name passed to the output format when none is given.
    pub sequence_name: String,
}

impl Default for AdaptationConfig {
    fn default() -> Self {
        Self {
            dictionary_path: None,
            log_level: None,
            sequence_name: DEFAULT_SEQUENCE_NAME.to_string(),
        }
    }
}

impl AdaptationConfig {
    /// Loads configuration from the process environment (and `.env`, if present).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_env_with_prefix(DEFAULT_ENV_PREFIX)
    }

    /// Loads configuration from env vars prefixed with the provided value (e.g. `SEQN_`).
    pub fn from_env_with_prefix(prefix: &str) -> Result<Self, ConfigError> {
        let key = |suffix: &str| format!("{}{}", prefix, suffix);

        let dictionary_path = read_var(&key("DICTIONARY"))?
            .filter(|raw| !raw.trim().is_empty())
            .map(PathBuf::from);

        let log_level = read_var(&key("LOG_LEVEL"))?;

        let sequence_name = match read_var(&key("SEQUENCE_NAME"))? {
            Some(name) if name.trim().is_empty() => {
                return Err(ConfigError::InvalidEnvVar {
                    key: key("SEQUENCE_NAME"),
                    value: name,
                })
            }
            Some(name) => name,
            None => DEFAULT_SEQUENCE_NAME.to_string(),
        };

        Ok(Self {
            dictionary_path,
            log_level,
            sequence_name,
        })
    }

    pub fn dictionary_path(&self) -> Option<&PathBuf> {
        self.dictionary_path.as_ref()
    }
}

fn read_var(key: &str) -> Result<Option<String>, ConfigError> {
    match env::var(key) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode {
            key: key.to_string(),
        }),
    }
}

/// Helper that loads config and converts to the canonical error type.
pub fn load_config() -> Result<AdaptationConfig, SeqnError> {
    Ok(AdaptationConfig::from_env()?)
}
