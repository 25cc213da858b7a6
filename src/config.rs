//! Translator configuration.
//!
//! Resolution order, first match wins per field:
//! 1. Explicit overrides (command-line flags)
//! 2. Environment variables
//! 3. `translator.json` in the application root
//! 4. Built-in defaults
//!
//! Paths from the config file and the default path are relative to the
//! application root. Override and environment paths are used as given.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::translator::SubstitutionMode;

/// Dictionary location relative to the application root
pub const DEFAULT_DICTIONARY_PATH: &str = "data/dictionary.json";

/// Optional config file in the application root
pub const CONFIG_FILE_NAME: &str = "translator.json";

/// Environment variable naming the dictionary file
pub const DICTIONARY_PATH_ENV: &str = "OFFLINE_TRANSLATOR_DICTIONARY";

/// Environment variable naming the substitution mode
pub const MODE_ENV: &str = "OFFLINE_TRANSLATOR_MODE";

/// Resolved translator settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslatorConfig {
    pub dictionary_path: PathBuf,
    #[serde(default)]
    pub mode: SubstitutionMode,
}

/// Values that take precedence over every other layer
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub dictionary_path: Option<PathBuf>,
    pub mode: Option<SubstitutionMode>,
}

/// Partial settings as they appear in `translator.json`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct ConfigFile {
    dictionary_path: Option<PathBuf>,
    mode: Option<SubstitutionMode>,
}

/// Error types for configuration resolution
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Config file exists but could not be read
    #[error("Failed to read config file {0}: {1}")]
    ReadError(String, String),
    /// Config file is not valid
    #[error("Failed to parse config file {0}: {1}")]
    ParseError(String, String),
    /// Mode named in the environment is unknown
    #[error("Invalid OFFLINE_TRANSLATOR_MODE: {0}")]
    InvalidMode(String),
}

impl TranslatorConfig {
    /// Defaults for the given application root
    pub fn defaults(app_root: &Path) -> Self {
        Self {
            dictionary_path: app_root.join(DEFAULT_DICTIONARY_PATH),
            mode: SubstitutionMode::default(),
        }
    }

    /// Resolve the configuration for the given application root
    pub fn resolve(app_root: &Path, overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        let mut config = Self::defaults(app_root);

        if let Some(file) = read_config_file(&app_root.join(CONFIG_FILE_NAME))? {
            if let Some(path) = file.dictionary_path {
                config.dictionary_path = app_root.join(path);
            }
            if let Some(mode) = file.mode {
                config.mode = mode;
            }
        }

        if let Some(path) = std::env::var_os(DICTIONARY_PATH_ENV).filter(|v| !v.is_empty()) {
            config.dictionary_path = PathBuf::from(path);
        }
        if let Ok(mode) = std::env::var(MODE_ENV) {
            if !mode.trim().is_empty() {
                config.mode = mode.parse().map_err(ConfigError::InvalidMode)?;
            }
        }

        if let Some(path) = overrides.dictionary_path {
            config.dictionary_path = path;
        }
        if let Some(mode) = overrides.mode {
            config.mode = mode;
        }

        crate::debug!(
            "Resolved translator config: dictionary={:?}, mode={}",
            config.dictionary_path,
            config.mode
        );
        Ok(config)
    }
}

fn read_config_file(path: &Path) -> Result<Option<ConfigFile>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)
        .map_err(|e| ConfigError::ReadError(path.display().to_string(), e.to_string()))?;
    let file = serde_json::from_str(&content)
        .map_err(|e| ConfigError::ParseError(path.display().to_string(), e.to_string()))?;
    Ok(Some(file))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
