use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Missing config value \"{field}\" (set it in the config file or pass it as a flag).")]
    MissingField { field: &'static str },
}

impl ConfigError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Read { .. } => "CONFIG_READ",
            Self::Parse { .. } => "CONFIG_INVALID",
            Self::MissingField { .. } => "CONFIG_MISSING_FIELD",
        }
    }
}

#[derive(Debug, Deserialize)]
struct ConfigEnvelope<T> {
    config: T,
}

/// Reads a `{ "config": { ... } }` JSON file and returns the inner section.
pub fn load_config<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn parse_config<T: DeserializeOwned>(raw: &str) -> Result<T, serde_json::Error> {
    let envelope: ConfigEnvelope<T> = serde_json::from_str(raw)?;
    Ok(envelope.config)
}
