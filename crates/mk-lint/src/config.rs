use std::path::{Path, PathBuf};

use mk_core::{load_config, ConfigError};
use serde::Deserialize;

use crate::LintCommand;

#[derive(Debug, Default, Deserialize)]
pub struct CheckGlobalsConfig {
    #[serde(default)]
    pub folder: Option<PathBuf>,
    #[serde(default)]
    pub exclude: Vec<String>,
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub command: Option<LintCommand>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintSettings {
    pub folder: PathBuf,
    pub exclude: Vec<String>,
    pub output: PathBuf,
    pub command: LintCommand,
}

#[derive(Debug, Default)]
pub struct LintOverrides {
    pub folder: Option<PathBuf>,
    pub exclude: Vec<String>,
    pub output: Option<PathBuf>,
}

impl LintSettings {
    /// Flag values replace config values; flag excludes extend the configured list.
    pub fn resolve(
        config: CheckGlobalsConfig,
        overrides: LintOverrides,
    ) -> Result<Self, ConfigError> {
        let folder = overrides
            .folder
            .or(config.folder)
            .ok_or(ConfigError::MissingField { field: "folder" })?;
        let output = overrides
            .output
            .or(config.output)
            .ok_or(ConfigError::MissingField { field: "output" })?;

        let mut exclude = config.exclude;
        exclude.extend(overrides.exclude);

        Ok(Self {
            folder,
            exclude,
            output,
            command: config.command.unwrap_or_default(),
        })
    }

    /// The config file is optional when both paths come from flags.
    pub fn load(config_path: &Path, overrides: LintOverrides) -> Result<Self, ConfigError> {
        let config = if overrides.folder.is_some()
            && overrides.output.is_some()
            && !config_path.exists()
        {
            CheckGlobalsConfig::default()
        } else {
            load_config::<CheckGlobalsConfig>(config_path)?
        };
        Self::resolve(config, overrides)
    }
}
