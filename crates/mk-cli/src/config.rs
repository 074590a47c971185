use std::path::PathBuf;

use mk_core::{load_config, ConfigError};
use mk_overlay::PipelinePaths;
use serde::Deserialize;

use crate::Cli;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct OverlayConfig {
    #[serde(default)]
    pub(crate) world_map_overlay: Option<PathBuf>,
    #[serde(default)]
    pub(crate) world_map_overlay_tile: Option<PathBuf>,
    #[serde(default)]
    pub(crate) output: Option<PathBuf>,
}

/// Flags win over config values. The config file is skipped when every path
/// was given on the command line.
pub(crate) fn resolve_paths(cli: &Cli) -> Result<PipelinePaths, ConfigError> {
    let config = if cli.overlay.is_some() && cli.overlay_tile.is_some() && cli.output.is_some() {
        OverlayConfig::default()
    } else {
        log::debug!("Reading config {}", cli.config.display());
        load_config::<OverlayConfig>(&cli.config)?
    };

    Ok(PipelinePaths {
        overlay: pick(&cli.overlay, config.world_map_overlay, "world_map_overlay")?,
        overlay_tile: pick(
            &cli.overlay_tile,
            config.world_map_overlay_tile,
            "world_map_overlay_tile",
        )?,
        output: pick(&cli.output, config.output, "output")?,
    })
}

fn pick(
    flag: &Option<PathBuf>,
    configured: Option<PathBuf>,
    field: &'static str,
) -> Result<PathBuf, ConfigError> {
    flag.clone()
        .or(configured)
        .ok_or(ConfigError::MissingField { field })
}
