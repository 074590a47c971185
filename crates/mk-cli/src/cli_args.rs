use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "map-overlay")]
#[command(about = "Generate the RevealDatabase Lua table from WorldMapOverlay CSV exports")]
pub(crate) struct Cli {
    /// JSON config with a `config` section; read only when a path flag is missing.
    #[arg(long = "config", default_value = "config.json")]
    pub(crate) config: PathBuf,
    #[arg(long = "overlay")]
    pub(crate) overlay: Option<PathBuf>,
    #[arg(long = "overlay-tile")]
    pub(crate) overlay_tile: Option<PathBuf>,
    #[arg(long = "output")]
    pub(crate) output: Option<PathBuf>,
    #[arg(short = 'v', long = "verbose")]
    pub(crate) verbose: bool,
}
