use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "check-globals")]
#[command(about = "Run the globals linter over every Lua file in a folder")]
pub(crate) struct Cli {
    #[arg(long = "config", default_value = "config.json")]
    pub(crate) config: PathBuf,
    #[arg(long = "folder")]
    pub(crate) folder: Option<PathBuf>,
    /// Skip files whose path contains this text. Repeatable.
    #[arg(long = "exclude")]
    pub(crate) exclude: Vec<String>,
    #[arg(long = "output")]
    pub(crate) output: Option<PathBuf>,
    #[arg(short = 'v', long = "verbose")]
    pub(crate) verbose: bool,
}
