use std::ffi::OsString;

use clap::Parser;
use mk_overlay::run_pipeline;

mod cli_args;
mod config;
mod error_map;

pub(crate) use cli_args::Cli;
pub(crate) use config::resolve_paths;
pub(crate) use error_map::{emit_error, CliError};

pub fn run_cli_from_args<I, T>(args: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(error) => {
            let _ = error.print();
            return error.exit_code();
        }
    };
    init_logging(cli.verbose);
    match run(cli) {
        Ok(code) => code,
        Err(error) => emit_error(error),
    }
}

fn run(cli: Cli) -> Result<i32, CliError> {
    let paths = resolve_paths(&cli)?;
    let summary = run_pipeline(&paths)?;
    log::info!(
        "Done: {} overlays, {} tiles -> {} maps, {} texture buckets",
        summary.overlays,
        summary.tiles,
        summary.maps,
        summary.buckets
    );
    Ok(0)
}

/// `RUST_LOG` overrides the default level.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let env = env_logger::Env::default().default_filter_or(default_level);
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}
