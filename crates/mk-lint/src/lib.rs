//! Runs an external Lua linter over a folder and collects its findings.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;
use mk_core::ConfigError;
use thiserror::Error;

mod cli_args;
mod config;
mod files;
mod linter;
mod runner;

pub(crate) use cli_args::Cli;
pub use config::{CheckGlobalsConfig, LintOverrides, LintSettings};
pub use files::{collect_lua_files, is_excluded};
pub use linter::{
    CommandLinter, LintCommand, LintOutcome, Linter, FILE_ENV_VAR, FILE_PLACEHOLDER,
};
pub use runner::{run_check_globals, run_checks, LintSummary};

#[derive(Debug, Error)]
pub enum LintError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Failed to resolve folder {path}: {source}")]
    Folder {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to walk {path}: {source}")]
    Walk {
        path: PathBuf,
        source: walkdir::Error,
    },
    #[error("Failed to write report {path}: {source}")]
    WriteReport {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl LintError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Config(error) => error.code(),
            Self::Folder { .. } => "LINT_FOLDER",
            Self::Walk { .. } => "LINT_WALK",
            Self::WriteReport { .. } => "LINT_REPORT_WRITE",
        }
    }
}

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

fn run(cli: Cli) -> Result<i32, LintError> {
    let settings = LintSettings::load(
        &cli.config,
        LintOverrides {
            folder: cli.folder,
            exclude: cli.exclude,
            output: cli.output,
        },
    )?;
    let linter = CommandLinter::new(settings.command.clone());
    run_check_globals(&settings, &linter)?;
    Ok(0)
}

fn emit_error(error: LintError) -> i32 {
    eprintln!("error[{}]: {}", error.code(), error);
    1
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let env = env_logger::Env::default().default_filter_or(default_level);
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}
