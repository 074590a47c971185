use mk_core::{ConfigError, PipelineError};
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
}

impl CliError {
    pub(crate) fn code(&self) -> &'static str {
        match self {
            Self::Config(error) => error.code(),
            Self::Pipeline(error) => error.code(),
        }
    }
}

pub(crate) fn emit_error(error: CliError) -> i32 {
    eprintln!("error[{}]: {}", error.code(), error);
    1
}
