pub mod config;
pub mod error;
pub mod types;

pub use config::{load_config, ConfigError};
pub use error::{ErrorKind, FormatError, PipelineError};
pub use types::*;
