use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    Format,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("column \"{column}\" is not an integer: \"{value}\"")]
    NotAnInteger { column: &'static str, value: String },
    #[error("row has {found} columns, expected at least {expected}")]
    ShortRow { expected: usize, found: usize },
    #[error("malformed row: {message}")]
    Malformed { message: String },
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Failed to {action} {path}: {source}")]
    Io {
        path: PathBuf,
        action: &'static str,
        source: std::io::Error,
    },
    #[error("{path}:{line}: {reason}")]
    Format {
        path: PathBuf,
        line: u64,
        reason: FormatError,
    },
    #[error(
        "{}Overlay tile {tile_id} references missing overlay {overlay_id}.",
        file_prefix(.path)
    )]
    JoinIntegrity {
        path: Option<PathBuf>,
        tile_id: i64,
        overlay_id: i64,
    },
}

fn file_prefix(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|path| format!("{}: ", path.display()))
        .unwrap_or_default()
}

impl PipelineError {
    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            action,
            source,
        }
    }

    pub fn format(path: impl Into<PathBuf>, line: u64, reason: FormatError) -> Self {
        Self::Format {
            path: path.into(),
            line,
            reason,
        }
    }

    pub fn join_integrity(tile_id: i64, overlay_id: i64) -> Self {
        Self::JoinIntegrity {
            path: None,
            tile_id,
            overlay_id,
        }
    }

    /// Names the tile table in a join failure. Other variants already carry their file.
    pub fn in_file(self, file: impl Into<PathBuf>) -> Self {
        match self {
            Self::JoinIntegrity {
                path: None,
                tile_id,
                overlay_id,
            } => Self::JoinIntegrity {
                path: Some(file.into()),
                tile_id,
                overlay_id,
            },
            other => other,
        }
    }

    /// A dangling tile reference is a format problem of the input tables.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Io { .. } => ErrorKind::Io,
            Self::Format { .. } | Self::JoinIntegrity { .. } => ErrorKind::Format,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "IO_ERROR",
            Self::Format { .. } => "FORMAT_ERROR",
            Self::JoinIntegrity { .. } => "JOIN_INTEGRITY_ERROR",
        }
    }
}
