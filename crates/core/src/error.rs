use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Failed to read CPU stats from {path}: {source}")]
    StatIo {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid /proc/self/stat format: insufficient values (got {got}, need at least {need})")]
    StatFormat { got: usize, need: usize },

    #[error("Failed to parse {field} from CPU stats: {value:?}")]
    StatParse {
        field: &'static str,
        value: String,
        source: ParseIntError,
    },

    #[error("Port error: {source}")]
    Port { source: anyhow::Error },
}

impl CoreError {
    /// Stable code reported across the native boundary
    pub fn code(&self) -> &'static str {
        match self {
            // A truncated stat line is a read failure, not a number format one
            CoreError::StatIo { .. } | CoreError::StatFormat { .. } => "ERR_CPU_USAGE_IO",
            CoreError::StatParse { .. } => "ERR_CPU_USAGE_PARSE",
            CoreError::Port { .. } => "ERR_CPU_USAGE",
        }
    }
}

impl From<anyhow::Error> for CoreError {
    fn from(source: anyhow::Error) -> Self {
        CoreError::Port { source }
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
