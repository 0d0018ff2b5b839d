use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LogError {
    #[error("cannot open log file {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot write log file {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LogError {
    /// Path of the file the failed operation targeted.
    pub fn path(&self) -> &std::path::Path {
        match self {
            LogError::Open { path, .. } | LogError::Write { path, .. } => path,
        }
    }
}

pub type Result<T> = std::result::Result<T, LogError>;
