use std::io;
use std::path::PathBuf;
use std::string::FromUtf8Error;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PruneError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not valid UTF-8: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid line range `{spec}`: {reason}")]
    InvalidRange { spec: String, reason: String },

    #[error("Failed to load plan {}: {source}", .path.display())]
    Plan {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode report: {0}")]
    Report(#[from] serde_json::Error),
}

impl PruneError {
    /// True when the target (or plan) did not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::Read { source, .. } if source.kind() == io::ErrorKind::NotFound
        )
    }
}

pub type Result<T> = std::result::Result<T, PruneError>;
