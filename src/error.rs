//! Error types for traversal, filtering and output

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that abort a tree listing.
///
/// There is no partial-result mode: any of these discards the in-progress tree.
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("cannot access '{}': No such file or directory", path.display())]
    NotFound { path: PathBuf },

    #[error("cannot open '{}': Permission denied", path.display())]
    PermissionDenied { path: PathBuf },

    #[error("error reading '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("cannot write output to '{destination}': {source}")]
    OutputSink {
        destination: String,
        #[source]
        source: io::Error,
    },

    #[error("cannot serialize tree: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl TreeError {
    /// Classify an I/O failure on `path` into the matching error kind.
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => TreeError::NotFound {
                path: path.to_path_buf(),
            },
            io::ErrorKind::PermissionDenied => TreeError::PermissionDenied {
                path: path.to_path_buf(),
            },
            _ => TreeError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }

    /// Wrap a write failure on the output destination.
    pub fn sink(destination: impl Into<String>, err: io::Error) -> Self {
        TreeError::OutputSink {
            destination: destination.into(),
            source: err,
        }
    }
}

pub type Result<T> = std::result::Result<T, TreeError>;
