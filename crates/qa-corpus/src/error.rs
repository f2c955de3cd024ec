//! Error types for corpus loading.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur while loading a corpus directory.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// The corpus path does not exist.
    #[error("corpus directory does not exist: {path}")]
    NotFound {
        /// The missing path.
        path: PathBuf,
    },

    /// The corpus path exists but is not a directory.
    #[error("corpus path is not a directory: {path}")]
    NotADirectory {
        /// The offending path.
        path: PathBuf,
    },

    /// A document could not be read.
    #[error("failed to read {path}: {source}")]
    ReadFile {
        /// Path to the unreadable file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Walking the directory tree failed.
    #[error("failed to walk corpus directory: {0}")]
    Walk(#[from] walkdir::Error),
}
