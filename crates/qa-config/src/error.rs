//! Error types for qa configuration.

use std::io;
use std::path::PathBuf;

use qa_rank::RankError;
use thiserror::Error;
use toml::de;

/// Errors that can occur when loading or processing configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a configuration file.
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to parse TOML configuration.
    #[error("failed to parse config file {path}: {source}")]
    ParseToml {
        /// Path to the file that could not be parsed.
        path: PathBuf,
        /// Underlying TOML parse error.
        source: de::Error,
    },

    /// Failed to read a stopword list file.
    #[error("failed to read stopword list {path}: {source}")]
    ReadStopwords {
        /// Path to the stopword list.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The configured stopwords could not be built.
    #[error(transparent)]
    Stopwords(#[from] RankError),
}
