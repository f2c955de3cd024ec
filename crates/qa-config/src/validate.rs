//! Configuration validation.
//!
//! Validates a loaded configuration and reports warnings for potential issues.

use std::fmt;

use qa_rank::is_known_language;

use crate::Config;

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// A result count is zero and will be treated as one.
    ZeroCount {
        /// Name of the setting.
        setting: &'static str,
    },
    /// The stopword language is not known.
    UnknownLanguage {
        /// Language that was configured.
        language: String,
    },
    /// The stopword file does not exist.
    StopwordFileMissing {
        /// Path that doesn't exist.
        path: String,
    },
    /// No file extensions are configured, so no documents will load.
    NoExtensions,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroCount { setting } => {
                write!(f, "{setting} is 0, using 1 instead")
            }
            Self::UnknownLanguage { language } => {
                write!(f, "unknown stopword language: {language}")
            }
            Self::StopwordFileMissing { path } => {
                write!(f, "stopword file does not exist: {path}")
            }
            Self::NoExtensions => {
                write!(f, "corpus.extensions is empty, no documents will be loaded")
            }
        }
    }
}

/// Validates the configuration and returns any warnings.
///
/// This checks for:
/// - Zero result counts
/// - A stopword language the stopword lists don't cover (ignored when a file is set)
/// - A stopword file that doesn't exist
/// - An empty extension list
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    if config.retrieval.file_matches == 0 {
        warnings.push(ConfigWarning::ZeroCount {
            setting: "retrieval.file_matches",
        });
    }
    if config.retrieval.sentence_matches == 0 {
        warnings.push(ConfigWarning::ZeroCount {
            setting: "retrieval.sentence_matches",
        });
    }

    match config.stopwords.file {
        Some(ref path) if !path.is_file() => {
            warnings.push(ConfigWarning::StopwordFileMissing {
                path: path.display().to_string(),
            });
        }
        Some(_) => {}
        None if !is_known_language(&config.stopwords.language) => {
            warnings.push(ConfigWarning::UnknownLanguage {
                language: config.stopwords.language.clone(),
            });
        }
        None => {}
    }

    if config.corpus.extensions.is_empty() {
        warnings.push(ConfigWarning::NoExtensions);
    }

    warnings
}
