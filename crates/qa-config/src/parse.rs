//! TOML schema of a single `.qa.toml`.
//!
//! Every key is optional here; defaults are only filled in once all discovered
//! files have been merged. Unknown keys are rejected so typos surface early.

use std::{fs, path::Path};

use serde::Deserialize;

use crate::ConfigError;

/// One config file, exactly as written.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawConfig {
    /// Stops discovery at this file: parent directories and `~/.qa.toml` are ignored.
    pub root: Option<bool>,
    /// Result count settings.
    pub retrieval: Option<RawRetrievalSettings>,
    /// Corpus loading settings.
    pub corpus: Option<RawCorpusSettings>,
    /// Stopword list settings.
    pub stopwords: Option<RawStopwordSettings>,
}

/// Raw retrieval settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawRetrievalSettings {
    /// Number of top documents to search for sentences.
    pub file_matches: Option<usize>,
    /// Number of top sentences to print.
    pub sentence_matches: Option<usize>,
}

/// Raw corpus settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawCorpusSettings {
    /// File extensions to load.
    pub extensions: Option<Vec<String>>,
}

/// Raw stopword settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawStopwordSettings {
    /// Stopword language name.
    pub language: Option<String>,
    /// Additional stopwords.
    pub extra: Option<Vec<String>>,
    /// Newline-separated stopword list, relative to the config file.
    pub file: Option<String>,
}

/// Reads and parses one config file.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&contents, path)
}

/// Parses config text; `path` only labels errors.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// True if the file parses and sets `root = true`.
///
/// Broken files are not treated as roots; loading reports them properly later.
pub fn is_root_config(path: &Path) -> bool {
    parse_config_file(path).is_ok_and(|raw| raw.root.unwrap_or(false))
}
