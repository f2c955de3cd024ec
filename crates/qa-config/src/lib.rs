//! Settings for qa, read from `.qa.toml` files.
//!
//! The working directory and each of its ancestors may hold a `.qa.toml`; `~/.qa.toml`
//! sits underneath them all. The nearest file wins key by key, and `root = true`
//! hides everything further out. See [`Config::load`].

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
#[cfg(test)]
mod test_support;
mod validate;

use std::{
    fs,
    num::NonZeroUsize,
    path::{Path, PathBuf},
};

pub use discovery::{CONFIG_FILENAME, discover_config_files, global_config_path, is_global_config};
pub use error::ConfigError;
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{
    RawConfig, RawCorpusSettings, RawRetrievalSettings, RawStopwordSettings, parse_config_file,
    parse_config_str,
};
use qa_corpus::{CorpusOptions, DEFAULT_EXTENSIONS};
use qa_rank::{Limits, Stopwords};
use tracing::debug;
pub use validate::ConfigWarning;
use validate::validate_config;

/// Effective settings after merging every applicable config file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// How many documents and sentences to keep.
    pub retrieval: RetrievalSettings,
    /// Which files become documents.
    pub corpus: CorpusSettings,
    /// Which words are ignored when ranking.
    pub stopwords: StopwordSettings,
    /// Config files that contributed, highest precedence first.
    pub sources: Vec<PathBuf>,
}

impl Config {
    /// Discovers the config files that apply to `cwd` and merges them.
    ///
    /// With no files anywhere the defaults are returned.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        Self::load_from_files(&discover_config_files(cwd))
    }

    /// Parses and merges the given files, highest precedence first.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        let mut parsed = Vec::with_capacity(files.len());
        for path in files {
            debug!(path = %path.display(), "reading config file");
            parsed.push(ParsedConfig {
                config: parse_config_file(path)?,
                path: path.to_path_buf(),
            });
        }
        Ok(merge_configs(&parsed))
    }

    /// Lists non-fatal problems with the merged settings.
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }

    /// Returns the result limits, treating a zero count as one.
    pub fn limits(&self) -> Limits {
        Limits {
            files: NonZeroUsize::new(self.retrieval.file_matches).unwrap_or(NonZeroUsize::MIN),
            sentences: NonZeroUsize::new(self.retrieval.sentence_matches)
                .unwrap_or(NonZeroUsize::MIN),
        }
    }

    /// Returns the corpus loader options.
    pub fn corpus_options(&self) -> CorpusOptions {
        CorpusOptions {
            extensions: self.corpus.extensions.clone(),
        }
    }

    /// Builds the stopword set.
    ///
    /// A configured stopword file replaces the language list. Extra words are
    /// added on top of either.
    pub fn stopwords(&self) -> Result<Stopwords, ConfigError> {
        let mut stopwords = match self.stopwords.file {
            Some(ref path) => read_stopword_file(path)?,
            None => Stopwords::for_language(&self.stopwords.language)?,
        };
        stopwords.extend(&self.stopwords.extra);
        debug!(count = stopwords.len(), "stopwords ready");
        Ok(stopwords)
    }
}

/// Reads a newline-separated stopword list. Blank lines and `#` comments are skipped.
fn read_stopword_file(path: &Path) -> Result<Stopwords, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadStopwords {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Stopwords::from_words(
        contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.starts_with('#')),
    ))
}

/// Result count settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetrievalSettings {
    /// Number of top documents searched for sentences.
    pub file_matches: usize,
    /// Number of top sentences printed.
    pub sentence_matches: usize,
}

impl Default for RetrievalSettings {
    fn default() -> Self {
        Self {
            file_matches: 1,
            sentence_matches: 1,
        }
    }
}

/// Corpus loading settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusSettings {
    /// File extensions to load, without the leading dot.
    pub extensions: Vec<String>,
}

impl Default for CorpusSettings {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

/// Stopword settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopwordSettings {
    /// Built-in stopword list to use.
    pub language: String,
    /// Words added to the list.
    pub extra: Vec<String>,
    /// Resolved path of a stopword list replacing the built-in one.
    pub file: Option<PathBuf>,
}

impl Default for StopwordSettings {
    fn default() -> Self {
        Self {
            language: String::from("english"),
            extra: Vec::new(),
            file: None,
        }
    }
}
