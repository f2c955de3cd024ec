//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`,
//! applying precedence rules and resolving paths.

use std::path::{Path, PathBuf};

use crate::{
    Config, CorpusSettings, RetrievalSettings, StopwordSettings,
    parse::{RawConfig, RawCorpusSettings, RawRetrievalSettings, RawStopwordSettings},
};

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

/// Merges multiple configuration files into a single resolved `Config`.
///
/// Configs should be provided in precedence order: highest precedence first (closest to CWD),
/// lowest precedence last (global config).
///
/// Merge rules:
/// - Scalar settings: first defined value wins (highest precedence)
/// - Lists (`extensions`, `extra`): first defined list wins completely
/// - `stopwords.file`: resolved against the directory of the file that defined it
pub fn merge_configs(configs: &[ParsedConfig]) -> Config {
    let mut config = Config::default();

    // Iterate in reverse (lowest precedence first) so higher precedence overwrites
    for parsed in configs.iter().rev() {
        if let Some(ref retrieval) = parsed.config.retrieval {
            apply_raw_retrieval(&mut config.retrieval, retrieval);
        }
        if let Some(ref corpus) = parsed.config.corpus {
            apply_raw_corpus(&mut config.corpus, corpus);
        }
        if let Some(ref stopwords) = parsed.config.stopwords {
            apply_raw_stopwords(&mut config.stopwords, stopwords, config_dir(&parsed.path));
        }
    }

    config.sources = configs.iter().map(|c| c.path.clone()).collect();
    config
}

/// Returns the directory containing a config file.
fn config_dir(path: &Path) -> &Path {
    path.parent().unwrap_or_else(|| Path::new(""))
}

/// Applies raw retrieval settings to result, overwriting any present values.
fn apply_raw_retrieval(result: &mut RetrievalSettings, raw: &RawRetrievalSettings) {
    if let Some(v) = raw.file_matches {
        result.file_matches = v;
    }
    if let Some(v) = raw.sentence_matches {
        result.sentence_matches = v;
    }
}

/// Applies raw corpus settings to result.
fn apply_raw_corpus(result: &mut CorpusSettings, raw: &RawCorpusSettings) {
    if let Some(ref v) = raw.extensions {
        result.extensions = v
            .iter()
            .map(|ext| ext.trim_start_matches('.').to_string())
            .collect();
    }
}

/// Applies raw stopword settings to result.
fn apply_raw_stopwords(result: &mut StopwordSettings, raw: &RawStopwordSettings, dir: &Path) {
    if let Some(ref v) = raw.language {
        result.language = v.clone();
    }
    if let Some(ref v) = raw.extra {
        result.extra = v.clone();
    }
    if let Some(ref v) = raw.file {
        result.file = Some(dir.join(v));
    }
}
