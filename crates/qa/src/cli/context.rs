//! Shared context for running a query.

use std::{env, path::PathBuf, process::ExitCode};

use qa_config::Config;
use qa_corpus::{UnicodeSentenceSplitter, load_corpus};
use qa_rank::{Corpus, Limits, Pipeline, Tokenizer};
use tracing::{info, warn};

use crate::cli::args::Cli;

/// Everything needed to answer queries, built once per invocation.
pub struct CommandContext {
    /// Loaded configuration (may be default if no config files found).
    pub config: Config,
    /// Documents loaded from the corpus directory.
    pub corpus: Corpus,
    /// Ranking pipeline with limits already overridden from the command line.
    pub pipeline: Pipeline<UnicodeSentenceSplitter>,
}

impl CommandContext {
    /// Loads configuration, builds the pipeline and reads the corpus.
    ///
    /// Errors are reported on stderr here so callers only propagate the exit code.
    pub fn load(cli: &Cli) -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        let config = Config::load(&cwd).map_err(|e| {
            eprintln!("error: failed to load configuration: {e}");
            ExitCode::FAILURE
        })?;
        for source in &config.sources {
            info!(path = %source.display(), "using config file");
        }
        for warning in config.validate() {
            warn!("{warning}");
        }

        let stopwords = config.stopwords().map_err(|e| {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        })?;
        let limits = override_limits(config.limits(), cli);
        let pipeline = Pipeline::new(Tokenizer::new(stopwords), UnicodeSentenceSplitter, limits);

        let corpus = load_corpus(&cli.corpus, &config.corpus_options()).map_err(|e| {
            eprintln!("error: failed to load corpus: {e}");
            ExitCode::FAILURE
        })?;
        info!(documents = corpus.len(), "corpus ready");

        Ok(Self {
            config,
            corpus,
            pipeline,
        })
    }
}

/// Applies `--files` and `--sentences` on top of the configured limits.
fn override_limits(mut limits: Limits, cli: &Cli) -> Limits {
    if let Some(files) = cli.files {
        limits.files = files;
    }
    if let Some(sentences) = cli.sentences {
        limits.sentences = sentences;
    }
    limits
}

/// Returns the current working directory or exits with a consistent error.
fn current_dir_or_failure() -> Result<PathBuf, ExitCode> {
    env::current_dir().map_err(|e| {
        eprintln!("error: could not determine current directory: {e}");
        ExitCode::FAILURE
    })
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn command_line_overrides_configured_limits() {
        let cli = Cli::try_parse_from(["qa", "corpus", "-s", "4"]).unwrap();
        let configured = Limits::new(2, 1).unwrap();

        let limits = override_limits(configured, &cli);

        assert_eq!(limits.files.get(), 2);
        assert_eq!(limits.sentences.get(), 4);
    }
}
