//! Clap argument definitions for the `qa` CLI.

use std::{num::NonZeroUsize, path::PathBuf};

use clap::{ArgAction, Parser};

/// Top-level CLI options.
#[derive(Parser, Debug)]
#[command(name = "qa")]
#[command(about = "Answer questions from a directory of text documents")]
pub struct Cli {
    /// Directory of documents to search
    pub corpus: PathBuf,

    /// Answer this query instead of prompting for one
    #[arg(short = 'q', long)]
    pub query: Option<String>,

    /// Number of top documents to search for sentences [default: 1]
    #[arg(short = 'f', long)]
    pub files: Option<NonZeroUsize>,

    /// Number of sentences to print [default: 1]
    #[arg(short = 's', long)]
    pub sentences: Option<NonZeroUsize>,

    /// Print ranked documents and sentence scores before the answer
    #[arg(long)]
    pub explain: bool,

    /// Output in JSON format
    #[arg(long, conflicts_with = "explain")]
    pub json: bool,

    /// Verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,
}
