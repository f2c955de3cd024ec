//! Ranking core for answering questions against a text corpus.
//!
//! A query is answered in two passes over pure, stateless functions:
//!
//! 1. **Documents**: every document is tokenized, IDF weights are computed
//!    across the corpus, and documents are ranked by summed TF-IDF of the
//!    query words they contain ([`top_files`]).
//! 2. **Sentences**: the top documents are split into sentences, IDF weights
//!    are recomputed across that sentence collection, and sentences are ranked
//!    by matched-word IDF plus query term density ([`top_sentences`]).
//!
//! [`Pipeline`] runs both passes. Nothing here touches the filesystem; corpus
//! loading and sentence segmentation are supplied by the caller.

#![warn(missing_docs)]

mod collection;
mod error;
mod files;
mod idf;
mod pipeline;
mod rank;
mod sentences;
mod stopwords;
mod tokenize;

pub use collection::{Collection, Corpus, Keyed};
pub use error::RankError;
pub use files::{score_files, top_files};
pub use idf::{IdfProvider, IdfTable, compute_idfs};
pub use pipeline::{Answer, Limits, Pipeline, SentenceSplitter};
pub use rank::Scored;
pub use sentences::{SentenceScore, score_sentences, top_sentences};
pub use stopwords::{Stopwords, is_known_language};
pub use tokenize::Tokenizer;
