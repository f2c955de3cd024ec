//! Corpus loading and sentence segmentation for qa.
//!
//! This crate supplies the two collaborators the ranking core leaves to its
//! caller: a directory walker that turns `.txt` files into a [`qa_rank::Corpus`],
//! and a [`qa_rank::SentenceSplitter`] based on Unicode sentence boundaries.

#![warn(missing_docs)]

mod error;
mod load;
mod split;

pub use error::CorpusError;
pub use load::{CorpusOptions, DEFAULT_EXTENSIONS, load_corpus};
pub use split::UnicodeSentenceSplitter;
