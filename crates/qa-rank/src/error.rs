//! Error types for the ranking core.

use thiserror::Error;

/// Precondition violations detected at a ranking boundary.
///
/// Degenerate inputs (an empty query, an empty sentence collection) are not
/// errors; they produce empty results instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankError {
    /// A ranking call asked for zero results.
    #[error("result limit must be at least 1")]
    ZeroLimit,

    /// A matched word has no entry in the IDF table.
    #[error("no IDF weight for '{word}': the table was computed over a different collection")]
    MissingIdf {
        /// The word that could not be weighted.
        word: String,
    },

    /// Documents were ranked against a non-empty query with nothing to rank.
    #[error("cannot rank an empty document collection against a non-empty query")]
    EmptyCollection,

    /// A sentence with no tokens reached the sentence ranker.
    #[error("sentence has no tokens: {sentence:?}")]
    EmptySentence {
        /// The offending sentence text.
        sentence: String,
    },

    /// No stopword list exists for the requested language.
    #[error("unsupported stopword language: {0}")]
    UnknownLanguage(String),
}
