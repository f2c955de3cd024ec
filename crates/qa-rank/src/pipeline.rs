//! The two-pass question answering flow.
//!
//! 1. Tokenize the corpus, weight it, and pick the top documents.
//! 2. Split those documents into sentences, weight the sentence collection
//!    from scratch, and pick the top sentences.
//!
//! The IDF table of the first pass is never reused in the second.

use std::{collections::HashSet, num::NonZeroUsize};

use tracing::debug;

use crate::{
    Collection, Corpus, RankError, Scored, SentenceScore, Tokenizer, compute_idfs, score_files,
    score_sentences,
};

/// Splits a block of text into sentence strings.
pub trait SentenceSplitter {
    /// Returns the sentences of `text`, in order.
    fn split<'a>(&self, text: &'a str) -> Vec<&'a str>;
}

/// How many documents and sentences to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Top documents searched for sentences.
    pub files: NonZeroUsize,
    /// Top sentences returned.
    pub sentences: NonZeroUsize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            files: NonZeroUsize::MIN,
            sentences: NonZeroUsize::MIN,
        }
    }
}

impl Limits {
    /// Creates limits from raw counts, rejecting zero.
    pub fn new(files: usize, sentences: usize) -> Result<Self, RankError> {
        Ok(Self {
            files: NonZeroUsize::new(files).ok_or(RankError::ZeroLimit)?,
            sentences: NonZeroUsize::new(sentences).ok_or(RankError::ZeroLimit)?,
        })
    }
}

/// The outcome of answering one query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Answer {
    /// Top documents with their TF-IDF scores, best first.
    pub files: Vec<Scored>,
    /// Top sentences from those documents, best first.
    pub sentences: Vec<SentenceScore>,
}

impl Answer {
    /// Returns the answer sentences' text, best first.
    pub fn sentence_texts(&self) -> impl Iterator<Item = &str> {
        self.sentences.iter().map(|s| s.sentence.as_str())
    }

    /// Returns true if no sentence was found.
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

/// Answers queries against a corpus.
#[derive(Debug, Clone)]
pub struct Pipeline<S> {
    /// Normalizes documents, sentences and queries.
    tokenizer: Tokenizer,
    /// Breaks top documents into sentences.
    splitter: S,
    /// Result counts for each pass.
    limits: Limits,
}

impl<S: SentenceSplitter> Pipeline<S> {
    /// Creates a pipeline.
    pub fn new(tokenizer: Tokenizer, splitter: S, limits: Limits) -> Self {
        Self {
            tokenizer,
            splitter,
            limits,
        }
    }

    /// Returns the tokenizer, e.g. for normalizing a query.
    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Returns the configured limits.
    pub fn limits(&self) -> Limits {
        self.limits
    }

    /// Tokenizes every corpus document.
    pub fn tokenize_corpus(&self, corpus: &Corpus) -> Collection {
        corpus
            .iter()
            .map(|(name, text)| (name, self.tokenizer.tokenize(text)))
            .collect()
    }

    /// Builds the sentence collection for the given documents.
    ///
    /// Documents are split into passages on newlines and passages into
    /// sentences. Sentences left with no tokens are skipped.
    pub fn sentence_collection<'a>(
        &self,
        corpus: &Corpus,
        names: impl IntoIterator<Item = &'a str>,
    ) -> Collection {
        let mut sentences = Collection::new();
        for name in names {
            let Some(text) = corpus.get(name) else {
                continue;
            };
            for passage in text.split('\n') {
                for sentence in self.splitter.split(passage) {
                    let tokens = self.tokenizer.tokenize(sentence);
                    if !tokens.is_empty() {
                        sentences.insert(sentence, tokens);
                    }
                }
            }
        }
        sentences
    }

    /// Answers a raw query string.
    pub fn ask(&self, corpus: &Corpus, query: &str) -> Result<Answer, RankError> {
        let query = self.tokenizer.tokenize_query(query);
        self.answer(corpus, &query)
    }

    /// Answers a normalized query.
    ///
    /// An empty corpus or empty query gives an empty answer.
    pub fn answer(&self, corpus: &Corpus, query: &HashSet<String>) -> Result<Answer, RankError> {
        if corpus.is_empty() || query.is_empty() {
            debug!(
                documents = corpus.len(),
                query_terms = query.len(),
                "nothing to rank"
            );
            return Ok(Answer::default());
        }

        let documents = self.tokenize_corpus(corpus);
        let file_idfs = compute_idfs(&documents);
        debug!(
            documents = documents.len(),
            words = file_idfs.len(),
            "weighted documents"
        );

        // Scored variants keep per-entry scores for `--explain` and `--json`.
        let mut files = score_files(query, &documents, &file_idfs)?;
        files.truncate(self.limits.files.get());

        let sentences = self.sentence_collection(corpus, files.iter().map(|f| f.id.as_str()));
        let sentence_idfs = compute_idfs(&sentences);
        debug!(
            sentences = sentences.len(),
            words = sentence_idfs.len(),
            "weighted sentences"
        );

        let mut ranked = score_sentences(query, &sentences, &sentence_idfs)?;
        ranked.truncate(self.limits.sentences.get());

        Ok(Answer {
            files,
            sentences: ranked,
        })
    }
}
