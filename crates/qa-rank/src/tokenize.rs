//! Text normalization into index-eligible tokens.
//!
//! Pipeline: UAX #29 word bounds (hyphenated compounds rejoined) → clitic
//! splitting (`don't` → `do n't`) → lowercase → drop pure punctuation → drop
//! stopwords.
//!
//! Relative token order is preserved so callers can count term frequencies.

use std::collections::HashSet;

use unicode_segmentation::UnicodeSegmentation;

use crate::Stopwords;

/// Contraction suffixes split off the preceding word, longest first.
const CLITICS: &[&str] = &["n't", "'re", "'ve", "'ll", "'s", "'d", "'m"];

/// Normalizes raw text into ordered tokens.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    /// Words removed after lowercasing.
    stopwords: Stopwords,
}

impl Tokenizer {
    /// Creates a tokenizer that filters the given stopwords.
    pub fn new(stopwords: Stopwords) -> Self {
        Self { stopwords }
    }

    /// Returns the stopword set used by this tokenizer.
    pub fn stopwords(&self) -> &Stopwords {
        &self.stopwords
    }

    /// Tokenizes text into lowercase words, in order.
    ///
    /// Units made only of punctuation, symbols or whitespace are dropped, as
    /// are stopwords. Numeric forms such as `3.14` and hyphenated compounds
    /// such as `e-mail` stay whole. A trailing period is not part of a word,
    /// so `U.S.` becomes `u.s`.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        for unit in word_units(text) {
            if is_punctuation(unit) {
                continue;
            }
            let lower = unit.to_lowercase().replace('\u{2019}', "'");
            let (stem, clitic) = split_clitic(&lower);
            for piece in [Some(stem), clitic].into_iter().flatten() {
                if !is_punctuation(piece) && !self.stopwords.contains(piece) {
                    tokens.push(piece.to_string());
                }
            }
        }
        tokens
    }

    /// Tokenizes a query into a set of distinct words.
    pub fn tokenize_query(&self, text: &str) -> HashSet<String> {
        self.tokenize(text).into_iter().collect()
    }
}

/// Splits text on word bounds, joining `word-word` runs into one unit.
fn word_units(text: &str) -> Vec<&str> {
    let bounds: Vec<(usize, &str)> = text.split_word_bound_indices().collect();
    let mut units = Vec::with_capacity(bounds.len());
    let mut i = 0;
    while let Some(&(start, first)) = bounds.get(i) {
        let mut end = start + first.len();
        i += 1;
        if !is_punctuation(first) {
            while let Some(&(_, "-")) = bounds.get(i)
                && let Some(&(next_start, next)) = bounds.get(i + 1)
                && !is_punctuation(next)
            {
                end = next_start + next.len();
                i += 2;
            }
        }
        units.push(&text[start..end]);
    }
    units
}

/// Returns true if the unit carries no letters or digits.
fn is_punctuation(unit: &str) -> bool {
    !unit.chars().any(char::is_alphanumeric)
}

/// Splits a trailing contraction off a lowercased word.
///
/// The stem must be non-empty, so a bare `n't` or `'s` is left alone.
fn split_clitic(word: &str) -> (&str, Option<&str>) {
    for clitic in CLITICS {
        if let Some(stem) = word.strip_suffix(clitic)
            && !stem.is_empty()
            && !stem.ends_with('\'')
        {
            return (stem, Some(&word[stem.len()..]));
        }
    }
    (word, None)
}
