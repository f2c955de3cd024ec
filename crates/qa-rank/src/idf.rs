//! Inverse document frequency over a tokenized collection.
//!
//! `idf(w) = ln(|C| / f)` where `f` counts the members of `C` containing `w`
//! at least once. A table is only meaningful for the collection it was built
//! from; the document and sentence passes each build their own.

use std::collections::{HashMap, HashSet};

use crate::Collection;

/// Source of IDF weights for the rankers.
///
/// Both rankers treat `None` for a matched word as a caller error rather than
/// a zero weight.
pub trait IdfProvider {
    /// Returns the IDF value for a word, or `None` if the word is unknown.
    fn idf(&self, word: &str) -> Option<f64>;
}

/// IDF weights computed from one collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdfTable {
    /// Word to weight.
    weights: HashMap<String, f64>,
}

impl IdfTable {
    /// Returns the weight for `word`.
    pub fn get(&self, word: &str) -> Option<f64> {
        self.weights.get(word).copied()
    }

    /// Returns true if `word` has a weight.
    pub fn contains(&self, word: &str) -> bool {
        self.weights.contains_key(word)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Returns true if the table has no words.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

impl IdfProvider for IdfTable {
    fn idf(&self, word: &str) -> Option<f64> {
        self.get(word)
    }
}

impl IdfProvider for HashMap<String, f64> {
    fn idf(&self, word: &str) -> Option<f64> {
        self.get(word).copied()
    }
}

impl FromIterator<(String, f64)> for IdfTable {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            weights: iter.into_iter().collect(),
        }
    }
}

/// Computes IDF weights for every word in `collection`.
///
/// An empty collection yields an empty table. Words present in every member
/// get a weight of exactly zero and are kept.
pub fn compute_idfs(collection: &Collection) -> IdfTable {
    let total = collection.len();
    if total == 0 {
        return IdfTable::default();
    }

    let mut doc_freq: HashMap<&str, usize> = HashMap::new();
    for (_, tokens) in collection.iter() {
        let distinct: HashSet<&str> = tokens.iter().map(String::as_str).collect();
        for word in distinct {
            *doc_freq.entry(word).or_insert(0) += 1;
        }
    }

    doc_freq
        .into_iter()
        .map(|(word, freq)| (word.to_string(), (total as f64 / freq as f64).ln()))
        .collect()
}
