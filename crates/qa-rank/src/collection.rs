//! Insertion-ordered keyed collections used as ranking inputs.
//!
//! Ranking ties are broken by insertion order, so both the raw corpus and the
//! tokenized collections remember the order in which entries arrived.
//! Re-inserting an existing key replaces the value in place.

use std::{collections::HashMap, mem};

/// An insertion-ordered map from identifier to value.
#[derive(Debug, Clone)]
pub struct Keyed<V> {
    /// Entries in insertion order.
    entries: Vec<(String, V)>,
    /// Position of each identifier in `entries`.
    positions: HashMap<String, usize>,
}

/// Raw document text keyed by document name.
pub type Corpus = Keyed<String>;

/// Token sequences keyed by document name or sentence text.
pub type Collection = Keyed<Vec<String>>;

impl<V> Default for Keyed<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            positions: HashMap::new(),
        }
    }
}

impl<V> Keyed<V> {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a value, returning the previous one if the key existed.
    ///
    /// A replaced entry keeps its original position.
    pub fn insert(&mut self, id: impl Into<String>, value: V) -> Option<V> {
        let id = id.into();
        if let Some(&idx) = self.positions.get(&id) {
            return Some(mem::replace(&mut self.entries[idx].1, value));
        }
        self.positions.insert(id.clone(), self.entries.len());
        self.entries.push((id, value));
        None
    }

    /// Returns the value stored under `id`.
    pub fn get(&self, id: &str) -> Option<&V> {
        self.positions.get(id).map(|&idx| &self.entries[idx].1)
    }

    /// Returns true if `id` is present.
    pub fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(id, value)| (id.as_str(), value))
    }

    /// Iterates identifiers in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(id, _)| id.as_str())
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for Keyed<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut keyed = Self::new();
        for (id, value) in iter {
            keyed.insert(id, value);
        }
        keyed
    }
}
