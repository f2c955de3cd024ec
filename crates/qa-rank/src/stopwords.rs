//! Stopword filtering for tokenization.
//!
//! Stopwords are held as data rather than logic: the default list is NLTK's
//! English list from the `stop-words` crate, and callers can swap in another
//! language or an explicit word list loaded from configuration.

use std::collections::HashSet;

use stop_words::LANGUAGE;

use crate::RankError;

/// A case-insensitive stopword set.
#[derive(Debug, Clone)]
pub struct Stopwords {
    /// Lowercased stopwords.
    words: HashSet<String>,
}

impl Default for Stopwords {
    fn default() -> Self {
        Self::new()
    }
}

impl Stopwords {
    /// Creates a stopword filter with the standard English list.
    pub fn new() -> Self {
        Self::from_words(stop_words::get(LANGUAGE::English).iter().copied())
    }

    /// Creates a stopword filter for a named language, e.g. `"english"` or `"french"`.
    pub fn for_language(name: &str) -> Result<Self, RankError> {
        let language = language_from_name(name)
            .ok_or_else(|| RankError::UnknownLanguage(name.to_string()))?;
        Ok(Self::from_words(stop_words::get(language).iter().copied()))
    }

    /// Creates a stopword filter from an explicit list of words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut stopwords = Self::empty();
        stopwords.extend(words);
        stopwords
    }

    /// Creates a filter that accepts every word.
    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    /// Adds words to the set. Blank entries are ignored.
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            let word = word.as_ref().trim();
            if !word.is_empty() {
                self.words.insert(word.to_lowercase());
            }
        }
    }

    /// Checks if a term is a stopword, ignoring case.
    pub fn contains(&self, term: &str) -> bool {
        if term.chars().any(char::is_uppercase) {
            self.words.contains(&term.to_lowercase())
        } else {
            self.words.contains(term)
        }
    }

    /// Returns the total number of stopwords.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if no stopwords are configured.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Returns true if `name` is a language with a built-in stopword list.
pub fn is_known_language(name: &str) -> bool {
    language_from_name(name).is_some()
}

/// Maps a lowercase language name to its `stop-words` list.
fn language_from_name(name: &str) -> Option<LANGUAGE> {
    let language = match name.trim().to_ascii_lowercase().as_str() {
        "english" | "en" => LANGUAGE::English,
        "french" | "fr" => LANGUAGE::French,
        "german" | "de" => LANGUAGE::German,
        "spanish" | "es" => LANGUAGE::Spanish,
        "italian" | "it" => LANGUAGE::Italian,
        "portuguese" | "pt" => LANGUAGE::Portuguese,
        "dutch" | "nl" => LANGUAGE::Dutch,
        "russian" | "ru" => LANGUAGE::Russian,
        _ => return None,
    };
    Some(language)
}
