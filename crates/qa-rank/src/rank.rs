//! Shared ranking plumbing: scored identifiers, ordering, limits.

use std::cmp::Ordering;

use crate::{IdfProvider, RankError};

/// An identifier with its ranking score.
#[derive(Debug, Clone, PartialEq)]
pub struct Scored {
    /// Document name or sentence text.
    pub id: String,
    /// Ranking score; higher is better.
    pub score: f64,
}

impl Scored {
    /// Creates a scored identifier.
    pub fn new(id: impl Into<String>, score: f64) -> Self {
        Self {
            id: id.into(),
            score,
        }
    }
}

/// Rejects a zero result limit.
pub(crate) fn check_limit(n: usize) -> Result<(), RankError> {
    if n == 0 {
        return Err(RankError::ZeroLimit);
    }
    Ok(())
}

/// Looks up a matched word, failing if the table does not know it.
pub(crate) fn require_idf<P: IdfProvider + ?Sized>(idfs: &P, word: &str) -> Result<f64, RankError> {
    idfs.idf(word).ok_or_else(|| RankError::MissingIdf {
        word: word.to_string(),
    })
}

/// Sorts by score descending.
///
/// The sort is stable, so equal scores keep insertion order.
pub(crate) fn sort_by_score<T>(items: &mut [T], score: impl Fn(&T) -> f64) {
    items.sort_by(|a, b| score(b).partial_cmp(&score(a)).unwrap_or(Ordering::Equal));
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn sort_is_descending_and_stable() {
        let mut items = vec![
            Scored::new("low", 1.0),
            Scored::new("tie-first", 2.0),
            Scored::new("high", 3.0),
            Scored::new("tie-second", 2.0),
        ];
        sort_by_score(&mut items, |s| s.score);
        let ids: Vec<_> = items.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["high", "tie-first", "tie-second", "low"]);
    }

    #[test]
    fn zero_limit_rejected() {
        assert_eq!(check_limit(0), Err(RankError::ZeroLimit));
        assert_eq!(check_limit(1), Ok(()));
    }

    #[test]
    fn missing_idf_is_reported() {
        let idfs: HashMap<String, f64> = HashMap::new();
        assert_eq!(
            require_idf(&idfs, "cat"),
            Err(RankError::MissingIdf { word: "cat".into() })
        );
    }
}
