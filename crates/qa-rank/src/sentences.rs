//! Sentence ranking by matched-word IDF plus query term density.
//!
//! The combined score is `Σ idf(w) + matched / len`: the density term is
//! folded into the same scalar rather than used as a separate sort key, so it
//! acts as a small nudge between sentences with close IDF sums.

use std::collections::{BTreeSet, HashSet};

use crate::{
    Collection, IdfProvider, RankError,
    rank::{check_limit, require_idf, sort_by_score},
};

/// A sentence with the components of its score.
#[derive(Debug, Clone, PartialEq)]
pub struct SentenceScore {
    /// The sentence text.
    pub sentence: String,
    /// Sum of IDF weights of distinct query words in the sentence.
    pub idf_sum: f64,
    /// Fraction of the sentence's tokens that are query words.
    pub density: f64,
    /// `idf_sum + density`, the ranking key.
    pub score: f64,
}

/// Returns the `n` sentences that best match `query`.
pub fn top_sentences<P: IdfProvider + ?Sized>(
    query: &HashSet<String>,
    sentences: &Collection,
    idfs: &P,
    n: usize,
) -> Result<Vec<String>, RankError> {
    check_limit(n)?;
    Ok(score_sentences(query, sentences, idfs)?
        .into_iter()
        .take(n)
        .map(|scored| scored.sentence)
        .collect())
}

/// Scores every sentence against `query`, best first.
///
/// Sentences without query words score zero and still rank. Ties keep
/// insertion order. Every member must have at least one token.
pub fn score_sentences<P: IdfProvider + ?Sized>(
    query: &HashSet<String>,
    sentences: &Collection,
    idfs: &P,
) -> Result<Vec<SentenceScore>, RankError> {
    if query.is_empty() || sentences.is_empty() {
        return Ok(Vec::new());
    }

    let mut scored = sentences
        .iter()
        .map(|(sentence, tokens)| score_sentence(query, sentence, tokens, idfs))
        .collect::<Result<Vec<_>, RankError>>()?;

    sort_by_score(&mut scored, |s| s.score);
    Ok(scored)
}

/// Computes the score components for one sentence.
fn score_sentence<P: IdfProvider + ?Sized>(
    query: &HashSet<String>,
    sentence: &str,
    tokens: &[String],
    idfs: &P,
) -> Result<SentenceScore, RankError> {
    if tokens.is_empty() {
        return Err(RankError::EmptySentence {
            sentence: sentence.to_string(),
        });
    }

    let mut matched = 0usize;
    let mut words: BTreeSet<&str> = BTreeSet::new();
    for token in tokens {
        if query.contains(token) {
            matched += 1;
            words.insert(token.as_str());
        }
    }

    let mut idf_sum = 0.0;
    for word in words {
        idf_sum += require_idf(idfs, word)?;
    }
    let density = matched as f64 / tokens.len() as f64;

    Ok(SentenceScore {
        sentence: sentence.to_string(),
        idf_sum,
        density,
        score: idf_sum + density,
    })
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;

    use super::*;
    use crate::compute_idfs;

    fn query(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn idfs(entries: &[(&str, f64)]) -> HashMap<String, f64> {
        entries.iter().map(|(w, v)| (w.to_string(), *v)).collect()
    }

    #[test]
    fn combines_idf_sum_and_density() {
        let sentences: Collection = [("A fast cat ran.", tokens(&["fast", "cat", "ran"]))]
            .into_iter()
            .collect();
        let weights = idfs(&[("fast", 0.1), ("cat", 0.5), ("ran", 0.3)]);

        let scored = score_sentences(&query(&["cat", "ran"]), &sentences, &weights).unwrap();
        let s = &scored[0];
        assert!((s.idf_sum - 0.8).abs() < 1e-12);
        assert!((s.density - 2.0 / 3.0).abs() < 1e-12);
        assert!((s.score - 1.4667).abs() < 1e-3);
    }

    #[test]
    fn density_counts_every_occurrence_but_idf_counts_once() {
        let sentences: Collection = [("cat cat dog", tokens(&["cat", "cat", "dog"]))]
            .into_iter()
            .collect();
        let weights = idfs(&[("cat", 1.0), ("dog", 1.0)]);

        let scored = score_sentences(&query(&["cat"]), &sentences, &weights).unwrap();
        assert!((scored[0].idf_sum - 1.0).abs() < 1e-12);
        assert!((scored[0].density - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn density_breaks_close_idf_sums() {
        let sentences: Collection = [
            ("long", tokens(&["cat", "sat", "mat", "hat"])),
            ("short", tokens(&["cat", "sat"])),
        ]
        .into_iter()
        .collect();
        let weights = compute_idfs(&sentences);

        // "cat" is in both sentences, so its IDF is zero and density decides.
        let top = top_sentences(&query(&["cat"]), &sentences, &weights, 2).unwrap();
        assert_eq!(top, vec!["short", "long"]);
    }

    #[test]
    fn unmatched_sentences_score_zero_and_still_rank() {
        let sentences: Collection = [
            ("nothing here", tokens(&["nothing"])),
            ("cat here", tokens(&["cat"])),
        ]
        .into_iter()
        .collect();
        let weights = compute_idfs(&sentences);

        let scored = score_sentences(&query(&["cat"]), &sentences, &weights).unwrap();
        assert_eq!(scored.len(), 2);
        assert_eq!(scored[0].sentence, "cat here");
        assert_eq!(scored[1].score, 0.0);
    }

    #[test]
    fn ties_keep_insertion_order() {
        let sentences: Collection = [
            ("second", tokens(&["dog"])),
            ("first", tokens(&["fish"])),
        ]
        .into_iter()
        .collect();
        let weights = compute_idfs(&sentences);

        let top = top_sentences(&query(&["cat"]), &sentences, &weights, 2).unwrap();
        assert_eq!(top, vec!["second", "first"]);
    }

    #[test]
    fn empty_inputs_return_nothing() {
        let weights = idfs(&[]);
        assert!(
            top_sentences(&query(&["cat"]), &Collection::new(), &weights, 1)
                .unwrap()
                .is_empty()
        );

        let sentences: Collection = [("cat", tokens(&["cat"]))].into_iter().collect();
        assert!(
            top_sentences(&HashSet::new(), &sentences, &weights, 1)
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn preconditions_are_enforced() {
        let sentences: Collection = [("cat", tokens(&["cat"]))].into_iter().collect();
        assert_eq!(
            top_sentences(&query(&["cat"]), &sentences, &idfs(&[("cat", 1.0)]), 0),
            Err(RankError::ZeroLimit)
        );
        assert_eq!(
            top_sentences(&query(&["cat"]), &sentences, &idfs(&[]), 1),
            Err(RankError::MissingIdf { word: "cat".into() })
        );

        let empty: Collection = [("...", Vec::new())].into_iter().collect();
        assert_eq!(
            top_sentences(&query(&["cat"]), &empty, &idfs(&[]), 1),
            Err(RankError::EmptySentence {
                sentence: "...".into()
            })
        );
    }
}
