//! Document ranking by summed TF-IDF over query terms.

use std::collections::{BTreeMap, HashSet};

use crate::{
    Collection, IdfProvider, RankError, Scored,
    rank::{check_limit, require_idf, sort_by_score},
};

/// Returns the names of the `n` documents that best match `query`.
///
/// Documents sharing no word with the query score zero and still rank, so a
/// non-empty collection never yields an empty result for a non-empty query.
pub fn top_files<P: IdfProvider + ?Sized>(
    query: &HashSet<String>,
    documents: &Collection,
    idfs: &P,
    n: usize,
) -> Result<Vec<String>, RankError> {
    check_limit(n)?;
    Ok(score_files(query, documents, idfs)?
        .into_iter()
        .take(n)
        .map(|scored| scored.id)
        .collect())
}

/// Scores every document against `query`, best first.
///
/// Score is `Σ tf(w) × idf(w)` over the distinct words `w` of a document that
/// are in the query. Ties keep insertion order.
pub fn score_files<P: IdfProvider + ?Sized>(
    query: &HashSet<String>,
    documents: &Collection,
    idfs: &P,
) -> Result<Vec<Scored>, RankError> {
    if query.is_empty() {
        return Ok(Vec::new());
    }
    if documents.is_empty() {
        return Err(RankError::EmptyCollection);
    }

    let mut scored = documents
        .iter()
        .map(|(name, tokens)| Ok(Scored::new(name, tf_idf(query, tokens, idfs)?)))
        .collect::<Result<Vec<_>, RankError>>()?;

    sort_by_score(&mut scored, |s| s.score);
    Ok(scored)
}

/// Sums `tf × idf` for the query words present in `tokens`.
fn tf_idf<P: IdfProvider + ?Sized>(
    query: &HashSet<String>,
    tokens: &[String],
    idfs: &P,
) -> Result<f64, RankError> {
    // Ordered map keeps the float summation order reproducible.
    let mut frequencies: BTreeMap<&str, usize> = BTreeMap::new();
    for token in tokens {
        if query.contains(token) {
            *frequencies.entry(token.as_str()).or_insert(0) += 1;
        }
    }

    let mut score = 0.0;
    for (word, tf) in frequencies {
        score += tf as f64 * require_idf(idfs, word)?;
    }
    Ok(score)
}
