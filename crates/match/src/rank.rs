//! Candidate scoring and ranking.
//!
//! Every vocabulary entry is scored against the query by summing, over the
//! query words, the best Jaro-Winkler similarity against any word of the
//! entry. Multi-word queries therefore score additively: an entry matching
//! two query words well outranks one matching a single word perfectly.

use crate::similarity::jaro_winkler_similarity;
use crate::token::tokenize;
use serde::{Deserialize, Serialize};

/// A vocabulary entry with its aggregate score for one query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredCandidate {
    /// The entry exactly as it appears in the vocabulary
    pub name: String,
    /// Sum over query words of the best similarity against any entry word
    pub score: f64,
}

/// Rank vocabulary entries against a query and return the top names.
///
/// This is the call the interactive entry loop makes on every keystroke.
///
/// # Arguments
/// * `candidates` - The crop vocabulary
/// * `query` - Current query text
/// * `limit` - Maximum number of names to return
///
/// # Returns
/// At most `limit` names, best match first. An empty query returns no names
/// at all: nothing is suggested until the user has typed something.
///
/// # Example
/// ```
/// use croplog_match::rank;
///
/// let crops = vec![
///     "cabbage, green".to_string(),
///     "cucumbers, each".to_string(),
/// ];
///
/// assert_eq!(rank(&crops, "cu", 1), vec!["cucumbers, each".to_string()]);
/// ```
pub fn rank(candidates: &[String], query: &str, limit: usize) -> Vec<String> {
    rank_scored(candidates, query, limit)
        .into_iter()
        .map(|candidate| candidate.name)
        .collect()
}

/// Rank vocabulary entries against a query, keeping the scores.
///
/// Entries whose aggregate score is exactly zero (no query word resembles
/// any of their words) are left out of the result. Ties on score are broken
/// by the entry text, ascending, so the output never depends on vocabulary
/// order. The returned order is the ranked order; any alphabetical
/// re-presentation is the caller's decision.
pub fn rank_scored(candidates: &[String], query: &str, limit: usize) -> Vec<ScoredCandidate> {
    if query.is_empty() {
        return Vec::new();
    }

    let query_words = tokenize(query);
    if query_words.is_empty() {
        return Vec::new();
    }

    #[cfg(feature = "parallel")]
    let scored: Vec<ScoredCandidate> = {
        use rayon::prelude::*;
        candidates
            .par_iter()
            .map(|candidate| score_candidate(candidate, &query_words))
            .collect()
    };

    #[cfg(not(feature = "parallel"))]
    let scored: Vec<ScoredCandidate> = candidates
        .iter()
        .map(|candidate| score_candidate(candidate, &query_words))
        .collect();

    let mut survivors: Vec<ScoredCandidate> = scored
        .into_iter()
        .filter(|candidate| candidate.score > 0.0)
        .collect();

    tracing::debug!(
        candidates = candidates.len(),
        query_words = query_words.len(),
        survivors = survivors.len(),
        "scored vocabulary"
    );

    // Scores are finite by construction, so the comparator is total.
    survivors.sort_unstable_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.name.cmp(&b.name))
    });
    survivors.truncate(limit);

    survivors
}

/// Score a single vocabulary entry against the query words.
#[inline]
fn score_candidate(candidate: &str, query_words: &[&str]) -> ScoredCandidate {
    let candidate_words = tokenize(candidate);
    let score = query_words
        .iter()
        .map(|query_word| {
            candidate_words
                .iter()
                .map(|candidate_word| jaro_winkler_similarity(candidate_word, query_word))
                .fold(0.0_f64, f64::max)
        })
        .sum();

    ScoredCandidate {
        name: candidate.to_string(),
        score,
    }
}
