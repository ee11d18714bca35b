use std::cmp::Ordering;

use crate::core::types::TextMatch;
use crate::markov::ChainModel;

/// Similarity of two raw texts in `[0, 1]`.
///
/// `reference` is the left operand of [`ChainModel::compare`].
#[must_use]
pub fn compare_texts(reference: &str, query: &str) -> f64 {
    ChainModel::from_text(reference).compare(&ChainModel::from_text(query))
}

/// Default minimum confidence for ranked results (keep everything)
pub const DEFAULT_MIN_SCORE: f64 = 0.0;

/// Filtering applied when ranking matcher output
#[derive(Debug, Clone, PartialEq)]
pub struct MatchingConfig {
    /// Results with a lower confidence are dropped
    pub min_score: f64,
    /// Maximum number of results to keep (`None` keeps all)
    pub limit: Option<usize>,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            min_score: DEFAULT_MIN_SCORE,
            limit: None,
        }
    }
}

impl MatchingConfig {
    #[must_use]
    pub fn with_min_score(mut self, min_score: f64) -> Self {
        self.min_score = min_score;
        self
    }

    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

fn by_confidence_desc(a: &TextMatch, b: &TextMatch) -> Ordering {
    b.confidence
        .partial_cmp(&a.confidence)
        .unwrap_or(Ordering::Equal)
}

/// Sort by confidence (highest first), then filter and truncate.
///
/// The sort is stable, so equal confidences keep registration order.
#[must_use]
pub fn rank_matches(mut results: Vec<TextMatch>, config: &MatchingConfig) -> Vec<TextMatch> {
    results.sort_by(by_confidence_desc);
    results.retain(|m| m.confidence >= config.min_score);
    if let Some(limit) = config.limit {
        results.truncate(limit);
    }
    results
}

/// Indices into `results` in the order [`rank_matches`] would keep them.
///
/// Lets callers pair each ranked result with the entry it was computed
/// from, which a name lookup cannot do when names repeat.
#[must_use]
pub fn rank_match_indices(results: &[TextMatch], config: &MatchingConfig) -> Vec<usize> {
    let mut order: Vec<usize> = (0..results.len()).collect();
    order.sort_by(|&a, &b| by_confidence_desc(&results[a], &results[b]));
    order.retain(|&i| results[i].confidence >= config.min_score);
    if let Some(limit) = config.limit {
        order.truncate(limit);
    }
    order
}

/// The highest-confidence result; the earliest one wins a tie
#[must_use]
pub fn best_match(results: &[TextMatch]) -> Option<&TextMatch> {
    results.iter().reduce(|best, candidate| {
        if candidate.confidence > best.confidence {
            candidate
        } else {
            best
        }
    })
}
