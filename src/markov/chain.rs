use std::collections::HashMap;
use std::hash::Hash;

use crate::text::tokenize;

/// Convert a token count to f64 for ratio calculations
#[inline]
fn count_to_f64(count: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}

/// An ordered (predecessor, successor) pair of adjacent tokens
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TransitionPair<T> {
    pub predecessor: T,
    pub successor: T,
}

impl<T> TransitionPair<T> {
    pub fn new(predecessor: T, successor: T) -> Self {
        Self {
            predecessor,
            successor,
        }
    }
}

/// Transition statistics of a token sequence
///
/// Holds how often each adjacent pair occurs, the first token and the number
/// of tokens the model was built from. The pair counts always sum to
/// `len() - 1` for a non-empty sequence and to zero for an empty one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainModel<T: Eq + Hash = String> {
    pair_counts: HashMap<TransitionPair<T>, usize>,
    length: usize,
    first_token: Option<T>,
}

impl<T: Eq + Hash + Clone> ChainModel<T> {
    /// Build a chain from a token sequence.
    ///
    /// Every token is significant; there are no reserved start or end markers.
    #[must_use]
    pub fn build(tokens: &[T]) -> Self {
        let mut pair_counts: HashMap<TransitionPair<T>, usize> = HashMap::new();

        for window in tokens.windows(2) {
            let pair = TransitionPair::new(window[0].clone(), window[1].clone());
            *pair_counts.entry(pair).or_insert(0) += 1;
        }

        Self {
            pair_counts,
            length: tokens.len(),
            first_token: tokens.first().cloned(),
        }
    }

    /// Similarity of this chain to `other`, in `[0, 1]`.
    ///
    /// Counts one match for an equal first token plus, for every transition of
    /// this chain, the number of times it also occurs in `other` (bounded by
    /// its own count). The total is divided by the longer of the two lengths.
    /// An empty `self` always scores 0.
    #[must_use]
    pub fn compare(&self, other: &Self) -> f64 {
        if self.length == 0 {
            return 0.0;
        }

        let mut matches = match (&self.first_token, &other.first_token) {
            (Some(ours), Some(theirs)) if ours == theirs => 1,
            _ => 0,
        };

        for (pair, &count) in &self.pair_counts {
            let other_count = other.pair_counts.get(pair).copied().unwrap_or(0);
            matches += count.min(other_count);
        }

        count_to_f64(matches) / count_to_f64(self.length.max(other.length))
    }

    /// Number of tokens the chain was built from
    #[must_use]
    pub fn len(&self) -> usize {
        self.length
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    #[must_use]
    pub fn first_token(&self) -> Option<&T> {
        self.first_token.as_ref()
    }

    /// Occurrences of a single transition (0 if never observed)
    #[must_use]
    pub fn pair_count(&self, pair: &TransitionPair<T>) -> usize {
        self.pair_counts.get(pair).copied().unwrap_or(0)
    }

    /// Number of distinct transitions
    #[must_use]
    pub fn distinct_pairs(&self) -> usize {
        self.pair_counts.len()
    }

    /// Iterate over every distinct transition and its count, in no particular order
    pub fn pairs(&self) -> impl Iterator<Item = (&TransitionPair<T>, usize)> {
        self.pair_counts.iter().map(|(pair, &count)| (pair, count))
    }
}

impl ChainModel<String> {
    /// Tokenize raw text and build its chain
    #[must_use]
    pub fn from_text(raw: &str) -> Self {
        Self::build(&tokenize(raw))
    }
}

impl<T: Eq + Hash> Default for ChainModel<T> {
    fn default() -> Self {
        Self {
            pair_counts: HashMap::new(),
            length: 0,
            first_token: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELTA: f64 = 0.00001;

    fn dummy_words() -> Vec<&'static str> {
        vec![
            "Lorem", "ipsum", "dolor", "amet", "sit", "Lorem", "amet,", "ipsum", "lorem", "lorem",
            "dolor", "amet", "sit", "Lorem", "amet,",
        ]
    }

    fn pair<'a>(a: &'a str, b: &'a str) -> TransitionPair<&'a str> {
        TransitionPair::new(a, b)
    }

    #[test]
    fn test_build_many_words() {
        let chain = ChainModel::build(&dummy_words());

        assert_eq!(chain.len(), 15);
        assert_eq!(chain.first_token(), Some(&"Lorem"));
        assert_eq!(chain.distinct_pairs(), 10);

        let expected = [
            (pair("Lorem", "amet,"), 2),
            (pair("Lorem", "ipsum"), 1),
            (pair("amet", "sit"), 2),
            (pair("amet,", "ipsum"), 1),
            (pair("dolor", "amet"), 2),
            (pair("ipsum", "dolor"), 1),
            (pair("ipsum", "lorem"), 1),
            (pair("lorem", "dolor"), 1),
            (pair("lorem", "lorem"), 1),
            (pair("sit", "Lorem"), 2),
        ];
        for (p, count) in &expected {
            assert_eq!(chain.pair_count(p), *count, "pair {p:?}");
        }
    }

    #[test]
    fn test_build_zero_words() {
        let chain: ChainModel<&str> = ChainModel::build(&[]);

        assert!(chain.is_empty());
        assert_eq!(chain.first_token(), None);
        assert_eq!(chain.distinct_pairs(), 0);
        assert_eq!(chain, ChainModel::default());
    }

    #[test]
    fn test_build_one_word() {
        let chain = ChainModel::build(&["Lorem"]);

        assert_eq!(chain.len(), 1);
        assert_eq!(chain.first_token(), Some(&"Lorem"));
        assert_eq!(chain.distinct_pairs(), 0);
    }

    #[test]
    fn test_build_repeated_word() {
        let chain = ChainModel::build(&["Lorem"; 8]);

        assert_eq!(chain.len(), 8);
        assert_eq!(chain.distinct_pairs(), 1);
        assert_eq!(chain.pair_count(&pair("Lorem", "Lorem")), 7);
    }

    #[test]
    fn test_pair_counts_sum_to_length_minus_one() {
        for len in 0..6usize {
            let words: Vec<String> = (0..len).map(|i| format!("w{}", i % 2)).collect();
            let chain = ChainModel::build(&words);
            let total: usize = chain.pairs().map(|(_, count)| count).sum();
            assert_eq!(total, len.saturating_sub(1));
        }
    }

    #[test]
    fn test_build_is_deterministic() {
        let words = dummy_words();
        assert_eq!(ChainModel::build(&words), ChainModel::build(&words));
    }

    #[test]
    fn test_compare_self() {
        let chain = ChainModel::build(&dummy_words());
        assert_eq!(chain.compare(&chain), 1.0);
    }

    #[test]
    fn test_compare_missing_two_wrong_three() {
        let comparing = ChainModel::build(&dummy_words());
        let compared = ChainModel::build(&[
            "lorem", "ipsum", "dolor", "amet", "sit", "Lorem", "amet,", "ipsum", "lorem", "lorem",
            "dolor", "sit", "amet", "Lorem", "amet,",
        ]);

        assert!((comparing.compare(&compared) - 10.0 / 15.0).abs() < DELTA);
    }

    #[test]
    fn test_compare_left_empty() {
        let comparing: ChainModel<&str> = ChainModel::build(&[]);
        let compared = ChainModel::build(&dummy_words());
        assert_eq!(comparing.compare(&compared), 0.0);
    }

    #[test]
    fn test_compare_right_empty() {
        let comparing = ChainModel::build(&dummy_words());
        let compared = ChainModel::build(&[]);
        assert_eq!(comparing.compare(&compared), 0.0);
    }

    #[test]
    fn test_compare_both_empty() {
        let comparing: ChainModel<&str> = ChainModel::build(&[]);
        let compared: ChainModel<&str> = ChainModel::build(&[]);
        assert_eq!(comparing.compare(&compared), 0.0);
    }

    #[test]
    fn test_compare_one_pair_match() {
        let comparing = ChainModel::build(&["Lorem", "ipsum", "sit", "dolor"]);
        let compared = ChainModel::build(&["Dolor", "sit", "Lorem", "ipsum"]);
        assert!((comparing.compare(&compared) - 1.0 / 4.0).abs() < DELTA);
    }

    #[test]
    fn test_compare_one_word_difference() {
        let comparing = ChainModel::build(&["Lorem", "ipsum", "sit", "dolor"]);
        let compared = ChainModel::build(&["Lorem", "ipsum", "sit", "lorem"]);
        assert!((comparing.compare(&compared) - 3.0 / 4.0).abs() < DELTA);
    }

    #[test]
    fn test_compare_longer_other_contains_all() {
        let comparing = ChainModel::build(&[
            "Lorem", "ipsum", "dolor", "amet", "sit", "Lorem", "amet,", "ipsum",
        ]);
        let compared = ChainModel::build(&dummy_words());
        assert!((comparing.compare(&compared) - 8.0 / 15.0).abs() < DELTA);
    }

    #[test]
    fn test_compare_no_intersection() {
        let comparing = ChainModel::build(&[
            "Lorem", "ipsum", "dolor", "Lorem", "ipsum", "dolor", "Lorem", "ipsum",
        ]);
        let compared = ChainModel::build(&["lorem", "sit", "amet", "lorem", "sit", "amet"]);
        assert_eq!(comparing.compare(&compared), 0.0);
    }

    #[test]
    fn test_compare_first_and_last_different() {
        let comparing = ChainModel::build(&["lorem", "ipsum", "amet", "sit", "Dolor"]);
        let compared = ChainModel::build(&["Lorem", "ipsum", "amet", "sit", "dolor"]);
        assert!((comparing.compare(&compared) - 2.0 / 5.0).abs() < DELTA);
    }

    #[test]
    fn test_compare_repeated_series_is_bounded_by_own_count() {
        let series = ["lorem", "ipsum", "amet", "sit", "Dolor"];
        let comparing = ChainModel::build(&series);
        let compared = ChainModel::build(&series.repeat(3));

        // 1 + 4 pairs, each counted once despite three occurrences on the right
        assert!((comparing.compare(&compared) - 1.0 / 3.0).abs() < DELTA);
    }

    #[test]
    fn test_compare_shared_transitions_use_smaller_count() {
        let a = ChainModel::build(&["a", "b", "a", "b"]);
        let b = ChainModel::build(&["a", "b", "c", "d"]);

        // first-token bonus + min(2, 1) for (a, b); (b, a) is unmatched
        assert!((a.compare(&b) - 2.0 / 4.0).abs() < DELTA);

        let g = ChainModel::build(&["k", "k", "k"]);
        let h = ChainModel::build(&["k", "k", "j"]);
        // first-token bonus + min(2, 1) for (k, k)
        assert!((g.compare(&h) - 2.0 / 3.0).abs() < DELTA);
    }

    #[test]
    fn test_compare_denominator_uses_longer_chain() {
        let short = ChainModel::build(&["x", "y"]);
        let long = ChainModel::build(&["x", "y", "z", "w"]);

        // first-token bonus + (x, y) = 2, over max(2, 4)
        assert!((short.compare(&long) - 0.5).abs() < DELTA);
        assert!((long.compare(&short) - 0.5).abs() < DELTA);
    }

    #[test]
    fn test_compare_spec_scenario() {
        let reference = ChainModel::build(&["a", "b", "c"]);
        let query = ChainModel::build(&["a", "b", "d"]);
        assert!((reference.compare(&query) - 2.0 / 3.0).abs() < DELTA);
    }

    #[test]
    fn test_compare_range() {
        let samples: Vec<ChainModel<&str>> = vec![
            ChainModel::build(&[]),
            ChainModel::build(&["a"]),
            ChainModel::build(&["a", "a", "a", "a"]),
            ChainModel::build(&["a", "b", "a", "b", "a"]),
            ChainModel::build(&["b", "a"]),
            ChainModel::build(&dummy_words()),
        ];

        for left in &samples {
            for right in &samples {
                let score = left.compare(right);
                assert!((0.0..=1.0).contains(&score), "score {score} out of range");
            }
        }
    }

    #[test]
    fn test_from_text() {
        let chain = ChainModel::from_text("Lorem IPSUM lorem ipsum");
        assert_eq!(chain.len(), 4);
        assert_eq!(chain.first_token().map(String::as_str), Some("lorem"));
        assert_eq!(
            chain.pair_count(&TransitionPair::new("lorem".to_string(), "ipsum".to_string())),
            2
        );
    }
}
