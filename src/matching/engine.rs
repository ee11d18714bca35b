use tracing::debug;

use crate::core::reference::ReferenceText;
use crate::core::types::TextMatch;
use crate::markov::ChainModel;

/// A registered reference and its precomputed chain
#[derive(Debug, Clone)]
struct ChainEntry {
    name: String,
    chain: ChainModel,
}

/// Matches query texts against a fixed set of named references
///
/// Reference chains are built once, at registration. Registration only
/// appends; matching never mutates the matcher, so a fully registered
/// matcher can be shared between threads without locking.
#[derive(Debug, Clone, Default)]
pub struct TextMatcher {
    chains: Vec<ChainEntry>,
}

impl TextMatcher {
    /// Create a matcher with no references
    #[must_use]
    pub fn new() -> Self {
        Self { chains: Vec::new() }
    }

    /// Create a matcher from `(name, text)` pairs, registered in order
    pub fn with_texts<I, N, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = (N, S)>,
        N: Into<String>,
        S: AsRef<str>,
    {
        let mut matcher = Self::new();
        for (name, text) in texts {
            matcher.register(name, text.as_ref());
        }
        matcher
    }

    /// Create a matcher from catalog references, registered in order
    #[must_use]
    pub fn from_references(references: &[ReferenceText]) -> Self {
        Self::with_texts(references.iter().map(|r| (r.name.as_str(), r.text.as_str())))
    }

    /// Build the chain for `text` and append it under `name`.
    ///
    /// Names are not required to be unique; a repeated name becomes an
    /// independent entry. Empty text is accepted and never matches.
    pub fn register(&mut self, name: impl Into<String>, text: &str) {
        let name = name.into();
        let chain = ChainModel::from_text(text);

        debug!(
            name = %name,
            tokens = chain.len(),
            transitions = chain.distinct_pairs(),
            "Registered reference"
        );

        self.chains.push(ChainEntry { name, chain });
    }

    /// Compare `query` against every registered reference.
    ///
    /// Returns one result per reference, in registration order. Each
    /// reference is the left operand of [`ChainModel::compare`].
    #[must_use]
    pub fn match_query(&self, query: &str) -> Vec<TextMatch> {
        self.match_chain(&ChainModel::from_text(query))
    }

    /// Same as [`TextMatcher::match_query`] for a query whose chain is already built
    #[must_use]
    pub fn match_chain(&self, query_chain: &ChainModel) -> Vec<TextMatch> {
        debug!(
            tokens = query_chain.len(),
            references = self.chains.len(),
            "Matching query"
        );

        self.chains
            .iter()
            .map(|entry| TextMatch::new(entry.name.clone(), entry.chain.compare(query_chain)))
            .collect()
    }

    /// Names of the registered references, in registration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.chains.iter().map(|entry| entry.name.as_str())
    }

    /// Token count of the first reference registered under `name`
    #[must_use]
    pub fn token_count(&self, name: &str) -> Option<usize> {
        self.chains
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.chain.len())
    }

    /// Number of registered references
    #[must_use]
    pub fn len(&self) -> usize {
        self.chains.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }
}

impl<N: Into<String>, S: AsRef<str>> FromIterator<(N, S)> for TextMatcher {
    fn from_iter<I: IntoIterator<Item = (N, S)>>(iter: I) -> Self {
        Self::with_texts(iter)
    }
}

impl<N: Into<String>, S: AsRef<str>> Extend<(N, S)> for TextMatcher {
    fn extend<I: IntoIterator<Item = (N, S)>>(&mut self, iter: I) {
        for (name, text) in iter {
            self.register(name, text.as_ref());
        }
    }
}
