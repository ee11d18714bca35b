//! Matching query texts against registered references.
//!
//! - [`TextMatcher`]: holds reference chains and scores a query against all of them
//! - [`compare_texts`]: one-off similarity of two raw texts
//! - [`rank_matches`]: sort, filter and truncate matcher output for display
//!
//! ## Example
//!
//! ```rust
//! use markov_match::matching::{rank_matches, MatchingConfig, TextMatcher};
//!
//! let mut matcher = TextMatcher::new();
//! matcher.register("lorem_ipsum", "Lorem ipsum dolor sit amet, consectetur adipiscing elit.");
//! matcher.register("excepteur_sint", "Excepteur sint occaecat cupidatat non proident.");
//!
//! let matches = matcher.match_query("Lorem ipsum dolor sit amet.");
//! assert_eq!(matches.len(), 2);
//! assert_eq!(matches[0].name, "lorem_ipsum");
//! assert!((matches[0].confidence - 0.5).abs() < 1e-12);
//!
//! let ranked = rank_matches(matches, &MatchingConfig::default().with_limit(1));
//! assert_eq!(ranked[0].name, "lorem_ipsum");
//! ```

pub mod engine;
pub mod scoring;

pub use engine::TextMatcher;
pub use scoring::{best_match, compare_texts, rank_matches, MatchingConfig};
