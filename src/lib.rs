//! # markov-match
//!
//! A library for identifying license and boilerplate texts by Markov-chain
//! similarity.
//!
//! License headers and notices are copied around endlessly, and every copy
//! drifts a little: re-wrapped lines, curly quotes, "organisation" vs
//! "organization", a project name swapped in. Exact comparison fails on all
//! of these.
//!
//! `markov-match` normalizes both texts, turns each into a first-order Markov
//! chain of word-to-word transitions, and scores how many transitions the two
//! chains share. The score is 1.0 for texts that are identical after
//! normalization and falls towards 0.0 as they diverge.
//!
//! ## Features
//!
//! - **Normalization**: case, whitespace, quotes, dashes, `https`, `©` and
//!   British/American spelling variants are folded before comparison
//! - **Multiset transitions**: repeated phrases count as often as they occur
//! - **Catalog matching**: score a text against every known reference at once
//! - **Embedded catalog**: common short permissive licenses ship with the binary
//!
//! ## Example
//!
//! ```rust,no_run
//! use markov_match::{rank_matches, MatchingConfig, TextCatalog};
//!
//! // Load the embedded catalog of known licenses
//! let catalog = TextCatalog::load_embedded().unwrap();
//! let matcher = catalog.matcher();
//!
//! // Find the closest references
//! let text = std::fs::read_to_string("LICENSE").unwrap();
//! let matches = rank_matches(matcher.match_query(&text), &MatchingConfig::default().with_limit(3));
//!
//! for m in matches {
//!     println!("{}: {:.1}%", m.name, m.confidence * 100.0);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`text`]: Normalization and tokenization
//! - [`markov`]: Transition chains and the similarity metric
//! - [`matching`]: Matching a query against many references, and ranking
//! - [`catalog`]: Reference catalog storage
//! - [`core`]: Core data types for references and match results
//! - [`parsing`]: Reading text inputs from files and stdin
//! - [`cli`]: Command-line interface implementation
//! - [`web`]: HTTP service

pub mod catalog;
pub mod cli;
pub mod core;
pub mod markov;
pub mod matching;
pub mod parsing;
pub mod text;
pub mod utils;
pub mod web;

// Re-export commonly used types for convenience
pub use catalog::store::TextCatalog;
pub use crate::core::reference::ReferenceText;
pub use crate::core::types::*;
pub use markov::{ChainModel, TransitionPair};
pub use matching::engine::TextMatcher;
pub use matching::scoring::{best_match, compare_texts, rank_matches, MatchingConfig};
pub use text::{normalize, tokenize};
