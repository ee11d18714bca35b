//! First-order Markov chain models for sequence similarity.
//!
//! A [`ChainModel`] summarizes a token sequence as a multiset of adjacent
//! [`TransitionPair`]s plus the first token and the sequence length. Two
//! models are compared by counting how many of the left model's transitions
//! also occur in the right model.
//!
//! ## Scoring
//!
//! ```text
//! matches = [first tokens equal] + Σ min(left[pair], right[pair])
//! score   = matches / max(left.len, right.len)
//! ```
//!
//! The scan is driven by the left model and an empty left model scores 0
//! without looking at the right one. Dividing by the longer length penalizes
//! a query that is much longer or shorter than the reference.
//!
//! ## Example
//!
//! ```rust
//! use markov_match::markov::ChainModel;
//!
//! let reference = ChainModel::build(&["a", "b", "c"]);
//! let query = ChainModel::build(&["a", "b", "d"]);
//!
//! // first-token bonus + (a, b)
//! assert!((reference.compare(&query) - 2.0 / 3.0).abs() < 1e-12);
//! ```

pub mod chain;

pub use chain::{ChainModel, TransitionPair};
