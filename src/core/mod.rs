//! Core data types shared by the matcher, the catalog and the front ends.
//!
//! - [`ReferenceText`]: a named reference text as stored in a catalog
//! - [`TextMatch`]: the confidence of a query against one reference
//! - [`MatchLevel`]: a coarse classification of a confidence score

pub mod reference;
pub mod types;

pub use reference::ReferenceText;
pub use types::{MatchLevel, TextMatch};
