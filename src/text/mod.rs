//! Text canonicalization and tokenization.
//!
//! Before two texts are compared they are reduced to a canonical form so that
//! differences which carry no meaning for license matching (case, whitespace
//! layout, quote style, dash style, URL scheme, British vs. American spelling)
//! do not affect the score.
//!
//! The rules follow the SPDX license matching guidelines:
//!
//! | Step | Rule |
//! |------|------|
//! | 1 | Lowercase |
//! | 2 | Collapse whitespace runs to a single space |
//! | 3 | Unify quotation marks to `'` |
//! | 4 | `https://` becomes `http://` |
//! | 5 | `©` becomes `(c)` |
//! | 6 | Em and en dashes become `-` |
//! | 7 | Trim |
//! | 8 | Spelling equivalences ([`spelling::SPELLING_EQUIVALENTS`]) |
//!
//! ## Example
//!
//! ```rust
//! use markov_match::text::{normalize, tokenize};
//!
//! assert_eq!(normalize("  The  Organization\n"), "the organisation");
//! assert_eq!(tokenize("Lorem   IPSUM"), vec!["lorem", "ipsum"]);
//! ```

pub mod normalize;
pub mod spelling;
pub mod tokenize;

pub use normalize::normalize;
pub use tokenize::tokenize;
