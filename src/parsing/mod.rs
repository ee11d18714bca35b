//! Reading reference and query texts from files or standard input.
//!
//! Inputs are read whole, checked against the size limit in
//! [`crate::utils::validation`], rejected if they look binary and decoded as
//! UTF-8. No other interpretation happens here; canonicalization is the job of
//! [`crate::text`].

pub mod text;
