//! Reference text catalog storage.
//!
//! The catalog holds the named reference texts a query is matched against.
//! An embedded catalog of common short permissive licenses is compiled into
//! the binary; custom catalogs can be loaded from JSON files or built from a
//! directory of plain text files.
//!
//! ## Embedded Catalog
//!
//! - **MIT**
//! - **ISC**
//! - **BSD-2-Clause**, **BSD-3-Clause**
//! - **0BSD**
//!
//! ## Example
//!
//! ```rust,no_run
//! use markov_match::TextCatalog;
//! use std::path::Path;
//!
//! // Load embedded catalog and match against it
//! let catalog = TextCatalog::load_embedded().unwrap();
//! let matcher = catalog.matcher();
//! let matches = matcher.match_query("Permission to use, copy, modify ...");
//!
//! // Build a catalog from a directory of license texts
//! let custom = TextCatalog::load_from_dir(Path::new("licenses/")).unwrap();
//! let json = custom.to_json().unwrap();
//! ```

pub mod store;
