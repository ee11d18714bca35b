//! HTTP service for matching texts against a catalog.
//!
//! Built on Axum. Every endpoint speaks JSON except the index page, which is a
//! small form for pasting a text into the browser.
//!
//! ## Starting the Server
//!
//! ```text
//! # Start on default port 8080 with the embedded catalog
//! markov-match serve
//!
//! # Custom port, your own references, and auto-open browser
//! markov-match serve --port 3000 --catalog-dir licenses/ --open
//!
//! # Bind to all interfaces
//! markov-match serve --address 0.0.0.0
//! ```
//!
//! ## API Endpoints
//!
//! - `GET /` - Main page with text input form
//! - `GET /api/catalog` - List all references in the catalog
//! - `POST /api/match` - Rank references against `{"text", "min_score"?, "limit"?}`
//! - `POST /api/compare` - Score `{"reference", "query"}` against each other

pub mod server;
