//! Command-line interface for markov-match.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **identify**: Match a text against every reference in a catalog
//! - **compare**: Score two texts against each other
//! - **catalog**: List, show, export, or build reference catalogs
//! - **serve**: Start the HTTP service
//!
//! ## Usage
//!
//! ```text
//! # Which license is this?
//! markov-match identify LICENSE
//!
//! # Pipe from another tool
//! head -n 30 src/main.c | markov-match identify -
//!
//! # Match against your own references, JSON output for scripting
//! markov-match identify LICENSE --catalog-dir licenses/ --format json
//!
//! # Compare two files
//! markov-match compare upstream/LICENSE vendored/LICENSE --symmetric
//!
//! # Start the HTTP service
//! markov-match serve --port 8080 --open
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::catalog::store::TextCatalog;

pub mod catalog;
pub mod compare;
pub mod identify;

#[derive(Parser)]
#[command(name = "markov-match")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Identify license and boilerplate texts by Markov-chain similarity")]
#[command(
    long_about = "markov-match scores how similar two texts are by comparing the word-to-word transitions they contain.\n\nTexts are normalized first (case, whitespace, quotes, dashes, British/American spelling), so cosmetic differences do not affect the score. Use it to:\n- Identify which known license a file contains\n- Check how far a vendored copy has drifted from upstream\n- Build catalogs of your own reference texts"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Identify which reference texts a file matches
    Identify(identify::IdentifyArgs),

    /// Compare two texts
    Compare(compare::CompareArgs),

    /// Manage reference catalogs
    Catalog(catalog::CatalogArgs),

    /// Start the web server
    Serve(ServeArgs),
}

#[derive(clap::Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    pub port: u16,

    /// Address to bind to
    #[arg(short, long, default_value = "127.0.0.1")]
    pub address: String,

    /// Path to custom catalog file
    #[arg(long, conflicts_with = "catalog_dir")]
    pub catalog: Option<PathBuf>,

    /// Directory of plain text files to use as references
    #[arg(long)]
    pub catalog_dir: Option<PathBuf>,

    /// Open browser automatically
    #[arg(long)]
    pub open: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Load a catalog from `--catalog`, `--catalog-dir`, or the embedded default.
///
/// # Errors
///
/// Returns an error if the selected catalog cannot be loaded.
pub fn load_catalog(
    catalog: Option<&PathBuf>,
    catalog_dir: Option<&PathBuf>,
) -> anyhow::Result<TextCatalog> {
    use anyhow::Context;

    let loaded = match (catalog, catalog_dir) {
        (Some(path), _) => TextCatalog::load_from_file(path)
            .with_context(|| format!("Failed to load catalog {}", path.display()))?,
        (None, Some(dir)) => TextCatalog::load_from_dir(dir)
            .with_context(|| format!("Failed to load references from {}", dir.display()))?,
        (None, None) => TextCatalog::load_embedded()?,
    };
    Ok(loaded)
}
