use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::catalog::store::TextCatalog;
use crate::cli::{load_catalog, OutputFormat};
use crate::core::reference::ReferenceText;
use crate::core::types::{MatchLevel, TextMatch};
use crate::markov::ChainModel;
use crate::matching::scoring::{rank_match_indices, MatchingConfig};
use crate::parsing::text::read_text;

#[derive(Args)]
pub struct IdentifyArgs {
    /// Input text file. Use '-' for stdin
    #[arg(required = true)]
    pub input: PathBuf,

    /// Number of matches to show
    #[arg(short = 'n', long, default_value = "5")]
    pub max_matches: usize,

    /// Hide matches scoring below this confidence (0.0 - 1.0)
    #[arg(long, default_value = "0.0", value_parser = parse_score)]
    pub min_score: f64,

    /// Show every match instead of the top --max-matches
    #[arg(long)]
    pub all: bool,

    /// Path to custom catalog file
    #[arg(long, conflicts_with = "catalog_dir")]
    pub catalog: Option<PathBuf>,

    /// Directory of plain text files to use as references
    #[arg(long)]
    pub catalog_dir: Option<PathBuf>,
}

fn parse_score(value: &str) -> Result<f64, String> {
    let score: f64 = value
        .parse()
        .map_err(|_| format!("'{value}' is not a number"))?;
    if (0.0..=1.0).contains(&score) {
        Ok(score)
    } else {
        Err(format!("{score} is not between 0.0 and 1.0"))
    }
}

impl IdentifyArgs {
    fn matching_config(&self) -> MatchingConfig {
        let config = MatchingConfig::default().with_min_score(self.min_score);
        if self.all {
            config
        } else {
            config.with_limit(self.max_matches)
        }
    }
}

/// Execute identify subcommand
///
/// # Errors
///
/// Returns an error if the input or the catalog cannot be read.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: IdentifyArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let query = read_text(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    let query_chain = ChainModel::from_text(&query);
    let query_tokens = query_chain.len();

    if verbose {
        eprintln!("Read {query_tokens} tokens from input");
    }

    let catalog = load_catalog(args.catalog.as_ref(), args.catalog_dir.as_ref())?;

    if verbose {
        eprintln!("Loaded catalog with {} references", catalog.len());
    }

    if catalog.is_empty() {
        eprintln!("Warning: Catalog is empty, no references to match against.");
        return Ok(());
    }

    let results = catalog.matcher().match_chain(&query_chain);
    let matches = rank_against_catalog(&catalog, &results, &args.matching_config());

    match format {
        OutputFormat::Text => print_text_results(&matches, verbose),
        OutputFormat::Json => print_json_results(&matches, query_tokens)?,
        OutputFormat::Tsv => print_tsv_results(&matches),
    }

    Ok(())
}

/// A ranked result and the catalog entry it was scored against
type RankedMatch<'a> = (&'a ReferenceText, &'a TextMatch);

/// Rank matcher output, pairing results with references by position.
///
/// `results` must come from `catalog.matcher()`, which keeps catalog order.
fn rank_against_catalog<'a>(
    catalog: &'a TextCatalog,
    results: &'a [TextMatch],
    config: &MatchingConfig,
) -> Vec<RankedMatch<'a>> {
    rank_match_indices(results, config)
        .into_iter()
        .filter_map(|i| catalog.references.get(i).zip(results.get(i)))
        .collect()
}

fn level_label(level: MatchLevel) -> &'static str {
    match level {
        MatchLevel::Exact => "EXACT",
        MatchLevel::High => "HIGH",
        MatchLevel::Medium => "MEDIUM",
        MatchLevel::Low => "LOW",
    }
}

fn print_text_results(matches: &[RankedMatch], verbose: bool) {
    if matches.is_empty() {
        println!("No matching references found.");
        return;
    }

    for (i, (reference, result)) in matches.iter().enumerate() {
        if i > 0 {
            println!("\n{}", "─".repeat(60));
        }

        println!(
            "\n#{} {} ({})",
            i + 1,
            result.name,
            level_label(result.level())
        );
        println!("   Score: {:.1}%", result.confidence * 100.0);

        if let Some(description) = &reference.description {
            println!("   Description: {description}");
        }
        if verbose {
            println!("   Reference tokens: {}", reference.chain().len());
        }
    }
    println!();
}

fn print_json_results(matches: &[RankedMatch], query_tokens: usize) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "query_tokens": query_tokens,
        "matches": matches.iter().map(|(reference, m)| {
            serde_json::json!({
                "name": m.name,
                "confidence": m.confidence,
                "level": m.level(),
                "description": reference.description,
            })
        }).collect::<Vec<_>>(),
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_results(matches: &[RankedMatch]) {
    println!("rank\tname\tconfidence\tlevel");
    for (i, (_, m)) in matches.iter().enumerate() {
        println!("{}\t{}\t{:.4}\t{}", i + 1, m.name, m.confidence, m.level());
    }
}
