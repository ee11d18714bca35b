use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;

use crate::cli::OutputFormat;
use crate::core::types::MatchLevel;
use crate::markov::ChainModel;
use crate::parsing::text::{read_text, STDIN_PATH};

#[derive(Args)]
pub struct CompareArgs {
    /// Reference text file (left operand). Use '-' for stdin
    #[arg(required = true)]
    pub reference: PathBuf,

    /// Query text file (right operand)
    #[arg(required = true)]
    pub query: PathBuf,

    /// Also score the query against the reference
    #[arg(long)]
    pub symmetric: bool,
}

struct Comparison {
    reference_tokens: usize,
    query_tokens: usize,
    distinct_pairs: (usize, usize),
    score: f64,
    reverse_score: Option<f64>,
}

/// Execute compare subcommand
///
/// # Errors
///
/// Returns an error if either input cannot be read, or if both inputs are stdin.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: CompareArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    check_single_stdin(&args)?;

    let reference = load_chain(&args.reference)?;
    let query = load_chain(&args.query)?;

    if verbose {
        eprintln!(
            "Reference: {} tokens, {} distinct transitions",
            reference.len(),
            reference.distinct_pairs()
        );
        eprintln!(
            "Query: {} tokens, {} distinct transitions",
            query.len(),
            query.distinct_pairs()
        );
    }

    let comparison = Comparison {
        reference_tokens: reference.len(),
        query_tokens: query.len(),
        distinct_pairs: (reference.distinct_pairs(), query.distinct_pairs()),
        score: reference.compare(&query),
        reverse_score: args.symmetric.then(|| query.compare(&reference)),
    };

    match format {
        OutputFormat::Text => print_text_comparison(&args, &comparison),
        OutputFormat::Json => print_json_comparison(&args, &comparison)?,
        OutputFormat::Tsv => print_tsv_comparison(&comparison),
    }

    Ok(())
}

/// Stdin can be read once; a second read would silently compare against empty text
fn check_single_stdin(args: &CompareArgs) -> anyhow::Result<()> {
    if args.reference.as_os_str() == STDIN_PATH && args.query.as_os_str() == STDIN_PATH {
        anyhow::bail!("Only one of the reference and query can be read from stdin ('{STDIN_PATH}')");
    }
    Ok(())
}

fn load_chain(path: &Path) -> anyhow::Result<ChainModel> {
    let text = read_text(path).with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(ChainModel::from_text(&text))
}

fn print_text_comparison(args: &CompareArgs, comparison: &Comparison) {
    println!("Comparison Results");
    println!("{}", "=".repeat(60));

    println!("\nReference: {}", args.reference.display());
    println!("  Tokens: {}", comparison.reference_tokens);
    println!("  Distinct transitions: {}", comparison.distinct_pairs.0);

    println!("\nQuery: {}", args.query.display());
    println!("  Tokens: {}", comparison.query_tokens);
    println!("  Distinct transitions: {}", comparison.distinct_pairs.1);

    println!("\nSimilarity:");
    println!("  Score: {:.2}%", comparison.score * 100.0);
    println!("  Level: {}", MatchLevel::from_score(comparison.score));
    if let Some(reverse) = comparison.reverse_score {
        println!("  Reverse Score: {:.2}%", reverse * 100.0);
    }
}

fn print_json_comparison(args: &CompareArgs, comparison: &Comparison) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "reference": {
            "path": args.reference.display().to_string(),
            "tokens": comparison.reference_tokens,
            "distinct_transitions": comparison.distinct_pairs.0,
        },
        "query": {
            "path": args.query.display().to_string(),
            "tokens": comparison.query_tokens,
            "distinct_transitions": comparison.distinct_pairs.1,
        },
        "score": comparison.score,
        "level": MatchLevel::from_score(comparison.score),
        "reverse_score": comparison.reverse_score,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_comparison(comparison: &Comparison) {
    println!("reference_tokens\tquery_tokens\tscore\tlevel\treverse_score");
    println!(
        "{}\t{}\t{:.4}\t{}\t{}",
        comparison.reference_tokens,
        comparison.query_tokens,
        comparison.score,
        MatchLevel::from_score(comparison.score),
        comparison
            .reverse_score
            .map_or_else(String::new, |s| format!("{s:.4}")),
    );
}
