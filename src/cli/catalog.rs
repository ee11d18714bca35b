use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Subcommand};

use crate::catalog::store::TextCatalog;
use crate::cli::{load_catalog, OutputFormat};
use crate::core::reference::ReferenceText;

#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommands,
}

#[derive(Subcommand)]
pub enum CatalogCommands {
    /// List all references in the catalog
    List {
        /// Path to custom catalog file
        #[arg(long, conflicts_with = "catalog_dir")]
        catalog: Option<PathBuf>,

        /// Directory of plain text files to use as references
        #[arg(long)]
        catalog_dir: Option<PathBuf>,
    },

    /// Show the text of a specific reference
    Show {
        /// Reference name
        #[arg(required = true)]
        name: String,

        /// Path to custom catalog file
        #[arg(long, conflicts_with = "catalog_dir")]
        catalog: Option<PathBuf>,

        /// Directory of plain text files to use as references
        #[arg(long)]
        catalog_dir: Option<PathBuf>,
    },

    /// Export the catalog to a file
    Export {
        /// Output file path
        #[arg(required = true)]
        output: PathBuf,

        /// Path to custom catalog file to export (defaults to embedded)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Build a catalog from a directory of plain text files
    Build {
        /// Directory containing one reference text per file
        #[arg(long, required = true)]
        input_dir: PathBuf,

        /// Output file (JSON). If not specified, prints to stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Append to existing catalog file instead of starting empty
        #[arg(long)]
        append_to: Option<PathBuf>,
    },
}

/// Execute catalog subcommand
///
/// # Errors
///
/// Returns an error if a catalog cannot be loaded or written.
pub fn run(args: CatalogArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    match args.command {
        CatalogCommands::List {
            catalog,
            catalog_dir,
        } => run_list(catalog.as_ref(), catalog_dir.as_ref(), format, verbose),
        CatalogCommands::Show {
            name,
            catalog,
            catalog_dir,
        } => run_show(&name, catalog.as_ref(), catalog_dir.as_ref(), format),
        CatalogCommands::Export { output, catalog } => run_export(&output, catalog.as_ref()),
        CatalogCommands::Build {
            input_dir,
            output,
            append_to,
        } => run_build(&input_dir, output.as_ref(), append_to.as_ref(), verbose),
    }
}

fn run_list(
    catalog_path: Option<&PathBuf>,
    catalog_dir: Option<&PathBuf>,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let catalog = load_catalog(catalog_path, catalog_dir)?;

    if verbose {
        eprintln!("Loaded catalog with {} references", catalog.len());
    }

    let rows: Vec<(&ReferenceText, usize)> = catalog
        .references
        .iter()
        .map(|r| (r, r.chain().len()))
        .collect();

    match format {
        OutputFormat::Text => {
            let name_width = rows
                .iter()
                .map(|(r, _)| r.name.chars().count().min(35))
                .max()
                .unwrap_or(4)
                .max(4);
            let desc_width = rows
                .iter()
                .map(|(r, _)| r.description.as_deref().map_or(0, |d| d.chars().count().min(45)))
                .max()
                .unwrap_or(11)
                .max(11);

            println!("Reference Catalog ({} references)\n", rows.len());
            println!(
                "{:<name_w$} {:<desc_w$} {:>8}",
                "Name",
                "Description",
                "Tokens",
                name_w = name_width,
                desc_w = desc_width
            );
            println!("{}", "-".repeat(name_width + desc_width + 10));

            for (r, tokens) in &rows {
                println!(
                    "{:<name_w$} {:<desc_w$} {:>8}",
                    truncate(&r.name, name_width),
                    truncate(r.description.as_deref().unwrap_or("-"), desc_width),
                    tokens,
                    name_w = name_width,
                    desc_w = desc_width
                );
            }
        }
        OutputFormat::Json => {
            let output: Vec<_> = rows
                .iter()
                .map(|(r, tokens)| {
                    serde_json::json!({
                        "name": r.name,
                        "description": r.description,
                        "tokens": tokens,
                        "bytes": r.text.len(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("name\ttokens\tbytes\tdescription");
            for (r, tokens) in &rows {
                println!(
                    "{}\t{}\t{}\t{}",
                    r.name,
                    tokens,
                    r.text.len(),
                    r.description.as_deref().unwrap_or("")
                );
            }
        }
    }

    Ok(())
}

fn run_show(
    name: &str,
    catalog_path: Option<&PathBuf>,
    catalog_dir: Option<&PathBuf>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let catalog = load_catalog(catalog_path, catalog_dir)?;

    let reference = catalog
        .get(name)
        .ok_or_else(|| anyhow::anyhow!("Reference '{}' not found", name))?;

    match format {
        OutputFormat::Text => {
            let chain = reference.chain();
            println!("Reference: {}\n", reference.name);
            if let Some(desc) = &reference.description {
                println!("Description: {desc}");
            }
            println!("Tokens:      {}", chain.len());
            println!("Transitions: {}", chain.distinct_pairs());
            println!("\n{}", "-".repeat(60));
            println!("{}", reference.text.trim_end());
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&reference)?);
        }
        OutputFormat::Tsv => {
            println!("name\ttokens\tdescription");
            println!(
                "{}\t{}\t{}",
                reference.name,
                reference.chain().len(),
                reference.description.as_deref().unwrap_or("")
            );
        }
    }

    Ok(())
}

fn run_export(output: &PathBuf, catalog_path: Option<&PathBuf>) -> anyhow::Result<()> {
    let catalog = load_catalog(catalog_path, None)?;

    let json = catalog.to_json()?;
    std::fs::write(output, json)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!(
        "Exported {} references to {}",
        catalog.len(),
        output.display()
    );

    Ok(())
}

fn run_build(
    input_dir: &PathBuf,
    output: Option<&PathBuf>,
    append_to: Option<&PathBuf>,
    verbose: bool,
) -> anyhow::Result<()> {
    let built = TextCatalog::load_from_dir(input_dir)
        .with_context(|| format!("Failed to build catalog from {}", input_dir.display()))?;

    let mut catalog = match append_to {
        Some(path) => TextCatalog::load_from_file(path)?,
        None => TextCatalog::new(),
    };

    for reference in built.references {
        if verbose {
            eprintln!("Adding reference '{}'", reference.name);
        }
        catalog.add_reference(reference)?;
    }

    let json = catalog.to_json()?;

    // Appending without --output rewrites the existing catalog
    match output.or(append_to) {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!(
                "Wrote catalog with {} references to {}",
                catalog.len(),
                path.display()
            );
        }
        None => println!("{json}"),
    }

    Ok(())
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}
