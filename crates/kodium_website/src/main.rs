//! Builds the Kodium website.

mod config;
mod section;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use kodium::content::ContentLoader;
use kodium::publish::Publisher;
use kodium::storage::DiskStorage;
use kodium::theme::Theme;
use tracing_subscriber::EnvFilter;

use crate::config::load_site;
use crate::section::SectionId;

#[derive(Parser)]
#[command(name = "kodium-website", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the site into the output directory.
    Build(BuildArgs),
}

#[derive(Args)]
struct BuildArgs {
    /// The directory containing `kodium.toml` and `content/`.
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Where to write the published site. Defaults to `<root>/public`.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Log progress at the `info` level.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let verbose = matches!(&cli.command, Commands::Build(args) if args.verbose);

    // --verbose forces INFO, otherwise use RUST_LOG
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Build(args) => build(args),
    }
}

fn build(args: BuildArgs) -> Result<()> {
    let site = load_site(&args.root)?;

    let context = ContentLoader::new(args.root.join("content"))
        .load::<SectionId>(site)
        .context("failed to load content")?;

    let output_path = args.output.unwrap_or_else(|| args.root.join("public"));
    let theme = Theme::kodium();

    let summary = Publisher::new(&theme, &context)
        .publish(&DiskStorage::new(&output_path))
        .context("failed to publish site")?;

    println!(
        "Published {} pages and {} files to {}",
        summary.documents,
        summary.files,
        output_path.display()
    );

    Ok(())
}
