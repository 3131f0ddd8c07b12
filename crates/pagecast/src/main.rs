//! Pagecast CLI - content resolution client for CMS-backed sites.
//!
//! Provides commands for:
//! - `sitemap`: Fetch and print the site hierarchy
//! - `resolve`: Resolve a navigation path to its content model

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{ResolveArgs, SitemapArgs};
use output::Output;

/// Pagecast - CMS content resolution client.
#[derive(Parser)]
#[command(name = "pagecast", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch and print the site hierarchy.
    Sitemap(SitemapArgs),
    /// Resolve a navigation path to its content model.
    Resolve(ResolveArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let verbose = match &cli.command {
        Commands::Sitemap(args) => args.common.verbose,
        Commands::Resolve(args) => args.common.verbose,
    };

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
    let result = match cli.command {
        Commands::Sitemap(args) => rt.block_on(args.execute(&output)),
        Commands::Resolve(args) => rt.block_on(args.execute(&output)),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
