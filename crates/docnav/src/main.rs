//! docnav CLI - Documentation navigation.
//!
//! Provides commands for:
//! - `slug`: Resolve content identifiers to canonical slugs
//! - `tree`: Print the navigation tree (optionally sidebar-ready)
//! - `pages`: Print the title and prev/next links of a page
//! - `search`: Print search index records
//! - `routes`: Print per-page route parameters

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{PagesArgs, RoutesArgs, SearchArgs, SlugArgs, TreeArgs};
use output::Output;

/// docnav - Documentation navigation.
#[derive(Parser)]
#[command(name = "docnav", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve content identifiers to canonical slugs.
    Slug(SlugArgs),
    /// Print the navigation tree as JSON.
    Tree(TreeArgs),
    /// Print a page's title and its previous/next pages as JSON.
    Pages(PagesArgs),
    /// Print search index records as JSON.
    Search(SearchArgs),
    /// Print route parameters of every non-root page as JSON.
    Routes(RoutesArgs),
}

impl Commands {
    fn verbose(&self) -> bool {
        let common = match self {
            Self::Slug(args) => &args.common,
            Self::Tree(args) => &args.common,
            Self::Pages(args) => &args.common,
            Self::Search(args) => &args.common,
            Self::Routes(args) => &args.common,
        };
        common.verbose
    }
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.command.verbose() {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    // Logs go to stderr so JSON on stdout stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Slug(args) => args.execute(),
        Commands::Tree(args) => args.execute(),
        Commands::Pages(args) => args.execute(),
        Commands::Search(args) => args.execute(),
        Commands::Routes(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
