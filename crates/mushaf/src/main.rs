//! Mushaf - command-line browser for the Quran Foundation content API
//!
//! Main entry point for the mushaf CLI.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod client;
mod commands;

use commands::{chapters, search, serve, verse, verses};

// ─────────────────────────────────────────────────────────────────────────────
// CLI Structure
// ─────────────────────────────────────────────────────────────────────────────

/// Mushaf - browse chapters, verses and search results from the Quran Foundation content API
#[derive(Parser)]
#[command(name = "mushaf")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output as JSON (for scripting)
    #[arg(long, global = true)]
    pub json: bool,

    /// User config directory (default: platform config dir)
    #[arg(long, global = true, env = "MUSHAF_CONFIG_DIR")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all chapters
    Chapters(chapters::ChaptersArgs),

    /// List the verses of a chapter, one page at a time
    Verses(verses::VersesArgs),

    /// Show a single verse by key (e.g. 2:255)
    Verse(verse::VerseArgs),

    /// Search verses
    Search(search::SearchArgs),

    /// Serve the JSON API
    Serve(serve::ServeArgs),
}

// ─────────────────────────────────────────────────────────────────────────────
// Main
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Console on stderr keeps --json output clean; full detail goes to the file
    let filter = if cli.verbose {
        "mushaf=debug,mushaf_client=debug,mushaf_auth=debug,mushaf_server=debug,tower_http=debug,info"
    } else {
        "mushaf=info,mushaf_server=info,warn"
    };

    let log_dir = cli
        .config
        .clone()
        .or_else(mushaf_config::xdg_config_dir)
        .map(|d| d.join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"));
    let file_appender = tracing_appender::rolling::daily(&log_dir, "mushaf.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    use tracing_subscriber::prelude::*;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr)
                .with_filter(tracing_subscriber::EnvFilter::new(filter)),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(non_blocking)
                .with_filter(tracing_subscriber::EnvFilter::new(
                    "mushaf=trace,mushaf_client=trace,mushaf_auth=trace,mushaf_server=trace,mushaf_config=trace,tower_http=debug,info",
                )),
        )
        .init();

    let ctx = commands::Context {
        json_output: cli.json,
        verbose: cli.verbose,
        config_dir: cli.config,
    };

    match cli.command {
        Commands::Chapters(args) => chapters::run(args, &ctx).await,
        Commands::Verses(args) => verses::run(args, &ctx).await,
        Commands::Verse(args) => verse::run(args, &ctx).await,
        Commands::Search(args) => search::run(args, &ctx).await,
        Commands::Serve(args) => serve::run(args, &ctx).await,
    }
}
