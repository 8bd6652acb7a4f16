//! Linkmap main entry point
//!
//! Command-line interface for the single-domain link graph crawler.

use anyhow::Context;
use clap::Parser;
use linkmap::config::CrawlConfig;
use linkmap::crawler::run_crawl;
use linkmap::output::write_graph;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Linkmap: a single-domain link graph crawler
///
/// Crawls a website from a starting URL up to a maximum depth, staying
/// within the starting domain, and writes the resulting URL graph as JSON.
#[derive(Parser, Debug)]
#[command(name = "linkmap")]
#[command(version)]
#[command(about = "Maps the link graph reachable from a starting URL", long_about = None)]
struct Cli {
    /// The URL to start crawling from, scheme included (e.g. https://example.com)
    #[arg(long)]
    domain: String,

    /// Maximum depth to crawl from the starting URL
    #[arg(long, default_value_t = 1)]
    max_depth: u32,

    /// Maximum number of concurrent requests
    #[arg(long, default_value_t = 10)]
    concurrency: usize,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,

    /// Where to write the resulting URL graph
    #[arg(long, default_value = "url_graph.json")]
    output: PathBuf,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = CrawlConfig {
        start_url: cli.domain,
        max_depth: cli.max_depth,
        concurrency: cli.concurrency,
        fetch_timeout: Duration::from_secs(cli.timeout_secs),
        output_path: cli.output,
    };

    let output_path = config.output_path.clone();
    let outcome = run_crawl(config).await.context("crawl failed")?;

    write_graph(&outcome.graph, &output_path)
        .with_context(|| format!("failed to write graph to {}", output_path.display()))?;
    tracing::info!(path = %output_path.display(), "url graph written");

    Ok(())
}

/// Sets up the tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("linkmap=info,warn"),
            1 => EnvFilter::new("linkmap=debug,info"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
