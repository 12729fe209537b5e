//! Email Harvester main entry point
//!
//! This is the command-line interface for the Email Harvester crawler.

use anyhow::Context;
use clap::Parser;
use email_harvester::config::{load_config, parse_keywords, validate, Config};
use email_harvester::crawler::run_harvest;
use email_harvester::output::{print_summary, TracingReporter};
use email_harvester::search::owned_pages;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Email Harvester: collects email addresses reachable from search results
///
/// Each search result is crawled depth-first within the target domain
/// suffix. Accepted addresses are appended to the result file, one per line.
#[derive(Parser, Debug)]
#[command(name = "email-harvester")]
#[command(version)]
#[command(about = "Collects email addresses reachable from search results", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show the page plan without crawling
    #[arg(long)]
    dry_run: bool,

    /// Override the search query
    #[arg(long)]
    query: Option<String>,

    /// Override the comma-separated keyword list (empty accepts all)
    #[arg(long)]
    keywords: Option<String>,

    /// Override the target domain suffix (e.g. ".org")
    #[arg(long)]
    tld: Option<String>,

    /// Override the number of search result pages to cover
    #[arg(long)]
    pages: Option<u32>,

    /// Override the result file path
    #[arg(long, value_name = "PATH")]
    output: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let mut config = load_config(&cli.config)
        .with_context(|| format!("Failed to load configuration from {}", cli.config.display()))?;

    apply_overrides(&mut config, &cli);
    validate(&config).context("Invalid configuration after command-line overrides")?;

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    let summary = run_harvest(&config, Arc::new(TracingReporter))
        .await
        .context("Harvest failed to start")?;

    if !cli.quiet {
        print_summary(&summary);
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("email_harvester=info,warn"),
            1 => EnvFilter::new("email_harvester=debug,info"),
            2 => EnvFilter::new("email_harvester=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(query) = &cli.query {
        config.search.query = query.clone();
    }
    if let Some(keywords) = &cli.keywords {
        config.crawler.keywords = keywords.clone();
    }
    if let Some(tld) = &cli.tld {
        config.crawler.target_tld = tld.clone();
    }
    if let Some(pages) = cli.pages {
        config.search.total_pages = pages;
    }
    if let Some(output) = &cli.output {
        config.output.result_path = output.clone();
    }
}

/// Handles the --dry-run mode: shows what would be crawled
fn handle_dry_run(config: &Config) {
    println!("=== Email Harvester Dry Run ===\n");

    println!("Search:");
    println!("  Endpoint: {}", config.search.endpoint);
    println!("  Query: {}", config.search.query);
    println!("  Total pages: {}", config.search.total_pages);

    println!("\nCrawler:");
    println!("  Target suffix: {}", config.crawler.target_tld);
    println!("  Workers: {}", config.crawler.worker_count);
    println!("  Max depth: {}", config.crawler.max_depth);
    println!("  Request delay: {}ms", config.crawler.request_delay_ms);
    println!("  Fetch timeout: {}s", config.crawler.fetch_timeout_secs);
    println!(
        "  Excluded extensions: {}",
        config.crawler.excluded_extensions.join(", ")
    );

    let keywords = parse_keywords(&config.crawler.keywords);
    if keywords.is_empty() {
        println!("  Keywords: (none, all addresses accepted)");
    } else {
        println!("  Keywords: {}", keywords.join(", "));
    }

    println!("\nOutput:");
    println!("  Result file: {}", config.output.result_path);

    println!("\nPage plan:");
    let workers = config.crawler.worker_count as usize;
    for worker_id in 1..=workers {
        let pages = owned_pages(worker_id, workers, config.search.total_pages);
        let pages: Vec<String> = pages.iter().map(u32::to_string).collect();
        println!("  Worker {}: pages [{}]", worker_id, pages.join(", "));
    }

    println!("\n✓ Configuration is valid");
}
