//! mailsweep main entry point
//!
//! Runs non-interactively when any argument is given, otherwise walks the
//! user through an interactive setup.

use anyhow::{Context, Result};
use clap::Parser;
use mailsweep::config::{load_config_or_default, validate, Config};
use mailsweep::crawler::collect;
use mailsweep::interactive::Prompter;
use mailsweep::output::{print_summary, save_results};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Collect emails from web search results
///
/// Searches the web for QUERY, visits up to a few pages per site with a
/// random pause between requests, and writes every email address found on
/// those pages to a CSV file.
#[derive(Parser, Debug)]
#[command(name = "mailsweep")]
#[command(version)]
#[command(about = "Collect emails from web search results", long_about = None)]
struct Cli {
    /// Search query
    #[arg(value_name = "QUERY")]
    query: String,

    /// Number of search results to process (default: 10)
    #[arg(short, long, value_name = "N")]
    results: Option<usize>,

    /// Output CSV file (default: collected_emails.csv)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Delay range between requests in seconds (default: 1 3)
    #[arg(short, long, num_args = 2, value_names = ["MIN", "MAX"])]
    delay: Option<Vec<f64>>,

    /// Maximum pages per domain (default: 3)
    #[arg(short, long, value_name = "N")]
    max_pages: Option<u32>,

    /// Path to a TOML configuration file supplying defaults
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error log output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let interactive = std::env::args_os().len() <= 1;

    let outcome = tokio::select! {
        outcome = run(interactive) => outcome,
        _ = tokio::signal::ctrl_c() => {
            println!("\n\nOperation cancelled by user.");
            // A pending stdin read would keep the runtime from shutting down
            std::process::exit(130);
        }
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if interactive {
                println!("\nAn error occurred: {:#}", e);
            } else {
                eprintln!("Error: {:#}", e);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(interactive: bool) -> Result<()> {
    if interactive {
        setup_logging(0, false);
        handle_interactive().await
    } else {
        let cli = Cli::parse();
        setup_logging(cli.verbose, cli.quiet);
        handle_batch(cli).await
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("mailsweep=info,warn"),
            1 => EnvFilter::new("mailsweep=debug,info"),
            2 => EnvFilter::new("mailsweep=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Applies command-line overrides on top of the file or default config
fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = load_config_or_default(cli.config.as_deref()).with_context(|| {
        format!(
            "Failed to load configuration{}",
            cli.config
                .as_deref()
                .map(|p| format!(" from {}", p.display()))
                .unwrap_or_default()
        )
    })?;

    if let Some(results) = cli.results {
        config.crawl.results = results;
    }
    if let Some(max_pages) = cli.max_pages {
        config.crawl.max_pages_per_domain = max_pages;
    }
    if let Some([min, max]) = cli.delay.as_deref() {
        config.crawl.delay_min = *min;
        config.crawl.delay_max = *max;
    }
    if let Some(output) = &cli.output {
        config.output.path = output.to_string_lossy().into_owned();
    }

    validate(&config).context("Invalid arguments")?;
    Ok(config)
}

/// Handles the non-interactive mode: one query from the command line
async fn handle_batch(cli: Cli) -> Result<()> {
    let config = resolve_config(&cli)?;
    let delay = config.crawl.delay_range()?;

    let results = collect(
        &config,
        &cli.query,
        config.crawl.results,
        config.crawl.max_pages_per_domain,
        delay,
    )
    .await?;

    if results.is_empty() {
        println!("No emails found.");
        return Ok(());
    }

    let output = Path::new(&config.output.path);
    save_results(&results, output)
        .with_context(|| format!("Failed to save results to {}", output.display()))?;
    print_summary(&results);

    Ok(())
}

/// Handles the interactive mode: prompts, confirmation, then one collection
async fn handle_interactive() -> Result<()> {
    let config = Config::default();

    let defaults = config.clone();
    let settings = tokio::task::spawn_blocking(move || {
        let stdin = std::io::stdin();
        Prompter::new(stdin.lock(), std::io::stdout()).run(&defaults)
    })
    .await
    .context("Prompt task failed")??;

    let Some(settings) = settings else {
        println!("Operation cancelled.");
        return Ok(());
    };

    println!("\nStarting email collection...");

    let results = collect(
        &config,
        &settings.query,
        settings.num_results,
        config.crawl.max_pages_per_domain,
        settings.delay,
    )
    .await?;

    if results.is_empty() {
        println!("\nNo emails found with the given search query.");
        println!("Try refining your search terms or using different keywords.");
        return Ok(());
    }

    let output = Path::new(&settings.output_path);
    save_results(&results, output)
        .with_context(|| format!("Failed to save results to {}", output.display()))?;
    print_summary(&results);
    println!("\nResults have been saved to: {}", output.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("mailsweep").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults_when_only_query_given() {
        let config = resolve_config(&parse(&["dentists"])).unwrap();
        assert_eq!(config.crawl.results, 10);
        assert_eq!(config.crawl.max_pages_per_domain, 3);
        assert_eq!(config.crawl.delay_min, 1.0);
        assert_eq!(config.crawl.delay_max, 3.0);
        assert_eq!(config.output.path, "collected_emails.csv");
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = parse(&["q", "-r", "20", "-o", "x.csv", "-d", "0.5", "1.5", "-m", "1"]);
        let config = resolve_config(&cli).unwrap();
        assert_eq!(config.crawl.results, 20);
        assert_eq!(config.output.path, "x.csv");
        assert_eq!(config.crawl.delay_min, 0.5);
        assert_eq!(config.crawl.delay_max, 1.5);
        assert_eq!(config.crawl.max_pages_per_domain, 1);
    }

    #[test]
    fn test_long_flags() {
        let cli = parse(&["q", "--results", "5", "--max-pages", "2", "--delay", "0", "0"]);
        assert_eq!(cli.results, Some(5));
        assert_eq!(cli.max_pages, Some(2));
        assert_eq!(cli.delay, Some(vec![0.0, 0.0]));
    }

    #[test]
    fn test_inverted_delay_is_rejected() {
        let cli = parse(&["q", "-d", "3", "1"]);
        assert!(resolve_config(&cli).is_err());
    }

    #[test]
    fn test_oversized_delay_is_rejected() {
        let cli = parse(&["q", "-d", "1e300", "1e300"]);
        assert!(resolve_config(&cli).is_err());
    }

    #[test]
    fn test_delay_needs_two_values() {
        let result = Cli::try_parse_from(["mailsweep", "q", "-d", "1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_query_is_required() {
        assert!(Cli::try_parse_from(["mailsweep", "-r", "5"]).is_err());
    }
}
