//! Noveldex command-line interface
//!
//! Searches the catalog for a free-text term and prints the first match.

use clap::Parser;
use noveldex::config::SearchOptions;
use noveldex::output::format_novel;
use noveldex::Noveldex;
use tracing_subscriber::EnvFilter;

/// Search the Novel Updates catalog and print the first match
#[derive(Parser, Debug)]
#[command(name = "noveldex")]
#[command(version)]
#[command(about = "Search the Novel Updates catalog", long_about = None)]
struct Cli {
    /// Search term; multiple words are joined with spaces
    #[arg(required = true, value_name = "TERM")]
    term: Vec<String>,

    /// Maximum results collected per results page (0 = unlimited)
    #[arg(short = 'n', long, default_value_t = 1)]
    max_results: u32,

    /// Seconds to pause at each politeness stop
    #[arg(long, default_value_t = 7.0)]
    sleep_time: f64,

    /// Number of fetches between politeness pauses
    #[arg(long, default_value_t = 4)]
    interval: i32,

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

    let term = cli.term.join(" ").trim().to_string();
    let options = SearchOptions::new()
        .with_max_results(cli.max_results)
        .with_sleep_time(cli.sleep_time)
        .with_interval(cli.interval);

    println!("Searching for {term} ...");

    let crawler = Noveldex::new()?;
    let outcome = crawler.search(&term, &options).await;
    crawler.close();

    match outcome {
        Ok(results) => match results.first() {
            Some(novel) => println!("{}", format_novel(novel)),
            None => println!("Failed to find results for {term}"),
        },
        Err(e) => {
            tracing::error!("search failed: {e}");
            return Err(e.into());
        }
    }

    Ok(())
}

/// Sets up the tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("noveldex=info,warn"),
            1 => EnvFilter::new("noveldex=debug,info"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
