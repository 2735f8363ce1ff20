//! League Draw CLI
//!
//! Splits the configured teams into region-balanced leagues and prints a
//! cross-region match list for each league.

#[cfg(feature = "cli")]
use anyhow::Result;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "league_draw")]
#[command(about = "Draw region-balanced leagues and cross-region match lists", long_about = None)]
struct Cli {
    /// Increase log detail (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Run the draw until a valid configuration is found
    Run {
        /// Seed for a reproducible draw (random when omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// JSON config file (built-in configuration when omitted)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Give up after this many attempts (unbounded when omitted)
        #[arg(long)]
        max_attempts: Option<u64>,

        /// Print the result as JSON; progress goes to stderr
        #[arg(long, default_value = "false")]
        json: bool,

        /// Re-check every invariant of the accepted draw
        #[arg(long, default_value = "false")]
        verify: bool,
    },

    /// Print the built-in configuration as JSON
    DefaultConfig,
}

#[cfg(feature = "cli")]
fn init_logging(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        match verbose {
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("info"),
            _ => EnvFilter::new("debug"),
        }
    };
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    use league_cli::{load_config, run_draw, ConsoleNarrator, DrawEnvelope, DrawOptions};

    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Run { seed, config, max_attempts, json, verify } => {
            let config = load_config(config.as_deref())?;
            let seed = seed.unwrap_or_else(rand::random);
            let options = DrawOptions { seed, max_attempts };

            let summary = if json {
                run_draw(&config, &options, &mut ConsoleNarrator::new(std::io::stderr()))?
            } else {
                println!("Starting the league draw (seed {})", seed);
                run_draw(&config, &options, &mut ConsoleNarrator::new(std::io::stdout()))?
            };

            if json {
                let envelope = DrawEnvelope::new(&summary, &config);
                println!("{}", serde_json::to_string_pretty(&envelope)?);
            } else {
                println!("========================================");
                println!("{}", summary.text);
                println!("========================================");
            }

            if verify {
                verify_draw(&summary)?;
            }
        }

        Commands::DefaultConfig => {
            let config = league_core::TournamentConfig::default();
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn verify_draw(summary: &league_cli::DrawSummary) -> Result<()> {
    if summary.violations.is_empty() {
        eprintln!("Verification passed: every invariant holds");
        return Ok(());
    }

    for violation in &summary.violations {
        eprintln!("  - {}", violation);
    }
    anyhow::bail!("Verification failed: {} violation(s)", summary.violations.len())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("league_draw CLI is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
