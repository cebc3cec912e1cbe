//! Draft Tester CLI Tool
//!
//! Command-line harness for trying the draft engine and rating updates
//! against roster files.
//!
//! Usage:
//!   cargo run --bin draft-tester -- --help
//!   cargo run --bin draft-tester draft --roster roster.json --courts 2 --team-size 6
//!   cargo run --bin draft-tester draft --roster roster.json --courts 1 --team-size 4 --positions --groups groups.json
//!   cargo run --bin draft-tester rate --rating 1500 --team-average 1520 --opponent-average 1480 --won

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use court_draft::config::AppConfig;
use court_draft::draft::{DraftRequest, MatchEngine};
use court_draft::rating::{EloRatingCalculator, RatingCalculator};
use court_draft::types::{PlayerGroup, PlayerRecord};
use serde::de::DeserializeOwned;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "draft-tester")]
#[command(about = "Try court drafts and rating updates from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path (TOML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override log level (trace, debug, info, warn, error)
    #[arg(short, long, value_name = "LEVEL")]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Draft a roster onto courts and print the outcome as JSON
    Draft {
        /// JSON file holding an array of player records
        #[arg(short, long)]
        roster: PathBuf,
        /// Number of courts
        #[arg(long, default_value = "1")]
        courts: usize,
        /// Players per side
        #[arg(short, long, default_value = "6")]
        team_size: usize,
        /// Spread positions evenly across sides
        #[arg(long)]
        positions: bool,
        /// JSON file holding an array of player groups
        #[arg(short, long)]
        groups: Option<PathBuf>,
    },
    /// Compute a single rating delta
    Rate {
        /// Player rating before the match
        #[arg(short, long, default_value = "1500")]
        rating: i32,
        /// Average rating of the player's team
        #[arg(long)]
        team_average: f64,
        /// Average rating of the opposing team
        #[arg(long)]
        opponent_average: f64,
        /// The player's team won
        #[arg(long)]
        won: bool,
    },
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

fn load_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::from_env()?,
    };

    if let Some(log_level) = &cli.log_level {
        config.service.log_level = log_level.clone();
    }

    Ok(config)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Invalid JSON in {}", path.display()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    init_logging(&config.service.log_level)?;

    match cli.command {
        Commands::Draft {
            roster,
            courts,
            team_size,
            positions,
            groups,
        } => {
            let roster: Vec<PlayerRecord> = read_json(&roster)?;
            let groups: Vec<PlayerGroup> = match groups {
                Some(path) => read_json(&path)?,
                None => Vec::new(),
            };
            info!(
                "Drafting {} players onto {} courts of {}v{}",
                roster.len(),
                courts,
                team_size,
                team_size
            );

            let engine = MatchEngine::new(config.matchmaking)?;
            let outcome = engine.draft(&DraftRequest {
                roster,
                court_count: courts,
                team_size,
                balance_positions: positions,
                groups,
            })?;

            for warning in outcome.warnings() {
                warn!("{}", warning);
            }
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
        Commands::Rate {
            rating,
            team_average,
            opponent_average,
            won,
        } => {
            let calculator = EloRatingCalculator::new(config.rating)?;
            let delta = calculator.rating_delta(rating, team_average, opponent_average, won);
            let output = serde_json::json!({
                "rating_before": rating,
                "expected_score": calculator.expected_score(team_average, opponent_average),
                "delta": delta,
                "rating_after": rating.saturating_add(delta),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
