//! fz: fuzzy match, score and rank strings from the command line.

mod config;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use config::Config;
use std::io::Read;
use std::path::{Path, PathBuf};
use sundry_cli::output::{format_count, format_score, highlight, Status};
use sundry_search::{fuzzy_match_scored, rank, search_string, RankOptions};
use sundry_telemetry::{TelemetryConfig, Timer};

#[derive(Parser)]
#[command(name = "fz")]
#[command(about = "Fuzzy subsequence matching and ranking")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to a config file (defaults to .fz.toml, fz.toml or .config/fz.toml)
    #[arg(long, global = true, env = "FZ_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Match a pattern against one candidate and show the score
    Match {
        /// Characters to look for, in order
        pattern: String,
        /// String to search in
        candidate: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Word-aggregated score of a pattern against a candidate
    Search {
        /// Words to look for
        pattern: String,
        /// Words to search in
        candidate: String,
    },

    /// Rank candidate lines from a file or stdin
    Rank {
        /// Words to look for
        pattern: String,
        /// Read candidates from this file instead of stdin
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// Maximum number of results
        #[arg(short, long)]
        limit: Option<usize>,
        /// Only show candidates scoring above this
        #[arg(long, allow_negative_numbers = true)]
        min_score: Option<i64>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;

    let level = if cli.verbose {
        "debug".to_string()
    } else {
        config.schema.log.level.clone()
    };
    sundry_telemetry::init_with_config(TelemetryConfig::with_level(level))?;

    if let Some(path) = &config.path {
        tracing::debug!(path = %path.display(), "Loaded config file");
    }

    match cli.command {
        Commands::Match { pattern, candidate, json } => {
            let result = fuzzy_match_scored(&candidate, &pattern);
            tracing::debug!(is_match = result.is_match, score = result.score, "Matched");

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else if result.is_match {
                Status::success(&format!("match (score {})", result.score));
                println!("{}", highlight(&candidate, &result.matched_indices));
            } else {
                Status::error(&format!("no match (partial score {})", result.score));
            }

            if !result.is_match {
                std::process::exit(1);
            }
        }

        Commands::Search { pattern, candidate } => {
            println!("{}", search_string(&candidate, &pattern));
        }

        Commands::Rank { pattern, file, limit, min_score, json } => {
            let lines = read_candidates(file.as_deref())?;

            let options = RankOptions {
                min_score: min_score.unwrap_or(config.schema.rank.min_score),
                max_results: limit.or(config.schema.rank.limit),
            };

            let timer = Timer::start("rank");
            let results = rank(&lines, &pattern, &options);
            timer.stop();

            tracing::info!(
                candidates = lines.len(),
                results = results.len(),
                "Ranked {}",
                format_count(lines.len(), "candidate", "candidates")
            );

            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else if results.is_empty() {
                Status::warning("no candidates matched");
            } else {
                for result in &results {
                    println!("{}  {}", format_score(result.score), result.item);
                }
            }
        }
    }

    Ok(())
}

/// Read non-blank candidate lines from `path`, or stdin when absent
fn read_candidates(path: Option<&Path>) -> Result<Vec<String>> {
    let content = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read candidates from stdin")?;
            buf
        }
    };

    Ok(content
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.trim().is_empty())
        .map(String::from)
        .collect())
}
