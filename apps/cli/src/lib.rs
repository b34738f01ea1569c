//! `ksrs`: command-line access to the KSRS study core.
//!
//! Output is JSON on stdout; logs go to stderr.

pub mod commands;
pub mod config;
pub mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::check::CheckArgs;
use crate::commands::review::{PreviewArgs, ReviewArgs};
use crate::commands::score::{RankArgs, ScoreArgs};
use crate::config::AppConfig;

#[derive(Debug, Parser)]
#[command(name = "ksrs", version, about = "Korean spaced-repetition study tools")]
pub struct Cli {
    /// Scoring override file; takes precedence over KSRS_SCORING_CONFIG.
    #[arg(long, global = true)]
    pub scoring_config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Apply a rating to a card and print its next scheduling state.
    Review(ReviewArgs),
    /// Show the interval each rating would produce.
    Preview(PreviewArgs),
    /// Grade a typed answer against the expected one.
    Check(CheckArgs),
    /// Compute the usefulness score of one card.
    Score(ScoreArgs),
    /// Order a batch of new cards by usefulness.
    Rank(RankArgs),
}

pub fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mut config = AppConfig::from_env();
    if cli.scoring_config.is_some() {
        config.scoring_config_path = cli.scoring_config;
    }

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match &cli.command {
        Command::Review(args) => print_json(&commands::review::review(args)?),
        Command::Preview(args) => print_json(&commands::review::preview(args)?),
        Command::Check(args) => print_json(&commands::check::check(args)),
        Command::Score(args) => print_json(&commands::score::score(args, &config)?),
        Command::Rank(args) => print_json(&commands::score::rank(args, &config)?),
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
