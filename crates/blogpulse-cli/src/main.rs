mod commands;
mod input;

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use blogpulse_core::{Environment, MAX_FORECAST_HORIZON};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "blogpulse")]
#[command(about = "Score blog content, leads, trends and ROI from JSON input")]
struct Cli {
    /// JSON input file; standard input when omitted
    #[arg(long, global = true)]
    input: Option<PathBuf>,

    /// YAML rules file overriding the built-in scoring vocabularies
    #[arg(long, global = true)]
    rules: Option<PathBuf>,

    /// Pretty-print the JSON result
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Analyse one post for on-page SEO
    Seo,
    /// Score one lead profile or an array of them
    Lead {
        /// Reference time for activity recency (RFC 3339); defaults to now
        #[arg(long)]
        as_of: Option<DateTime<Utc>>,
    },
    /// Analyse a time series of metric observations
    Trend {
        /// Number of daily forecast points (at most 365)
        #[arg(long, value_parser = parse_horizon)]
        horizon: Option<usize>,
    },
    /// Calculate ROI for one post
    Roi,
    /// Calculate ROI across an array of posts
    Portfolio,
    /// Period-over-period ROI movement
    RoiTrend,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let config = blogpulse_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    let plain = plain_logs(&config.env);
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(!plain)
        .with_target(!plain)
        .init();
    tracing::debug!(env = %config.env, "configuration loaded");

    let Some(command) = cli.command else {
        println!("blogpulse: no command given; see --help");
        return Ok(());
    };

    let rules_path = cli.rules.as_deref().or(config.rules_path.as_deref());
    let rules = match rules_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading scoring rules");
            blogpulse_core::load_rules(path)?
        }
        None => blogpulse_core::RulesFile::default(),
    };

    let raw = input::read_input(cli.input.as_deref())?;
    let output = match command {
        Commands::Seo => commands::run_seo(rules.seo, &raw)?,
        Commands::Lead { as_of } => {
            commands::run_lead(rules.lead_scoring, &raw, as_of.unwrap_or_else(Utc::now))?
        }
        Commands::Trend { horizon } => commands::run_trend(&config, horizon, &raw)?,
        Commands::Roi => commands::run_roi(&config, &raw)?,
        Commands::Portfolio => commands::run_portfolio(&config, &raw)?,
        Commands::RoiTrend => commands::run_roi_trend(&config, &raw)?,
    };

    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{rendered}");

    Ok(())
}

/// Production logs are collected rather than read on a terminal, so they
/// drop colour codes and module targets.
fn plain_logs(env: &Environment) -> bool {
    matches!(env, Environment::Production)
}

fn parse_horizon(raw: &str) -> Result<usize, String> {
    let days: usize = raw.parse().map_err(|e: std::num::ParseIntError| e.to_string())?;
    if days > MAX_FORECAST_HORIZON {
        return Err(format!("must be at most {MAX_FORECAST_HORIZON} days"));
    }
    Ok(days)
}
