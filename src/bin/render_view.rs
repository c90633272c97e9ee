//! Render a single dashboard view as JSON on stdout.
//!
//! Generates a fresh portfolio (seeded with `--seed` for reproducible
//! output), computes the requested view, and prints the derived rows.

use anyhow::Context;
use chrono::Utc;
use clap::{Parser, ValueEnum};
use rand::{SeedableRng, rngs::StdRng};

use estate_dashboard::config::MockDataConfig;
use estate_dashboard::mock;
use estate_dashboard::views::{self, PropertyFilter};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ViewName {
    Overview,
    Properties,
    Tenants,
    Financial,
    Occupancy,
    Maintenance,
}

#[derive(Debug, Parser)]
#[command(name = "render-view", about = "Compute one dashboard view over a generated portfolio")]
struct Cli {
    /// Which view to compute
    #[arg(long, value_enum)]
    view: ViewName,

    /// Comma-separated property types to include (Properties view)
    #[arg(long)]
    types: Option<String>,

    /// Comma-separated property statuses to include (Properties view)
    #[arg(long)]
    statuses: Option<String>,

    /// Trailing window in days, 7..=365 (Financial view)
    #[arg(long, default_value_t = views::LOOKBACK_DAYS_DEFAULT)]
    lookback_days: u32,

    /// Seed for the random source; omit for entropy seeding
    #[arg(long)]
    seed: Option<u64>,

    /// Rows generated per table
    #[arg(long, default_value_t = 5)]
    rows: usize,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = MockDataConfig {
        rows_per_table: cli.rows,
    };
    config.validate()?;

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let now = Utc::now();
    let portfolio = mock::generate(&mut rng, now, &config);

    let report = match cli.view {
        ViewName::Overview => serde_json::to_value(views::overview(&portfolio))?,
        ViewName::Properties => {
            let filter = PropertyFilter {
                types: parse_csv(cli.types.as_deref()).context("invalid --types value")?,
                statuses: parse_csv(cli.statuses.as_deref()).context("invalid --statuses value")?,
            };
            serde_json::to_value(views::properties(&portfolio, &filter, now))?
        }
        ViewName::Tenants => serde_json::to_value(views::tenants(&portfolio))?,
        ViewName::Financial => {
            if !(views::LOOKBACK_DAYS_MIN..=views::LOOKBACK_DAYS_MAX).contains(&cli.lookback_days) {
                anyhow::bail!(
                    "--lookback-days must be between {} and {}",
                    views::LOOKBACK_DAYS_MIN,
                    views::LOOKBACK_DAYS_MAX
                );
            }
            serde_json::to_value(views::financial(&portfolio, cli.lookback_days, now))?
        }
        ViewName::Occupancy => serde_json::to_value(views::occupancy(&portfolio, now, &mut rng))?,
        ViewName::Maintenance => serde_json::to_value(views::maintenance(&portfolio))?,
    };

    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{rendered}");

    Ok(())
}

fn parse_csv<T: std::str::FromStr>(raw: Option<&str>) -> anyhow::Result<Option<Vec<T>>>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let Some(raw) = raw else {
        return Ok(None);
    };
    raw.split(',')
        .filter(|part| !part.trim().is_empty())
        .map(|part| part.parse::<T>().map_err(anyhow::Error::from))
        .collect::<anyhow::Result<Vec<T>>>()
        .map(Some)
}
