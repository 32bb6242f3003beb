//! Development harness: expands a planner-item JSON file over a date window
//! and prints one line per occurrence.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use kairos_core::config::load_config;
use kairos_recur::{DateWindow, PlannerItem, expand_occurrences};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = load_config()?;
    let filter =
        EnvFilter::try_new(config.logging.level.as_str()).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut args = std::env::args().skip(1);
    let (Some(path), Some(start), Some(end)) = (args.next(), args.next(), args.next()) else {
        eprintln!("usage: expand_item <item.json> <start YYYY-MM-DD> <end YYYY-MM-DD>");
        std::process::exit(2);
    };

    let raw = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
    let item: PlannerItem =
        serde_json::from_str(&raw).with_context(|| format!("parsing item record {path}"))?;

    let start: NaiveDate = start.parse().context("parsing window start")?;
    let end: NaiveDate = end.parse().context("parsing window end")?;
    let window = DateWindow::new(start, end)?;

    let occurrences = expand_occurrences(&item, window);
    tracing::info!(item_id = %item.id, count = occurrences.len(), "expanded");

    for occurrence in &occurrences {
        println!(
            "{}  {}  {}",
            occurrence.occurrence_id, occurrence.occurrence_date, occurrence.detail.title
        );
    }

    Ok(())
}
