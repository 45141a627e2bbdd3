use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use quote_core::calculations::TimeSavingsCalculator;
use quote_core::calculations::common::{format_currency, format_hours, format_percent};
use quote_core::ServiceCategory;
use quote_data::{PresetLoader, default_presets, presets_by_category};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Print the estimated savings for every calculator preset.
///
/// Presets are read from the bundled table unless `--file` points at a CSV
/// with the columns:
/// id, name, description, service_category, tasks_per_week,
/// minutes_per_task, hourly_rate, coverage, automation_efficiency
#[derive(Parser, Debug)]
#[command(name = "preset-report")]
#[command(version, about, long_about = None)]
struct Args {
    /// CSV file to read presets from instead of the bundled table
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Only report the preset with this id
    #[arg(short, long)]
    preset: Option<String>,

    /// Only report presets for this service (e.g. pc-helpers)
    #[arg(short, long, value_parser = parse_category)]
    category: Option<ServiceCategory>,
}

fn parse_category(s: &str) -> Result<ServiceCategory, String> {
    ServiceCategory::parse(s).ok_or_else(|| format!("unknown service category '{s}'"))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("warn")))
        .without_time()
        .with_target(false)
        .init();

    let args = Args::parse();

    let presets = match &args.file {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open: {}", path.display()))?;
            PresetLoader::load(file)
                .with_context(|| format!("Failed to load presets from: {}", path.display()))?
        }
        None => default_presets().context("Bundled preset table is invalid")?,
    };
    debug!(count = presets.len(), "loaded presets");

    let calculator = TimeSavingsCalculator::new();
    let mut reported = 0;

    let selected = match args.category {
        Some(category) => presets_by_category(&presets, category),
        None => presets.iter().collect(),
    };

    for preset in selected
        .into_iter()
        .filter(|p| args.preset.as_deref().is_none_or(|id| p.id == id))
    {
        let result = calculator.calculate(&preset.input());
        println!(
            "{:<20} {:<22} saves {:>12}/week  {:>8}/week  {:>9}/year  ({} efficient)",
            preset.id,
            preset.name,
            format_hours(result.weekly_time_saved),
            format_currency(result.weekly_cost_savings),
            format_currency(result.yearly_cost_savings),
            format_percent(result.efficiency),
        );
        reported += 1;
    }

    if reported == 0 {
        anyhow::bail!("no preset matched the given filters");
    }

    Ok(())
}
