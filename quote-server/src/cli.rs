//! Command-line interface: run the server or answer one question offline.

use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use quote_core::calculations::common::{format_currency, format_hours, format_percent};
use quote_core::calculations::{QuoteEngine, TimeSavingsCalculator};
use quote_core::{CalculatorPreset, PriceSchedule, QuoteRequest, TimeSavingsInput};
use quote_data::{PresetLoader, default_presets, find_preset};
use rust_decimal::Decimal;

use crate::utils::parse_decimal;

/// Pricing and time-savings service for custom automation scripts.
#[derive(Debug, Parser)]
#[command(name = "quote-server", version, about)]
pub struct Cli {
    /// Log filter, either a level ("debug") or directives ("info,quote_core=trace").
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Also append logs to this file.
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve the HTTP API.
    Serve(ServeArgs),
    /// Price a script and print the quote.
    Quote(QuoteArgs),
    /// Estimate the savings of automating a task.
    Savings(SavingsArgs),
}

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// TOML config file. Defaults to ./quote-server.toml when present.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Address to bind, overriding the config file.
    #[arg(long)]
    pub bind: Option<String>,

    /// Port to listen on, overriding the config file.
    #[arg(short, long)]
    pub port: Option<u16>,
}

#[derive(Debug, Args)]
pub struct QuoteArgs {
    /// TOML config file whose [pricing] table is used.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// python, powershell, bash or nodejs
    #[arg(short, long)]
    pub language: String,

    /// Target operating systems, comma separated (windows,macos,linux).
    #[arg(long, value_delimiter = ',', required = true)]
    pub os: Vec<String>,

    #[arg(long)]
    pub packaging: bool,

    #[arg(long)]
    pub network: bool,

    #[arg(long)]
    pub scheduler: bool,
}

/// Either `--hours`, `--tasks` with `--minutes`, or `--preset`.
#[derive(Debug, Args)]
pub struct SavingsArgs {
    /// Hours per week spent on the task.
    #[arg(long, value_parser = parse_decimal, conflicts_with_all = ["tasks", "minutes", "preset"])]
    pub hours: Option<Decimal>,

    /// Times per week the task is performed.
    #[arg(long, value_parser = parse_decimal, requires = "minutes", conflicts_with = "preset")]
    pub tasks: Option<Decimal>,

    /// Minutes each task takes.
    #[arg(long, value_parser = parse_decimal, requires = "tasks")]
    pub minutes: Option<Decimal>,

    /// Hourly cost of the person doing the task.
    #[arg(long, value_parser = parse_decimal)]
    pub rate: Option<Decimal>,

    /// Share of the task the script can take over (0-1).
    #[arg(long, value_parser = parse_decimal)]
    pub coverage: Option<Decimal>,

    /// Share of covered time actually saved (0-1).
    #[arg(long, value_parser = parse_decimal)]
    pub efficiency: Option<Decimal>,

    /// Use a calculator preset by id.
    #[arg(long)]
    pub preset: Option<String>,

    /// CSV file to read presets from instead of the bundled table.
    #[arg(long, requires = "preset")]
    pub presets_file: Option<PathBuf>,
}

pub fn run_quote(
    args: &QuoteArgs,
    schedule: &PriceSchedule,
) -> Result<String> {
    let request = QuoteRequest {
        language: args.language.clone(),
        os: args.os.clone(),
        needs_packaging: args.packaging,
        requires_network: args.network,
        needs_scheduler: args.scheduler,
    }
    .validate()?;

    let quote = QuoteEngine::new(schedule).calculate(&request);
    let breakdown = &quote.breakdown;

    let mut lines = vec![format!("{:<12}{:>10}", "base", cents(breakdown.base))];
    for (label, amount) in [
        ("language", breakdown.language),
        ("os", breakdown.os),
        ("packaging", breakdown.packaging),
        ("network", breakdown.network),
        ("scheduler", breakdown.scheduler),
    ] {
        if amount > 0 {
            lines.push(format!("{label:<12}{:>10}", cents(amount)));
        }
    }
    lines.push(format!("{:<12}{:>10}", "total", cents(quote.quote_cents)));

    Ok(lines.join("\n"))
}

pub fn run_savings(args: &SavingsArgs) -> Result<String> {
    let input = savings_input(args)?;
    input.validate()?;

    let result = TimeSavingsCalculator::new().calculate(&input);

    Ok([
        format!("time saved     {} per week", format_hours(result.weekly_time_saved)),
        format!("weekly         {}", format_currency(result.weekly_cost_savings)),
        format!("monthly        {}", format_currency(result.monthly_cost_savings)),
        format!("yearly         {}", format_currency(result.yearly_cost_savings)),
        format!("efficiency     {}", format_percent(result.efficiency)),
    ]
    .join("\n"))
}

fn savings_input(args: &SavingsArgs) -> Result<TimeSavingsInput> {
    if let Some(id) = &args.preset {
        let preset = load_preset(id, args)?;
        let mut input = preset.input();
        if let TimeSavingsInput::Detailed {
            hourly_rate,
            coverage,
            automation_efficiency,
            ..
        } = &mut input
        {
            *hourly_rate = args.rate.unwrap_or(*hourly_rate);
            *coverage = args.coverage.unwrap_or(*coverage);
            *automation_efficiency = args.efficiency.unwrap_or(*automation_efficiency);
        }
        return Ok(input);
    }

    let rate = args.rate.context("--rate is required unless --preset is given")?;
    match (args.hours, args.tasks, args.minutes) {
        (Some(hours), _, _) => Ok(TimeSavingsInput::from_simple(hours, rate, args.efficiency)),
        (None, Some(tasks), Some(minutes)) => Ok(TimeSavingsInput::from_detailed(
            tasks,
            minutes,
            rate,
            args.coverage,
            args.efficiency,
        )),
        _ => anyhow::bail!("give --hours, --tasks with --minutes, or --preset"),
    }
}

fn load_preset(
    id: &str,
    args: &SavingsArgs,
) -> Result<CalculatorPreset> {
    let presets = match &args.presets_file {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open: {}", path.display()))?;
            PresetLoader::load(file)
                .with_context(|| format!("Failed to load presets from: {}", path.display()))?
        }
        None => default_presets().context("Bundled preset table is invalid")?,
    };

    find_preset(&presets, id)
        .cloned()
        .with_context(|| format!("unknown preset '{id}'"))
}

fn cents(amount: u64) -> String {
    format!("${}.{:02}", amount / 100, amount % 100)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn quote_args(
        language: &str,
        os: &[&str],
    ) -> QuoteArgs {
        QuoteArgs {
            config: None,
            language: language.to_string(),
            os: os.iter().map(|s| s.to_string()).collect(),
            packaging: false,
            network: false,
            scheduler: false,
        }
    }

    fn savings_args() -> SavingsArgs {
        SavingsArgs {
            hours: None,
            tasks: None,
            minutes: None,
            rate: None,
            coverage: None,
            efficiency: None,
            preset: None,
            presets_file: None,
        }
    }

    // =========================================================================
    // Argument parsing
    // =========================================================================

    #[test]
    fn parses_quote_subcommand_with_os_list() {
        let cli = Cli::try_parse_from([
            "quote-server",
            "quote",
            "--language",
            "powershell",
            "--os",
            "windows,macos",
            "--packaging",
        ])
        .unwrap();

        let Command::Quote(args) = cli.command else {
            panic!("expected quote subcommand");
        };
        assert_eq!(args.os, vec!["windows", "macos"]);
        assert!(args.packaging);
        assert!(!args.network);
    }

    #[test]
    fn hours_and_preset_conflict() {
        let result = Cli::try_parse_from([
            "quote-server",
            "savings",
            "--hours",
            "10",
            "--preset",
            "file-cleanup",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn global_log_level_after_subcommand() {
        let cli = Cli::try_parse_from(["quote-server", "serve", "--port", "8080", "--log-level", "debug"])
            .unwrap();

        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        let Command::Serve(args) = cli.command else {
            panic!("expected serve subcommand");
        };
        assert_eq!(args.port, Some(8080));
    }

    // =========================================================================
    // quote
    // =========================================================================

    #[test]
    fn quote_lists_only_charged_lines() {
        let mut args = quote_args("powershell", &["windows", "macos"]);
        args.packaging = true;

        let output = run_quote(&args, &PriceSchedule::default()).unwrap();

        assert_eq!(
            output,
            [
                "base           $150.00",
                "language        $20.00",
                "os              $20.00",
                "packaging       $20.00",
                "total          $210.00",
            ]
            .join("\n")
        );
    }

    #[test]
    fn quote_rejects_unknown_language() {
        let args = quote_args("cobol", &["linux"]);
        assert!(run_quote(&args, &PriceSchedule::default()).is_err());
    }

    // =========================================================================
    // savings
    // =========================================================================

    #[test]
    fn savings_from_hours() {
        let mut args = savings_args();
        args.hours = Some(dec!(10));
        args.rate = Some(dec!(50));

        let output = run_savings(&args).unwrap();

        assert!(output.contains("8.0 hours per week"), "{output}");
        assert!(output.contains("yearly         $20,800"), "{output}");
        assert!(output.contains("efficiency     80%"), "{output}");
    }

    #[test]
    fn savings_from_preset_uses_preset_rate() {
        let mut args = savings_args();
        args.preset = Some("file-cleanup".to_string());

        let output = run_savings(&args).unwrap();

        assert!(output.starts_with("time saved"), "{output}");
    }

    #[test]
    fn savings_requires_rate_without_preset() {
        let mut args = savings_args();
        args.hours = Some(dec!(10));

        assert!(run_savings(&args).is_err());
    }

    #[test]
    fn savings_rejects_efficiency_above_one() {
        let mut args = savings_args();
        args.hours = Some(dec!(10));
        args.rate = Some(dec!(50));
        args.efficiency = Some(dec!(1.5));

        assert!(run_savings(&args).is_err());
    }

    #[test]
    fn savings_too_large_to_estimate_is_an_error() {
        let cli = Cli::try_parse_from([
            "quote-server",
            "savings",
            "--hours",
            "100000000000000000",
            "--rate",
            "100000000000000000",
        ])
        .unwrap();
        let Command::Savings(args) = cli.command else {
            panic!("expected savings subcommand");
        };

        let err = run_savings(&args).unwrap_err();

        assert!(err.to_string().contains("too large"), "{err}");
    }

    #[test]
    fn savings_unknown_preset() {
        let mut args = savings_args();
        args.preset = Some("nope".to_string());

        assert!(run_savings(&args).is_err());
    }
}
