//! Display utilities and output formatting for the ytincome CLI.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::time::Duration;
use tracing::warn;
use ytincome_lib::{
    ADJUSTABLE_CPM_RANGE, ADJUSTABLE_MONETIZATION_PERCENT_RANGE, EarningsEstimate,
    GrowthProjection, Niche, RateModel, format_currency,
};

/// Output format for results.
#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum Format {
    Table,
    Json,
}

/// Rate model flags shared by the estimating commands.
#[derive(Args)]
pub(crate) struct RateArgs {
    /// Content niche preset (average, gaming, tech, finance, education, entertainment)
    #[arg(short, long)]
    niche: Option<Niche>,

    /// CPM in US dollars, overriding the niche preset
    #[arg(long)]
    cpm: Option<f64>,

    /// Percentage of views that carry an ad, overriding the niche preset
    #[arg(long, value_name = "PCT")]
    monetization: Option<f64>,
}

impl RateArgs {
    /// Builds the rate model: niche preset first, then explicit overrides.
    pub(crate) fn rate_model(&self) -> Result<RateModel> {
        let mut rates = self.niche.unwrap_or_default().rates();

        if let Some(cpm) = self.cpm {
            rates = rates.with_cost_per_thousand_views(cpm)?;
        }
        if let Some(percent) = self.monetization {
            rates = rates
                .with_monetized_percent(percent)
                .with_context(|| format!("Invalid monetization percentage: {percent}"))?;
        }

        if !rates.is_within_adjustable_range() {
            warn!(
                %rates,
                "Rates outside the usual range (CPM {:?}, monetization {:?}%)",
                ADJUSTABLE_CPM_RANGE,
                ADJUSTABLE_MONETIZATION_PERCENT_RANGE
            );
        }

        Ok(rates)
    }
}

/// Creates a spinner on stderr, hidden in quiet mode.
pub(crate) fn spinner(quiet: bool, message: String) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Prints a value as pretty JSON on stdout.
pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}

/// Prints the rate model line.
pub(crate) fn print_rates(rates: &RateModel) {
    match rates.matching_niche() {
        Some(niche) => println!("Rates:      {rates} ({niche})"),
        None => println!("Rates:      {rates} (custom)"),
    }
}

/// Prints the daily, monthly and yearly figures.
pub(crate) fn print_earnings(earnings: &EarningsEstimate) {
    println!("\nEstimated Earnings:");
    println!("{:<12} {:>16}", "PERIOD", "INCOME");
    println!("{}", "-".repeat(29));
    println!("{:<12} {:>16}", "Daily", format_currency(earnings.daily));
    println!("{:<12} {:>16}", "Monthly", format_currency(earnings.monthly));
    println!("{:<12} {:>16}", "Yearly", format_currency(earnings.yearly));
}

/// Prints the growth projection table.
pub(crate) fn print_projection(projection: &GrowthProjection) {
    println!(
        "\nMonthly Income Projection ({:.0}% growth per month):",
        (projection.growth_rate() - 1.0) * 100.0
    );
    println!(
        "{:<8} {:>16} {:>16} {:>16}",
        "MONTH", "CONSERVATIVE", "EXPECTED", "OPTIMISTIC"
    );
    println!("{}", "-".repeat(59));

    for point in projection.points() {
        println!(
            "{:<8} {:>16} {:>16} {:>16}",
            point.label(),
            format_currency(point.conservative),
            format_currency(point.earnings),
            format_currency(point.optimistic),
        );
    }
}

/// Formats a count of things with a singular or plural noun.
pub(crate) fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

/// Shortens `s` to at most `max` characters, marking the cut with "...".
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let kept: String = s.chars().take(max.saturating_sub(3)).collect();
    format!("{kept}...")
}
