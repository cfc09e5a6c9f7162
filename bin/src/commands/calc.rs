//! Calc command implementation.
//!
//! Runs the estimator on numbers typed by the user, without calling the API.

use crate::display::{Format, RateArgs, print_earnings, print_json, print_rates};
use anyhow::{Context, Result, bail};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use ytincome_lib::{EarningsEstimate, RateModel, channel_age_days, estimate, format_grouped};

#[derive(Serialize)]
struct CalcOutput {
    view_count: u64,
    published_at: DateTime<Utc>,
    age_days: u64,
    rates: RateModel,
    earnings: EarningsEstimate,
}

/// Estimate income from a lifetime view count and a creation date.
pub(crate) fn calc(
    views: u64,
    published_at: &str,
    rate_args: &RateArgs,
    format: Format,
) -> Result<()> {
    let rates = rate_args.rate_model()?;
    let published_at = parse_published_at(published_at)?;

    let output = CalcOutput {
        view_count: views,
        published_at,
        age_days: channel_age_days(published_at),
        rates,
        earnings: estimate(views, published_at, &rates),
    };

    match format {
        Format::Json => print_json(&output),
        Format::Table => {
            println!("Views:      {}", format_grouped(output.view_count));
            println!("Created:    {}", output.published_at.format("%Y-%m-%d"));
            println!("Age:        {} days", format_grouped(output.age_days));
            print_rates(&output.rates);
            print_earnings(&output.earnings);
            if output.earnings.is_zero() && output.age_days == 0 {
                println!("\nNote: channels created today have no daily average yet.");
            }
            Ok(())
        }
    }
}

/// Parses an RFC 3339 timestamp or a plain date taken as midnight UTC.
fn parse_published_at(s: &str) -> Result<DateTime<Utc>> {
    let s = s.trim();
    let published_at = match DateTime::parse_from_rfc3339(s) {
        Ok(timestamp) => timestamp.with_timezone(&Utc),
        Err(_) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .with_context(|| {
                format!("Invalid creation date: {s} (expected RFC 3339 or YYYY-MM-DD)")
            })?
            .and_hms_opt(0, 0, 0)
            .with_context(|| format!("Invalid creation date: {s}"))?
            .and_utc(),
    };

    if published_at > Utc::now() {
        bail!("Creation date is in the future: {s}");
    }
    Ok(published_at)
}
