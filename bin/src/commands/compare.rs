//! Compare command implementation.
//!
//! Fetches two or three channels concurrently and prints their statistics and
//! estimated income side by side.

use crate::commands::ApiOptions;
use crate::display::{Format, RateArgs, print_json, print_rates, spinner, truncate};
use anyhow::{Context, Result, bail};
use futures::future::join_all;
use serde::Serialize;
use tracing::warn;
use ytincome_lib::prelude::*;
use ytincome_lib::{ComparisonEntry, ComparisonError, format_grouped};

#[derive(Serialize)]
struct CompareOutput<'a> {
    rates: RateModel,
    channels: &'a [ComparisonEntry],
    top_monthly: Option<&'a ChannelId>,
    top_yearly: Option<&'a ChannelId>,
}

/// Compare the estimated income of two or three channels.
pub(crate) async fn compare(
    api: &ApiOptions,
    inputs: &[String],
    rate_args: &RateArgs,
    format: Format,
    quiet: bool,
) -> Result<()> {
    let rates = rate_args.rate_model()?;
    let queries = inputs
        .iter()
        .map(|input| {
            input
                .parse::<ChannelQuery>()
                .with_context(|| format!("Invalid channel query: {input:?}"))
        })
        .collect::<Result<Vec<_>>>()?;
    let client = api.client()?;

    let progress = spinner(quiet, format!("Looking up {} channels...", queries.len()));
    let results = join_all(queries.iter().map(|query| analyze(&client, query, rates))).await;
    progress.finish_and_clear();

    let mut set = ComparisonSet::new();
    for (query, result) in queries.iter().zip(results) {
        let analysis = result.with_context(|| format!("Failed to estimate income for {query}"))?;
        let channel = analysis.report.channel;

        match set.add(channel, analysis.earnings) {
            Ok(()) => {}
            Err(ComparisonError::AlreadyAdded(id)) => {
                warn!(query = %query, channel_id = %id, "Channel listed twice, skipping");
            }
            Err(e @ ComparisonError::Full) => return Err(e.into()),
        }
    }

    if set.len() < 2 {
        bail!("Need at least two distinct channels to compare");
    }

    match format {
        Format::Json => print_json(&CompareOutput {
            rates,
            channels: set.entries(),
            top_monthly: set.top_earner(Period::Monthly).map(|e| &e.channel.id),
            top_yearly: set.top_earner(Period::Yearly).map(|e| &e.channel.id),
        }),
        Format::Table => {
            print_comparison(&set, &rates);
            Ok(())
        }
    }
}

fn print_comparison(set: &ComparisonSet, rates: &RateModel) {
    const LABEL_WIDTH: usize = 18;
    const COLUMN_WIDTH: usize = 22;

    print_rates(rates);
    println!();

    print!("{:<LABEL_WIDTH$}", "");
    for entry in set.entries() {
        print!(" {:>COLUMN_WIDTH$}", truncate(entry.channel.display_name(), COLUMN_WIDTH));
    }
    println!();
    println!("{}", "-".repeat(LABEL_WIDTH + set.len() * (COLUMN_WIDTH + 1)));

    for metric in Metric::all() {
        print!("{:<LABEL_WIDTH$}", metric.label());
        for entry in set.entries() {
            let cell = format!(
                "{} ({:.0}%)",
                format_metric(entry, metric),
                set.share_of_max(entry, metric)
            );
            print!(" {cell:>COLUMN_WIDTH$}");
        }
        println!();
    }

    if let Some(top) = set.top_earner(Period::Monthly) {
        println!(
            "\nTop earner: {} with {} per month",
            top.channel.display_name(),
            format_currency(top.earnings.monthly)
        );
    }
}

fn format_metric(entry: &ComparisonEntry, metric: Metric) -> String {
    let statistics = &entry.channel.statistics;
    match metric {
        Metric::Subscribers => format_compact_number(statistics.subscriber_count),
        Metric::Views => format_compact_number(statistics.view_count),
        Metric::Videos => format_grouped(statistics.video_count),
        Metric::Earnings(period) => format_currency(entry.earnings.for_period(period)),
    }
}
