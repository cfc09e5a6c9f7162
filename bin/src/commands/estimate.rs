//! Estimate command implementation.
//!
//! This module looks up a single channel and prints its estimated income,
//! analytics and growth projection. Without a query argument it runs an
//! interactive session that keeps prompting until an empty line is entered.

use crate::commands::ApiOptions;
use crate::display::{
    Format, RateArgs, plural, print_earnings, print_json, print_projection, print_rates, spinner,
    truncate,
};
use anyhow::{Context, Result};
use inquire::Text;
use ytincome_lib::prelude::*;
use ytincome_lib::{POPULAR_CHANNELS, format_grouped};

/// Estimate a channel's income, prompting for the channel when no query is given.
pub(crate) async fn estimate(
    api: &ApiOptions,
    query: Option<String>,
    rate_args: &RateArgs,
    format: Format,
    quiet: bool,
) -> Result<()> {
    let rates = rate_args.rate_model()?;
    let client = api.client()?;

    if let Some(input) = query {
        return estimate_one(&client, &input, rates, format, quiet).await;
    }

    let mut recent = RecentSearches::default();
    while let Some(input) = prompt_query(&recent)? {
        recent.record(&input);
        if let Err(e) = estimate_one(&client, &input, rates, format, quiet).await {
            eprintln!("Error: {e:#}");
        }
        println!();
    }

    Ok(())
}

async fn estimate_one(
    client: &YouTubeClient,
    input: &str,
    rates: RateModel,
    format: Format,
    quiet: bool,
) -> Result<()> {
    let query: ChannelQuery = input
        .parse()
        .with_context(|| format!("Invalid channel query: {input:?}"))?;

    let progress = spinner(quiet, format!("Looking up {query}..."));
    let result = analyze(client, &query, rates).await;
    progress.finish_and_clear();

    let analysis = result.with_context(|| format!("Failed to estimate income for {query}"))?;

    match format {
        Format::Json => print_json(&analysis),
        Format::Table => {
            print_analysis(&analysis);
            Ok(())
        }
    }
}

/// Prompts for a channel; `None` once the user submits an empty line.
fn prompt_query(recent: &RecentSearches) -> Result<Option<String>> {
    let help = if recent.is_empty() {
        let examples: Vec<&str> = POPULAR_CHANNELS.iter().take(3).map(|c| c.handle).collect();
        format!("e.g. {}. Leave empty to quit", examples.join(", "))
    } else {
        let searches: Vec<&str> = recent.iter().collect();
        format!("Recent: {}. Leave empty to quit", searches.join(", "))
    };

    let input = Text::new("Channel id, @handle or name:")
        .with_help_message(&help)
        .prompt()
        .context("Channel prompt cancelled")?;

    let input = input.trim();
    Ok((!input.is_empty()).then(|| input.to_string()))
}

fn print_analysis(analysis: &ChannelAnalysis) {
    let channel = &analysis.report.channel;
    let statistics = &channel.statistics;
    let analytics = &analysis.analytics;

    println!("Channel:    {}", channel.display_name());
    println!("ID:         {}", channel.id);
    if let Some(custom_url) = &channel.custom_url {
        println!("Handle:     {custom_url}");
    }
    println!(
        "Created:    {} ({:.1} years ago)",
        statistics.published_at.format("%Y-%m-%d"),
        analytics.age_years
    );
    println!(
        "Subscribers: {}   Views: {}   Videos: {}",
        format_compact_number(statistics.subscriber_count),
        format_compact_number(statistics.view_count),
        format_grouped(statistics.video_count)
    );
    print_rates(&analysis.rates);
    print_earnings(&analysis.earnings);

    println!("\nChannel Analytics:");
    println!(
        "{:<24} {}",
        "Avg views per video",
        format_grouped(analytics.avg_views_per_video)
    );
    println!(
        "{:<24} {}",
        "Avg views per day",
        format_grouped(analytics.avg_views_per_day)
    );
    println!(
        "{:<24} {}",
        "Subscribers per video",
        format_grouped(analytics.subscribers_per_video)
    );
    println!(
        "{:<24} {:.2}%",
        "Subscriber/view ratio", analytics.subscriber_view_ratio
    );
    match (analytics.videos_per_month, analytics.videos_per_year) {
        (Some(per_month), Some(per_year)) => println!(
            "{:<24} {:.1}/month, {}/year ({})",
            "Upload frequency",
            per_month,
            per_year,
            analytics.activity_level()
        ),
        _ => println!("{:<24} n/a (channel younger than a month)", "Upload frequency"),
    }
    println!(
        "{:<24} {:.2}% over {} ({})",
        "Engagement rate",
        analytics.avg_engagement_rate,
        plural(analytics.recent_video_count, "recent video"),
        analytics.engagement_level()
    );

    if !analysis.report.recent_videos.is_empty() {
        println!("\nRecent Videos:");
        println!(
            "{:<12} {:>10} {:>9} {:>9}  {}",
            "PUBLISHED", "VIEWS", "LIKES", "COMMENTS", "TITLE"
        );
        println!("{}", "-".repeat(80));
        for video in &analysis.report.recent_videos {
            println!(
                "{:<12} {:>10} {:>9} {:>9}  {}",
                video.published_at.format("%Y-%m-%d"),
                format_compact_number(video.view_count),
                format_compact_number(video.like_count),
                format_compact_number(video.comment_count),
                truncate(&video.title, 36)
            );
        }
    }

    print_projection(&analysis.projection);
    let summary = analysis.projection.summary();
    if let Some(twelve_months) = summary.twelve_months {
        println!(
            "\nIn 12 months: about {} per month",
            format_currency(twelve_months)
        );
    }

    println!("\nNote: Estimates assume the selected CPM and monetization rate and may vary.");
}
