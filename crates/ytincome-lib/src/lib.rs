//! Estimate YouTube channel advertising income from public statistics.
//!
//! This is a facade crate that re-exports functionality from the ytincome
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use ytincome_lib::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::default().with_api_key(std::env::var("YOUTUBE_API_KEY")?);
//!     let client = YouTubeClient::new(config)?;
//!
//!     let query: ChannelQuery = "@veritasium".parse()?;
//!     let analysis = analyze(&client, &query, Niche::Education.rates()).await?;
//!
//!     println!(
//!         "{} earns about {} a month",
//!         analysis.report.channel,
//!         format_currency(analysis.earnings.monthly)
//!     );
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/ytincome/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(feature = "fetch")]
mod pipeline;

// Re-export core types
pub use ytincome_types::*;

// Re-export estimation
pub use ytincome_estimate::{
    ActivityLevel, ChannelAnalytics, EngagementLevel, Estimator, GrowthProjection,
    ProjectionPoint, ProjectionSummary, channel_age_days, estimate, estimate_at,
    format_compact_number, format_currency, format_grouped, round_cents,
};

// Re-export fetch functionality
#[cfg(feature = "fetch")]
pub use pipeline::{ChannelAnalysis, analyze};
#[cfg(feature = "fetch")]
pub use ytincome_fetch::{ChannelDetails, ChannelSource, ClientConfig, FetchError, YouTubeClient};

// Re-export comparison state
#[cfg(feature = "compare")]
pub use ytincome_compare::{
    ComparisonEntry, ComparisonError, ComparisonSet, MAX_COMPARED_CHANNELS, Metric,
    RecentSearches, share,
};

/// Prelude module for convenient imports.
///
/// ```
/// use ytincome_lib::prelude::*;
/// ```
pub mod prelude {
    pub use ytincome_types::{
        Channel, ChannelId, ChannelQuery, ChannelReport, ChannelStatistics, EarningsEstimate,
        Niche, Period, RateModel, Result, VideoStatistics, YtIncomeError,
    };

    pub use ytincome_estimate::{
        ChannelAnalytics, Estimator, GrowthProjection, format_compact_number, format_currency,
    };

    #[cfg(feature = "fetch")]
    pub use crate::pipeline::{ChannelAnalysis, analyze};
    #[cfg(feature = "fetch")]
    pub use ytincome_fetch::{ChannelSource, ClientConfig, YouTubeClient};

    #[cfg(feature = "compare")]
    pub use ytincome_compare::{ComparisonSet, Metric, RecentSearches};
}
