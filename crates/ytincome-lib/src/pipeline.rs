//! End-to-end channel lookup and estimation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use ytincome_estimate::{ChannelAnalytics, Estimator, GrowthProjection};
use ytincome_fetch::ChannelSource;
use ytincome_types::{ChannelQuery, ChannelReport, EarningsEstimate, RateModel, YtIncomeError};

/// Everything known about one channel after a lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelAnalysis {
    /// Channel metadata and recent uploads.
    pub report: ChannelReport,
    /// Rate model the estimate was computed with.
    pub rates: RateModel,
    /// Estimated advertising income.
    pub earnings: EarningsEstimate,
    /// Derived channel metrics.
    pub analytics: ChannelAnalytics,
    /// Twelve-month income projection.
    pub projection: GrowthProjection,
}

impl ChannelAnalysis {
    /// Builds the analysis of an already fetched report as of `now`.
    #[must_use]
    pub fn from_report_at(report: ChannelReport, rates: RateModel, now: DateTime<Utc>) -> Self {
        let statistics = report.statistics();
        let earnings = Estimator::new(rates).estimate_at(statistics, now);
        let analytics = ChannelAnalytics::compute_at(statistics, &report.recent_videos, now);
        let projection = GrowthProjection::new(earnings.monthly);

        Self {
            report,
            rates,
            earnings,
            analytics,
            projection,
        }
    }

    /// Builds the analysis of an already fetched report as of now.
    #[must_use]
    pub fn from_report(report: ChannelReport, rates: RateModel) -> Self {
        Self::from_report_at(report, rates, Utc::now())
    }
}

/// Looks up a channel and estimates its income.
///
/// # Errors
///
/// Returns [`YtIncomeError::NotFound`] if the query matches no channel and
/// [`YtIncomeError::Upstream`] if the data source fails.
pub async fn analyze<S>(
    source: &S,
    query: &ChannelQuery,
    rates: RateModel,
) -> Result<ChannelAnalysis, YtIncomeError>
where
    S: ChannelSource + ?Sized,
{
    let report = source.fetch_report(query).await?;
    let analysis = ChannelAnalysis::from_report(report, rates);

    info!(
        query = %query,
        channel_id = %analysis.report.channel.id,
        monthly = analysis.earnings.monthly,
        "Estimated channel income"
    );

    Ok(analysis)
}
