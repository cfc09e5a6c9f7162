//! Detailed channel metrics derived from public statistics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ytincome_types::{ChannelStatistics, VideoStatistics};

/// Upload cadence classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// More than four uploads a month.
    VeryActive,
    /// More than two uploads a month.
    Active,
    /// More than one upload a month.
    Moderate,
    /// One upload a month or fewer.
    Low,
}

impl ActivityLevel {
    /// Classifies an upload rate in videos per month.
    #[must_use]
    pub fn from_videos_per_month(videos_per_month: f64) -> Self {
        let rate = round_to(videos_per_month, 1);
        if rate > 4.0 {
            Self::VeryActive
        } else if rate > 2.0 {
            Self::Active
        } else if rate > 1.0 {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    /// Returns the level as a display label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::VeryActive => "Very Active",
            Self::Active => "Active",
            Self::Moderate => "Moderate",
            Self::Low => "Low",
        }
    }
}

impl std::fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Audience engagement classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngagementLevel {
    /// More than 5% likes per view.
    Excellent,
    /// More than 3% likes per view.
    Good,
    /// More than 1% likes per view.
    Average,
    /// 1% likes per view or fewer.
    Low,
}

impl EngagementLevel {
    /// Classifies an engagement rate given in percent.
    #[must_use]
    pub fn from_rate_percent(rate_percent: f64) -> Self {
        let rate = round_to(rate_percent, 2);
        if rate > 5.0 {
            Self::Excellent
        } else if rate > 3.0 {
            Self::Good
        } else if rate > 1.0 {
            Self::Average
        } else {
            Self::Low
        }
    }

    /// Returns the level as a display label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Average => "Average",
            Self::Low => "Low",
        }
    }
}

impl std::fmt::Display for EngagementLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-video, per-day and engagement metrics for a channel.
///
/// Ratios whose denominator is zero are reported as 0, or as `None` where a
/// zero would be misleading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelAnalytics {
    /// Whole days since creation, rounded down.
    pub age_days: u64,
    /// Age in years.
    pub age_years: f64,
    /// Whole 30-day months since creation.
    pub age_months: u64,
    /// Lifetime views divided by uploads.
    pub avg_views_per_video: u64,
    /// Uploads per 30-day month, `None` for channels younger than a month.
    pub videos_per_month: Option<f64>,
    /// Uploads per year, `None` for channels younger than about a month.
    pub videos_per_year: Option<u64>,
    /// Mean likes-per-view percentage over the recent uploads.
    pub avg_engagement_rate: f64,
    /// Number of recent uploads the engagement rate covers.
    pub recent_video_count: usize,
    /// Summed views of the recent uploads.
    pub recent_views: u64,
    /// Subscribers per hundred lifetime views.
    pub subscriber_view_ratio: f64,
    /// Lifetime views divided by age in days.
    pub avg_views_per_day: u64,
    /// Subscribers divided by uploads.
    pub subscribers_per_video: u64,
}

impl ChannelAnalytics {
    /// Computes analytics as of now.
    #[must_use]
    pub fn compute(statistics: &ChannelStatistics, recent_videos: &[VideoStatistics]) -> Self {
        Self::compute_at(statistics, recent_videos, Utc::now())
    }

    /// Computes analytics as of `now`.
    #[must_use]
    pub fn compute_at(
        statistics: &ChannelStatistics,
        recent_videos: &[VideoStatistics],
        now: DateTime<Utc>,
    ) -> Self {
        let views = statistics.view_count;
        let subscribers = statistics.subscriber_count;
        let videos = statistics.video_count;

        let age_days = (now - statistics.published_at).num_days().max(0) as u64;
        let age_years = age_days as f64 / 365.0;
        let age_months = age_days / 30;

        let videos_per_month = (age_months > 0).then(|| videos as f64 / age_months as f64);
        // Yearly cadence is measured against the age shown with one decimal
        let display_years = round_to(age_years, 1);
        let videos_per_year =
            (display_years > 0.0).then(|| (videos as f64 / display_years).round() as u64);

        let recent_views = recent_videos.iter().map(|v| v.view_count).sum();
        let avg_engagement_rate = if recent_videos.is_empty() {
            0.0
        } else {
            let total: f64 = recent_videos
                .iter()
                .map(VideoStatistics::like_rate_percent)
                .sum();
            total / recent_videos.len() as f64
        };

        Self {
            age_days,
            age_years,
            age_months,
            avg_views_per_video: ratio(views, videos),
            videos_per_month,
            videos_per_year,
            avg_engagement_rate,
            recent_video_count: recent_videos.len(),
            recent_views,
            subscriber_view_ratio: if views == 0 {
                0.0
            } else {
                subscribers as f64 / views as f64 * 100.0
            },
            avg_views_per_day: ratio(views, age_days),
            subscribers_per_video: ratio(subscribers, videos),
        }
    }

    /// Returns the upload cadence classification.
    #[must_use]
    pub fn activity_level(&self) -> ActivityLevel {
        self.videos_per_month
            .map_or(ActivityLevel::Low, ActivityLevel::from_videos_per_month)
    }

    /// Returns the engagement classification.
    #[must_use]
    pub fn engagement_level(&self) -> EngagementLevel {
        EngagementLevel::from_rate_percent(self.avg_engagement_rate)
    }
}

/// Rounded quotient, 0 when the denominator is 0.
fn ratio(numerator: u64, denominator: u64) -> u64 {
    if denominator == 0 {
        return 0;
    }
    (numerator as f64 / denominator as f64).round() as u64
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
    }

    fn video(views: u64, likes: u64) -> VideoStatistics {
        VideoStatistics {
            id: format!("v{views}"),
            title: "Recent upload".to_string(),
            published_at: now() - Duration::days(3),
            view_count: views,
            like_count: likes,
            comment_count: 12,
        }
    }

    #[test]
    fn test_compute_ten_year_channel() {
        let statistics =
            ChannelStatistics::new(36_500_000, 250_000, 600, now() - Duration::days(3650));
        let recent = vec![video(10_000, 500), video(20_000, 400), video(0, 0)];

        let analytics = ChannelAnalytics::compute_at(&statistics, &recent, now());

        assert_eq!(analytics.age_days, 3650);
        assert_abs_diff_eq!(analytics.age_years, 10.0);
        assert_eq!(analytics.age_months, 121);
        assert_eq!(analytics.avg_views_per_video, 60_833);
        assert_abs_diff_eq!(analytics.videos_per_month.unwrap(), 600.0 / 121.0);
        assert_eq!(analytics.videos_per_year, Some(60));
        assert_eq!(analytics.avg_views_per_day, 10_000);
        assert_eq!(analytics.subscribers_per_video, 417);
        assert_eq!(analytics.recent_views, 30_000);
        assert_eq!(analytics.recent_video_count, 3);
        // (5% + 2% + 0%) / 3
        assert_abs_diff_eq!(analytics.avg_engagement_rate, 7.0 / 3.0, epsilon = 1e-9);
        assert_abs_diff_eq!(
            analytics.subscriber_view_ratio,
            250_000.0 / 36_500_000.0 * 100.0
        );

        assert_eq!(analytics.activity_level(), ActivityLevel::VeryActive);
        assert_eq!(analytics.engagement_level(), EngagementLevel::Average);
    }

    #[test]
    fn test_compute_new_empty_channel() {
        let statistics = ChannelStatistics::new(0, 0, 0, now() - Duration::hours(5));
        let analytics = ChannelAnalytics::compute_at(&statistics, &[], now());

        assert_eq!(analytics.age_days, 0);
        assert_eq!(analytics.age_months, 0);
        assert_eq!(analytics.avg_views_per_video, 0);
        assert_eq!(analytics.videos_per_month, None);
        assert_eq!(analytics.videos_per_year, None);
        assert_eq!(analytics.avg_views_per_day, 0);
        assert_eq!(analytics.subscribers_per_video, 0);
        assert_eq!(analytics.subscriber_view_ratio, 0.0);
        assert_eq!(analytics.avg_engagement_rate, 0.0);
        assert_eq!(analytics.activity_level(), ActivityLevel::Low);
        assert_eq!(analytics.engagement_level(), EngagementLevel::Low);
    }

    #[test]
    fn test_activity_thresholds() {
        assert_eq!(ActivityLevel::from_videos_per_month(4.5), ActivityLevel::VeryActive);
        // 4.04 displays as 4.0, which is not above 4
        assert_eq!(ActivityLevel::from_videos_per_month(4.04), ActivityLevel::Active);
        assert_eq!(ActivityLevel::from_videos_per_month(2.1), ActivityLevel::Active);
        assert_eq!(ActivityLevel::from_videos_per_month(1.5), ActivityLevel::Moderate);
        assert_eq!(ActivityLevel::from_videos_per_month(1.0), ActivityLevel::Low);
    }

    #[test]
    fn test_engagement_thresholds() {
        assert_eq!(EngagementLevel::from_rate_percent(6.0), EngagementLevel::Excellent);
        assert_eq!(EngagementLevel::from_rate_percent(5.0), EngagementLevel::Good);
        assert_eq!(EngagementLevel::from_rate_percent(3.5), EngagementLevel::Good);
        assert_eq!(EngagementLevel::from_rate_percent(1.01), EngagementLevel::Average);
        assert_eq!(EngagementLevel::from_rate_percent(0.4), EngagementLevel::Low);
        assert_eq!(EngagementLevel::Excellent.to_string(), "Excellent");
    }
}
