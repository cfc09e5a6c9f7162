//! Channel and video statistics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ChannelId;

/// Public counters of a channel plus its creation date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelStatistics {
    /// Lifetime view count.
    pub view_count: u64,
    /// Subscriber count (rounded by the platform).
    pub subscriber_count: u64,
    /// Number of public uploads.
    pub video_count: u64,
    /// Channel creation timestamp.
    pub published_at: DateTime<Utc>,
}

impl ChannelStatistics {
    /// Creates a new statistics record.
    #[must_use]
    pub const fn new(
        view_count: u64,
        subscriber_count: u64,
        video_count: u64,
        published_at: DateTime<Utc>,
    ) -> Self {
        Self {
            view_count,
            subscriber_count,
            video_count,
            published_at,
        }
    }
}

/// A channel with its display metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    /// Canonical channel id.
    pub id: ChannelId,
    /// Display title.
    pub title: String,
    /// Channel description.
    pub description: String,
    /// Vanity URL such as `@mkbhd`, when the channel has one.
    pub custom_url: Option<String>,
    /// URL of the largest thumbnail offered upstream.
    pub thumbnail_url: Option<String>,
    /// Public counters.
    pub statistics: ChannelStatistics,
}

impl Channel {
    /// Returns the channel title, falling back to its id when untitled.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.title.trim().is_empty() {
            self.id.as_str()
        } else {
            &self.title
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.display_name(), self.id)
    }
}

/// Counters of a single uploaded video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoStatistics {
    /// Video id.
    pub id: String,
    /// Video title.
    pub title: String,
    /// Upload timestamp.
    pub published_at: DateTime<Utc>,
    /// View count.
    pub view_count: u64,
    /// Like count, 0 when hidden.
    pub like_count: u64,
    /// Comment count, 0 when disabled.
    pub comment_count: u64,
}

impl VideoStatistics {
    /// Returns likes per view as a percentage, or 0 for unviewed videos.
    #[must_use]
    pub fn like_rate_percent(&self) -> f64 {
        if self.view_count == 0 {
            return 0.0;
        }
        self.like_count as f64 / self.view_count as f64 * 100.0
    }
}

/// A channel and its most recent uploads, newest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelReport {
    /// The channel.
    pub channel: Channel,
    /// Up to ten most recent uploads.
    pub recent_videos: Vec<VideoStatistics>,
}

impl ChannelReport {
    /// Creates a new report.
    #[must_use]
    pub const fn new(channel: Channel, recent_videos: Vec<VideoStatistics>) -> Self {
        Self {
            channel,
            recent_videos,
        }
    }

    /// Returns the channel statistics.
    #[must_use]
    pub const fn statistics(&self) -> &ChannelStatistics {
        &self.channel.statistics
    }

    /// Returns the summed view count of the recent uploads.
    #[must_use]
    pub fn recent_view_count(&self) -> u64 {
        self.recent_videos.iter().map(|v| v.view_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn video(views: u64, likes: u64) -> VideoStatistics {
        VideoStatistics {
            id: "vid".to_string(),
            title: "Video".to_string(),
            published_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            view_count: views,
            like_count: likes,
            comment_count: 0,
        }
    }

    fn channel(title: &str) -> Channel {
        Channel {
            id: ChannelId::new("UCX6OQ3DkcsbYNE6H8uQQuVA"),
            title: title.to_string(),
            description: String::new(),
            custom_url: None,
            thumbnail_url: None,
            statistics: ChannelStatistics::new(
                100,
                10,
                1,
                Utc.with_ymd_and_hms(2012, 2, 20, 0, 0, 0).unwrap(),
            ),
        }
    }

    #[test]
    fn test_like_rate() {
        assert!((video(1000, 50).like_rate_percent() - 5.0).abs() < 1e-9);
        assert_eq!(video(0, 10).like_rate_percent(), 0.0);
    }

    #[test]
    fn test_recent_view_count() {
        let report = ChannelReport::new(channel("MrBeast"), vec![video(10, 1), video(32, 2)]);
        assert_eq!(report.recent_view_count(), 42);
        assert_eq!(report.statistics().view_count, 100);
    }

    #[test]
    fn test_display_name_falls_back_to_id() {
        assert_eq!(channel("MrBeast").display_name(), "MrBeast");
        assert_eq!(channel("  ").display_name(), "UCX6OQ3DkcsbYNE6H8uQQuVA");
    }
}
