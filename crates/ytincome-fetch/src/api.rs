//! Wire types of the YouTube Data API responses.
//!
//! Only the fields the gateway reads are modelled. Counters arrive as
//! integer-valued strings and are absent when hidden by the channel owner.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use ytincome_types::{Channel, ChannelId, ChannelStatistics, VideoStatistics};

/// Generic `*ListResponse` envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    pub(crate) items: Vec<T>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResult {
    pub(crate) id: SearchResultId,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SearchResultId {
    pub(crate) channel_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ChannelResource {
    id: String,
    snippet: ChannelSnippet,
    #[serde(default)]
    statistics: ChannelCounters,
    #[serde(default)]
    content_details: ChannelContentDetails,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChannelSnippet {
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    custom_url: Option<String>,
    published_at: DateTime<Utc>,
    #[serde(default)]
    thumbnails: Thumbnails,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChannelCounters {
    #[serde(default, deserialize_with = "count")]
    view_count: u64,
    #[serde(default, deserialize_with = "count")]
    subscriber_count: u64,
    #[serde(default, deserialize_with = "count")]
    video_count: u64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChannelContentDetails {
    #[serde(default)]
    related_playlists: RelatedPlaylists,
}

#[derive(Debug, Default, Deserialize)]
struct RelatedPlaylists {
    uploads: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct Thumbnails {
    high: Option<Thumbnail>,
    medium: Option<Thumbnail>,
    #[serde(rename = "default")]
    fallback: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    url: String,
}

impl ChannelResource {
    /// Splits the resource into the channel and its uploads playlist id.
    pub(crate) fn into_parts(self) -> (Channel, Option<String>) {
        let Self {
            id,
            snippet,
            statistics,
            content_details,
        } = self;

        let thumbnail_url = [
            snippet.thumbnails.high,
            snippet.thumbnails.medium,
            snippet.thumbnails.fallback,
        ]
        .into_iter()
        .flatten()
        .map(|t| t.url)
        .next();

        let channel = Channel {
            id: ChannelId::new(id),
            title: snippet.title,
            description: snippet.description,
            custom_url: snippet.custom_url,
            thumbnail_url,
            statistics: ChannelStatistics::new(
                statistics.view_count,
                statistics.subscriber_count,
                statistics.video_count,
                snippet.published_at,
            ),
        };

        (channel, content_details.related_playlists.uploads)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PlaylistItem {
    pub(crate) content_details: PlaylistItemContentDetails,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PlaylistItemContentDetails {
    pub(crate) video_id: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct VideoResource {
    id: String,
    snippet: VideoSnippet,
    #[serde(default)]
    statistics: VideoCounters,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VideoSnippet {
    #[serde(default)]
    title: String,
    published_at: DateTime<Utc>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VideoCounters {
    #[serde(default, deserialize_with = "count")]
    view_count: u64,
    #[serde(default, deserialize_with = "count")]
    like_count: u64,
    #[serde(default, deserialize_with = "count")]
    comment_count: u64,
}

impl From<VideoResource> for VideoStatistics {
    fn from(video: VideoResource) -> Self {
        Self {
            id: video.id,
            title: video.snippet.title,
            published_at: video.snippet.published_at,
            view_count: video.statistics.view_count,
            like_count: video.statistics.like_count,
            comment_count: video.statistics.comment_count,
        }
    }
}

/// Error envelope returned with non-2xx statuses.
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    message: String,
}

/// Extracts the human-readable message from an error body, falling back to the raw body.
pub(crate) fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .map(|e| e.error.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| body.trim().to_string())
}

/// Reads a counter given either as a JSON number or an integer-valued string.
fn count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Count {
        Number(u64),
        Text(String),
    }

    match Count::deserialize(deserializer)? {
        Count::Number(n) => Ok(n),
        Count::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_channel_resource_with_string_counters() {
        let value = json!({
            "id": "UCBJycsmduvYEL83R_U4JriQ",
            "snippet": {
                "title": "Marques Brownlee",
                "description": "MKBHD: Quality Tech Videos",
                "customUrl": "@mkbhd",
                "publishedAt": "2008-03-21T15:25:54Z",
                "thumbnails": {
                    "default": { "url": "https://img/default.jpg" },
                    "high": { "url": "https://img/high.jpg" }
                }
            },
            "statistics": {
                "viewCount": "4500000000",
                "subscriberCount": "19600000",
                "hiddenSubscriberCount": false,
                "videoCount": "1700"
            },
            "contentDetails": {
                "relatedPlaylists": { "likes": "", "uploads": "UUBJycsmduvYEL83R_U4JriQ" }
            }
        });

        let resource: ChannelResource = serde_json::from_value(value).unwrap();
        let (channel, uploads) = resource.into_parts();

        assert_eq!(channel.id.as_str(), "UCBJycsmduvYEL83R_U4JriQ");
        assert_eq!(channel.custom_url.as_deref(), Some("@mkbhd"));
        assert_eq!(channel.thumbnail_url.as_deref(), Some("https://img/high.jpg"));
        assert_eq!(channel.statistics.view_count, 4_500_000_000);
        assert_eq!(channel.statistics.subscriber_count, 19_600_000);
        assert_eq!(channel.statistics.video_count, 1_700);
        assert_eq!(
            channel.statistics.published_at,
            Utc.with_ymd_and_hms(2008, 3, 21, 15, 25, 54).unwrap()
        );
        assert_eq!(uploads.as_deref(), Some("UUBJycsmduvYEL83R_U4JriQ"));
    }

    #[test]
    fn test_channel_resource_hidden_subscribers() {
        let value = json!({
            "id": "UCxyz",
            "snippet": { "title": "Quiet", "publishedAt": "2020-01-01T00:00:00Z" },
            "statistics": { "viewCount": 42, "hiddenSubscriberCount": true, "videoCount": "3" }
        });

        let resource: ChannelResource = serde_json::from_value(value).unwrap();
        let (channel, uploads) = resource.into_parts();

        assert_eq!(channel.statistics.view_count, 42);
        assert_eq!(channel.statistics.subscriber_count, 0);
        assert!(channel.thumbnail_url.is_none());
        assert!(uploads.is_none());
    }

    #[test]
    fn test_video_resource_hidden_likes() {
        let value = json!({
            "id": "dQw4w9WgXcQ",
            "snippet": { "title": "Upload", "publishedAt": "2024-05-01T10:00:00Z" },
            "statistics": { "viewCount": "1000", "commentCount": "7" }
        });

        let video: VideoStatistics = serde_json::from_value::<VideoResource>(value)
            .unwrap()
            .into();

        assert_eq!(video.view_count, 1_000);
        assert_eq!(video.like_count, 0);
        assert_eq!(video.comment_count, 7);
    }

    #[test]
    fn test_invalid_counter_is_rejected() {
        let value = json!({
            "id": "v",
            "snippet": { "publishedAt": "2024-05-01T10:00:00Z" },
            "statistics": { "viewCount": "lots" }
        });
        assert!(serde_json::from_value::<VideoResource>(value).is_err());
    }

    #[test]
    fn test_empty_list_response() {
        let response: ListResponse<SearchResult> =
            serde_json::from_str(r#"{"kind":"youtube#searchListResponse"}"#).unwrap();
        assert!(response.items.is_empty());
    }

    #[test]
    fn test_error_message() {
        let body = r#"{"error":{"code":403,"message":"The request cannot be completed because you have exceeded your quota."}}"#;
        assert_eq!(
            error_message(body),
            "The request cannot be completed because you have exceeded your quota."
        );
        assert_eq!(error_message("Bad Gateway\n"), "Bad Gateway");
    }
}
