//! HTTP client for the YouTube Data API.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, warn};
use ytincome_types::{
    Channel, ChannelId, ChannelQuery, ChannelReport, VideoStatistics, YtIncomeError,
};

use crate::api::{self, ChannelResource, ListResponse, PlaylistItem, SearchResult, VideoResource};
use crate::url::{ApiEndpoints, BASE_URL};

/// Configuration for the API client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// YouTube Data API key.
    pub api_key: Option<String>,
    /// API base URL, overridable for tests and proxies.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Number of recent uploads fetched per channel.
    pub recent_video_limit: u32,
    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            recent_video_limit: 10,
            user_agent: format!("ytincome/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Returns the configuration with the given API key.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Returns the configuration with the given base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// Errors that can occur while talking to the API.
#[derive(Error, Debug)]
pub enum FetchError {
    /// No channel matched the query.
    #[error("Channel not found: {query}")]
    NotFound {
        /// The query as typed.
        query: String,
    },

    /// No API key was configured.
    #[error("Missing API key (set YOUTUBE_API_KEY or pass --api-key)")]
    MissingApiKey,

    /// The configured base URL cannot be used.
    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(String),

    /// HTTP request failed.
    ///
    /// The request URL is stripped, since its query carries the API key.
    #[error("HTTP error: {0}")]
    Http(#[source] reqwest::Error),

    /// The API answered with an error status.
    #[error("API error {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Message extracted from the error body.
        message: String,
    },

    /// The response body did not have the expected shape.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl FetchError {
    /// Returns true if the error means the channel does not exist.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err.without_url())
    }
}

impl From<FetchError> for YtIncomeError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::NotFound { query } => Self::NotFound(query),
            other => Self::Upstream(other.to_string()),
        }
    }
}

/// A channel together with the id of its uploads playlist.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelDetails {
    /// The channel.
    pub channel: Channel,
    /// Playlist holding every public upload, if the API exposed it.
    pub uploads_playlist_id: Option<String>,
}

/// YouTube Data API client with connection pooling.
#[derive(Debug, Clone)]
pub struct YouTubeClient {
    client: Client,
    config: ClientConfig,
    endpoints: ApiEndpoints,
    api_key: String,
}

impl YouTubeClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if no API key is configured, the base URL is invalid,
    /// or the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, FetchError> {
        let api_key = config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(FetchError::MissingApiKey)?
            .to_string();
        let endpoints = ApiEndpoints::new(&config.base_url)?;

        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(Duration::from_secs(10))
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()?;

        Ok(Self {
            client,
            config,
            endpoints,
            api_key,
        })
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Resolves a username or handle to a canonical channel id via search.
    ///
    /// Canonical ids are returned as is without a request.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::NotFound`] if the search yields no channel.
    pub async fn resolve_channel_id(&self, query: &ChannelQuery) -> Result<ChannelId, FetchError> {
        if let ChannelQuery::Id(id) = query {
            return Ok(id.clone());
        }

        let url = self.endpoints.search(&query.search_text(), &self.api_key);
        let response: ListResponse<SearchResult> = self.get_json(url).await?;

        let id = response
            .items
            .into_iter()
            .find_map(|item| item.id.channel_id)
            .filter(|id| !id.is_empty());

        match id {
            Some(id) => {
                debug!(query = %query, channel_id = %id, "Resolved channel");
                Ok(ChannelId::new(id))
            }
            None => {
                warn!(query = %query, "No channel matched search");
                Err(FetchError::NotFound {
                    query: query.to_string(),
                })
            }
        }
    }

    /// Fetches channel metadata and statistics by id.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::NotFound`] if no channel has this id.
    pub async fn channel(&self, id: &ChannelId) -> Result<ChannelDetails, FetchError> {
        let url = self.endpoints.channels(id.as_str(), &self.api_key);
        let response: ListResponse<ChannelResource> = self.get_json(url).await?;

        let resource = response
            .items
            .into_iter()
            .next()
            .ok_or_else(|| FetchError::NotFound {
                query: id.to_string(),
            })?;
        let (channel, uploads_playlist_id) = resource.into_parts();

        Ok(ChannelDetails {
            channel,
            uploads_playlist_id,
        })
    }

    /// Fetches statistics of the newest uploads in a playlist, newest first.
    ///
    /// A missing playlist yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns an error if a request fails.
    pub async fn recent_videos(&self, playlist_id: &str) -> Result<Vec<VideoStatistics>, FetchError> {
        let url = self.endpoints.playlist_items(
            playlist_id,
            self.config.recent_video_limit,
            &self.api_key,
        );
        let items: ListResponse<PlaylistItem> = match self.get_json(url).await {
            Ok(items) => items,
            Err(FetchError::Status { status: 404, .. }) => {
                debug!(playlist_id, "Uploads playlist not found");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e),
        };

        let ids: Vec<String> = items
            .items
            .into_iter()
            .map(|item| item.content_details.video_id)
            .filter(|id| !id.is_empty())
            .collect();
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let url = self.endpoints.videos(&ids, &self.api_key);
        let response: ListResponse<VideoResource> = self.get_json(url).await?;
        let mut videos: Vec<VideoStatistics> =
            response.items.into_iter().map(VideoStatistics::from).collect();

        // Keep playlist order; the videos endpoint does not guarantee it.
        videos.sort_by_key(|video| {
            ids.iter()
                .position(|id| *id == video.id)
                .unwrap_or(usize::MAX)
        });

        Ok(videos)
    }

    /// Resolves a query and fetches the channel with its recent uploads.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::NotFound`] if the query matches no channel, or
    /// another error if a request fails.
    pub async fn fetch_channel_report(
        &self,
        query: &ChannelQuery,
    ) -> Result<ChannelReport, FetchError> {
        let id = self.resolve_channel_id(query).await?;
        let details = self.channel(&id).await?;

        let recent_videos = match details.uploads_playlist_id.as_deref() {
            Some(playlist) if !playlist.is_empty() => self.recent_videos(playlist).await?,
            _ => Vec::new(),
        };

        debug!(
            channel_id = %id,
            recent_videos = recent_videos.len(),
            "Fetched channel report"
        );
        Ok(ChannelReport::new(details.channel, recent_videos))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, FetchError> {
        // Never log the full URL; its query carries the API key
        debug!(path = url.path(), "GET");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = api::error_message(&body);
            warn!(status = status.as_u16(), %message, "API request failed");
            return Err(FetchError::Status {
                status: status.as_u16(),
                message: if message.is_empty() {
                    status
                        .canonical_reason()
                        .unwrap_or("unknown error")
                        .to_string()
                } else {
                    message
                },
            });
        }

        serde_json::from_str(&body).map_err(|e| FetchError::InvalidResponse(e.to_string()))
    }
}
