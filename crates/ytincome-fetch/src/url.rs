//! YouTube Data API URL construction.

use reqwest::Url;

use crate::FetchError;

/// Base URL of the YouTube Data API v3.
pub const BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Upper bound the API accepts for `maxResults`.
pub const MAX_RESULTS_LIMIT: u32 = 50;

/// Builds request URLs for the endpoints the gateway calls.
///
/// # Example
///
/// ```
/// use ytincome_fetch::url::ApiEndpoints;
///
/// let endpoints = ApiEndpoints::new("https://www.googleapis.com/youtube/v3").unwrap();
/// let url = endpoints.search("@mkbhd", "KEY");
/// assert_eq!(
///     url.as_str(),
///     "https://www.googleapis.com/youtube/v3/search?part=snippet&q=%40mkbhd&type=channel&maxResults=1&key=KEY"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoints {
    base: Url,
}

impl ApiEndpoints {
    /// Creates endpoints rooted at `base`.
    ///
    /// # Errors
    ///
    /// Returns an error if `base` is not an absolute hierarchical URL.
    pub fn new(base: &str) -> Result<Self, FetchError> {
        let base =
            Url::parse(base).map_err(|e| FetchError::InvalidBaseUrl(format!("{base}: {e}")))?;
        if base.cannot_be_a_base() {
            return Err(FetchError::InvalidBaseUrl(base.to_string()));
        }
        Ok(Self { base })
    }

    /// Returns the base URL.
    #[must_use]
    pub const fn base(&self) -> &Url {
        &self.base
    }

    /// Channel search by free text, first result only.
    #[must_use]
    pub fn search(&self, text: &str, api_key: &str) -> Url {
        self.endpoint(
            "search",
            &[
                ("part", "snippet"),
                ("q", text),
                ("type", "channel"),
                ("maxResults", "1"),
                ("key", api_key),
            ],
        )
    }

    /// Channel statistics, snippet and content details by id.
    #[must_use]
    pub fn channels(&self, channel_id: &str, api_key: &str) -> Url {
        self.endpoint(
            "channels",
            &[
                ("part", "statistics,snippet,contentDetails"),
                ("id", channel_id),
                ("key", api_key),
            ],
        )
    }

    /// Newest entries of a playlist.
    #[must_use]
    pub fn playlist_items(&self, playlist_id: &str, max_results: u32, api_key: &str) -> Url {
        let max_results = max_results.clamp(1, MAX_RESULTS_LIMIT).to_string();
        self.endpoint(
            "playlistItems",
            &[
                ("part", "contentDetails"),
                ("playlistId", playlist_id),
                ("maxResults", max_results.as_str()),
                ("key", api_key),
            ],
        )
    }

    /// Statistics and snippets for a batch of videos.
    #[must_use]
    pub fn videos(&self, video_ids: &[String], api_key: &str) -> Url {
        let ids = video_ids.join(",");
        self.endpoint(
            "videos",
            &[
                ("part", "statistics,snippet"),
                ("id", ids.as_str()),
                ("key", api_key),
            ],
        )
    }

    fn endpoint(&self, name: &str, params: &[(&str, &str)]) -> Url {
        let mut url = self.base.clone();
        let path = format!("{}/{}", self.base.path().trim_end_matches('/'), name);
        url.set_path(&path);
        url.query_pairs_mut().clear().extend_pairs(params);
        url
    }
}

impl Default for ApiEndpoints {
    fn default() -> Self {
        Self {
            base: Url::parse(BASE_URL).expect("BASE_URL is a valid URL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channels_url() {
        let endpoints = ApiEndpoints::default();
        let url = endpoints.channels("UCX6OQ3DkcsbYNE6H8uQQuVA", "KEY");
        assert_eq!(
            url.as_str(),
            "https://www.googleapis.com/youtube/v3/channels?part=statistics%2Csnippet%2CcontentDetails&id=UCX6OQ3DkcsbYNE6H8uQQuVA&key=KEY"
        );
    }

    #[test]
    fn test_search_url_encodes_names() {
        let endpoints = ApiEndpoints::default();
        let url = endpoints.search("Linus Tech Tips", "KEY");
        assert!(url.as_str().contains("q=Linus+Tech+Tips"));
    }

    #[test]
    fn test_playlist_items_clamps_max_results() {
        let endpoints = ApiEndpoints::default();
        let url = endpoints.playlist_items("UUabc", 500, "KEY");
        assert!(url.as_str().contains("maxResults=50"));
        let url = endpoints.playlist_items("UUabc", 10, "KEY");
        assert!(url.as_str().contains("maxResults=10"));
    }

    #[test]
    fn test_videos_url_joins_ids() {
        let endpoints = ApiEndpoints::default();
        let ids = vec!["a1".to_string(), "b2".to_string()];
        let url = endpoints.videos(&ids, "KEY");
        assert!(url.as_str().contains("id=a1%2Cb2"));
    }

    #[test]
    fn test_base_without_trailing_path() {
        let endpoints = ApiEndpoints::new("http://127.0.0.1:8080").unwrap();
        let url = endpoints.search("x", "KEY");
        assert_eq!(url.path(), "/search");

        let endpoints = ApiEndpoints::new("http://127.0.0.1:8080/youtube/v3/").unwrap();
        let url = endpoints.search("x", "KEY");
        assert_eq!(url.path(), "/youtube/v3/search");
    }

    #[test]
    fn test_invalid_base() {
        assert!(matches!(
            ApiEndpoints::new("not a url"),
            Err(FetchError::InvalidBaseUrl(_))
        ));
        assert!(ApiEndpoints::new("mailto:someone@example.com").is_err());
    }
}
