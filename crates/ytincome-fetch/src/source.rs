//! Channel data source abstraction.

use async_trait::async_trait;
use ytincome_types::{ChannelQuery, ChannelReport};

use crate::{FetchError, YouTubeClient};

/// Anything that can turn a channel query into a channel report.
///
/// The estimation pipeline only depends on this trait, so alternative
/// backends and test doubles can stand in for the HTTP client.
#[async_trait]
pub trait ChannelSource: Send + Sync {
    /// Resolves `query` and fetches the channel with its recent uploads.
    async fn fetch_report(&self, query: &ChannelQuery) -> Result<ChannelReport, FetchError>;
}

#[async_trait]
impl ChannelSource for YouTubeClient {
    async fn fetch_report(&self, query: &ChannelQuery) -> Result<ChannelReport, FetchError> {
        self.fetch_channel_report(query).await
    }
}
