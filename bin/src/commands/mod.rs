//! CLI command implementations.

use anyhow::{Context, Result};
use ytincome_lib::{ClientConfig, YouTubeClient};

pub(crate) mod calc;
pub(crate) mod compare;
pub(crate) mod estimate;
pub(crate) mod niches;
pub(crate) mod popular;

/// Connection options shared by the commands that call the API.
pub(crate) struct ApiOptions {
    pub(crate) api_key: Option<String>,
    pub(crate) api_base: Option<String>,
}

impl ApiOptions {
    /// Creates the API client.
    pub(crate) fn client(&self) -> Result<YouTubeClient> {
        let mut config = ClientConfig {
            api_key: self.api_key.clone(),
            ..Default::default()
        };
        if let Some(base) = &self.api_base {
            config.base_url = base.clone();
        }

        YouTubeClient::new(config).context("Failed to create YouTube API client")
    }
}
