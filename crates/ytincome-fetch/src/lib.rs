//! YouTube Data API gateway for ytincome.
//!
//! This crate provides the channel data pipeline:
//!
//! - [`url::ApiEndpoints`] - Builds the search, channels, playlistItems and videos URLs
//! - [`YouTubeClient`] - HTTP client that resolves queries and fetches statistics
//! - [`ChannelSource`] - Seam between the estimation pipeline and the data backend

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/ytincome/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod api;
mod client;
mod source;
pub mod url;

pub use client::{ChannelDetails, ClientConfig, FetchError, YouTubeClient};
pub use source::ChannelSource;
