//! Core types for the ytincome YouTube earnings calculator.
//!
//! This crate provides the data structures shared by the ytincome crates:
//!
//! - [`ChannelQuery`] - A channel id, username or `@handle` to look up
//! - [`ChannelStatistics`] - Public counters and creation date of a channel
//! - [`Channel`] - Channel metadata with its statistics
//! - [`VideoStatistics`] - Counters of a single recent upload
//! - [`ChannelReport`] - A channel together with its recent uploads
//! - [`RateModel`] - CPM and monetized view share used for estimation
//! - [`Niche`] - Preset rate models per content niche
//! - [`EarningsEstimate`] - Daily, monthly and yearly income estimate

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/ytincome/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod channel;
mod earnings;
mod error;
mod popular;
mod query;
mod rates;

pub use channel::{Channel, ChannelReport, ChannelStatistics, VideoStatistics};
pub use earnings::{EarningsEstimate, Period};
pub use error::{QueryParseError, RateModelError, Result, YtIncomeError};
pub use popular::{POPULAR_CHANNELS, PopularChannel};
pub use query::{ChannelId, ChannelQuery};
pub use rates::{
    ADJUSTABLE_CPM_RANGE, ADJUSTABLE_MONETIZATION_PERCENT_RANGE, DEFAULT_COST_PER_THOUSAND_VIEWS,
    DEFAULT_MONETIZED_VIEW_SHARE, Niche, NicheParseError, RateModel,
};
