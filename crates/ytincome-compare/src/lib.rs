//! Comparison and search-history state for ytincome.
//!
//! - [`ComparisonSet`] - Up to three channels compared side by side
//! - [`Metric`] - Statistics and earnings periods a comparison ranks on
//! - [`RecentSearches`] - Bounded most-recent-first search history

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/ytincome/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod comparison;
mod recent;

pub use comparison::{
    ComparisonEntry, ComparisonError, ComparisonSet, MAX_COMPARED_CHANNELS, Metric, share,
};
pub use recent::{DEFAULT_RECENT_CAPACITY, RecentSearches};
