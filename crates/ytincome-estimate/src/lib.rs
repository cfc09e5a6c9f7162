//! Earnings estimation for the ytincome YouTube earnings calculator.
//!
//! This crate turns public channel statistics into income figures:
//!
//! - [`Estimator`] - Applies a [`RateModel`](ytincome_types::RateModel) to view counts
//! - [`estimate`] / [`estimate_at`] - The estimation formula as free functions
//! - [`channel_age_days`] - Whole days since channel creation, rounded up
//! - [`format_compact_number`] / [`format_currency`] - Display helpers
//! - [`ChannelAnalytics`] - Derived per-video and per-day channel metrics
//! - [`GrowthProjection`] - Twelve-month income projection

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/ytincome/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod analytics;
mod estimator;
mod format;
mod projection;

pub use analytics::{ActivityLevel, ChannelAnalytics, EngagementLevel};
pub use estimator::{
    DAYS_PER_MONTH, DAYS_PER_YEAR, Estimator, channel_age_days, channel_age_days_at, estimate,
    estimate_at, round_cents,
};
pub use format::{format_compact_number, format_currency, format_grouped};
pub use projection::{
    CONSERVATIVE_FACTOR, GrowthProjection, MONTHLY_GROWTH_RATE, OPTIMISTIC_FACTOR,
    PROJECTION_MONTHS, ProjectionPoint, ProjectionSummary,
};
