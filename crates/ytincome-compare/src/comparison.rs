//! Side-by-side comparison of a few channels.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ytincome_types::{Channel, ChannelId, EarningsEstimate, Period};

/// Maximum number of channels compared at once.
pub const MAX_COMPARED_CHANNELS: usize = 3;

/// Errors raised when adding to a [`ComparisonSet`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComparisonError {
    /// The channel is already in the set.
    #[error("Channel already added to comparison: {0}")]
    AlreadyAdded(ChannelId),

    /// The set holds the maximum number of channels.
    #[error("Comparison is full (at most {} channels)", MAX_COMPARED_CHANNELS)]
    Full,
}

/// A quantity compared across channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Subscriber count.
    Subscribers,
    /// Lifetime views.
    Views,
    /// Number of uploads.
    Videos,
    /// Estimated income for a period.
    Earnings(Period),
}

impl Metric {
    /// Every metric shown in a comparison, in display order.
    #[must_use]
    pub const fn all() -> [Self; 6] {
        [
            Self::Subscribers,
            Self::Views,
            Self::Videos,
            Self::Earnings(Period::Daily),
            Self::Earnings(Period::Monthly),
            Self::Earnings(Period::Yearly),
        ]
    }

    /// Returns the metric's display label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Subscribers => "Subscribers",
            Self::Views => "Total views",
            Self::Videos => "Videos",
            Self::Earnings(Period::Daily) => "Daily earnings",
            Self::Earnings(Period::Monthly) => "Monthly earnings",
            Self::Earnings(Period::Yearly) => "Yearly earnings",
        }
    }
}

/// A compared channel and its estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonEntry {
    /// The channel.
    pub channel: Channel,
    /// Its earnings estimate.
    pub earnings: EarningsEstimate,
}

impl ComparisonEntry {
    /// Returns the value of `metric` for this entry.
    #[must_use]
    pub fn value(&self, metric: Metric) -> f64 {
        let statistics = &self.channel.statistics;
        match metric {
            Metric::Subscribers => statistics.subscriber_count as f64,
            Metric::Views => statistics.view_count as f64,
            Metric::Videos => statistics.video_count as f64,
            Metric::Earnings(period) => self.earnings.for_period(period),
        }
    }
}

/// Up to [`MAX_COMPARED_CHANNELS`] distinct channels, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComparisonSet {
    entries: Vec<ComparisonEntry>,
}

impl ComparisonSet {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Adds a channel with its estimate.
    ///
    /// # Errors
    ///
    /// Returns [`ComparisonError::AlreadyAdded`] for a channel id already in
    /// the set and [`ComparisonError::Full`] when the set is at capacity.
    pub fn add(
        &mut self,
        channel: Channel,
        earnings: EarningsEstimate,
    ) -> Result<(), ComparisonError> {
        if self.contains(&channel.id) {
            return Err(ComparisonError::AlreadyAdded(channel.id));
        }
        if self.is_full() {
            return Err(ComparisonError::Full);
        }
        self.entries.push(ComparisonEntry { channel, earnings });
        Ok(())
    }

    /// Removes a channel, returning its entry if it was present.
    pub fn remove(&mut self, id: &ChannelId) -> Option<ComparisonEntry> {
        let index = self.entries.iter().position(|e| e.channel.id == *id)?;
        Some(self.entries.remove(index))
    }

    /// Removes the channel if present, otherwise adds it.
    ///
    /// Returns true if the channel is in the set afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`ComparisonError::Full`] when adding to a full set.
    pub fn toggle(
        &mut self,
        channel: Channel,
        earnings: EarningsEstimate,
    ) -> Result<bool, ComparisonError> {
        if self.remove(&channel.id).is_some() {
            return Ok(false);
        }
        self.add(channel, earnings)?;
        Ok(true)
    }

    /// Removes every channel.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns true if the channel is in the set.
    #[must_use]
    pub fn contains(&self, id: &ChannelId) -> bool {
        self.entries.iter().any(|e| e.channel.id == *id)
    }

    /// Returns the entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[ComparisonEntry] {
        &self.entries
    }

    /// Returns the number of channels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if no more channels can be added.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.entries.len() >= MAX_COMPARED_CHANNELS
    }

    /// Returns the largest value of `metric`, 0 for an empty set.
    #[must_use]
    pub fn max(&self, metric: Metric) -> f64 {
        self.entries
            .iter()
            .map(|e| e.value(metric))
            .fold(0.0, f64::max)
    }

    /// Returns `entry`'s value of `metric` as a percentage of the set maximum.
    #[must_use]
    pub fn share_of_max(&self, entry: &ComparisonEntry, metric: Metric) -> f64 {
        share(entry.value(metric), self.max(metric))
    }

    /// Returns the entry with the highest income for `period`.
    ///
    /// Ties go to the channel added first.
    #[must_use]
    pub fn top_earner(&self, period: Period) -> Option<&ComparisonEntry> {
        self.entries.iter().reduce(|best, e| {
            if e.earnings.for_period(period) > best.earnings.for_period(period) {
                e
            } else {
                best
            }
        })
    }
}

/// Returns `value` as a percentage of `max`, or 0 when `max` is 0.
#[must_use]
pub fn share(value: f64, max: f64) -> f64 {
    if max == 0.0 {
        return 0.0;
    }
    value / max * 100.0
}
