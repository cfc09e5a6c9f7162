//! Advertising income estimation.

use chrono::{DateTime, Utc};
use ytincome_types::{ChannelStatistics, EarningsEstimate, RateModel};

/// Days in an estimated month.
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Days in an estimated year.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Views per CPM unit.
const VIEWS_PER_MILLE: f64 = 1000.0;

const MILLIS_PER_DAY: u64 = 24 * 60 * 60 * 1000;

/// Returns the channel age in whole days, rounded up, measured to now.
#[must_use]
pub fn channel_age_days(published_at: DateTime<Utc>) -> u64 {
    channel_age_days_at(published_at, Utc::now())
}

/// Returns the channel age in whole days, rounded up, measured to `now`.
///
/// The distance is absolute, so a creation date after `now` still yields a
/// positive age.
#[must_use]
pub fn channel_age_days_at(published_at: DateTime<Utc>, now: DateTime<Utc>) -> u64 {
    let elapsed_ms = (now - published_at).num_milliseconds().unsigned_abs();
    elapsed_ms.div_ceil(MILLIS_PER_DAY)
}

/// Rounds a dollar amount to cents, halves rounding up.
#[must_use]
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0 + 0.5).floor() / 100.0
}

/// Estimates income for a channel as of now.
#[must_use]
pub fn estimate(
    view_count: u64,
    published_at: DateTime<Utc>,
    rates: &RateModel,
) -> EarningsEstimate {
    estimate_at(view_count, published_at, rates, Utc::now())
}

/// Estimates income for a channel as of `now`.
///
/// Average daily views over the channel lifetime are scaled by the monetized
/// share and the CPM. A channel younger than one day yields
/// [`EarningsEstimate::ZERO`].
#[must_use]
pub fn estimate_at(
    view_count: u64,
    published_at: DateTime<Utc>,
    rates: &RateModel,
    now: DateTime<Utc>,
) -> EarningsEstimate {
    let age_days = channel_age_days_at(published_at, now);
    if age_days == 0 {
        return EarningsEstimate::ZERO;
    }

    let avg_daily_views = view_count as f64 / age_days as f64;
    let daily_monetized_views = avg_daily_views * rates.monetized_view_share;
    let daily = daily_monetized_views / VIEWS_PER_MILLE * rates.cost_per_thousand_views;

    EarningsEstimate::new(
        round_cents(daily),
        round_cents(daily * DAYS_PER_MONTH),
        round_cents(daily * DAYS_PER_YEAR),
    )
}

/// Income estimator bound to a fixed rate model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimator {
    rates: RateModel,
}

impl Estimator {
    /// Creates an estimator with the given rate model.
    #[must_use]
    pub const fn new(rates: RateModel) -> Self {
        Self { rates }
    }

    /// Returns the rate model.
    #[must_use]
    pub const fn rates(&self) -> &RateModel {
        &self.rates
    }

    /// Estimates income for the given statistics as of now.
    #[must_use]
    pub fn estimate(&self, statistics: &ChannelStatistics) -> EarningsEstimate {
        self.estimate_at(statistics, Utc::now())
    }

    /// Estimates income for the given statistics as of `now`.
    #[must_use]
    pub fn estimate_at(
        &self,
        statistics: &ChannelStatistics,
        now: DateTime<Utc>,
    ) -> EarningsEstimate {
        estimate_at(
            statistics.view_count,
            statistics.published_at,
            &self.rates,
            now,
        )
    }
}

impl Default for Estimator {
    fn default() -> Self {
        Self::new(RateModel::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use chrono::{Duration, TimeZone};
    use ytincome_types::Niche;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_one_year_default_rates() {
        let published = now() - Duration::days(365);
        let estimate = estimate_at(365_000, published, &RateModel::DEFAULT, now());

        assert_eq!(estimate.daily, 1.50);
        assert_eq!(estimate.monthly, 45.00);
        assert_eq!(estimate.yearly, 547.50);
    }

    #[test]
    fn test_published_now_is_zero() {
        let estimate = estimate_at(1_000_000, now(), &RateModel::DEFAULT, now());
        assert_eq!(estimate, EarningsEstimate::ZERO);
    }

    #[test]
    fn test_zero_views_is_zero() {
        for days in [1, 30, 365, 5000] {
            let published = now() - Duration::days(days);
            let estimate = estimate_at(0, published, &RateModel::DEFAULT, now());
            assert!(estimate.is_zero());
        }
    }

    #[test]
    fn test_channel_age_rounds_up() {
        assert_eq!(channel_age_days_at(now(), now()), 0);
        assert_eq!(channel_age_days_at(now() - Duration::milliseconds(1), now()), 1);
        assert_eq!(channel_age_days_at(now() - Duration::days(1), now()), 1);
        assert_eq!(
            channel_age_days_at(now() - Duration::days(1) - Duration::minutes(1), now()),
            2
        );
        // Future creation dates count by absolute distance
        assert_eq!(channel_age_days_at(now() + Duration::days(3), now()), 3);
    }

    #[test]
    fn test_period_multipliers() {
        let published = now() - Duration::days(997);
        for views in [1_234, 98_765, 4_567_891, 12_345_678_901] {
            let estimate = estimate_at(views, published, &RateModel::DEFAULT, now());
            // Each period is rounded independently, so the tolerance scales with the multiplier
            assert_abs_diff_eq!(estimate.daily * 30.0, estimate.monthly, epsilon = 0.155 + 1e-9);
            assert_abs_diff_eq!(estimate.daily * 365.0, estimate.yearly, epsilon = 1.83 + 1e-9);
        }

        // Whole-cent daily figures scale exactly
        let published = now() - Duration::days(365);
        let estimate = estimate_at(730_000, published, &RateModel::DEFAULT, now());
        assert_abs_diff_eq!(estimate.daily * 30.0, estimate.monthly, epsilon = 0.01);
        assert_abs_diff_eq!(estimate.daily * 365.0, estimate.yearly, epsilon = 0.01);
    }

    #[test]
    fn test_monotonic_in_views() {
        let published = now() - Duration::days(400);
        let mut previous = 0.0;
        for views in (0..50).map(|i| i * 37_517) {
            let daily = estimate_at(views, published, &RateModel::DEFAULT, now()).daily;
            assert!(daily >= previous);
            previous = daily;
        }
    }

    #[test]
    fn test_doubling_cpm_doubles_output() {
        let published = now() - Duration::days(800);
        let base = RateModel::DEFAULT;
        let doubled = RateModel::from_parts(
            base.cost_per_thousand_views * 2.0,
            base.monetized_view_share,
        );

        let single = estimate_at(3_333_333, published, &base, now());
        let double = estimate_at(3_333_333, published, &doubled, now());

        assert_abs_diff_eq!(single.daily * 2.0, double.daily, epsilon = 0.011);
        assert_abs_diff_eq!(single.monthly * 2.0, double.monthly, epsilon = 0.011);
        assert_abs_diff_eq!(single.yearly * 2.0, double.yearly, epsilon = 0.011);
    }

    #[test]
    fn test_estimator_with_niche() {
        let statistics = ChannelStatistics::new(365_000, 1_000, 10, now() - Duration::days(365));

        let finance = Estimator::new(Niche::Finance.rates()).estimate_at(&statistics, now());
        // 1000 views/day * 0.6 = 600 monetized views, at $12 CPM
        assert_eq!(finance.daily, 7.20);
        assert_eq!(finance.monthly, 216.00);
        assert_eq!(finance.yearly, 2628.00);

        let default = Estimator::default().estimate_at(&statistics, now());
        assert_eq!(default.daily, 1.50);
        assert_eq!(Estimator::default().rates(), &RateModel::DEFAULT);
    }

    #[test]
    fn test_round_cents() {
        assert_eq!(round_cents(1.005_000_1), 1.01);
        assert_eq!(round_cents(1.004), 1.0);
        assert_eq!(round_cents(0.125), 0.13);
        assert_eq!(round_cents(547.5), 547.5);
    }
}
