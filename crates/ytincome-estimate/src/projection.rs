//! Monthly income growth projections.

use serde::{Deserialize, Serialize};

use crate::round_cents;

/// Assumed month-over-month income growth factor.
pub const MONTHLY_GROWTH_RATE: f64 = 1.05;

/// Scale applied to the projection for the conservative band.
pub const CONSERVATIVE_FACTOR: f64 = 0.8;

/// Scale applied to the projection for the optimistic band.
pub const OPTIMISTIC_FACTOR: f64 = 1.2;

/// Number of months projected after the current one.
pub const PROJECTION_MONTHS: u32 = 12;

/// Projected monthly income at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    /// Months from now, 0 being the current month.
    pub month: u32,
    /// Expected monthly income.
    pub earnings: f64,
    /// Lower band.
    pub conservative: f64,
    /// Upper band.
    pub optimistic: f64,
}

impl ProjectionPoint {
    /// Returns a short label such as "Now" or "+3m".
    #[must_use]
    pub fn label(&self) -> String {
        if self.month == 0 {
            "Now".to_string()
        } else {
            format!("+{}m", self.month)
        }
    }
}

/// Headline figures of a projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    /// Expected monthly income in three months.
    pub three_months: Option<f64>,
    /// Expected monthly income in six months.
    pub six_months: Option<f64>,
    /// Expected monthly income in twelve months.
    pub twelve_months: Option<f64>,
}

/// Compounding monthly income projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthProjection {
    growth_rate: f64,
    points: Vec<ProjectionPoint>,
}

impl GrowthProjection {
    /// Projects the default twelve months at 5% monthly growth.
    #[must_use]
    pub fn new(current_monthly: f64) -> Self {
        Self::with_rate(current_monthly, MONTHLY_GROWTH_RATE, PROJECTION_MONTHS)
    }

    /// Projects `months` months ahead at the given monthly growth factor.
    ///
    /// The running value compounds unrounded; each point is rounded to cents.
    #[must_use]
    pub fn with_rate(current_monthly: f64, growth_rate: f64, months: u32) -> Self {
        let mut points = Vec::with_capacity(months as usize + 1);
        let mut monthly = current_monthly;

        for month in 0..=months {
            points.push(ProjectionPoint {
                month,
                earnings: round_cents(monthly),
                conservative: round_cents(monthly * CONSERVATIVE_FACTOR),
                optimistic: round_cents(monthly * OPTIMISTIC_FACTOR),
            });
            monthly *= growth_rate;
        }

        Self {
            growth_rate,
            points,
        }
    }

    /// Returns the monthly growth factor.
    #[must_use]
    pub const fn growth_rate(&self) -> f64 {
        self.growth_rate
    }

    /// Returns all points, starting with the current month.
    #[must_use]
    pub fn points(&self) -> &[ProjectionPoint] {
        &self.points
    }

    /// Returns the point `month` months from now.
    #[must_use]
    pub fn at(&self, month: u32) -> Option<&ProjectionPoint> {
        self.points.get(month as usize)
    }

    /// Returns the headline three, six and twelve month figures.
    #[must_use]
    pub fn summary(&self) -> ProjectionSummary {
        let earnings = |month| self.at(month).map(|p| p.earnings);
        ProjectionSummary {
            three_months: earnings(3),
            six_months: earnings(6),
            twelve_months: earnings(12),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_default_projection() {
        let projection = GrowthProjection::new(100.0);
        let points = projection.points();

        assert_eq!(points.len(), 13);
        assert_eq!(points[0].earnings, 100.0);
        assert_eq!(points[0].conservative, 80.0);
        assert_eq!(points[0].optimistic, 120.0);
        assert_eq!(points[1].earnings, 105.0);
        assert_eq!(points[3].earnings, 115.76);
        assert_abs_diff_eq!(points[12].earnings, 100.0 * 1.05f64.powi(12), epsilon = 0.005);
        assert_eq!(points[12].earnings, 179.59);
    }

    #[test]
    fn test_summary() {
        let summary = GrowthProjection::new(45.0).summary();
        assert_eq!(summary.three_months, Some(52.09));
        assert_eq!(summary.six_months, Some(60.3));
        assert_eq!(summary.twelve_months, Some(80.81));

        let short = GrowthProjection::with_rate(45.0, 1.05, 4).summary();
        assert_eq!(short.three_months, Some(52.09));
        assert_eq!(short.six_months, None);
    }

    #[test]
    fn test_zero_income_stays_zero() {
        let projection = GrowthProjection::new(0.0);
        assert!(projection.points().iter().all(|p| p.earnings == 0.0));
    }

    #[test]
    fn test_labels() {
        let projection = GrowthProjection::new(10.0);
        assert_eq!(projection.at(0).unwrap().label(), "Now");
        assert_eq!(projection.at(6).unwrap().label(), "+6m");
        assert!(projection.at(13).is_none());
        assert_eq!(projection.growth_rate(), MONTHLY_GROWTH_RATE);
    }
}
