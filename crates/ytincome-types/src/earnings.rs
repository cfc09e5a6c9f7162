//! Earnings estimate representation.

use serde::{Deserialize, Serialize};

/// Estimated advertising income in US dollars, rounded to cents.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EarningsEstimate {
    /// Income per day.
    pub daily: f64,
    /// Income per 30-day month.
    pub monthly: f64,
    /// Income per 365-day year.
    pub yearly: f64,
}

impl EarningsEstimate {
    /// The all-zero estimate.
    pub const ZERO: Self = Self {
        daily: 0.0,
        monthly: 0.0,
        yearly: 0.0,
    };

    /// Creates a new estimate.
    #[must_use]
    pub const fn new(daily: f64, monthly: f64, yearly: f64) -> Self {
        Self {
            daily,
            monthly,
            yearly,
        }
    }

    /// Returns true if every period estimates zero income.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.daily == 0.0 && self.monthly == 0.0 && self.yearly == 0.0
    }

    /// Returns the amount for the given period.
    #[must_use]
    pub const fn for_period(&self, period: Period) -> f64 {
        match period {
            Period::Daily => self.daily,
            Period::Monthly => self.monthly,
            Period::Yearly => self.yearly,
        }
    }
}

/// An estimation period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    /// One day.
    Daily,
    /// Thirty days.
    Monthly,
    /// Three hundred and sixty-five days.
    Yearly,
}

impl Period {
    /// Returns the period as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }

    /// Returns all periods, shortest first.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Daily, Self::Monthly, Self::Yearly]
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
