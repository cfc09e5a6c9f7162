//! Advertising rate model and niche presets.

use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::RateModelError;

/// Default revenue per 1,000 monetized views, in US dollars.
pub const DEFAULT_COST_PER_THOUSAND_VIEWS: f64 = 3.0;

/// Default fraction of views that carry a paid ad impression.
pub const DEFAULT_MONETIZED_VIEW_SHARE: f64 = 0.5;

/// CPM range offered for manual adjustment.
pub const ADJUSTABLE_CPM_RANGE: RangeInclusive<f64> = 1.0..=15.0;

/// Monetization percentage range offered for manual adjustment.
pub const ADJUSTABLE_MONETIZATION_PERCENT_RANGE: RangeInclusive<f64> = 30.0..=70.0;

/// Revenue assumptions used to turn views into income.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateModel {
    /// Revenue per 1,000 monetized views (CPM), in US dollars.
    pub cost_per_thousand_views: f64,
    /// Fraction of views that are monetized, in `[0, 1]`.
    pub monetized_view_share: f64,
}

impl RateModel {
    /// The default rate model: $3 CPM with half of all views monetized.
    pub const DEFAULT: Self = Self::from_parts(
        DEFAULT_COST_PER_THOUSAND_VIEWS,
        DEFAULT_MONETIZED_VIEW_SHARE,
    );

    /// Creates a validated rate model.
    ///
    /// # Errors
    ///
    /// Returns an error if the CPM is not a finite positive number or the
    /// share lies outside `[0, 1]`.
    pub fn new(
        cost_per_thousand_views: f64,
        monetized_view_share: f64,
    ) -> Result<Self, RateModelError> {
        if !cost_per_thousand_views.is_finite() || cost_per_thousand_views <= 0.0 {
            return Err(RateModelError::InvalidCostPerThousandViews(
                cost_per_thousand_views,
            ));
        }
        if !(0.0..=1.0).contains(&monetized_view_share) {
            return Err(RateModelError::InvalidMonetizedViewShare(
                monetized_view_share,
            ));
        }
        Ok(Self::from_parts(cost_per_thousand_views, monetized_view_share))
    }

    /// Creates a validated rate model from a monetization percentage (0-100).
    ///
    /// # Errors
    ///
    /// Returns an error under the same conditions as [`RateModel::new`].
    pub fn from_percent(
        cost_per_thousand_views: f64,
        monetized_percent: f64,
    ) -> Result<Self, RateModelError> {
        Self::new(cost_per_thousand_views, monetized_percent / 100.0)
    }

    /// Creates a rate model without validation.
    #[must_use]
    pub const fn from_parts(cost_per_thousand_views: f64, monetized_view_share: f64) -> Self {
        Self {
            cost_per_thousand_views,
            monetized_view_share,
        }
    }

    /// Returns the monetized share as a percentage.
    #[must_use]
    pub fn monetized_percent(&self) -> f64 {
        self.monetized_view_share * 100.0
    }

    /// Returns a copy with a different CPM.
    ///
    /// # Errors
    ///
    /// Returns an error if the new CPM is invalid.
    pub fn with_cost_per_thousand_views(
        self,
        cost_per_thousand_views: f64,
    ) -> Result<Self, RateModelError> {
        Self::new(cost_per_thousand_views, self.monetized_view_share)
    }

    /// Returns a copy with a different monetization percentage.
    ///
    /// # Errors
    ///
    /// Returns an error if the new share is invalid.
    pub fn with_monetized_percent(self, monetized_percent: f64) -> Result<Self, RateModelError> {
        Self::from_percent(self.cost_per_thousand_views, monetized_percent)
    }

    /// Returns true if both values lie within the manually adjustable ranges.
    #[must_use]
    pub fn is_within_adjustable_range(&self) -> bool {
        ADJUSTABLE_CPM_RANGE.contains(&self.cost_per_thousand_views)
            && ADJUSTABLE_MONETIZATION_PERCENT_RANGE.contains(&self.monetized_percent())
    }

    /// Returns the niche whose preset matches this model exactly, if any.
    #[must_use]
    pub fn matching_niche(&self) -> Option<Niche> {
        Niche::all().iter().copied().find(|n| n.rates() == *self)
    }
}

impl Default for RateModel {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::fmt::Display for RateModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "${:.2} CPM, {:.0}% monetized",
            self.cost_per_thousand_views,
            self.monetized_percent()
        )
    }
}

/// Content niche with a preset rate model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Niche {
    /// Platform-wide average.
    #[default]
    Average,
    /// Gaming content.
    Gaming,
    /// Technology reviews and tutorials.
    Tech,
    /// Personal finance and investing.
    Finance,
    /// Educational content.
    Education,
    /// General entertainment.
    Entertainment,
}

impl Niche {
    /// Returns the preset rate model for this niche.
    #[must_use]
    pub const fn rates(&self) -> RateModel {
        match self {
            Self::Average => RateModel::from_parts(3.0, 0.50),
            Self::Gaming => RateModel::from_parts(2.0, 0.45),
            Self::Tech => RateModel::from_parts(5.0, 0.55),
            Self::Finance => RateModel::from_parts(12.0, 0.60),
            Self::Education => RateModel::from_parts(4.0, 0.50),
            Self::Entertainment => RateModel::from_parts(2.5, 0.45),
        }
    }

    /// Returns the niche display name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Average => "Average",
            Self::Gaming => "Gaming",
            Self::Tech => "Tech",
            Self::Finance => "Finance",
            Self::Education => "Education",
            Self::Entertainment => "Entertainment",
        }
    }

    /// Returns all niches in presentation order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Average,
            Self::Gaming,
            Self::Tech,
            Self::Finance,
            Self::Education,
            Self::Entertainment,
        ]
    }
}

impl std::fmt::Display for Niche {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Niche {
    type Err = NicheParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "average" | "default" => Ok(Self::Average),
            "gaming" | "games" => Ok(Self::Gaming),
            "tech" | "technology" => Ok(Self::Tech),
            "finance" => Ok(Self::Finance),
            "education" => Ok(Self::Education),
            "entertainment" => Ok(Self::Entertainment),
            _ => Err(NicheParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an unknown niche name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NicheParseError(String);

impl std::fmt::Display for NicheParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid niche '{}', expected one of: average, gaming, tech, finance, education, entertainment",
            self.0
        )
    }
}

impl std::error::Error for NicheParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rates() {
        let rates = RateModel::default();
        assert_eq!(rates.cost_per_thousand_views, 3.0);
        assert_eq!(rates.monetized_view_share, 0.5);
        assert_eq!(rates, Niche::Average.rates());
        assert_eq!(rates.matching_niche(), Some(Niche::Average));
    }

    #[test]
    fn test_niche_presets() {
        assert_eq!(Niche::Gaming.rates(), RateModel::from_parts(2.0, 0.45));
        assert_eq!(Niche::Tech.rates(), RateModel::from_parts(5.0, 0.55));
        assert_eq!(Niche::Finance.rates(), RateModel::from_parts(12.0, 0.60));
        assert_eq!(Niche::Education.rates(), RateModel::from_parts(4.0, 0.50));
        assert_eq!(
            Niche::Entertainment.rates(),
            RateModel::from_parts(2.5, 0.45)
        );
        assert_eq!(Niche::all().len(), 6);
        assert!(
            Niche::all()
                .iter()
                .all(|n| n.rates().is_within_adjustable_range())
        );
    }

    #[test]
    fn test_niche_parse() {
        assert_eq!("finance".parse::<Niche>().unwrap(), Niche::Finance);
        assert_eq!("TECH".parse::<Niche>().unwrap(), Niche::Tech);
        assert_eq!(" Gaming ".parse::<Niche>().unwrap(), Niche::Gaming);
        assert!("cooking".parse::<Niche>().is_err());
    }

    #[test]
    fn test_rate_model_validation() {
        assert!(RateModel::new(3.0, 0.5).is_ok());
        assert!(RateModel::new(3.0, 0.0).is_ok());
        assert!(RateModel::new(3.0, 1.0).is_ok());
        assert_eq!(
            RateModel::new(0.0, 0.5),
            Err(RateModelError::InvalidCostPerThousandViews(0.0))
        );
        assert!(RateModel::new(f64::NAN, 0.5).is_err());
        assert!(RateModel::new(f64::INFINITY, 0.5).is_err());
        assert_eq!(
            RateModel::new(3.0, 1.5),
            Err(RateModelError::InvalidMonetizedViewShare(1.5))
        );
        assert!(RateModel::new(3.0, -0.1).is_err());
    }

    #[test]
    fn test_from_percent() {
        let rates = RateModel::from_percent(5.0, 55.0).unwrap();
        assert!((rates.monetized_view_share - 0.55).abs() < 1e-12);
        assert!(RateModel::from_percent(5.0, 120.0).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(RateModel::DEFAULT.to_string(), "$3.00 CPM, 50% monetized");
        assert_eq!(Niche::Finance.to_string(), "Finance");
    }

    #[test]
    fn test_adjustable_range() {
        assert!(!RateModel::from_parts(20.0, 0.5).is_within_adjustable_range());
        assert!(!RateModel::from_parts(3.0, 0.9).is_within_adjustable_range());
        let custom = RateModel::DEFAULT.with_cost_per_thousand_views(7.5).unwrap();
        assert!(custom.is_within_adjustable_range());
        assert_eq!(custom.matching_niche(), None);
    }
}
