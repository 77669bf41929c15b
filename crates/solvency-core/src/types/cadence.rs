//! Payment cadence inferred from date intervals.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Inferred payment frequency, classified from the median interval (in days)
/// between consecutive occurrences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cadence {
    /// Median interval of 26-35 days.
    Monthly,
    /// Median interval of 12-16 days.
    Biweekly,
    /// Median interval of 6-8 days.
    Weekly,
    /// Anything outside the recognized bands.
    Irregular,
}

impl Cadence {
    /// Classifies a median day interval into a cadence band.
    #[must_use]
    pub fn from_median_days(median_days: f64) -> Self {
        if (26.0..=35.0).contains(&median_days) {
            Self::Monthly
        } else if (12.0..=16.0).contains(&median_days) {
            Self::Biweekly
        } else if (6.0..=8.0).contains(&median_days) {
            Self::Weekly
        } else {
            Self::Irregular
        }
    }

    /// Returns the wire code for this cadence.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Biweekly => "biweekly",
            Self::Weekly => "weekly",
            Self::Irregular => "irregular",
        }
    }
}

impl fmt::Display for Cadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cadence_bands() {
        assert_eq!(Cadence::from_median_days(30.0), Cadence::Monthly);
        assert_eq!(Cadence::from_median_days(26.0), Cadence::Monthly);
        assert_eq!(Cadence::from_median_days(35.0), Cadence::Monthly);
        assert_eq!(Cadence::from_median_days(14.0), Cadence::Biweekly);
        assert_eq!(Cadence::from_median_days(7.0), Cadence::Weekly);
    }

    #[test]
    fn test_cadence_band_edges_are_irregular() {
        assert_eq!(Cadence::from_median_days(25.9), Cadence::Irregular);
        assert_eq!(Cadence::from_median_days(35.1), Cadence::Irregular);
        assert_eq!(Cadence::from_median_days(17.0), Cadence::Irregular);
        assert_eq!(Cadence::from_median_days(9.0), Cadence::Irregular);
        assert_eq!(Cadence::from_median_days(1.0), Cadence::Irregular);
        assert_eq!(Cadence::from_median_days(90.0), Cadence::Irregular);
    }
}
