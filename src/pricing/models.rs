//! Domain values shared across the pricing module.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

/// A listing's rates after resolution across the recognized attribute
/// shapes. `Decimal::ZERO` means the rate was absent (or non-positive)
/// under every recognized spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedRates {
    pub daily: Decimal,
    pub monthly: Decimal,
}

impl ResolvedRates {
    pub fn has_daily(&self) -> bool {
        self.daily > Decimal::ZERO
    }

    pub fn has_monthly(&self) -> bool {
        self.monthly > Decimal::ZERO
    }
}

/// A validated booking date range, normalized to civil dates in the
/// reference time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// Inclusive count of calendar days spanned; a single-day booking
    /// has `total_days == 1`.
    pub total_days: i64,
}
