//! Output DTOs returned to the booking workflow.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

/// Full price breakdown for a booking.
///
/// Constructed fresh on every call; identical inputs produce identical
/// breakdowns. Monetary fields are rounded to 2 decimal places and
/// serialized as strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceBreakdown {
    #[serde(with = "rust_decimal::serde::str")]
    pub total_price: Decimal,
    /// Inclusive calendar days spanned by the booking.
    pub total_days: i64,
    /// Whole 30-day periods charged at the monthly rate; zero unless the
    /// monthly-chunking strategy was used.
    pub monthly_periods: i64,
    /// Days beyond the last whole 30-day period; zero unless the
    /// monthly-chunking strategy was used.
    pub remaining_days: i64,
    #[serde(with = "rust_decimal::serde::str")]
    pub monthly_charge: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub daily_charge: Decimal,
    /// Resolved input rates, echoed back; zero when unset.
    #[serde(with = "rust_decimal::serde::str")]
    pub daily_rate: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub monthly_rate: Decimal,
    /// Human-readable description of the strategy and rate that produced
    /// the total. For display and audit, not for machine parsing.
    pub calculation_method: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}
