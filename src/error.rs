//! Error handling for the pricing core

use chrono::NaiveDate;

/// Booking price calculation error type.
///
/// Every variant is fatal to the call: all failures stem from invalid
/// input, not transient conditions, so callers must not retry. No partial
/// breakdown is ever returned alongside an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PricingError {
    #[error("invalid date format: {input:?}")]
    InvalidDateFormat { input: String },

    #[error("end date {end} is before start date {start}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("start date {start} is before the current date {today}")]
    PastStartDate { start: NaiveDate, today: NaiveDate },

    // Invariant assertion; unreachable through the public validation path.
    #[error("date range spans {total_days} days, expected at least 1")]
    EmptyRange { total_days: i64 },

    #[error("listing has no usable daily or monthly rate")]
    NoPricingAvailable,
}

pub type Result<T> = std::result::Result<T, PricingError>;
