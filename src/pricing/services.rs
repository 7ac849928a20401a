//! Public entry points for the booking workflow.
//!
//! These glue the date validator, rate resolver, and strategy selector
//! together. Pure computation over already-fetched listing records; the
//! caller persists or displays the returned breakdown.

use chrono::NaiveDate;
use serde_json::Value;

use crate::error::Result;

use super::calculators::price_for_stay;
use super::dates::{self, current_date};
use super::models::DateRange;
use super::rates::resolve_rates;
use super::responses::PriceBreakdown;

/// Validate a requested booking date range.
///
/// Usable standalone, ahead of fetching the listing, with the same rules
/// [`compute_booking_price`] applies. `today` overrides the sampled
/// current date (reference zone); pass `None` outside of tests.
pub fn validate_booking_dates(
    start: &str,
    end: &str,
    today: Option<NaiveDate>,
) -> Result<DateRange> {
    // Sampled once and held fixed for the whole call.
    let today = today.unwrap_or_else(current_date);
    dates::validate_range(start, end, today)
}

/// Compute the total price of a booking against a listing's pricing terms.
///
/// `listing` is the listing record as fetched upstream; its rates may be
/// expressed under any recognized attribute shape. Fails with one of
/// [`crate::PricingError`]'s variants on invalid dates or when the
/// listing has no usable rate; no partial breakdown is ever returned.
pub fn compute_booking_price(
    listing: &Value,
    start: &str,
    end: &str,
    today: Option<NaiveDate>,
) -> Result<PriceBreakdown> {
    let range = validate_booking_dates(start, end, today)?;
    let rates = resolve_rates(listing);
    let outcome = price_for_stay(rates, range.total_days)?;

    tracing::debug!(
        total_days = range.total_days,
        total_price = %outcome.total_price,
        method = %outcome.method,
        "priced booking"
    );

    Ok(PriceBreakdown {
        total_price: outcome.total_price,
        total_days: range.total_days,
        monthly_periods: outcome.monthly_periods,
        remaining_days: outcome.remaining_days,
        monthly_charge: outcome.monthly_charge,
        daily_charge: outcome.daily_charge,
        daily_rate: rates.daily,
        monthly_rate: rates.monthly,
        calculation_method: outcome.method,
        start_date: range.start,
        end_date: range.end,
    })
}
