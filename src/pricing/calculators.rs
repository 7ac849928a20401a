//! Core pricing calculation functions.
//!
//! Pure functions for pricing math - no I/O, no clock access. Date
//! validation and rate resolution happen before these are called.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

use crate::error::{PricingError, Result};

use super::models::ResolvedRates;

/// Days charged at the monthly rate per chunk; also the divisor when
/// deriving an effective per-day rate from a monthly rate.
pub const DAYS_PER_MONTH: i64 = 30;

/// Round to specified decimal places using banker's rounding (ROUND_HALF_EVEN).
///
/// Banker's rounding rounds to the nearest even number when the value is exactly
/// halfway between two possibilities. This reduces cumulative rounding bias.
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}

/// Raw outcome of pricing strategy selection, before any rounding.
#[derive(Debug, Clone)]
pub struct PricingOutcome {
    pub total_price: Decimal,
    pub monthly_charge: Decimal,
    pub daily_charge: Decimal,
    pub monthly_periods: i64,
    pub remaining_days: i64,
    pub method: String,
}

impl PricingOutcome {
    /// Round the monetary fields to 2 decimal places, each independently.
    ///
    /// Rounding happens once, here, never on intermediate per-unit rates.
    /// Because each field rounds on its own, `monthly_charge +
    /// daily_charge` can disagree with `total_price` by up to a cent;
    /// that is observable, documented behavior.
    pub fn rounded(mut self) -> Self {
        self.total_price = round_money(self.total_price, 2);
        self.monthly_charge = round_money(self.monthly_charge, 2);
        self.daily_charge = round_money(self.daily_charge, 2);
        self
    }
}

/// Select a pricing strategy and compute the stay's charges.
///
/// Four mutually exclusive scenarios, evaluated in priority order:
/// 1. neither rate set - no price is computable;
/// 2. both rates set: stays of [`DAYS_PER_MONTH`] days or more are
///    chunked into whole 30-day periods at the monthly rate plus
///    remaining days at the daily rate; shorter stays are charged the
///    cheaper of the plain daily method and the monthly-derived method,
///    with ties going to the daily method;
/// 3. only a daily rate - plain daily method;
/// 4. only a monthly rate - every day at the monthly-derived rate
///    (`monthly / 30`).
pub fn price_for_stay(rates: ResolvedRates, total_days: i64) -> Result<PricingOutcome> {
    debug_assert!(total_days >= 1);

    let days = Decimal::from(total_days);
    let per_month_days = Decimal::from(DAYS_PER_MONTH);

    let outcome = match (rates.has_daily(), rates.has_monthly()) {
        (false, false) => return Err(PricingError::NoPricingAvailable),
        (true, true) if total_days >= DAYS_PER_MONTH => {
            let monthly_periods = total_days / DAYS_PER_MONTH;
            let remaining_days = total_days % DAYS_PER_MONTH;
            let monthly_charge = Decimal::from(monthly_periods) * rates.monthly;
            let daily_charge = Decimal::from(remaining_days) * rates.daily;
            PricingOutcome {
                total_price: monthly_charge + daily_charge,
                monthly_charge,
                daily_charge,
                monthly_periods,
                remaining_days,
                method: format!(
                    "{} x 30-day period(s) at {} + {} day(s) at {}",
                    monthly_periods, rates.monthly, remaining_days, rates.daily
                ),
            }
        }
        (true, true) => {
            let daily_method = days * rates.daily;
            let monthly_derived = days * (rates.monthly / per_month_days);
            // Tie goes to the plain daily method, deliberately.
            if daily_method <= monthly_derived {
                PricingOutcome {
                    total_price: daily_method,
                    monthly_charge: Decimal::ZERO,
                    daily_charge: daily_method,
                    monthly_periods: 0,
                    remaining_days: 0,
                    method: format!("{} day(s) at daily rate {}", total_days, rates.daily),
                }
            } else {
                PricingOutcome {
                    total_price: monthly_derived,
                    monthly_charge: Decimal::ZERO,
                    daily_charge: monthly_derived,
                    monthly_periods: 0,
                    remaining_days: 0,
                    method: format!(
                        "{} day(s) at monthly-derived rate {} ({} / 30)",
                        total_days,
                        round_money(rates.monthly / per_month_days, 2),
                        rates.monthly
                    ),
                }
            }
        }
        (true, false) => {
            let daily_charge = days * rates.daily;
            PricingOutcome {
                total_price: daily_charge,
                monthly_charge: Decimal::ZERO,
                daily_charge,
                monthly_periods: 0,
                remaining_days: 0,
                method: format!("{} day(s) at daily rate {}", total_days, rates.daily),
            }
        }
        (false, true) => {
            let daily_charge = days * (rates.monthly / per_month_days);
            PricingOutcome {
                total_price: daily_charge,
                monthly_charge: Decimal::ZERO,
                daily_charge,
                monthly_periods: 0,
                remaining_days: 0,
                method: format!(
                    "{} day(s) at monthly-derived rate {} ({} / 30)",
                    total_days,
                    round_money(rates.monthly / per_month_days, 2),
                    rates.monthly
                ),
            }
        }
    };

    Ok(outcome.rounded())
}
