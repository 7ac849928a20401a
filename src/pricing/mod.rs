//! Pricing engine module for Rentiva bookings.
//!
//! Validates a requested booking date range, resolves a listing's daily
//! and monthly rates out of the attribute shapes listings use upstream,
//! and selects a pricing strategy to produce a price breakdown.

pub mod calculators;
pub mod dates;
pub mod models;
pub mod rates;
pub mod responses;
pub mod services;

// Re-export commonly used items
pub use calculators::round_money;
pub use dates::{current_date, REFERENCE_ZONE};
pub use models::{DateRange, ResolvedRates};
pub use services::{compute_booking_price, validate_booking_dates};
