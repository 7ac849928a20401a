//! Booking price calculator core for the Rentiva rental platform.
//!
//! Given a listing's pricing terms (as fetched by the surrounding backend)
//! and a requested date range, validates the range and computes a full
//! price breakdown. Pure computation: no database, no network, no shared
//! state. The caller loads listing records and persists/displays the
//! returned breakdown.

pub mod error;
pub mod pricing;

// Re-export commonly used items
pub use error::{PricingError, Result};
pub use pricing::responses::PriceBreakdown;
pub use pricing::{compute_booking_price, validate_booking_dates, DateRange};
