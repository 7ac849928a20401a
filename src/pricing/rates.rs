//! Listing rate resolution.
//!
//! Listings express their rates under more than one attribute shape
//! upstream (a nested pricing object, or flat top-level fields, each with
//! day/night and month spellings). Each recognized shape is a
//! [`RateSource`]; resolution walks a fixed ordered chain and the first
//! positive value wins. Supporting a new shape means adding a source, not
//! rewriting the chain.

use rust_decimal::Decimal;
use serde_json::Value;

use super::models::ResolvedRates;

/// One recognized listing attribute shape.
pub trait RateSource {
    /// Short name for diagnostics.
    fn name(&self) -> &'static str;

    /// Daily rate under this shape, if present and positive.
    fn try_daily(&self, listing: &Value) -> Option<Decimal>;

    /// Monthly rate under this shape, if present and positive.
    fn try_monthly(&self, listing: &Value) -> Option<Decimal>;
}

/// Read a money value that may be a JSON number or a numeric string.
///
/// Missing, unparseable, and non-positive values are all "unset": a zero
/// or negative rate never participates in resolution.
fn positive_decimal(value: Option<&Value>) -> Option<Decimal> {
    let value = value?;
    let amount = match value {
        Value::String(s) => s.trim().parse::<Decimal>().ok()?,
        Value::Number(_) => {
            let f = value.as_f64()?;
            Decimal::try_from(f).ok()?
        }
        _ => return None,
    };
    (amount > Decimal::ZERO).then_some(amount)
}

/// The nested shape: `{"pricing": {"perDay": _, "perNight": _, "perMonth": _}}`.
///
/// `perDay` is preferred over `perNight` when both are set.
struct NestedPricing;

impl RateSource for NestedPricing {
    fn name(&self) -> &'static str {
        "nested pricing object"
    }

    fn try_daily(&self, listing: &Value) -> Option<Decimal> {
        let pricing = listing.get("pricing")?;
        positive_decimal(pricing.get("perDay"))
            .or_else(|| positive_decimal(pricing.get("perNight")))
    }

    fn try_monthly(&self, listing: &Value) -> Option<Decimal> {
        positive_decimal(listing.get("pricing")?.get("perMonth"))
    }
}

/// The flat shape: top-level `pricePerDay` / `pricePerNight` / `pricePerMonth`.
struct FlatFields;

impl RateSource for FlatFields {
    fn name(&self) -> &'static str {
        "flat price fields"
    }

    fn try_daily(&self, listing: &Value) -> Option<Decimal> {
        positive_decimal(listing.get("pricePerDay"))
            .or_else(|| positive_decimal(listing.get("pricePerNight")))
    }

    fn try_monthly(&self, listing: &Value) -> Option<Decimal> {
        positive_decimal(listing.get("pricePerMonth"))
    }
}

/// Resolution order. The nested object form takes precedence over the
/// flat fields, for each rate independently.
const SOURCES: [&dyn RateSource; 2] = [&NestedPricing, &FlatFields];

/// Resolve a listing's daily and monthly rates across all recognized
/// shapes. Either rate defaults to zero when absent under every spelling.
pub fn resolve_rates(listing: &Value) -> ResolvedRates {
    let mut daily = Decimal::ZERO;
    let mut monthly = Decimal::ZERO;

    for source in SOURCES {
        if daily == Decimal::ZERO {
            if let Some(rate) = source.try_daily(listing) {
                tracing::debug!(source = source.name(), %rate, "resolved daily rate");
                daily = rate;
            }
        }
        if monthly == Decimal::ZERO {
            if let Some(rate) = source.try_monthly(listing) {
                tracing::debug!(source = source.name(), %rate, "resolved monthly rate");
                monthly = rate;
            }
        }
    }

    ResolvedRates { daily, monthly }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    // ==================== positive_decimal tests ====================

    #[test]
    fn test_money_as_number_and_string() {
        assert_eq!(positive_decimal(Some(&json!(1000))), Some(dec!(1000)));
        assert_eq!(positive_decimal(Some(&json!(99.5))), Some(dec!(99.5)));
        assert_eq!(positive_decimal(Some(&json!("1000"))), Some(dec!(1000)));
        assert_eq!(positive_decimal(Some(&json!("  250.75 "))), Some(dec!(250.75)));
    }

    #[test]
    fn test_unset_money_forms() {
        assert_eq!(positive_decimal(None), None);
        assert_eq!(positive_decimal(Some(&json!(null))), None);
        assert_eq!(positive_decimal(Some(&json!(0))), None);
        assert_eq!(positive_decimal(Some(&json!(-5))), None);
        assert_eq!(positive_decimal(Some(&json!("cheap"))), None);
        assert_eq!(positive_decimal(Some(&json!({}))), None);
    }

    // ==================== resolve_rates tests ====================

    #[test]
    fn test_nested_shape() {
        let listing = json!({"pricing": {"perDay": 1000, "perMonth": 25000}});
        let rates = resolve_rates(&listing);
        assert_eq!(rates.daily, dec!(1000));
        assert_eq!(rates.monthly, dec!(25000));
    }

    #[test]
    fn test_flat_shape() {
        let listing = json!({"pricePerNight": "450", "pricePerMonth": "9000"});
        let rates = resolve_rates(&listing);
        assert_eq!(rates.daily, dec!(450));
        assert_eq!(rates.monthly, dec!(9000));
    }

    #[test]
    fn test_nested_day_beats_nested_night() {
        let listing = json!({"pricing": {"perDay": 800, "perNight": 900}});
        assert_eq!(resolve_rates(&listing).daily, dec!(800));
    }

    #[test]
    fn test_nested_beats_flat() {
        let listing = json!({
            "pricing": {"perNight": 700, "perMonth": 15000},
            "pricePerDay": 650,
            "pricePerMonth": 14000,
        });
        let rates = resolve_rates(&listing);
        assert_eq!(rates.daily, dec!(700));
        assert_eq!(rates.monthly, dec!(15000));
    }

    #[test]
    fn test_zero_nested_rate_falls_through_to_flat() {
        let listing = json!({"pricing": {"perDay": 0}, "pricePerNight": 550});
        assert_eq!(resolve_rates(&listing).daily, dec!(550));
    }

    #[test]
    fn test_rates_resolve_independently() {
        // Daily from the flat shape, monthly from the nested one
        let listing = json!({"pricing": {"perMonth": 12000}, "pricePerDay": 500});
        let rates = resolve_rates(&listing);
        assert_eq!(rates.daily, dec!(500));
        assert_eq!(rates.monthly, dec!(12000));
    }

    #[test]
    fn test_all_absent_resolves_to_zero() {
        let rates = resolve_rates(&json!({"title": "Cozy loft"}));
        assert_eq!(rates.daily, Decimal::ZERO);
        assert_eq!(rates.monthly, Decimal::ZERO);
        assert!(!rates.has_daily());
        assert!(!rates.has_monthly());
    }
}
