//! Money calculation utilities using rust_decimal for precision
//!
//! All calculations run on `Decimal` internally, then convert to `f64` for
//! the store's JSON payloads. Quoting never rejects bad data (it degrades
//! to zero with a log line); the validators here are advisory, for callers
//! that want strictness at the ingestion boundary.

use rust_decimal::prelude::*;
use shared::PricingError;
use shared::models::{AddonRecord, PartyDetailsRecord, SupplierRecord, WeekendPremiumRecord};
use shared::models::{parse_clock_time, parse_party_date};

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Tolerance for monetary comparisons (0.01)
pub const MONEY_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Maximum allowed price on any record (£1,000,000)
pub const MAX_PRICE: f64 = 1_000_000.0;
/// Maximum allowed stored party duration in hours
pub const MAX_DURATION_HOURS: f64 = 24.0;

/// Convert f64 to Decimal for calculation
///
/// Quote inputs are not pre-validated, so NaN/Infinity can reach here from
/// raw records. Logs an error and returns ZERO to avoid silent corruption
/// in monetary calculations.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::error!(value = ?value, "Non-finite f64 in monetary calculation, defaulting to zero");
        Decimal::ZERO
    })
}

/// Round a Decimal to the money scale (2 decimal places, half away from zero)
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    round_money(value).to_f64().unwrap_or_default()
}

/// Compare two monetary values for equality (within 0.01 tolerance)
pub fn money_eq(a: f64, b: f64) -> bool {
    let diff = (to_decimal(a) - to_decimal(b)).abs();
    diff < MONEY_TOLERANCE
}

/// Validate that a f64 value is finite (not NaN, not Infinity)
#[inline]
fn require_finite(value: f64, field: &'static str) -> Result<(), PricingError> {
    if !value.is_finite() {
        return Err(PricingError::NonFiniteNumber { field, value });
    }
    Ok(())
}

/// Optional amount must be finite, non-negative and within bounds
fn check_amount(value: Option<f64>, field: &'static str) -> Result<(), PricingError> {
    let Some(value) = value else { return Ok(()) };
    require_finite(value, field)?;
    if value < 0.0 {
        return Err(PricingError::NegativeAmount { field, value });
    }
    if value > MAX_PRICE {
        return Err(PricingError::AmountTooLarge {
            field,
            max: MAX_PRICE,
            value,
        });
    }
    Ok(())
}

fn check_weekend_premium(premium: &WeekendPremiumRecord) -> Result<(), PricingError> {
    if !premium.enabled {
        return Ok(());
    }
    match premium.premium_type.as_deref() {
        Some("fixed") | Some("percentage") | None => {}
        Some(other) => {
            return Err(PricingError::UnknownPremiumType {
                value: other.to_string(),
            });
        }
    }
    check_amount(premium.amount, "weekendPremium.amount")?;
    if let Some(percent) = premium.percentage {
        require_finite(percent, "weekendPremium.percentage")?;
        if !(0.0..=100.0).contains(&percent) {
            return Err(PricingError::PercentageOutOfRange {
                field: "weekendPremium.percentage",
                value: percent,
            });
        }
    }
    Ok(())
}

/// Validate a supplier record before ingestion
pub fn validate_supplier_record(record: &SupplierRecord) -> Result<(), PricingError> {
    check_amount(record.price, "price")?;
    check_amount(record.original_price, "originalPrice")?;
    check_amount(record.price_from, "priceFrom")?;
    check_amount(record.extra_hour_rate, "extraHourRate")?;
    check_amount(
        record.additional_entertainer_price,
        "additionalEntertainerPrice",
    )?;

    if let Some(package) = &record.package_data {
        check_amount(package.price, "packageData.price")?;
        check_amount(package.original_price, "packageData.originalPrice")?;
        check_amount(package.total_price, "packageData.totalPrice")?;
    }

    if let Some(details) = &record.service_details {
        check_amount(details.extra_hour_rate, "serviceDetails.extraHourRate")?;
        check_amount(
            details.additional_entertainer_price,
            "serviceDetails.additionalEntertainerPrice",
        )?;
        if let Some(pricing) = &details.pricing {
            check_amount(pricing.hourly_rate, "serviceDetails.pricing.hourlyRate")?;
        }
    }

    if let Some(premium) = &record.weekend_premium {
        check_weekend_premium(premium)?;
    }

    Ok(())
}

/// Validate a party-details record before ingestion
pub fn validate_party_record(record: &PartyDetailsRecord) -> Result<(), PricingError> {
    if let Some(duration) = record.duration {
        require_finite(duration, "duration")?;
        if duration < 0.0 {
            return Err(PricingError::NegativeAmount {
                field: "duration",
                value: duration,
            });
        }
        if duration > MAX_DURATION_HOURS {
            return Err(PricingError::AmountTooLarge {
                field: "duration",
                max: MAX_DURATION_HOURS,
                value: duration,
            });
        }
    }

    if let Some(date) = record.date.as_deref()
        && !date.trim().is_empty()
        && parse_party_date(date).is_none()
    {
        return Err(PricingError::UnparseableField {
            field: "date",
            value: date.to_string(),
        });
    }

    let window = record.time.as_ref();
    let clocks = [
        ("startTime", record.start_time.as_deref()),
        ("endTime", record.end_time.as_deref()),
        ("time.start", window.and_then(|w| w.start.as_deref())),
        ("time.end", window.and_then(|w| w.end.as_deref())),
    ];
    for (field, raw) in clocks {
        if let Some(raw) = raw
            && !raw.trim().is_empty()
            && parse_clock_time(raw).is_none()
        {
            return Err(PricingError::UnparseableField {
                field,
                value: raw.to_string(),
            });
        }
    }

    Ok(())
}

/// Validate an add-on record before ingestion
pub fn validate_addon_record(record: &AddonRecord) -> Result<(), PricingError> {
    check_amount(record.price, "price")
}
