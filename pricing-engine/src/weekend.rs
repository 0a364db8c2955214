//! Weekend premium
//!
//! Suppliers can charge extra for Saturday and Sunday parties, either a
//! fixed amount or a percentage of their base price. Lead-time suppliers
//! (party bags, cakes, decorations) prepare ahead of the date and never
//! charge it, whatever their record says.

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::prelude::*;
use shared::models::{Supplier, WeekendPremium};

use crate::money::{to_decimal, to_f64};

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Weekend premium in pounds for a supplier on a given date. Zero when the
/// date is unknown, falls on a weekday, or the supplier is lead-based.
pub fn weekend_premium_cost(supplier: &Supplier, date: Option<NaiveDate>) -> f64 {
    if supplier.is_lead_based() {
        return 0.0;
    }
    let Some(date) = date else {
        return 0.0;
    };
    if !is_weekend(date) {
        return 0.0;
    }
    match supplier.weekend_premium {
        Some(WeekendPremium::Fixed { amount }) => to_f64(to_decimal(amount)),
        Some(WeekendPremium::Percentage { percent }) => {
            // Percentage premiums quote in whole pounds
            let premium =
                to_decimal(supplier.base_price) * to_decimal(percent) / Decimal::ONE_HUNDRED;
            premium
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
                .to_f64()
                .unwrap_or_default()
        }
        None => 0.0,
    }
}
