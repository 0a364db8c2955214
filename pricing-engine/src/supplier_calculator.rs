//! Per-supplier quote assembly
//!
//! Combines the resolved party context with one supplier's pricing inputs:
//! base price, weekend premium, extra hours, additional entertainers and
//! attached add-ons. Each component rounds to the money scale before it
//! accumulates, so the final price always equals the sum of its breakdown.

use chrono::NaiveDate;
use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use shared::models::{Addon, Supplier};

use crate::config::PricingConfig;
use crate::entertainers::additional_entertainer_info;
use crate::hours::{extra_hour_cost, extra_hours};
use crate::money::{round_money, to_decimal, to_f64};
use crate::weekend::{is_weekend, weekend_premium_cost};

/// Party inputs after defaults and fallbacks have been applied
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedPartyContext {
    pub date: Option<NaiveDate>,
    pub guest_count: u32,
    pub duration_hours: f64,
}

/// Cost components of a quote, in pounds
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub base: f64,
    pub weekend: f64,
    pub extra_hours: f64,
    pub addons: f64,
    pub additional_entertainers: f64,
}

/// Flags and figures rendered alongside the price
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuoteDetails {
    pub is_weekend: bool,
    /// Billable hours beyond the standard party length
    pub extra_hours: f64,
    pub has_addons: bool,
    pub is_lead_based: bool,
    pub is_venue: bool,
    pub guest_count: u32,
    pub additional_entertainers: u32,
    pub guests_per_entertainer: u32,
    pub additional_entertainer_price: f64,
    pub extra_hour_rate: f64,
}

/// One supplier's quote
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SupplierQuote {
    pub final_price: f64,
    /// Base before modifiers; for party bags this is the all-bags total
    pub base_price: f64,
    pub breakdown: PriceBreakdown,
    pub details: QuoteDetails,
}

impl SupplierQuote {
    /// All-zero quote, stands in for an absent supplier
    pub fn zeroed() -> Self {
        Self::default()
    }
}

/// Quote one supplier against the resolved party context. Total: malformed
/// inputs have already degraded to defaults, so every path prices.
pub fn quote_supplier(
    supplier: &Supplier,
    addons: &[&Addon],
    context: ResolvedPartyContext,
    config: &PricingConfig,
) -> SupplierQuote {
    let base = if supplier.category.is_per_guest() {
        // Party bags price per head
        round_money(to_decimal(supplier.base_price) * Decimal::from(context.guest_count))
    } else {
        round_money(to_decimal(supplier.base_price))
    };

    let staffing = additional_entertainer_info(supplier, context.guest_count, config);
    let entertainer_cost = staffing.map(|s| s.total_cost).unwrap_or_default();
    let weekend = weekend_premium_cost(supplier, context.date);
    let extra_cost = extra_hour_cost(supplier, context.duration_hours, config);
    let addon_total: Decimal = addons.iter().map(|a| round_money(to_decimal(a.price))).sum();

    let final_price = base
        + to_decimal(weekend)
        + to_decimal(extra_cost)
        + to_decimal(entertainer_cost)
        + addon_total;

    let billable_extra = if supplier.is_lead_based() {
        0.0
    } else {
        extra_hours(context.duration_hours, config)
    };

    SupplierQuote {
        final_price: to_f64(final_price),
        base_price: to_f64(base),
        breakdown: PriceBreakdown {
            base: to_f64(base),
            weekend,
            extra_hours: extra_cost,
            addons: to_f64(addon_total),
            additional_entertainers: entertainer_cost,
        },
        details: QuoteDetails {
            is_weekend: context.date.is_some_and(is_weekend),
            extra_hours: billable_extra,
            has_addons: !addons.is_empty(),
            is_lead_based: supplier.is_lead_based(),
            is_venue: supplier.is_venue,
            guest_count: context.guest_count,
            additional_entertainers: staffing.map(|s| s.additional_entertainers).unwrap_or(0),
            guests_per_entertainer: staffing.map(|s| s.guests_per_entertainer).unwrap_or(0),
            additional_entertainer_price: supplier.additional_entertainer_price,
            extra_hour_rate: supplier.extra_hour_rate,
        },
    }
}
