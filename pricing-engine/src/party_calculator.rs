//! Whole-party quote
//!
//! Aggregates every booked slot's quote plus standalone add-ons into one
//! party total, itemized for the review screen. Attached add-ons are priced
//! inside their supplier's quote; standalone add-ons are summed once at the
//! party level.

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use shared::models::{Addon, PartyPlan};

use crate::config::PricingConfig;
use crate::money::{round_money, to_decimal, to_f64};
use crate::supplier_calculator::{ResolvedPartyContext, SupplierQuote, quote_supplier};

/// One booked slot's contribution to the party total
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SupplierLine {
    pub slot: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier_name: Option<String>,
    pub final_price: f64,
    pub quote: SupplierQuote,
}

/// Itemized sums across all booked suppliers
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuoteTotals {
    pub base: f64,
    pub weekend: f64,
    pub extra_hours: f64,
    pub additional_entertainers: f64,
    pub attached_addons: f64,
    pub standalone_addons: f64,
}

/// Party-wide quote
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PartyQuote {
    pub total: f64,
    pub supplier_breakdown: Vec<SupplierLine>,
    pub totals: QuoteTotals,
    pub has_weekend_premium: bool,
    pub has_extra_hour_costs: bool,
    pub has_additional_entertainer_costs: bool,
}

/// Quote the whole party. Slot order follows the plan's map order, so the
/// breakdown renders stably across calls.
pub fn quote_party(
    plan: &PartyPlan,
    addons: &[Addon],
    context: ResolvedPartyContext,
    config: &PricingConfig,
) -> PartyQuote {
    let mut total = Decimal::ZERO;
    let mut base = Decimal::ZERO;
    let mut weekend = Decimal::ZERO;
    let mut extra_hours = Decimal::ZERO;
    let mut entertainers = Decimal::ZERO;
    let mut attached_addons = Decimal::ZERO;
    let mut supplier_breakdown = Vec::with_capacity(plan.slots.len());
    let mut matched = vec![false; addons.len()];

    for (slot, supplier) in &plan.slots {
        let mut attached: Vec<&Addon> = Vec::new();
        for (i, addon) in addons.iter().enumerate() {
            if !addon.is_standalone() && addon.belongs_to(supplier, slot) {
                matched[i] = true;
                attached.push(addon);
            }
        }

        let quote: SupplierQuote = quote_supplier(supplier, &attached, context, config);
        total += to_decimal(quote.final_price);
        base += to_decimal(quote.breakdown.base);
        weekend += to_decimal(quote.breakdown.weekend);
        extra_hours += to_decimal(quote.breakdown.extra_hours);
        entertainers += to_decimal(quote.breakdown.additional_entertainers);
        attached_addons += to_decimal(quote.breakdown.addons);

        supplier_breakdown.push(SupplierLine {
            slot: slot.clone(),
            supplier_id: supplier.id.clone(),
            supplier_name: supplier.name.clone(),
            final_price: quote.final_price,
            quote,
        });
    }

    let mut standalone_addons = Decimal::ZERO;
    for (i, addon) in addons.iter().enumerate() {
        if addon.is_standalone() {
            standalone_addons += round_money(to_decimal(addon.price));
        } else if !matched[i] {
            tracing::debug!(addon = ?addon.name, "add-on attached to an unbooked slot, dropped");
        }
    }
    total += standalone_addons;

    PartyQuote {
        total: to_f64(total),
        supplier_breakdown,
        totals: QuoteTotals {
            base: to_f64(base),
            weekend: to_f64(weekend),
            extra_hours: to_f64(extra_hours),
            additional_entertainers: to_f64(entertainers),
            attached_addons: to_f64(attached_addons),
            standalone_addons: to_f64(standalone_addons),
        },
        has_weekend_premium: weekend != Decimal::ZERO,
        has_extra_hour_costs: extra_hours != Decimal::ZERO,
        has_additional_entertainer_costs: entertainers != Decimal::ZERO,
    }
}
