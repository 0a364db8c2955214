//! Additional entertainer staffing
//!
//! An entertainment booking includes one entertainer covering a maximum
//! group size. Bigger parties need one more entertainer per further block
//! of that size, billed at the supplier's configured price.

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use shared::models::{Supplier, SupplierCategory};

use crate::config::PricingConfig;
use crate::money::{to_decimal, to_f64};

/// Staffing a party needs beyond the included entertainer
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EntertainerStaffing {
    /// Guests one entertainer covers
    pub guests_per_entertainer: u32,
    /// Entertainers needed beyond the first
    pub additional_entertainers: u32,
    pub price_per_entertainer: f64,
    pub total_cost: f64,
}

fn offers_additional_entertainers(supplier: &Supplier) -> bool {
    supplier.category == SupplierCategory::Entertainment
        && supplier.additional_entertainer_price > 0.0
}

/// Staffing above the included entertainer. `None` when the supplier does
/// not offer additional entertainers or the party fits under one.
pub fn additional_entertainer_info(
    supplier: &Supplier,
    guest_count: u32,
    config: &PricingConfig,
) -> Option<EntertainerStaffing> {
    if !offers_additional_entertainers(supplier) {
        return None;
    }
    let per_entertainer = supplier
        .group_size_max
        .unwrap_or(config.default_group_size_max)
        .max(1);
    let additional = guest_count
        .saturating_sub(per_entertainer)
        .div_ceil(per_entertainer);
    if additional == 0 {
        return None;
    }
    let total = to_decimal(supplier.additional_entertainer_price) * Decimal::from(additional);
    Some(EntertainerStaffing {
        guests_per_entertainer: per_entertainer,
        additional_entertainers: additional,
        price_per_entertainer: supplier.additional_entertainer_price,
        total_cost: to_f64(total),
    })
}

pub fn requires_additional_entertainers(
    supplier: &Supplier,
    guest_count: u32,
    config: &PricingConfig,
) -> bool {
    additional_entertainer_info(supplier, guest_count, config).is_some()
}

/// Additional entertainer cost in pounds, zero when none are needed
pub fn additional_entertainer_cost(
    supplier: &Supplier,
    guest_count: u32,
    config: &PricingConfig,
) -> f64 {
    additional_entertainer_info(supplier, guest_count, config)
        .map(|staffing| staffing.total_cost)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entertainer(group_size_max: Option<u32>, price: f64) -> Supplier {
        Supplier {
            category: SupplierCategory::Entertainment,
            group_size_max,
            additional_entertainer_price: price,
            ..Default::default()
        }
    }

    #[test]
    fn test_party_fits_under_one_entertainer() {
        let supplier = entertainer(Some(30), 50.0);
        let config = PricingConfig::default();
        assert_eq!(additional_entertainer_info(&supplier, 30, &config), None);
        assert!(!requires_additional_entertainers(&supplier, 12, &config));
        assert_eq!(additional_entertainer_cost(&supplier, 30, &config), 0.0);
    }

    #[test]
    fn test_each_block_of_guests_adds_one() {
        let supplier = entertainer(Some(30), 50.0);
        let config = PricingConfig::default();

        // 31 guests: one over, one more entertainer
        let staffing = additional_entertainer_info(&supplier, 31, &config).unwrap();
        assert_eq!(staffing.additional_entertainers, 1);
        assert_eq!(staffing.total_cost, 50.0);

        // 60 guests still fit two entertainers
        let staffing = additional_entertainer_info(&supplier, 60, &config).unwrap();
        assert_eq!(staffing.additional_entertainers, 1);

        // 61 guests: 31 over capacity, two more entertainers, £100
        let staffing = additional_entertainer_info(&supplier, 61, &config).unwrap();
        assert_eq!(staffing.guests_per_entertainer, 30);
        assert_eq!(staffing.additional_entertainers, 2);
        assert_eq!(staffing.price_per_entertainer, 50.0);
        assert_eq!(staffing.total_cost, 100.0);
    }

    #[test]
    fn test_default_group_size_when_unconfigured() {
        let supplier = entertainer(None, 40.0);
        let config = PricingConfig::default();
        let staffing = additional_entertainer_info(&supplier, 45, &config).unwrap();
        assert_eq!(staffing.guests_per_entertainer, 30);
        assert_eq!(staffing.additional_entertainers, 1);
    }

    #[test]
    fn test_only_entertainment_with_a_price_qualifies() {
        let config = PricingConfig::default();

        let mut supplier = entertainer(Some(10), 0.0);
        assert_eq!(additional_entertainer_info(&supplier, 50, &config), None);

        supplier.additional_entertainer_price = 50.0;
        supplier.category = SupplierCategory::Venue;
        assert_eq!(additional_entertainer_info(&supplier, 50, &config), None);
    }
}
