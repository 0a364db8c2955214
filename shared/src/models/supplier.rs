//! Supplier Model
//!
//! `SupplierRecord` mirrors the stored JSON: camelCase, every field
//! optional, legacy aliases intact. `Supplier` is the normalized form the
//! engine consumes, produced once by [`Supplier::from_record`]: the category
//! is classified, the base-price precedence chain is collapsed to a single
//! unit price, and the extra-hour rate is sourced for the supplier's billing
//! style.

use serde::{Deserialize, Serialize};

use crate::models::addon::AddonRecord;
use crate::models::category::SupplierCategory;

/// Per-bag price assumed for party-bag listings with no stored price
pub const DEFAULT_PARTY_BAG_UNIT: f64 = 5.0;

/// Weekend premium configuration as stored on a supplier record
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct WeekendPremiumRecord {
    #[serde(default)]
    pub enabled: bool,
    /// "fixed" or "percentage"
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub premium_type: Option<String>,
    /// Fixed premium in pounds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    /// Premium as a percentage of the base price
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage: Option<f64>,
}

/// Package-level pricing attached by the booking flow
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PackageData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    /// Package price with selected add-ons already folded in. Display-only;
    /// using it as a base price would charge the add-ons twice.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_addons: Option<Vec<AddonRecord>>,
}

/// Hourly pricing nested under `serviceDetails`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ServicePricing {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<f64>,
}

/// Service configuration nested on a supplier record
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_hour_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_size_max: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_entertainer_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing: Option<ServicePricing>,
}

/// Supplier record as it arrives from the store
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SupplierRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Legacy alias for `category`
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub supplier_type: Option<String>,
    /// "venue" marks venue-style hourly billing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_type: Option<String>,
    /// Current listed price in pounds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// Pre-discount price in pounds, preferred base when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    /// "from £X" marketing price, last-resort base
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_from: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_hour_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekend_premium: Option<WeekendPremiumRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_data: Option<PackageData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_details: Option<ServiceDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_size_max: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_entertainer_price: Option<f64>,
}

impl SupplierRecord {
    /// Add-ons already selected inside the package, for UI badges.
    /// The engine never prices these; the package price covers them.
    pub fn package_addon_count(&self) -> usize {
        self.package_data
            .as_ref()
            .and_then(|p| p.selected_addons.as_ref())
            .map(Vec::len)
            .unwrap_or(0)
    }
}

/// Weekend premium, normalized
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WeekendPremium {
    Fixed { amount: f64 },
    Percentage { percent: f64 },
}

/// Supplier with every pricing input resolved. The engine never reads raw
/// records.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub id: Option<String>,
    pub name: Option<String>,
    pub category: SupplierCategory,
    /// Venue-style hourly billing (serviceType "venue" or a Venue category)
    pub is_venue: bool,
    /// Resolved base price in pounds (per bag for party bags)
    pub base_price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekend_premium: Option<WeekendPremium>,
    /// Resolved extra-hour rate in pounds per hour
    pub extra_hour_rate: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_size_max: Option<u32>,
    /// Price per additional entertainer in pounds
    pub additional_entertainer_price: f64,
}

impl Supplier {
    /// Normalize a raw record. Total: malformed fields degrade to defaults
    /// with a warning, they never abort ingestion.
    pub fn from_record(record: &SupplierRecord) -> Self {
        let category = SupplierCategory::from_labels(
            record.category.as_deref(),
            record.supplier_type.as_deref(),
        );
        let is_venue = record
            .service_type
            .as_deref()
            .is_some_and(|s| s.trim().eq_ignore_ascii_case("venue"))
            || category == SupplierCategory::Venue;

        Self {
            id: non_empty(record.id.as_deref()),
            name: non_empty(record.name.as_deref()),
            category,
            is_venue,
            base_price: resolve_base_price(record, category),
            weekend_premium: resolve_weekend_premium(record),
            extra_hour_rate: resolve_extra_hour_rate(record, is_venue),
            group_size_max: resolve_group_size_max(record),
            additional_entertainer_price: first_truthy(&[
                record
                    .service_details
                    .as_ref()
                    .and_then(|d| d.additional_entertainer_price),
                record.additional_entertainer_price,
            ])
            .unwrap_or_default(),
        }
    }

    /// Billed against the party clock, by category or by a configured
    /// extra-hour rate. Item categories never qualify, whatever rate a
    /// record carries.
    pub fn is_time_based(&self) -> bool {
        !self.category.is_item_category()
            && (self.category.is_time_based_category() || self.extra_hour_rate > 0.0)
    }

    /// Charges for time beyond the standard party duration
    pub fn has_extra_hour_pricing(&self) -> bool {
        self.extra_hour_rate > 0.0
    }

    pub fn is_lead_based(&self) -> bool {
        self.category.is_lead_based()
    }
}

/// Trimmed string, with empty collapsed to `None`
pub(crate) fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

/// First usable price in a precedence chain. Mirrors the historical
/// first-truthy selection: zero means "unpriced" and falls through;
/// NaN and infinity are skipped with a warning.
fn first_truthy(candidates: &[Option<f64>]) -> Option<f64> {
    candidates.iter().flatten().copied().find_map(|value| {
        if !value.is_finite() {
            tracing::warn!(value, "non-finite price on supplier record, skipped");
            return None;
        }
        (value != 0.0).then_some(value)
    })
}

fn resolve_base_price(record: &SupplierRecord, category: SupplierCategory) -> f64 {
    let package = record.package_data.as_ref();
    if category.is_per_guest() {
        // Party bags price per bag; package prices never apply
        return first_truthy(&[record.original_price, record.price, record.price_from])
            .unwrap_or(DEFAULT_PARTY_BAG_UNIT);
    }
    // packageData.totalPrice is deliberately absent from this chain: it has
    // add-ons folded in, so pricing from it would charge them twice.
    first_truthy(&[
        record.original_price,
        record.price,
        package.and_then(|p| p.original_price),
        package.and_then(|p| p.price),
        record.price_from,
    ])
    .unwrap_or_default()
}

fn resolve_extra_hour_rate(record: &SupplierRecord, is_venue: bool) -> f64 {
    let details = record.service_details.as_ref();
    if is_venue {
        // Venues bill extra time at their standard hourly rental rate
        return first_truthy(&[
            details.and_then(|d| d.pricing.as_ref().and_then(|p| p.hourly_rate)),
        ])
        .unwrap_or_default();
    }
    first_truthy(&[
        details.and_then(|d| d.extra_hour_rate),
        record.extra_hour_rate,
    ])
    .unwrap_or_default()
}

fn resolve_weekend_premium(record: &SupplierRecord) -> Option<WeekendPremium> {
    let premium = record.weekend_premium.as_ref()?;
    if !premium.enabled {
        return None;
    }
    match premium.premium_type.as_deref() {
        Some("fixed") => Some(WeekendPremium::Fixed {
            amount: premium.amount.unwrap_or_default(),
        }),
        Some("percentage") => Some(WeekendPremium::Percentage {
            percent: premium.percentage.unwrap_or_default(),
        }),
        Some(other) => {
            tracing::warn!(premium_type = other, "unrecognized weekend premium type, ignored");
            None
        }
        None => None,
    }
}

fn resolve_group_size_max(record: &SupplierRecord) -> Option<u32> {
    record
        .service_details
        .as_ref()
        .and_then(|d| d.group_size_max)
        .filter(|&n| n > 0)
        .or_else(|| record.group_size_max.filter(|&n| n > 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> SupplierRecord {
        SupplierRecord {
            category: Some("Entertainment".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_base_price_precedence() {
        let mut r = record();
        r.original_price = Some(180.0);
        r.price = Some(150.0);
        r.price_from = Some(120.0);
        assert_eq!(Supplier::from_record(&r).base_price, 180.0);

        r.original_price = None;
        assert_eq!(Supplier::from_record(&r).base_price, 150.0);

        r.price = None;
        assert_eq!(Supplier::from_record(&r).base_price, 120.0);
    }

    #[test]
    fn test_package_prices_between_listing_and_price_from() {
        let mut r = record();
        r.price_from = Some(120.0);
        r.package_data = Some(PackageData {
            price: Some(200.0),
            original_price: Some(220.0),
            ..Default::default()
        });
        assert_eq!(Supplier::from_record(&r).base_price, 220.0);

        if let Some(p) = r.package_data.as_mut() {
            p.original_price = None;
        }
        assert_eq!(Supplier::from_record(&r).base_price, 200.0);
    }

    #[test]
    fn test_zero_price_falls_through() {
        let mut r = record();
        r.original_price = Some(0.0);
        r.price = Some(0.0);
        r.price_from = Some(95.0);
        assert_eq!(Supplier::from_record(&r).base_price, 95.0);
    }

    #[test]
    fn test_package_total_price_never_consulted() {
        let mut r = record();
        r.package_data = Some(PackageData {
            total_price: Some(260.0),
            ..Default::default()
        });
        assert_eq!(Supplier::from_record(&r).base_price, 0.0);
    }

    #[test]
    fn test_party_bag_chain_skips_package_and_defaults() {
        let mut r = SupplierRecord {
            category: Some("Party Bags".to_string()),
            package_data: Some(PackageData {
                original_price: Some(200.0),
                ..Default::default()
            }),
            ..Default::default()
        };
        // No listing price: per-bag default applies, package ignored
        assert_eq!(Supplier::from_record(&r).base_price, DEFAULT_PARTY_BAG_UNIT);

        r.price = Some(4.5);
        assert_eq!(Supplier::from_record(&r).base_price, 4.5);
    }

    #[test]
    fn test_non_finite_price_skipped() {
        let mut r = record();
        r.original_price = Some(f64::NAN);
        r.price = Some(150.0);
        assert_eq!(Supplier::from_record(&r).base_price, 150.0);

        r.original_price = Some(f64::INFINITY);
        assert_eq!(Supplier::from_record(&r).base_price, 150.0);
    }

    #[test]
    fn test_venue_rate_from_hourly_rental() {
        let r = SupplierRecord {
            category: Some("Venue".to_string()),
            extra_hour_rate: Some(999.0),
            service_details: Some(ServiceDetails {
                extra_hour_rate: Some(888.0),
                pricing: Some(ServicePricing {
                    hourly_rate: Some(60.0),
                }),
                ..Default::default()
            }),
            ..Default::default()
        };
        let supplier = Supplier::from_record(&r);
        assert!(supplier.is_venue);
        // Venues take the rental rate, not the extraHourRate fields
        assert_eq!(supplier.extra_hour_rate, 60.0);
    }

    #[test]
    fn test_venue_without_rental_rate_has_no_extra_hours() {
        let r = SupplierRecord {
            service_type: Some("venue".to_string()),
            extra_hour_rate: Some(45.0),
            ..Default::default()
        };
        let supplier = Supplier::from_record(&r);
        assert!(supplier.is_venue);
        assert_eq!(supplier.extra_hour_rate, 0.0);
        assert!(!supplier.has_extra_hour_pricing());
    }

    #[test]
    fn test_non_venue_rate_precedence() {
        let mut r = record();
        r.extra_hour_rate = Some(40.0);
        r.service_details = Some(ServiceDetails {
            extra_hour_rate: Some(35.0),
            ..Default::default()
        });
        assert_eq!(Supplier::from_record(&r).extra_hour_rate, 35.0);

        r.service_details = None;
        assert_eq!(Supplier::from_record(&r).extra_hour_rate, 40.0);
    }

    #[test]
    fn test_service_type_venue_case_insensitive() {
        let r = SupplierRecord {
            category: Some("Soft Play Activities".to_string()),
            service_type: Some(" Venue ".to_string()),
            ..Default::default()
        };
        assert!(Supplier::from_record(&r).is_venue);
    }

    #[test]
    fn test_weekend_premium_resolution() {
        let mut r = record();
        r.weekend_premium = Some(WeekendPremiumRecord {
            enabled: true,
            premium_type: Some("fixed".to_string()),
            amount: Some(30.0),
            percentage: None,
        });
        assert_eq!(
            Supplier::from_record(&r).weekend_premium,
            Some(WeekendPremium::Fixed { amount: 30.0 })
        );

        r.weekend_premium = Some(WeekendPremiumRecord {
            enabled: true,
            premium_type: Some("percentage".to_string()),
            amount: None,
            percentage: Some(10.0),
        });
        assert_eq!(
            Supplier::from_record(&r).weekend_premium,
            Some(WeekendPremium::Percentage { percent: 10.0 })
        );

        r.weekend_premium = Some(WeekendPremiumRecord {
            enabled: false,
            premium_type: Some("fixed".to_string()),
            amount: Some(30.0),
            percentage: None,
        });
        assert_eq!(Supplier::from_record(&r).weekend_premium, None);

        r.weekend_premium = Some(WeekendPremiumRecord {
            enabled: true,
            premium_type: Some("double".to_string()),
            amount: Some(30.0),
            percentage: None,
        });
        assert_eq!(Supplier::from_record(&r).weekend_premium, None);
    }

    #[test]
    fn test_group_size_prefers_service_details() {
        let mut r = record();
        r.group_size_max = Some(20);
        r.service_details = Some(ServiceDetails {
            group_size_max: Some(25),
            ..Default::default()
        });
        assert_eq!(Supplier::from_record(&r).group_size_max, Some(25));

        // Zero is unset and falls through to the top-level field
        if let Some(d) = r.service_details.as_mut() {
            d.group_size_max = Some(0);
        }
        assert_eq!(Supplier::from_record(&r).group_size_max, Some(20));

        r.group_size_max = Some(0);
        assert_eq!(Supplier::from_record(&r).group_size_max, None);
    }

    #[test]
    fn test_entertainer_price_prefers_service_details() {
        let mut r = record();
        r.additional_entertainer_price = Some(50.0);
        r.service_details = Some(ServiceDetails {
            additional_entertainer_price: Some(60.0),
            ..Default::default()
        });
        assert_eq!(Supplier::from_record(&r).additional_entertainer_price, 60.0);

        r.service_details = None;
        assert_eq!(Supplier::from_record(&r).additional_entertainer_price, 50.0);
    }

    #[test]
    fn test_time_based_by_category_or_rate() {
        let venue = Supplier {
            category: SupplierCategory::Venue,
            ..Default::default()
        };
        assert!(venue.is_time_based());

        let uncategorized = Supplier {
            category: SupplierCategory::Other,
            extra_hour_rate: 30.0,
            ..Default::default()
        };
        assert!(uncategorized.is_time_based());

        let no_rate = Supplier {
            category: SupplierCategory::Other,
            ..Default::default()
        };
        assert!(!no_rate.is_time_based());
    }

    #[test]
    fn test_item_categories_never_time_based() {
        let r = SupplierRecord {
            category: Some("Catering".to_string()),
            extra_hour_rate: Some(40.0),
            ..Default::default()
        };
        let catering = Supplier::from_record(&r);
        // The stale rate survives normalization but not classification
        assert!(catering.has_extra_hour_pricing());
        assert!(!catering.is_time_based());

        let bags = Supplier {
            category: SupplierCategory::PartyBags,
            extra_hour_rate: 25.0,
            ..Default::default()
        };
        assert!(!bags.is_time_based());
    }

    #[test]
    fn test_empty_id_and_name_collapse_to_none() {
        let r = SupplierRecord {
            id: Some("  ".to_string()),
            name: Some("".to_string()),
            ..Default::default()
        };
        let supplier = Supplier::from_record(&r);
        assert_eq!(supplier.id, None);
        assert_eq!(supplier.name, None);
    }

    #[test]
    fn test_record_deserializes_from_store_json() {
        let json = r#"{
            "id": "sup_291",
            "name": "Jumping Beans",
            "category": "Entertainment",
            "price": 150,
            "originalPrice": 180,
            "weekendPremium": {"enabled": true, "type": "fixed", "amount": 30},
            "serviceDetails": {"extraHourRate": 45, "groupSizeMax": 20},
            "packageData": {"price": 150, "totalPrice": 210, "selectedAddons": [{"id": "ad_1", "price": 60}]},
            "unknownLegacyField": {"nested": true}
        }"#;
        let record: SupplierRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.package_addon_count(), 1);

        let supplier = Supplier::from_record(&record);
        assert_eq!(supplier.base_price, 180.0);
        assert_eq!(supplier.extra_hour_rate, 45.0);
        assert_eq!(supplier.group_size_max, Some(20));
        assert_eq!(
            supplier.weekend_premium,
            Some(WeekendPremium::Fixed { amount: 30.0 })
        );
    }
}
