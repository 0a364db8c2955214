//! Add-on Model
//!
//! Add-ons are selected in the booking flow and either attached to a booked
//! supplier (priced inside that supplier's quote) or standalone (summed once
//! into the party total). Attachment has three historical forms: a supplier
//! id, a slot name under `supplierType`, or a slot name under
//! `attachedToSupplier`.

use serde::{Deserialize, Serialize};

use crate::models::supplier::{Supplier, non_empty};

/// Add-on as persisted by the booking flow
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AddonRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// Supplier this add-on was bought from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier_id: Option<String>,
    /// Slot-name attachment (legacy)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier_type: Option<String>,
    /// Slot-name attachment (current)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attached_to_supplier: Option<String>,
}

/// Normalized add-on. Empty attachment strings collapse to `None` so they
/// count as standalone, the way the booking flow treats them.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Addon {
    pub id: Option<String>,
    pub name: Option<String>,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attached_to: Option<String>,
}

impl Addon {
    pub fn from_record(record: &AddonRecord) -> Self {
        let price = match record.price {
            Some(p) if p.is_finite() => p,
            Some(p) => {
                tracing::warn!(price = p, "non-finite add-on price, treated as zero");
                0.0
            }
            None => 0.0,
        };
        Self {
            id: non_empty(record.id.as_deref()),
            name: non_empty(record.name.as_deref()),
            price,
            supplier_id: non_empty(record.supplier_id.as_deref()),
            supplier_type: non_empty(record.supplier_type.as_deref()),
            attached_to: non_empty(record.attached_to_supplier.as_deref()),
        }
    }

    /// Standalone add-ons belong to the party as a whole, not to a slot
    pub fn is_standalone(&self) -> bool {
        self.supplier_id.is_none() && self.supplier_type.is_none() && self.attached_to.is_none()
    }

    /// Whether this add-on rides on `supplier` booked in `slot`. Matching
    /// is exact: the supplier id, or the slot name stored under either
    /// attachment alias.
    pub fn belongs_to(&self, supplier: &Supplier, slot: &str) -> bool {
        if let (Some(addon_supplier), Some(id)) =
            (self.supplier_id.as_deref(), supplier.id.as_deref())
            && addon_supplier == id
        {
            return true;
        }
        self.supplier_type.as_deref() == Some(slot) || self.attached_to.as_deref() == Some(slot)
    }
}
