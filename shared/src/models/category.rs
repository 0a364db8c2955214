//! Supplier Category Model
//!
//! Historical records carry free-text `category` / `type` labels with years
//! of inconsistent naming ("Party Bags", "partybags", "party-bag", ...).
//! Classification into this closed enum happens once, at ingestion, so the
//! engine never scans label strings at quote time.

use serde::{Deserialize, Serialize};

/// Supplier category, resolved once at ingestion
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SupplierCategory {
    Venue,
    Entertainment,
    FacePainting,
    Activities,
    Catering,
    BouncyCastle,
    PartyBags,
    Cakes,
    Decorations,
    Balloons,
    Photography,
    /// Unrecognized labels. An uncategorized supplier is neither lead-based
    /// nor time-based, so it never attracts surcharges its listing did not
    /// advertise.
    #[default]
    Other,
}

impl SupplierCategory {
    /// Classify from the raw `category` and `type` labels.
    ///
    /// Layered matching, category label first:
    /// 1. Party-bag spellings (exact collapsed token, then compound)
    /// 2. Item keywords, checked before time keywords so "Balloon Artist
    ///    Entertainment" stays an item supplier
    /// 3. Time keywords
    pub fn from_labels(category: Option<&str>, supplier_type: Option<&str>) -> Self {
        let labels: Vec<String> = [category, supplier_type]
            .into_iter()
            .flatten()
            .map(|label| label.trim().to_lowercase())
            .filter(|label| !label.is_empty())
            .collect();

        for label in &labels {
            if label.replace([' ', '-', '_'], "") == "partybags"
                || (label.contains("party") && label.contains("bag"))
            {
                return Self::PartyBags;
            }
        }

        for label in &labels {
            if label.contains("cake") {
                return Self::Cakes;
            }
            if label.contains("catering") || label.contains("caterer") {
                return Self::Catering;
            }
            if label.contains("decoration") {
                return Self::Decorations;
            }
            if label.contains("balloon") {
                return Self::Balloons;
            }
            if label.contains("photograph") {
                return Self::Photography;
            }
            if label.contains("bouncy") {
                return Self::BouncyCastle;
            }
        }

        for label in &labels {
            if label.contains("venue") {
                return Self::Venue;
            }
            if label.contains("face paint")
                || label.contains("facepaint")
                || label.contains("face-paint")
            {
                return Self::FacePainting;
            }
            if label.contains("entertain") || label.contains("performer") {
                return Self::Entertainment;
            }
            if label.contains("activit") {
                return Self::Activities;
            }
        }

        Self::Other
    }

    /// Lead-based suppliers prepare items ahead of the party. Their price
    /// depends on what was ordered, never on when the party runs, so weekend
    /// and extra-hour modifiers do not apply.
    pub fn is_lead_based(self) -> bool {
        matches!(
            self,
            Self::PartyBags | Self::Cakes | Self::Decorations | Self::Balloons | Self::Photography
        )
    }

    /// Item categories sell goods rather than hours: the lead-based set
    /// plus catering and bouncy-castle hire
    pub fn is_item_category(self) -> bool {
        self.is_lead_based() || matches!(self, Self::Catering | Self::BouncyCastle)
    }

    /// Priced per guest (unit price multiplied by the guest count)
    pub fn is_per_guest(self) -> bool {
        matches!(self, Self::PartyBags)
    }

    /// Categories whose service is billed against the party clock
    pub fn is_time_based_category(self) -> bool {
        matches!(
            self,
            Self::Venue | Self::Entertainment | Self::FacePainting | Self::Activities
        )
    }

    /// Human-readable label for display and breakdown text
    pub fn label(self) -> &'static str {
        match self {
            Self::Venue => "Venue",
            Self::Entertainment => "Entertainment",
            Self::FacePainting => "Face Painting",
            Self::Activities => "Activities",
            Self::Catering => "Catering",
            Self::BouncyCastle => "Bouncy Castle",
            Self::PartyBags => "Party Bags",
            Self::Cakes => "Cakes",
            Self::Decorations => "Decorations",
            Self::Balloons => "Balloons",
            Self::Photography => "Photography",
            Self::Other => "Other",
        }
    }
}
