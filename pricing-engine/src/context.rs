//! Party context sources
//!
//! Guest count and duration are not always present on the party details the
//! caller passes in. The booking flow keeps a last-saved snapshot around for
//! exactly that case, so embedders supply it through these traits and the
//! engine consults it before falling back to the configured defaults.

use shared::models::PartyDetails;

use crate::config::PricingConfig;

/// Supplies a guest count when the party details omit one
pub trait GuestCountSource: Send + Sync {
    fn guest_count(&self) -> Option<u32>;
}

/// Supplies a party duration when the party details omit one
pub trait DurationSource: Send + Sync {
    fn duration_hours(&self) -> Option<f64>;
}

/// Source that never supplies anything; the configured defaults apply
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFallback;

impl GuestCountSource for NoFallback {
    fn guest_count(&self) -> Option<u32> {
        None
    }
}

impl DurationSource for NoFallback {
    fn duration_hours(&self) -> Option<f64> {
        None
    }
}

/// Source backed by a previously saved party snapshot
#[derive(Debug, Clone, Default)]
pub struct StoredPartyDetails {
    details: PartyDetails,
}

impl StoredPartyDetails {
    pub fn new(details: PartyDetails) -> Self {
        Self { details }
    }
}

impl GuestCountSource for StoredPartyDetails {
    fn guest_count(&self) -> Option<u32> {
        self.details.guest_count.filter(|&g| g > 0)
    }
}

impl DurationSource for StoredPartyDetails {
    fn duration_hours(&self) -> Option<f64> {
        self.details.duration_hours.filter(|&d| d > 0.0)
    }
}

/// Guest count for pricing: explicit party details, then the embedder
/// fallback, then the configured default. Zero counts as unset at every
/// stage.
pub fn resolve_guest_count(
    party: &PartyDetails,
    fallback: &dyn GuestCountSource,
    config: &PricingConfig,
) -> u32 {
    party
        .guest_count
        .filter(|&g| g > 0)
        .or_else(|| fallback.guest_count().filter(|&g| g > 0))
        .unwrap_or(config.default_guest_count)
}
