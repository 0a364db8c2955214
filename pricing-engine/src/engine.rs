//! Pricing engine
//!
//! Facade over the calculators: holds the config and the embedder
//! fallback sources, resolves the party context once per call, and hands
//! out quotes. Stateless between calls; identical inputs always produce
//! identical quotes.

use std::sync::Arc;

use shared::models::{Addon, PartyDetails, PartyPlan, Supplier};

use crate::config::PricingConfig;
use crate::context::{DurationSource, GuestCountSource, NoFallback, resolve_guest_count};
use crate::display;
use crate::hours::resolve_duration_hours;
use crate::party_calculator::{PartyQuote, quote_party};
use crate::supplier_calculator::{ResolvedPartyContext, SupplierQuote, quote_supplier};

#[derive(Clone)]
pub struct PricingEngine {
    config: PricingConfig,
    guest_fallback: Arc<dyn GuestCountSource>,
    duration_fallback: Arc<dyn DurationSource>,
}

impl std::fmt::Debug for PricingEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PricingEngine")
            .field("config", &self.config)
            .field("guest_fallback", &"<GuestCountSource>")
            .field("duration_fallback", &"<DurationSource>")
            .finish()
    }
}

impl Default for PricingEngine {
    fn default() -> Self {
        Self::new(PricingConfig::default())
    }
}

impl PricingEngine {
    pub fn new(config: PricingConfig) -> Self {
        Self {
            config,
            guest_fallback: Arc::new(NoFallback),
            duration_fallback: Arc::new(NoFallback),
        }
    }

    /// Use `source` for both the guest count and duration fallbacks
    pub fn with_fallback<S>(mut self, source: S) -> Self
    where
        S: GuestCountSource + DurationSource + 'static,
    {
        let source = Arc::new(source);
        self.guest_fallback = source.clone();
        self.duration_fallback = source;
        self
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Apply fallbacks and defaults to raw party details
    pub fn resolve_context(&self, party: &PartyDetails) -> ResolvedPartyContext {
        ResolvedPartyContext {
            date: party.date,
            guest_count: resolve_guest_count(party, self.guest_fallback.as_ref(), &self.config),
            duration_hours: resolve_duration_hours(
                party,
                self.duration_fallback.as_ref(),
                &self.config,
            ),
        }
    }

    /// Quote one supplier with its attached add-ons
    pub fn calculate_final_price(
        &self,
        supplier: &Supplier,
        party: &PartyDetails,
        addons: &[Addon],
    ) -> SupplierQuote {
        let context = self.resolve_context(party);
        let refs: Vec<&Addon> = addons.iter().collect();
        quote_supplier(supplier, &refs, context, &self.config)
    }

    /// Quote the whole party plan plus its add-ons
    pub fn calculate_party_total(
        &self,
        plan: &PartyPlan,
        addons: &[Addon],
        party: &PartyDetails,
    ) -> PartyQuote {
        let context = self.resolve_context(party);
        quote_party(plan, addons, context, &self.config)
    }

    /// Price string for a supplier card
    pub fn display_price(
        &self,
        supplier: &Supplier,
        party: &PartyDetails,
        addons: &[Addon],
    ) -> String {
        let quote = self.calculate_final_price(supplier, party, addons);
        display::display_price(supplier, &quote)
    }

    /// Multi-line cost breakdown for a supplier card
    pub fn price_breakdown_text(
        &self,
        supplier: &Supplier,
        party: &PartyDetails,
        addons: &[Addon],
    ) -> String {
        let quote = self.calculate_final_price(supplier, party, addons);
        display::price_breakdown_text(&quote)
    }
}
