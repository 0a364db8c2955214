//! PartySnap Pricing Engine
//!
//! Computes supplier quotes and party totals from normalized marketplace
//! records: base-price resolution, weekend premiums, extra-hour charges,
//! additional-entertainer staffing, per-guest scaling and add-on handling.
//!
//! Quoting is total: malformed or missing data degrades the affected
//! modifier to zero or a documented default, it never fails the quote.
//! Calculations run on `rust_decimal` internally and round to 2 decimal
//! places at the edges, matching the store's f64 JSON payloads.

pub mod config;
pub mod context;
pub mod display;
pub mod engine;
pub mod entertainers;
pub mod hours;
pub mod money;
pub mod party_calculator;
pub mod supplier_calculator;
pub mod weekend;

// Re-exports
pub use config::PricingConfig;
pub use context::{DurationSource, GuestCountSource, NoFallback, StoredPartyDetails};
pub use engine::PricingEngine;
pub use entertainers::EntertainerStaffing;
pub use party_calculator::{PartyQuote, QuoteTotals, SupplierLine};
pub use supplier_calculator::{PriceBreakdown, QuoteDetails, ResolvedPartyContext, SupplierQuote};
