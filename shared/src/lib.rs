//! Shared types for the PartySnap pricing workspace
//!
//! Raw marketplace records as the store persists them, the normalized
//! forms the pricing engine consumes, and the error types used at the
//! ingestion boundary.

pub mod error;
pub mod models;

// Re-exports
pub use error::PricingError;
pub use serde::{Deserialize, Serialize};
