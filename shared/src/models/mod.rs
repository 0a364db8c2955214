//! Data models
//!
//! Supplier, party and add-on records as the marketplace stores them
//! (camelCase JSON, every field optional, legacy aliases preserved) plus
//! the normalized forms the pricing engine consumes. Alias resolution
//! happens exactly once, at ingestion.

pub mod addon;
pub mod category;
pub mod party;
pub mod supplier;

// Re-exports
pub use addon::*;
pub use category::*;
pub use party::*;
pub use supplier::*;
