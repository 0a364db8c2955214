//! Error types for the pricing workspace
//!
//! Quoting itself never fails; malformed inputs degrade to documented
//! defaults. These errors exist for the advisory validators, for callers
//! that want to reject bad records at the ingestion boundary instead of
//! pricing them on defaults.

use thiserror::Error;

/// Validation failure raised by the record validators
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    #[error("{field} must be a finite number, got {value}")]
    NonFiniteNumber { field: &'static str, value: f64 },

    #[error("{field} must be non-negative, got {value}")]
    NegativeAmount { field: &'static str, value: f64 },

    #[error("{field} exceeds maximum allowed ({max}), got {value}")]
    AmountTooLarge {
        field: &'static str,
        max: f64,
        value: f64,
    },

    #[error("{field} must be between 0 and 100, got {value}")]
    PercentageOutOfRange { field: &'static str, value: f64 },

    #[error("unrecognized weekend premium type '{value}'")]
    UnknownPremiumType { value: String },

    #[error("unparseable {field} '{value}'")]
    UnparseableField { field: &'static str, value: String },
}

impl PricingError {
    /// Stable error code string for API payloads
    pub fn code(&self) -> &'static str {
        match self {
            Self::NonFiniteNumber { .. } => "P1001",
            Self::NegativeAmount { .. } => "P1002",
            Self::AmountTooLarge { .. } => "P1003",
            Self::PercentageOutOfRange { .. } => "P1004",
            Self::UnknownPremiumType { .. } => "P1005",
            Self::UnparseableField { .. } => "P1006",
        }
    }
}
