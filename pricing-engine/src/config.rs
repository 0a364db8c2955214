//! Engine Configuration
//!
//! Package assumptions the marketplace quotes against. Per-call party
//! details always win; these only fill the gaps.

/// Tunable defaults for quote calculations
#[derive(Debug, Clone, PartialEq)]
pub struct PricingConfig {
    /// Hours included in every package before extra-hour charges apply
    pub standard_duration_hours: f64,
    /// Guest count assumed when the party details do not carry one
    pub default_guest_count: u32,
    /// Guests one entertainer covers when the listing does not say
    pub default_group_size_max: u32,
    /// Shortest start/end-derived duration treated as plausible
    pub min_reasonable_duration_hours: f64,
    /// Longest start/end-derived duration treated as plausible
    pub max_reasonable_duration_hours: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            standard_duration_hours: 2.0,
            default_guest_count: 10,
            default_group_size_max: 30,
            min_reasonable_duration_hours: 0.5,
            max_reasonable_duration_hours: 12.0,
        }
    }
}
