//! Party duration and extra-hour costs
//!
//! Parties run a standard two hours; time beyond that bills per hour for
//! suppliers that charge by the clock. Duration resolves from the explicit
//! booking first, then the start/end window, then the embedder fallback,
//! then the standard length.

use chrono::NaiveTime;
use shared::models::{PartyDetails, Supplier};

use crate::config::PricingConfig;
use crate::context::DurationSource;
use crate::money::{to_decimal, to_f64};

/// Hours between two clock times. A window that runs backwards is read as
/// crossing midnight.
fn window_hours(start: NaiveTime, end: NaiveTime) -> f64 {
    let mut minutes = (end - start).num_minutes();
    if minutes < 0 {
        minutes += 24 * 60;
    }
    minutes as f64 / 60.0
}

/// Party duration in hours for pricing
pub fn resolve_duration_hours(
    party: &PartyDetails,
    fallback: &dyn DurationSource,
    config: &PricingConfig,
) -> f64 {
    if let Some(duration) = party.duration_hours
        && duration > 0.0
    {
        return duration;
    }

    if let (Some(start), Some(end)) = (party.start_time, party.end_time) {
        let hours = window_hours(start, end);
        if (config.min_reasonable_duration_hours..=config.max_reasonable_duration_hours)
            .contains(&hours)
        {
            return hours;
        }
        tracing::warn!(hours, "implausible start/end window, ignored");
    }

    if let Some(duration) = fallback.duration_hours()
        && duration > 0.0
    {
        tracing::debug!(duration, "party duration taken from stored fallback");
        return duration;
    }

    config.standard_duration_hours
}

/// Hours beyond the standard party length
pub fn extra_hours(duration_hours: f64, config: &PricingConfig) -> f64 {
    (duration_hours - config.standard_duration_hours).max(0.0)
}

/// Extra-hour cost in pounds. Lead-based suppliers and suppliers without an
/// extra-hour rate charge nothing for longer parties.
pub fn extra_hour_cost(supplier: &Supplier, duration_hours: f64, config: &PricingConfig) -> f64 {
    if supplier.is_lead_based() || !supplier.has_extra_hour_pricing() {
        return 0.0;
    }
    let extra = extra_hours(duration_hours, config);
    if extra <= 0.0 {
        return 0.0;
    }
    to_f64(to_decimal(extra) * to_decimal(supplier.extra_hour_rate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{NoFallback, StoredPartyDetails};
    use shared::models::SupplierCategory;

    fn config() -> PricingConfig {
        PricingConfig::default()
    }

    fn party_with_window(start: &str, end: &str) -> PartyDetails {
        PartyDetails {
            start_time: NaiveTime::parse_from_str(start, "%H:%M").ok(),
            end_time: NaiveTime::parse_from_str(end, "%H:%M").ok(),
            ..Default::default()
        }
    }

    #[test]
    fn test_explicit_duration_wins_over_window() {
        let mut party = party_with_window("14:00", "17:00");
        party.duration_hours = Some(2.5);
        assert_eq!(resolve_duration_hours(&party, &NoFallback, &config()), 2.5);
    }

    #[test]
    fn test_window_derives_duration() {
        let party = party_with_window("14:00", "17:00");
        assert_eq!(resolve_duration_hours(&party, &NoFallback, &config()), 3.0);

        let party = party_with_window("13:30", "16:00");
        assert_eq!(resolve_duration_hours(&party, &NoFallback, &config()), 2.5);
    }

    #[test]
    fn test_overnight_window_wraps() {
        // 10 PM to 1 AM reads as three hours, not minus twenty-one
        let party = party_with_window("22:00", "01:00");
        assert_eq!(resolve_duration_hours(&party, &NoFallback, &config()), 3.0);
    }

    #[test]
    fn test_implausible_window_falls_through_to_standard() {
        // Ten minutes is below the plausibility floor
        let party = party_with_window("10:00", "10:10");
        assert_eq!(resolve_duration_hours(&party, &NoFallback, &config()), 2.0);
    }

    #[test]
    fn test_fallback_and_standard_default() {
        let party = PartyDetails::default();
        assert_eq!(resolve_duration_hours(&party, &NoFallback, &config()), 2.0);

        let stored = StoredPartyDetails::new(PartyDetails {
            duration_hours: Some(4.0),
            ..Default::default()
        });
        assert_eq!(resolve_duration_hours(&party, &stored, &config()), 4.0);
    }

    #[test]
    fn test_extra_hours() {
        let config = config();
        assert_eq!(extra_hours(3.0, &config), 1.0);
        assert_eq!(extra_hours(2.0, &config), 0.0);
        assert_eq!(extra_hours(1.5, &config), 0.0);
    }

    #[test]
    fn test_extra_hour_cost() {
        let supplier = Supplier {
            category: SupplierCategory::Entertainment,
            extra_hour_rate: 40.0,
            ..Default::default()
        };
        // 4h party = 2 extra hours at £40
        assert_eq!(extra_hour_cost(&supplier, 4.0, &config()), 80.0);
        // Standard length: nothing extra
        assert_eq!(extra_hour_cost(&supplier, 2.0, &config()), 0.0);
        // Fractional extra hours bill pro rata
        assert_eq!(extra_hour_cost(&supplier, 3.5, &config()), 60.0);
    }

    #[test]
    fn test_extra_hour_cost_requires_rate() {
        let supplier = Supplier {
            category: SupplierCategory::Venue,
            extra_hour_rate: 0.0,
            ..Default::default()
        };
        assert_eq!(extra_hour_cost(&supplier, 5.0, &config()), 0.0);
    }

    #[test]
    fn test_lead_based_supplier_never_bills_hours() {
        let supplier = Supplier {
            category: SupplierCategory::Cakes,
            extra_hour_rate: 25.0,
            ..Default::default()
        };
        assert_eq!(extra_hour_cost(&supplier, 4.0, &config()), 0.0);
    }
}
