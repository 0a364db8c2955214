//! Quote Example - price a party plan from raw store records
//!
//! Ingests supplier, party and add-on JSON the way the booking flow stores
//! it, then prints per-supplier quotes and the party total.
//!
//! Run: cargo run -p pricing-engine --example quote_party

use pricing_engine::PricingEngine;
use shared::models::{
    Addon, AddonRecord, PartyDetails, PartyDetailsRecord, PartyPlan, PartyPlanRecord,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    println!("=== Party Quote Example ===\n");

    let plan_record: PartyPlanRecord = serde_json::from_str(
        r#"{
            "venue": {
                "id": "sup_hall",
                "name": "Scout Hall",
                "category": "Venue",
                "price": 120,
                "serviceDetails": {"pricing": {"hourlyRate": 60}}
            },
            "entertainment": {
                "id": "sup_beans",
                "name": "Jumping Beans",
                "category": "Entertainment",
                "price": 150,
                "extraHourRate": 45,
                "weekendPremium": {"enabled": true, "type": "fixed", "amount": 30},
                "serviceDetails": {"groupSizeMax": 20, "additionalEntertainerPrice": 60}
            },
            "partyBags": {
                "id": "sup_bags",
                "name": "Goodie Bag Co",
                "category": "Party Bags",
                "price": 4.5
            },
            "catering": null
        }"#,
    )?;
    let plan = PartyPlan::from_record(&plan_record);

    let party_record: PartyDetailsRecord = serde_json::from_str(
        r#"{"date": "2025-06-14", "guestCount": 24, "startTime": "1:00 PM", "endTime": "4:00 PM"}"#,
    )?;
    let party = PartyDetails::from_record(&party_record);

    let addon_records: Vec<AddonRecord> = serde_json::from_str(
        r#"[
            {"id": "ad_magic", "name": "Magic show", "price": 45, "supplierId": "sup_beans"},
            {"id": "ad_photos", "name": "Photo booth", "price": 80}
        ]"#,
    )?;
    let addons: Vec<Addon> = addon_records.iter().map(Addon::from_record).collect();

    let engine = PricingEngine::default();
    let context = engine.resolve_context(&party);
    println!(
        "Party: {} guests, {} hours, {}\n",
        context.guest_count,
        context.duration_hours,
        context
            .date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "date TBC".to_string()),
    );

    for (slot, supplier) in &plan.slots {
        println!("--- {slot} ---");
        println!("{}", engine.price_breakdown_text(supplier, &party, &[]));
        println!();
    }

    let quote = engine.calculate_party_total(&plan, &addons, &party);
    println!("=== Party total ===");
    println!("{}", serde_json::to_string_pretty(&quote)?);

    Ok(())
}
