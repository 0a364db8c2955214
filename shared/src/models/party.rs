//! Party Details Model
//!
//! The booking flow persists party details as loosely-shaped JSON that has
//! accumulated aliases: `startTime`/`endTime` superseded a nested `time`
//! object, and clock strings exist in both 12-hour ("2:00 PM") and 24-hour
//! ("14:00") form. Normalization parses everything once; unparseable values
//! degrade to `None` with a warning and the engine falls back to defaults.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::models::supplier::{Supplier, SupplierRecord};

/// Start/end pair nested under `time` on older records
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TimeWindowRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
}

/// Party details as persisted by the booking flow
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PartyDetailsRecord {
    /// ISO date string ("2025-06-14")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Booked duration in hours
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guest_count: Option<u32>,
    /// "2:00 PM" or "14:00"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    /// Legacy nested window, superseded by startTime/endTime
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<TimeWindowRecord>,
}

/// Party details with dates and clock times parsed
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PartyDetails {
    pub date: Option<NaiveDate>,
    /// Explicitly booked duration. Zero counts as unset, matching the
    /// stored records where 0 means "not chosen yet".
    pub duration_hours: Option<f64>,
    pub guest_count: Option<u32>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
}

impl PartyDetails {
    pub fn from_record(record: &PartyDetailsRecord) -> Self {
        let window = record.time.as_ref();
        let start_raw = record
            .start_time
            .as_deref()
            .or_else(|| window.and_then(|w| w.start.as_deref()));
        let end_raw = record
            .end_time
            .as_deref()
            .or_else(|| window.and_then(|w| w.end.as_deref()));

        Self {
            date: record.date.as_deref().and_then(parse_party_date),
            duration_hours: record.duration.filter(|d| {
                if !d.is_finite() {
                    tracing::warn!(duration = *d, "non-finite party duration, ignored");
                    return false;
                }
                *d != 0.0
            }),
            guest_count: record.guest_count.filter(|&g| g > 0),
            start_time: start_raw.and_then(parse_clock_time),
            end_time: end_raw.and_then(parse_clock_time),
        }
    }
}

/// Parse a stored party date. Accepts plain ISO dates and full RFC 3339
/// timestamps (older records saved the picker value verbatim).
pub fn parse_party_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            chrono::DateTime::parse_from_rfc3339(trimmed)
                .ok()
                .map(|dt| dt.date_naive())
        })
        .or_else(|| {
            tracing::warn!(date = trimmed, "unparseable party date, ignored");
            None
        })
}

/// Parse a stored clock time, 12-hour or 24-hour
pub fn parse_clock_time(raw: &str) -> Option<NaiveTime> {
    let mut cleaned = raw.trim().to_uppercase();
    if cleaned.is_empty() {
        return None;
    }
    // chrono has no format for an hour-only clock, so "2 PM" is rebuilt
    // as "2:00 PM" before parsing
    if let Some((hour, meridiem)) = cleaned.split_once(' ')
        && matches!(meridiem, "AM" | "PM")
        && !hour.is_empty()
        && hour.bytes().all(|b| b.is_ascii_digit())
    {
        cleaned = format!("{hour}:00 {meridiem}");
    }
    NaiveTime::parse_from_str(&cleaned, "%I:%M %p")
        .or_else(|_| NaiveTime::parse_from_str(&cleaned, "%H:%M"))
        .ok()
        .or_else(|| {
            tracing::warn!(time = cleaned, "unparseable clock time, ignored");
            None
        })
}

/// Party plan as persisted: slot name ("venue", "entertainment", ...) to
/// the supplier booked for it. Unfilled slots are stored as null.
pub type PartyPlanRecord = BTreeMap<String, Option<SupplierRecord>>;

/// Normalized plan. Empty slots are dropped at ingestion; the map keeps
/// slot order deterministic so breakdowns render stably.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PartyPlan {
    pub slots: BTreeMap<String, Supplier>,
}

impl PartyPlan {
    pub fn from_record(record: &PartyPlanRecord) -> Self {
        let slots = record
            .iter()
            .filter_map(|(slot, supplier)| {
                supplier
                    .as_ref()
                    .map(|s| (slot.clone(), Supplier::from_record(s)))
            })
            .collect();
        Self { slots }
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
