//! Human-readable route justification.
//!
//! Clauses are emitted in a fixed priority order, one per facility group
//! with a non-zero tally:
//!
//! | Group       | Kinds                                  | Clause                              |
//! |-------------|----------------------------------------|-------------------------------------|
//! | police      | police                                 | `near N police station(s)`          |
//! | hospital    | hospital                               | `passes N hospital(s)`              |
//! | fire        | fire station                           | `close to N fire station(s)`        |
//! | education   | school, college, university            | `by N educational institution(s)`   |
//! | transit     | bus stop, train station, metro station | `access to N transit stop(s)`       |
//! | financial   | bank, ATM                              | `financial services nearby`         |
//! | green space | park                                   | `N public park(s)`                  |
//!
//! followed by a lighting qualifier (only when well-lit areas were seen) and
//! a pedestrian-traffic qualifier.  When no facility clause fires the whole
//! text is `standard <mode> route`.  The output depends only on the counts
//! and the mode.

use sr_core::{FacilityCounts, FacilityKind, TravelMode};

const EDUCATION: [FacilityKind; 3] =
    [FacilityKind::School, FacilityKind::College, FacilityKind::University];
const TRANSIT: [FacilityKind; 3] =
    [FacilityKind::BusStop, FacilityKind::TrainStation, FacilityKind::MetroStation];
const FINANCIAL: [FacilityKind; 2] = [FacilityKind::Bank, FacilityKind::Atm];
const CROWD: [FacilityKind; 3] =
    [FacilityKind::HighTraffic, FacilityKind::ShoppingMall, FacilityKind::Restaurant];

/// Pedestrian-traffic level from crowd-indicating counts.
pub fn traffic_level(counts: &FacilityCounts) -> &'static str {
    match counts.sum_of(&CROWD) {
        n if n > 3 => "high",
        n if n > 1 => "moderate",
        _ => "limited",
    }
}

pub fn compose_reasoning(counts: &FacilityCounts, mode: TravelMode) -> String {
    let mut parts: Vec<String> = Vec::new();

    let police = counts.get(FacilityKind::Police);
    if police > 0 {
        parts.push(format!("near {police} police station(s)"));
    }
    let hospital = counts.get(FacilityKind::Hospital);
    if hospital > 0 {
        parts.push(format!("passes {hospital} hospital(s)"));
    }
    let fire = counts.get(FacilityKind::FireStation);
    if fire > 0 {
        parts.push(format!("close to {fire} fire station(s)"));
    }
    let education = counts.sum_of(&EDUCATION);
    if education > 0 {
        parts.push(format!("by {education} educational institution(s)"));
    }
    let transit = counts.sum_of(&TRANSIT);
    if transit > 0 {
        parts.push(format!("access to {transit} transit stop(s)"));
    }
    if counts.sum_of(&FINANCIAL) > 0 {
        parts.push("financial services nearby".to_string());
    }
    let parks = counts.get(FacilityKind::Park);
    if parks > 0 {
        parts.push(format!("{parks} public park(s)"));
    }

    if parts.is_empty() {
        return format!("standard {mode} route");
    }

    match counts.get(FacilityKind::WellLitArea) {
        0 => {}
        1 => parts.push("mixed lighting conditions".to_string()),
        _ => parts.push("well-lit streets".to_string()),
    }
    parts.push(format!("{} pedestrian traffic", traffic_level(counts)));

    parts.join(", ")
}
