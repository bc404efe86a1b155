//! JSON output surface for the presentation layer.
//!
//! Field names are camelCase and form a contract with the UI; do not rename
//! them.
//!
//! ```json
//! {
//!   "mode": "walking",
//!   "scaleMax": 100.0,
//!   "routes": [
//!     { "routeNumber": 2, "distanceKm": 5.84, "durationMinutes": 69.5, "score": 71.3,
//!       "perKindCounts": { "police": 1, "school": 2 }, "totalFacilities": 3,
//!       "reasoning": "near 1 police station(s), by 2 educational institution(s), limited pedestrian traffic",
//!       "rank": 1, "tier": "top" }
//!   ],
//!   "verdict": null,
//!   "headline": "Route 2 provides the best balance of safety and efficiency."
//! }
//! ```

use serde::{Deserialize, Serialize};
use sr_core::{FacilityCounts, ScoreScale, TravelMode};

use crate::{Ranker, SafetyReport, Tier, Verdict};

fn round_to(value: f64, places: i32) -> f64 {
    let f = 10f64.powi(places);
    (value * f).round() / f
}

/// One route as shown to the user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSummary {
    pub route_number:     usize,
    pub distance_km:      f64,
    pub duration_minutes: f64,
    pub score:            f64,
    pub per_kind_counts:  FacilityCounts,
    pub total_facilities: u32,
    pub reasoning:        String,
    pub rank:             usize,
    pub tier:             Tier,
}

impl RouteSummary {
    /// Unranked reports get rank 0 and a tier computed on `scale`.
    pub fn from_report(report: &SafetyReport, scale: ScoreScale) -> Self {
        Self {
            route_number:     report.route_number,
            distance_km:      round_to(report.distance_m / 1000.0, 2),
            duration_minutes: round_to(report.duration_s / 60.0, 1),
            score:            round_to(report.score, 1),
            per_kind_counts:  report.facility_counts.clone(),
            total_facilities: report.facility_counts.total(),
            reasoning:        report.reasoning.clone(),
            rank:             report.rank.unwrap_or(0),
            tier:             report.tier.unwrap_or_else(|| Tier::for_score(report.score, scale)),
        }
    }
}

/// Ranked routes plus the comparison the UI phrases its advice from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub mode:               TravelMode,
    pub scale_max:          f64,
    pub routes:             Vec<RouteSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_over_second: Option<f64>,
    pub verdict:            Option<Verdict>,
    pub headline:           String,
}

impl Recommendation {
    /// Build from reports already passed through [`Ranker::rank`].
    pub fn from_ranked(
        ranked: &[SafetyReport],
        ranker: &Ranker,
        scale:  ScoreScale,
        mode:   TravelMode,
    ) -> Self {
        let routes: Vec<RouteSummary> =
            ranked.iter().map(|r| RouteSummary::from_report(r, scale)).collect();
        // Shown as the gap between the two rounded scores it sits next to.
        let margin = match (ranked.first().and_then(|r| r.margin_over_second), routes.get(1)) {
            (Some(_), Some(second)) => Some(round_to(routes[0].score - second.score, 1)),
            _ => None,
        };
        let verdict = ranker.verdict(ranked);

        let headline = match (routes.first(), verdict, margin) {
            (None, _, _) => "No routes were evaluated.".to_string(),
            (Some(best), Some(Verdict::SignificantlySafer), Some(m)) => format!(
                "Route {} is significantly safer (+{m:.1} points) than the alternatives.",
                best.route_number
            ),
            (Some(best), _, _) => format!(
                "Route {} provides the best balance of safety and efficiency.",
                best.route_number
            ),
        };

        Self {
            mode,
            scale_max: scale.max,
            routes,
            margin_over_second: margin,
            verdict,
            headline,
        }
    }

    pub fn best(&self) -> Option<&RouteSummary> {
        self.routes.first()
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
