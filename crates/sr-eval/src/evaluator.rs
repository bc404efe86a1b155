//! Per-route scoring.
//!
//! # Grid path
//!
//! Up to `max_samples` evenly spaced polyline points are located in the
//! scored grid.  Each sample takes the first cell (grid order) containing
//! it; a sample outside every cell is ignored.  The route score is the mean
//! over matched samples, and zero when nothing matched.
//!
//! # Live path
//!
//! Up to [`TravelMode::live_sample_cap`] samples are surveyed through a
//! [`LiveFacilities`] with the mode's search radius.  Counts are
//! deduplicated across samples, and the score is weighted facilities per
//! route-kilometre on the scale's density normalizer.  A route where the
//! survey found nothing gets the base score
//! (`empty_route_fraction · scale.max`) rather than zero.

use sr_core::{FacilityCounts, ScoreScale, TravelMode, WeightTable};
use sr_grid::{FacilityDirectory, HexGrid, LiveFacilities};
use sr_route::RouteCandidate;

use crate::ranker::Tier;
use crate::reasoning::compose_reasoning;

/// Floor on route length when computing density, kilometres.
const MIN_ROUTE_KM: f64 = 0.1;

#[derive(Clone, Debug, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EvaluationConfig {
    /// Sample cap for the grid path.
    pub max_samples:          usize,
    /// Live score for a route with no facilities, as a fraction of the
    /// scale maximum.
    pub empty_route_fraction: f64,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self { max_samples: 20, empty_route_fraction: 0.1 }
    }
}

/// The evaluation of one candidate.
///
/// `rank`, `tier` and `margin_over_second` stay `None` until the
/// [`Ranker`](crate::Ranker) fills them in.
#[derive(Clone, Debug, PartialEq)]
pub struct SafetyReport {
    /// 1-based position of the candidate in synthesis order.
    pub route_number:       usize,
    pub distance_m:         f64,
    pub duration_s:         f64,
    pub score:              f64,
    pub facility_counts:    FacilityCounts,
    pub reasoning:          String,
    pub samples_taken:      usize,
    pub samples_matched:    usize,
    pub rank:               Option<usize>,
    pub tier:               Option<Tier>,
    pub margin_over_second: Option<f64>,
}

impl SafetyReport {
    fn unranked(
        route:  &RouteCandidate,
        score:  f64,
        counts: FacilityCounts,
        mode:   TravelMode,
    ) -> Self {
        Self {
            route_number:       1,
            distance_m:         route.distance_m,
            duration_s:         route.duration_s,
            score,
            reasoning:          compose_reasoning(&counts, mode),
            facility_counts:    counts,
            samples_taken:      0,
            samples_matched:    0,
            rank:               None,
            tier:               None,
            margin_over_second: None,
        }
    }

    /// Set the synthesis-order number.
    pub fn numbered(mut self, route_number: usize) -> Self {
        self.route_number = route_number;
        self
    }
}

/// Scores candidates against a grid or a live directory.
pub struct RouteEvaluator<'a> {
    weights: &'a WeightTable,
    scale:   ScoreScale,
    config:  EvaluationConfig,
}

impl<'a> RouteEvaluator<'a> {
    pub fn new(weights: &'a WeightTable, scale: ScoreScale, config: EvaluationConfig) -> Self {
        Self { weights, scale, config }
    }

    pub fn scale(&self) -> ScoreScale {
        self.scale
    }

    /// Mean score of the first containing cell per sample.
    pub fn evaluate_on_grid(
        &self,
        route: &RouteCandidate,
        grid:  &HexGrid,
        mode:  TravelMode,
    ) -> SafetyReport {
        let samples = route.polyline.sample_evenly(self.config.max_samples);
        let mut total = 0.0;
        let mut matched = 0usize;
        let mut counts = FacilityCounts::new();

        for &sample in &samples {
            if let Some(cell) = grid.locate(sample) {
                total += cell.safety_score();
                counts.merge(cell.facility_counts());
                matched += 1;
            }
        }

        let score = if matched == 0 { 0.0 } else { self.scale.clamp(total / matched as f64) };
        tracing::debug!(samples = samples.len(), matched, score, "evaluated route on grid");

        let mut report = SafetyReport::unranked(route, score, counts, mode);
        report.samples_taken = samples.len();
        report.samples_matched = matched;
        report
    }

    /// Density score from a deduplicated live survey.
    pub fn evaluate_live<D: FacilityDirectory>(
        &self,
        route: &RouteCandidate,
        live:  &LiveFacilities<D>,
        mode:  TravelMode,
    ) -> SafetyReport {
        let samples = route.polyline.sample_evenly(mode.live_sample_cap());
        let survey = live.survey(&samples, mode.search_radius_m());

        let length_km = (route.effective_length_m() / 1000.0).max(MIN_ROUTE_KM);
        let score = if survey.counts.total() == 0 {
            self.scale.clamp(self.config.empty_route_fraction * self.scale.max)
        } else {
            let weighted = survey.counts.weighted_sum(self.weights);
            self.scale.density_score(weighted / length_km)
        };
        tracing::debug!(
            samples = samples.len(),
            failed = survey.failed,
            facilities = survey.counts.total(),
            score,
            "evaluated route live"
        );

        let mut report = SafetyReport::unranked(route, score, survey.counts, mode);
        report.samples_taken = samples.len();
        report.samples_matched = survey.queries - survey.failed;
        report
    }
}
