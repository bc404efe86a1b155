//! Cell scoring.

use sr_core::{FacilityCounts, ScoreScale, WeightTable};

use crate::{FacilityService, HexGrid};

/// Outcome of [`FacilityScorer::score_grid`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScoringSummary {
    pub scored: usize,
    /// Cells whose query failed and were left at zero.
    pub failed: usize,
}

/// Turns facility counts into scores on a fixed [`ScoreScale`].
///
/// Scores from scorers with different scales are not comparable.
pub struct FacilityScorer<'a, S: ?Sized> {
    service: &'a S,
    weights: &'a WeightTable,
    scale:   ScoreScale,
}

impl<'a, S: FacilityService + ?Sized> FacilityScorer<'a, S> {
    pub fn new(service: &'a S, weights: &'a WeightTable, scale: ScoreScale) -> Self {
        Self { service, weights, scale }
    }

    pub fn scale(&self) -> ScoreScale {
        self.scale
    }

    /// `clamp(Σ count·weight / normalizer, 0, max)`.
    #[inline]
    pub fn score_counts(&self, counts: &FacilityCounts) -> f64 {
        self.scale.score(counts.weighted_sum(self.weights))
    }

    /// Query and score every cell once, in grid order.
    ///
    /// A failed query leaves that cell with zero counts and zero score.
    pub fn score_grid(&self, grid: &mut HexGrid) -> ScoringSummary {
        let mut summary = ScoringSummary::default();
        for cell in grid.cells_mut() {
            if cell.is_scored() {
                continue;
            }
            let queried = self.service.query_facilities(cell.center(), cell.circumradius_m());
            let (counts, score) = match queried {
                Ok(counts) => {
                    let score = self.score_counts(&counts);
                    (counts, score)
                }
                Err(e) => {
                    summary.failed += 1;
                    tracing::warn!("facility query for cell at {} failed: {e}", cell.center());
                    (FacilityCounts::new(), 0.0)
                }
            };
            cell.assign(counts, score);
            summary.scored += 1;
        }
        tracing::debug!(scored = summary.scored, failed = summary.failed, "scored hex grid");
        summary
    }
}
