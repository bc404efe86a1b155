//! Score scales.
//!
//! A scale pairs a ceiling with the normalizers that map raw weighted
//! facility sums onto it.  An engine instance uses exactly one scale; scores
//! produced under different scales are not comparable.

use crate::{CoreError, CoreResult};

/// Maps weighted facility sums into `[0, max]`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreScale {
    /// Divisor applied to a cell's `Σ count·weight`.
    pub normalizer: f64,
    /// Divisor applied to weighted points per route-kilometre (live strategy).
    pub density_normalizer: f64,
    /// Upper bound of the scale.
    pub max: f64,
}

impl ScoreScale {
    /// 0–100 scale.
    pub const HUNDRED: ScoreScale = ScoreScale {
        normalizer:         3.0,
        density_normalizer: 0.05,
        max:                100.0,
    };

    /// 0–10 scale.
    pub const TEN: ScoreScale = ScoreScale {
        normalizer:         15.0,
        density_normalizer: 0.5,
        max:                10.0,
    };

    /// `clamp(weighted_sum / normalizer, 0, max)`.
    #[inline]
    pub fn score(&self, weighted_sum: f64) -> f64 {
        self.clamp(weighted_sum / self.normalizer)
    }

    /// `clamp(points_per_km / density_normalizer, 0, max)`.
    #[inline]
    pub fn density_score(&self, points_per_km: f64) -> f64 {
        self.clamp(points_per_km / self.density_normalizer)
    }

    /// Clamp into `[0, max]`; NaN maps to 0.
    #[inline]
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() { 0.0 } else { value.clamp(0.0, self.max) }
    }

    /// `value` as a fraction of `max`.
    #[inline]
    pub fn fraction(&self, value: f64) -> f64 {
        value / self.max
    }

    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        (0.0..=self.max).contains(&value)
    }

    /// Reject non-positive or non-finite parameters.
    pub fn validate(&self) -> CoreResult<()> {
        for (name, v) in [
            ("normalizer", self.normalizer),
            ("density_normalizer", self.density_normalizer),
            ("max", self.max),
        ] {
            if !(v.is_finite() && v > 0.0) {
                return Err(CoreError::Config(format!(
                    "score scale {name} must be positive and finite, got {v}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for ScoreScale {
    fn default() -> Self {
        ScoreScale::HUNDRED
    }
}
