//! Engine configuration.
//!
//! Every tunable of an evaluation cycle in one struct.  All fields have
//! defaults, so a JSON file only needs the keys it changes:
//!
//! ```json
//! { "scale": { "normalizer": 15.0, "density_normalizer": 0.5, "max": 10.0 },
//!   "synthesis": { "max_routes": 4 },
//!   "max_workers": 8 }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use sr_core::{ScoreScale, WeightTable};
use sr_grid::{GridSpec, SimulationConfig};
use sr_route::SynthesisConfig;

use crate::{EngineError, EngineResult, EvaluationConfig};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub scale:       ScoreScale,
    pub weights:     WeightTable,
    pub grid:        GridSpec,
    pub synthesis:   SynthesisConfig,
    pub evaluation:  EvaluationConfig,
    pub simulation:  SimulationConfig,
    /// Upper bound on concurrent live directory queries.
    pub max_workers: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            scale:       ScoreScale::HUNDRED,
            weights:     WeightTable::grid_default(),
            grid:        GridSpec::default(),
            synthesis:   SynthesisConfig::default(),
            evaluation:  EvaluationConfig::default(),
            simulation:  SimulationConfig::default(),
            max_workers: 4,
        }
    }
}

impl EngineConfig {
    /// 0–10 scale with the amenity-directory weights.
    pub fn ten_point() -> Self {
        Self {
            scale:   ScoreScale::TEN,
            weights: WeightTable::directory_default(),
            ..Self::default()
        }
    }

    pub fn from_json_str(text: &str) -> EngineResult<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_path(path: &Path) -> EngineResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> EngineResult<()> {
        self.scale.validate()?;
        self.grid.validate()?;

        let s = &self.synthesis;
        if s.max_routes == 0 {
            return Err(EngineError::Config("synthesis.max_routes must be at least 1".into()));
        }
        for (name, v) in [
            ("synthesis.dedup_threshold_m", s.dedup_threshold_m),
            ("synthesis.second_wave_threshold_m", s.second_wave_threshold_m),
        ] {
            if !(v.is_finite() && v >= 0.0) {
                return Err(EngineError::Config(format!("{name} must be non-negative, got {v}")));
            }
        }

        if self.evaluation.max_samples == 0 {
            return Err(EngineError::Config("evaluation.max_samples must be at least 1".into()));
        }
        let floor = self.evaluation.empty_route_fraction;
        if !(0.0..=1.0).contains(&floor) {
            return Err(EngineError::Config(format!(
                "evaluation.empty_route_fraction must be within [0, 1], got {floor}"
            )));
        }
        if self.max_workers == 0 {
            return Err(EngineError::Config("max_workers must be at least 1".into()));
        }

        let sim = &self.simulation;
        for (name, p) in [
            ("simulation.facility_probability", sim.facility_probability),
            ("simulation.area_probability", sim.area_probability),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(EngineError::Config(format!("{name} must be within [0, 1], got {p}")));
            }
        }
        if sim.facility_count_max == 0 || sim.area_count_max == 0 {
            return Err(EngineError::Config("simulation count maxima must be at least 1".into()));
        }
        if !(sim.corridor_factor.is_finite() && sim.corridor_factor >= 1.0) {
            return Err(EngineError::Config(format!(
                "simulation.corridor_factor must be at least 1, got {}",
                sim.corridor_factor
            )));
        }
        Ok(())
    }
}
