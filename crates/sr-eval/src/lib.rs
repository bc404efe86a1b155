//! `sr-eval` — route evaluation, ranking and the end-to-end engine.
//!
//! # Evaluation cycle
//!
//! ```text
//! SafetyEngine::run(origin, destination, mode):
//!   ① Resolve   — Geocoder::resolve on both texts ("lat,lon" literals first).
//!   ② Routes    — RouteSynthesizer: direct + perturbed waypoints, deduplicated.
//!   ③ Facilities— Simulated / Grid: score a hex grid around the corridor.
//!                 Live: survey each route's samples through the directory.
//!   ④ Evaluate  — RouteEvaluator: mean cell score or facility density,
//!                 plus reasoning text.
//!   ⑤ Rank      — Ranker: stable sort, ranks 1..N, tiers, margin, verdict.
//! ```
//!
//! # Crate layout
//!
//! | Module          | Contents                                                 |
//! |-----------------|----------------------------------------------------------|
//! | [`evaluator`]   | `RouteEvaluator`, `SafetyReport`, `EvaluationConfig`     |
//! | [`reasoning`]   | `compose_reasoning`, `traffic_level`                     |
//! | [`ranker`]      | `Ranker`, `Tier`, `Verdict`                              |
//! | [`output`]      | `RouteSummary`, `Recommendation` (JSON surface)          |
//! | [`config`]      | `EngineConfig` (JSON-loadable, validated)                |
//! | [`engine`]      | `SafetyEngine`, `FacilityStrategy`                       |
//! | [`error`]       | `EngineError`, `EngineResult`                            |

pub mod config;
pub mod engine;
pub mod error;
pub mod evaluator;
pub mod output;
pub mod ranker;
pub mod reasoning;

#[cfg(test)]
mod tests;

pub use config::EngineConfig;
pub use engine::{FacilityStrategy, SafetyEngine};
pub use error::{EngineError, EngineResult};
pub use evaluator::{EvaluationConfig, RouteEvaluator, SafetyReport};
pub use output::{Recommendation, RouteSummary};
pub use ranker::{Ranker, Tier, Verdict};
pub use reasoning::{compose_reasoning, traffic_level};
