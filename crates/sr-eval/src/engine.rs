//! One evaluation cycle: resolve → synthesize → score → evaluate → rank.

use sr_core::{Coordinate, KM_PER_DEGREE, TravelMode};
use sr_grid::{
    FacilityDirectory, FacilityScorer, FacilityService, HexGrid, LiveFacilities,
    SimulatedFacilities, build_grid,
};
use sr_route::{Geocoder, RouteCandidate, RouteSynthesizer, RoutingProvider};

use crate::{EngineConfig, EngineResult, Ranker, Recommendation, RouteEvaluator, SafetyReport};

/// Where facility data comes from.
pub enum FacilityStrategy {
    /// Seeded random facilities on a hex grid (`EngineConfig::simulation`).
    Simulated,
    /// A caller-supplied service scored onto a hex grid.
    Grid(Box<dyn FacilityService>),
    /// Per-sample directory queries along each route, no grid.
    Live(Box<dyn FacilityDirectory>),
}

impl FacilityStrategy {
    pub fn name(&self) -> &'static str {
        match self {
            FacilityStrategy::Simulated => "simulated",
            FacilityStrategy::Grid(_) => "grid",
            FacilityStrategy::Live(_) => "live",
        }
    }
}

/// Request-scoped safety engine.
///
/// Holds only read-only configuration and collaborators, so a single
/// instance can serve many requests.
///
/// # Example
///
/// ```
/// use sr_core::TravelMode;
/// use sr_eval::{EngineConfig, FacilityStrategy, SafetyEngine};
/// use sr_route::{LiteralGeocoder, StraightLineRouter};
///
/// let engine = SafetyEngine::new(
///     EngineConfig::default(),
///     StraightLineRouter::default(),
///     LiteralGeocoder,
///     FacilityStrategy::Simulated,
/// )
/// .unwrap();
/// let rec = engine.run("23.0,72.5", "23.02,72.55", TravelMode::Walking).unwrap();
/// assert_eq!(rec.routes[0].rank, 1);
/// ```
pub struct SafetyEngine<R: RoutingProvider, G: Geocoder> {
    config:   EngineConfig,
    router:   R,
    geocoder: G,
    strategy: FacilityStrategy,
}

impl<R: RoutingProvider, G: Geocoder> SafetyEngine<R, G> {
    /// Validate `config` and assemble the engine.
    pub fn new(
        config:   EngineConfig,
        router:   R,
        geocoder: G,
        strategy: FacilityStrategy,
    ) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self { config, router, geocoder, strategy })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn strategy(&self) -> &FacilityStrategy {
        &self.strategy
    }

    /// Resolve both place texts and evaluate the corridor.
    pub fn run(
        &self,
        origin:      &str,
        destination: &str,
        mode:        TravelMode,
    ) -> EngineResult<Recommendation> {
        let from = self.geocoder.resolve(origin)?;
        let to = self.geocoder.resolve(destination)?;
        let ranked = self.evaluate_corridor(from, to, mode)?;

        let ranker = Ranker::new(self.config.scale);
        Ok(Recommendation::from_ranked(&ranked, &ranker, self.config.scale, mode))
    }

    /// Synthesize candidates between two coordinates and rank them.
    pub fn evaluate_corridor(
        &self,
        origin:      Coordinate,
        destination: Coordinate,
        mode:        TravelMode,
    ) -> EngineResult<Vec<SafetyReport>> {
        let candidates = RouteSynthesizer::new(&self.router, self.config.synthesis.clone())
            .synthesize(origin, destination, mode)?;
        self.evaluate_candidates(&candidates, origin, destination, mode)
    }

    /// Score and rank already-synthesized candidates.
    pub fn evaluate_candidates(
        &self,
        candidates:  &[RouteCandidate],
        origin:      Coordinate,
        destination: Coordinate,
        mode:        TravelMode,
    ) -> EngineResult<Vec<SafetyReport>> {
        let evaluator = RouteEvaluator::new(
            &self.config.weights,
            self.config.scale,
            self.config.evaluation.clone(),
        );

        let reports: Vec<SafetyReport> = match &self.strategy {
            FacilityStrategy::Simulated => {
                let sim = SimulatedFacilities::new(
                    self.config.simulation.clone(),
                    vec![origin, destination],
                );
                let grid = self.scored_grid(&sim, origin, destination)?;
                evaluate_all(candidates, |route| evaluator.evaluate_on_grid(route, &grid, mode))
            }
            FacilityStrategy::Grid(service) => {
                let grid = self.scored_grid(service.as_ref(), origin, destination)?;
                evaluate_all(candidates, |route| evaluator.evaluate_on_grid(route, &grid, mode))
            }
            FacilityStrategy::Live(directory) => {
                let live = LiveFacilities::new(directory.as_ref())
                    .with_max_workers(self.config.max_workers);
                evaluate_all(candidates, |route| evaluator.evaluate_live(route, &live, mode))
            }
        };

        let ranked = Ranker::new(self.config.scale).rank(reports);
        if let Some(best) = ranked.first() {
            tracing::info!(
                strategy = self.strategy.name(),
                %mode,
                routes = ranked.len(),
                best_route = best.route_number,
                best_score = best.score,
                "corridor evaluated"
            );
        }
        Ok(ranked)
    }

    /// Grid radius: the configured one, widened so the whole corridor fits.
    ///
    /// The grid trims in degree space against its latitude radius, so the
    /// corridor is measured the same way rather than on the ground.
    fn grid_radius_km(&self, origin: Coordinate, destination: Coordinate) -> f64 {
        let half_corridor_deg = origin.midpoint(destination).degree_distance(origin);
        let needed_km = half_corridor_deg * KM_PER_DEGREE + self.config.grid.hex_size_km;
        self.config.grid.radius_km.max(needed_km)
    }

    fn scored_grid<S: FacilityService + ?Sized>(
        &self,
        service:     &S,
        origin:      Coordinate,
        destination: Coordinate,
    ) -> EngineResult<HexGrid> {
        let mut grid = build_grid(
            origin.midpoint(destination),
            self.grid_radius_km(origin, destination),
            self.config.grid.hex_size_km,
        )?;
        let summary = FacilityScorer::new(service, &self.config.weights, self.config.scale)
            .score_grid(&mut grid);
        if summary.failed > 0 {
            tracing::warn!(
                failed = summary.failed,
                cells = grid.len(),
                "some grid cells could not be scored"
            );
        }
        Ok(grid)
    }
}

fn evaluate_all(
    candidates: &[RouteCandidate],
    eval:       impl Fn(&RouteCandidate) -> SafetyReport,
) -> Vec<SafetyReport> {
    candidates
        .iter()
        .enumerate()
        .map(|(i, route)| eval(route).numbered(i + 1))
        .collect()
}
