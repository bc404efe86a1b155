//! Unit tests for sr-eval.

#[cfg(test)]
mod reasoning {
    use sr_core::{FacilityCounts, FacilityKind, TravelMode};

    use crate::{compose_reasoning, traffic_level};

    fn counts(pairs: &[(FacilityKind, u32)]) -> FacilityCounts {
        pairs.iter().copied().collect()
    }

    #[test]
    fn no_facilities_is_standard_route() {
        assert_eq!(
            compose_reasoning(&FacilityCounts::new(), TravelMode::Walking),
            "standard walking route"
        );
        let areas_only = counts(&[(FacilityKind::WellLitArea, 3), (FacilityKind::HighTraffic, 5)]);
        assert_eq!(compose_reasoning(&areas_only, TravelMode::Driving), "standard driving route");
    }

    #[test]
    fn clauses_follow_priority_order() {
        let c = counts(&[
            (FacilityKind::Park, 1),
            (FacilityKind::Atm, 1),
            (FacilityKind::BusStop, 2),
            (FacilityKind::College, 1),
            (FacilityKind::School, 1),
            (FacilityKind::Hospital, 1),
            (FacilityKind::Police, 2),
            (FacilityKind::WellLitArea, 2),
            (FacilityKind::HighTraffic, 4),
        ]);
        assert_eq!(
            compose_reasoning(&c, TravelMode::Walking),
            "near 2 police station(s), passes 1 hospital(s), by 2 educational institution(s), \
             access to 2 transit stop(s), financial services nearby, 1 public park(s), \
             well-lit streets, high pedestrian traffic"
        );
    }

    #[test]
    fn qualifiers() {
        let c = counts(&[(FacilityKind::FireStation, 1), (FacilityKind::WellLitArea, 1)]);
        assert_eq!(
            compose_reasoning(&c, TravelMode::Cycling),
            "close to 1 fire station(s), mixed lighting conditions, limited pedestrian traffic"
        );

        assert_eq!(traffic_level(&counts(&[(FacilityKind::Restaurant, 1)])), "limited");
        let mixed = counts(&[(FacilityKind::Restaurant, 1), (FacilityKind::ShoppingMall, 1)]);
        assert_eq!(traffic_level(&mixed), "moderate");
        assert_eq!(traffic_level(&counts(&[(FacilityKind::HighTraffic, 4)])), "high");
    }

    #[test]
    fn identical_counts_identical_text() {
        let a =
            counts(&[(FacilityKind::Police, 1), (FacilityKind::Bank, 2), (FacilityKind::Park, 3)]);
        let b =
            counts(&[(FacilityKind::Park, 3), (FacilityKind::Police, 1), (FacilityKind::Bank, 2)]);
        let first = compose_reasoning(&a, TravelMode::Driving);
        for _ in 0..10 {
            assert_eq!(compose_reasoning(&b, TravelMode::Driving), first);
        }
    }
}

#[cfg(test)]
mod evaluator {
    use sr_core::{Coordinate, FacilityCounts, FacilityKind, ScoreScale, TravelMode, WeightTable};
    use sr_grid::{HexCell, HexGrid};
    use sr_route::{Polyline, RouteCandidate};

    use crate::{EvaluationConfig, Ranker, RouteEvaluator, Verdict};

    const CELL_RADIUS: f64 = 0.004;
    const SCORES: [f64; 7] = [80.0, 60.0, 40.0, 80.0, 20.0, 50.0, 90.0];

    fn origin() -> Coordinate {
        Coordinate::from_lat_lon(23.0, 72.5)
    }

    fn destination() -> Coordinate {
        Coordinate::from_lat_lon(23.02, 72.55)
    }

    /// Seven disjoint cells evenly spaced from origin to destination.
    fn centers() -> Vec<Coordinate> {
        let (a, b) = (origin(), destination());
        (0..7)
            .map(|i| {
                let t = i as f64 / 6.0;
                Coordinate::new(a.lon + (b.lon - a.lon) * t, a.lat + (b.lat - a.lat) * t)
            })
            .collect()
    }

    fn corridor_grid() -> HexGrid {
        let cells = centers()
            .into_iter()
            .zip(SCORES)
            .enumerate()
            .map(|(i, (c, score))| {
                let counts: FacilityCounts =
                    [(FacilityKind::Police, 1 + i as u32 % 2)].into_iter().collect();
                HexCell::scored(c, CELL_RADIUS, counts, score)
            })
            .collect();
        HexGrid::from_cells(cells)
    }

    fn route_through(cells: &[usize]) -> RouteCandidate {
        let c = centers();
        let points: Vec<Coordinate> = cells.iter().map(|&i| c[i]).collect();
        let polyline = Polyline::new(points);
        let distance = polyline.length_m();
        RouteCandidate::new(polyline, distance, distance / 1.4)
    }

    fn evaluator(weights: &WeightTable) -> RouteEvaluator<'_> {
        RouteEvaluator::new(weights, ScoreScale::HUNDRED, EvaluationConfig::default())
    }

    #[test]
    fn cells_are_disjoint() {
        let grid = corridor_grid();
        for (i, c) in centers().into_iter().enumerate() {
            let hits = grid.cells().iter().filter(|cell| cell.contains(c)).count();
            assert_eq!(hits, 1, "centre {i}");
        }
    }

    #[test]
    fn mean_of_matched_cells() {
        let weights = WeightTable::grid_default();
        let route = route_through(&[0, 1, 2]);
        let report =
            evaluator(&weights).evaluate_on_grid(&route, &corridor_grid(), TravelMode::Walking);
        assert_eq!(report.samples_taken, 3);
        assert_eq!(report.samples_matched, 3);
        assert!((report.score - 60.0).abs() < 1e-9);
        // police counts 1 + 2 + 1
        assert_eq!(report.facility_counts.get(FacilityKind::Police), 4);
        assert!(report.rank.is_none() && report.tier.is_none());
    }

    #[test]
    fn unmatched_samples_are_ignored() {
        let weights = WeightTable::grid_default();
        let mut points = vec![centers()[6]];
        points.push(Coordinate::from_lat_lon(10.0, 10.0));
        let route = RouteCandidate::new(Polyline::new(points), 1000.0, 100.0);
        let report =
            evaluator(&weights).evaluate_on_grid(&route, &corridor_grid(), TravelMode::Driving);
        assert_eq!(report.samples_matched, 1);
        assert!((report.score - 90.0).abs() < 1e-9);
    }

    #[test]
    fn empty_grid_scores_zero() {
        let weights = WeightTable::grid_default();
        let route = route_through(&[0, 1, 2]);
        let report =
            evaluator(&weights).evaluate_on_grid(&route, &HexGrid::empty(), TravelMode::Walking);
        assert_eq!(report.score, 0.0);
        assert!(report.facility_counts.is_empty());
        assert_eq!(report.samples_matched, 0);
        assert_eq!(report.reasoning, "standard walking route");
    }

    #[test]
    fn empty_polyline_scores_zero() {
        let weights = WeightTable::grid_default();
        let route = RouteCandidate::new(Polyline::default(), 0.0, 0.0);
        let report =
            evaluator(&weights).evaluate_on_grid(&route, &corridor_grid(), TravelMode::Walking);
        assert_eq!(report.score, 0.0);
        assert_eq!(report.samples_taken, 0);
    }

    #[test]
    fn second_half_of_long_route_counts() {
        let weights = WeightTable::grid_default();
        let a = Coordinate::from_lat_lon(23.0, 72.5);
        let b = Coordinate::from_lat_lon(23.0, 72.52);
        let grid = HexGrid::from_cells(vec![
            HexCell::scored(a, CELL_RADIUS, FacilityCounts::new(), 10.0),
            HexCell::scored(b, CELL_RADIUS, FacilityCounts::new(), 90.0),
        ]);

        // 20 points in the first cell, 19 in the second.
        let points: Vec<Coordinate> = (0..20)
            .map(|i| a.offset(i as f64 * 0.0001, 0.0))
            .chain((0..19).map(|i| b.offset(i as f64 * 0.0001, 0.0)))
            .collect();
        let route = RouteCandidate::new(Polyline::new(points), 2000.0, 200.0);

        let report = evaluator(&weights).evaluate_on_grid(&route, &grid, TravelMode::Driving);
        assert_eq!(report.samples_taken, 20);
        assert_eq!(report.samples_matched, 20);
        assert!((report.score - 50.0).abs() < 1e-9, "score {}", report.score);
    }

    #[test]
    fn end_to_end_corridor_ranking() {
        let weights = WeightTable::grid_default();
        let grid = corridor_grid();
        let eval = evaluator(&weights);
        let routes =
            [route_through(&[0, 1, 2]), route_through(&[3, 4, 5]), route_through(&[0, 3, 6])];

        let reports = routes
            .iter()
            .enumerate()
            .map(|(i, r)| eval.evaluate_on_grid(r, &grid, TravelMode::Walking).numbered(i + 1))
            .collect();
        let ranker = Ranker::new(ScoreScale::HUNDRED);
        let ranked = ranker.rank(reports);

        let order: Vec<usize> = ranked.iter().map(|r| r.route_number).collect();
        assert_eq!(order, [3, 1, 2]);
        assert!((ranked[0].score - 250.0 / 3.0).abs() < 1e-9);
        assert_eq!(ranked[0].margin_over_second, Some(ranked[0].score - ranked[1].score));
        assert!(ranked[1..].iter().all(|r| r.margin_over_second.is_none()));
        assert_eq!(ranker.verdict(&ranked), Some(Verdict::SignificantlySafer));
    }
}

#[cfg(test)]
mod live {
    use sr_core::{Coordinate, FacilityKind, ScoreScale, TravelMode, WeightTable};
    use sr_grid::{CsvFacilityDirectory, LiveFacilities};
    use sr_route::{Polyline, RouteCandidate};

    use crate::{EvaluationConfig, RouteEvaluator};

    fn straight(n: usize) -> RouteCandidate {
        let points: Vec<Coordinate> = (0..n)
            .map(|i| Coordinate::from_lat_lon(23.0, 72.5 + i as f64 * 0.001))
            .collect();
        let polyline = Polyline::new(points);
        let d = polyline.length_m();
        RouteCandidate::new(polyline, d, d / 11.1)
    }

    #[test]
    fn density_score_on_route_length() {
        let csv = "id,kind,lat,lon\n\
                   p1,police,23.0000,72.5020\n\
                   h1,hospital,23.0005,72.5050\n\
                   far,police,23.1000,72.5000\n";
        let dir = CsvFacilityDirectory::from_reader(csv.as_bytes()).unwrap();
        let live = LiveFacilities::new(dir);
        let weights = WeightTable::grid_default();
        let eval = RouteEvaluator::new(&weights, ScoreScale::TEN, EvaluationConfig::default());

        let route = straight(11);
        let report = eval.evaluate_live(&route, &live, TravelMode::Walking);
        assert_eq!(report.facility_counts.get(FacilityKind::Police), 1);
        assert_eq!(report.facility_counts.get(FacilityKind::Hospital), 1);
        assert_eq!(report.samples_taken, 11);
        assert_eq!(report.samples_matched, 11);

        // (15 + 12) / length_km / 0.5, capped at 10
        let expected = ScoreScale::TEN.density_score(27.0 / (route.distance_m / 1000.0));
        assert!((report.score - expected).abs() < 1e-9);
        assert!(report.score <= 10.0);
    }

    #[test]
    fn short_route_uses_length_floor() {
        let csv = "id,kind,lat,lon\nr1,restaurant,23.0,72.5\n";
        let dir = CsvFacilityDirectory::from_reader(csv.as_bytes()).unwrap();
        let live = LiveFacilities::new(dir);
        let weights = WeightTable::grid_default();
        let wide = ScoreScale { normalizer: 3.0, density_normalizer: 1.0, max: 1000.0 };
        let eval = RouteEvaluator::new(&weights, wide, EvaluationConfig::default());

        let point = Polyline::new(vec![Coordinate::from_lat_lon(23.0, 72.5)]);
        let route = RouteCandidate::new(point, 0.0, 0.0);
        let report = eval.evaluate_live(&route, &live, TravelMode::Driving);
        // restaurant weight 2 over the 0.1 km floor
        assert!((report.score - 20.0).abs() < 1e-9);
    }

    #[test]
    fn route_without_facilities_gets_base_score() {
        let csv = "id,kind,lat,lon\nfar,police,24.0,72.5\n";
        let dir = CsvFacilityDirectory::from_reader(csv.as_bytes()).unwrap();
        let live = LiveFacilities::new(dir);
        let weights = WeightTable::grid_default();

        let eval = RouteEvaluator::new(&weights, ScoreScale::TEN, EvaluationConfig::default());
        let report = eval.evaluate_live(&straight(11), &live, TravelMode::Walking);
        assert!(report.facility_counts.is_empty());
        assert!((report.score - 1.0).abs() < 1e-9);
        assert_eq!(report.reasoning, "standard walking route");

        let none = EvaluationConfig { empty_route_fraction: 0.0, ..EvaluationConfig::default() };
        let eval = RouteEvaluator::new(&weights, ScoreScale::TEN, none);
        assert_eq!(eval.evaluate_live(&straight(11), &live, TravelMode::Walking).score, 0.0);
    }
}

#[cfg(test)]
mod ranker {
    use sr_core::{FacilityCounts, ScoreScale};

    use crate::{Ranker, SafetyReport, Tier, Verdict};

    fn report(route_number: usize, score: f64) -> SafetyReport {
        SafetyReport {
            route_number,
            distance_m:         1000.0,
            duration_s:         100.0,
            score,
            facility_counts:    FacilityCounts::new(),
            reasoning:          String::new(),
            samples_taken:      0,
            samples_matched:    0,
            rank:               None,
            tier:               None,
            margin_over_second: None,
        }
    }

    #[test]
    fn sorted_contiguous_and_stable() {
        let ranker = Ranker::new(ScoreScale::HUNDRED);
        let ranked =
            ranker.rank(vec![report(1, 50.0), report(2, 70.0), report(3, 50.0), report(4, 70.0)]);
        let order: Vec<usize> = ranked.iter().map(|r| r.route_number).collect();
        assert_eq!(order, [2, 4, 1, 3]);
        let ranks: Vec<usize> = ranked.iter().filter_map(|r| r.rank).collect();
        assert_eq!(ranks, [1, 2, 3, 4]);
        assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
        assert_eq!(ranked[0].margin_over_second, Some(0.0));
        assert_eq!(ranker.verdict(&ranked), Some(Verdict::Comparable));
    }

    #[test]
    fn single_route_has_no_margin() {
        let ranker = Ranker::new(ScoreScale::TEN);
        let ranked = ranker.rank(vec![report(1, 8.0)]);
        assert_eq!(ranked[0].rank, Some(1));
        assert_eq!(ranked[0].tier, Some(Tier::Top));
        assert_eq!(ranked[0].margin_over_second, None);
        assert_eq!(ranker.verdict(&ranked), None);
        assert!(ranker.rank(Vec::new()).is_empty());
    }

    #[test]
    fn tier_bands() {
        let s = ScoreScale::HUNDRED;
        assert_eq!(Tier::for_score(70.0, s), Tier::Top);
        assert_eq!(Tier::for_score(69.9, s), Tier::Mid);
        assert_eq!(Tier::for_score(50.0, s), Tier::Mid);
        assert_eq!(Tier::for_score(49.9, s), Tier::Lower);
        assert_eq!(Tier::for_score(7.0, ScoreScale::TEN), Tier::Top);
        assert_eq!(Tier::Mid.label(), "mid tier");
    }

    #[test]
    fn verdict_margin_is_strict() {
        let ranker = Ranker::new(ScoreScale::HUNDRED);
        let ranked = ranker.rank(vec![report(1, 60.0), report(2, 70.0)]);
        assert_eq!(ranker.verdict(&ranked), Some(Verdict::Comparable));
        let ranked = ranker.rank(vec![report(1, 59.5), report(2, 70.0)]);
        assert_eq!(ranker.verdict(&ranked), Some(Verdict::SignificantlySafer));
    }

    #[test]
    fn reranking_resets_margins() {
        let ranker = Ranker::new(ScoreScale::HUNDRED);
        let ranked = ranker.rank(vec![report(1, 10.0), report(2, 90.0)]);
        let mut again = ranked.clone();
        again[1].score = 95.0;
        let again = ranker.rank(again);
        assert_eq!(again[0].route_number, 1);
        assert_eq!(again[1].margin_over_second, None);
    }
}

#[cfg(test)]
mod output {
    use sr_core::{FacilityCounts, FacilityKind, ScoreScale, TravelMode};

    use crate::{Ranker, Recommendation, RouteSummary, SafetyReport};

    fn report(route_number: usize, score: f64) -> SafetyReport {
        SafetyReport {
            route_number,
            distance_m:         5843.21,
            duration_s:         4170.0,
            score,
            facility_counts:    [(FacilityKind::Police, 2)].into_iter().collect::<FacilityCounts>(),
            reasoning:          "near 2 police station(s), limited pedestrian traffic".to_string(),
            samples_taken:      20,
            samples_matched:    18,
            rank:               None,
            tier:               None,
            margin_over_second: None,
        }
    }

    #[test]
    fn summary_field_names_are_camel_case() {
        let ranked = Ranker::new(ScoreScale::HUNDRED).rank(vec![report(1, 72.34)]);
        let summary = RouteSummary::from_report(&ranked[0], ScoreScale::HUNDRED);
        let json = serde_json::to_value(&summary).unwrap();
        let obj = json.as_object().unwrap();
        for key in [
            "routeNumber",
            "distanceKm",
            "durationMinutes",
            "score",
            "perKindCounts",
            "totalFacilities",
            "reasoning",
            "rank",
            "tier",
        ] {
            assert!(obj.contains_key(key), "missing {key}");
        }
        assert_eq!(obj.len(), 9);
        assert_eq!(json["distanceKm"], 5.84);
        assert_eq!(json["durationMinutes"], 69.5);
        assert_eq!(json["score"], 72.3);
        assert_eq!(json["perKindCounts"]["police"], 2);
        assert_eq!(json["totalFacilities"], 2);
        assert_eq!(json["tier"], "top");
    }

    #[test]
    fn recommendation_headline_and_margin() {
        let ranker = Ranker::new(ScoreScale::HUNDRED);
        let ranked = ranker.rank(vec![report(1, 40.0), report(2, 75.0)]);
        let rec =
            Recommendation::from_ranked(&ranked, &ranker, ScoreScale::HUNDRED, TravelMode::Walking);
        assert_eq!(rec.best().map(|r| r.route_number), Some(2));
        assert_eq!(rec.margin_over_second, Some(35.0));
        assert_eq!(
            rec.headline,
            "Route 2 is significantly safer (+35.0 points) than the alternatives."
        );

        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["marginOverSecond"], 35.0);
        assert_eq!(json["verdict"], "significantly_safer");
        assert_eq!(json["mode"], "walking");
        assert_eq!(json["scaleMax"], 100.0);
    }

    #[test]
    fn margin_matches_displayed_scores() {
        let ranker = Ranker::new(ScoreScale::HUNDRED);
        let ranked = ranker.rank(vec![report(1, 71.26), report(2, 50.24)]);
        let rec =
            Recommendation::from_ranked(&ranked, &ranker, ScoreScale::HUNDRED, TravelMode::Walking);
        assert_eq!(rec.routes[0].score, 71.3);
        assert_eq!(rec.routes[1].score, 50.2);
        assert_eq!(rec.margin_over_second, Some(21.1));
        assert_eq!(
            rec.headline,
            "Route 1 is significantly safer (+21.1 points) than the alternatives."
        );
    }

    #[test]
    fn single_route_omits_margin() {
        let ranker = Ranker::new(ScoreScale::HUNDRED);
        let ranked = ranker.rank(vec![report(1, 40.0)]);
        let rec =
            Recommendation::from_ranked(&ranked, &ranker, ScoreScale::HUNDRED, TravelMode::Driving);
        assert_eq!(rec.headline, "Route 1 provides the best balance of safety and efficiency.");
        let json = serde_json::to_value(&rec).unwrap();
        assert!(json.get("marginOverSecond").is_none());
        assert!(json["verdict"].is_null());

        let back: Recommendation = serde_json::from_str(&rec.to_json_pretty().unwrap()).unwrap();
        assert_eq!(back, rec);
    }
}

#[cfg(test)]
mod config {
    use std::io::Write;

    use sr_core::ScoreScale;

    use crate::{EngineConfig, EngineError};

    #[test]
    fn defaults_validate() {
        assert!(EngineConfig::default().validate().is_ok());
        assert!(EngineConfig::ten_point().validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = EngineConfig::from_json_str(
            r#"{ "scale": { "normalizer": 15.0, "density_normalizer": 0.5, "max": 10.0 },
                 "synthesis": { "max_routes": 4 },
                 "max_workers": 8 }"#,
        )
        .unwrap();
        assert_eq!(config.scale, ScoreScale::TEN);
        assert_eq!(config.synthesis.max_routes, 4);
        assert_eq!(config.synthesis.dedup_threshold_m, 50.0);
        assert_eq!(config.max_workers, 8);
        assert_eq!(config.grid.radius_km, 10.0);
    }

    #[test]
    fn invalid_values_rejected() {
        assert!(matches!(
            EngineConfig::from_json_str(r#"{ "synthesis": { "max_routes": 0 } }"#),
            Err(EngineError::Config(_))
        ));
        assert!(matches!(
            EngineConfig::from_json_str(r#"{ "grid": { "hex_size_km": 0.0 } }"#),
            Err(EngineError::Grid(_))
        ));
        let zero_normalizer =
            r#"{ "scale": { "normalizer": 0.0, "density_normalizer": 1.0, "max": 10.0 } }"#;
        assert!(matches!(EngineConfig::from_json_str(zero_normalizer), Err(EngineError::Core(_))));
        assert!(matches!(
            EngineConfig::from_json_str(r#"{ "simulation": { "area_probability": 1.5 } }"#),
            Err(EngineError::Config(_))
        ));
        assert!(matches!(
            EngineConfig::from_json_str(r#"{ "evaluation": { "empty_route_fraction": 2.0 } }"#),
            Err(EngineError::Config(_))
        ));
        assert!(matches!(EngineConfig::from_json_str("{ not json"), Err(EngineError::Json(_))));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{ "max_workers": 2, "evaluation": { "max_samples": 30 } }"#).unwrap();
        let config = EngineConfig::from_json_path(file.path()).unwrap();
        assert_eq!(config.max_workers, 2);
        assert_eq!(config.evaluation.max_samples, 30);

        let dir = tempfile::tempdir().unwrap();
        let missing = EngineConfig::from_json_path(&dir.path().join("missing.json"));
        assert!(matches!(missing, Err(EngineError::Io(_))));
    }
}

#[cfg(test)]
mod engine {
    use sr_core::{Coordinate, FacilityCounts, FacilityKind, ScoreScale, TravelMode};
    use sr_grid::{CsvFacilityDirectory, FacilityResult, FacilityService};
    use sr_route::{
        LiteralGeocoder, RouteCandidate, RouteError, RouteResult, RoutingProvider,
        StraightLineRouter,
    };

    use crate::{EngineConfig, EngineError, FacilityStrategy, SafetyEngine};

    const ORIGIN: &str = "23.0,72.5";
    const DESTINATION: &str = "23.02,72.55";

    fn simulated() -> SafetyEngine<StraightLineRouter, LiteralGeocoder> {
        SafetyEngine::new(
            EngineConfig::default(),
            StraightLineRouter::default(),
            LiteralGeocoder,
            FacilityStrategy::Simulated,
        )
        .unwrap()
    }

    #[test]
    fn simulated_run_is_ranked_and_reproducible() {
        let engine = simulated();
        let a = engine.run(ORIGIN, DESTINATION, TravelMode::Driving).unwrap();
        let b = engine.run(ORIGIN, DESTINATION, TravelMode::Driving).unwrap();
        assert_eq!(a, b);

        assert!(!a.routes.is_empty() && a.routes.len() <= 3);
        let ranks: Vec<usize> = a.routes.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, (1..=a.routes.len()).collect::<Vec<_>>());
        assert!(a.routes.windows(2).all(|w| w[0].score >= w[1].score));
        assert!(a.routes.iter().all(|r| ScoreScale::HUNDRED.contains(r.score)));
    }

    #[test]
    fn unknown_place_is_geocode_error() {
        let err = simulated().run("Atlantis", DESTINATION, TravelMode::Walking).unwrap_err();
        assert!(matches!(err, EngineError::Geocode(_)));
    }

    struct Down;

    impl RoutingProvider for Down {
        fn directions(&self, _: &[Coordinate], _: TravelMode) -> RouteResult<RouteCandidate> {
            Err(RouteError::Provider("offline".into()))
        }
    }

    #[test]
    fn unreachable_router_is_no_routes_found() {
        let engine = SafetyEngine::new(
            EngineConfig::default(),
            Down,
            LiteralGeocoder,
            FacilityStrategy::Simulated,
        )
        .unwrap();
        let err = engine.run(ORIGIN, DESTINATION, TravelMode::Driving).unwrap_err();
        assert!(matches!(err, EngineError::NoRoutesFound));
    }

    struct Uniform;

    impl FacilityService for Uniform {
        fn query_facilities(&self, _: Coordinate, _: f64) -> FacilityResult<FacilityCounts> {
            Ok([(FacilityKind::Police, 1)].into_iter().collect())
        }
    }

    #[test]
    fn uniform_grid_ties_keep_synthesis_order() {
        let engine = SafetyEngine::new(
            EngineConfig::default(),
            StraightLineRouter::default(),
            LiteralGeocoder,
            FacilityStrategy::Grid(Box::new(Uniform)),
        )
        .unwrap();
        let rec = engine.run(ORIGIN, DESTINATION, TravelMode::Driving).unwrap();
        let numbers: Vec<usize> = rec.routes.iter().map(|r| r.route_number).collect();
        assert_eq!(numbers, (1..=rec.routes.len()).collect::<Vec<_>>());
        assert!(rec.routes.iter().all(|r| (r.score - 5.0).abs() < 1e-9));
    }

    #[test]
    fn long_east_west_corridor_stays_on_grid() {
        let engine = SafetyEngine::new(
            EngineConfig::default(),
            StraightLineRouter::default(),
            LiteralGeocoder,
            FacilityStrategy::Grid(Box::new(Uniform)),
        )
        .unwrap();

        // ~43 km at 50°N: a ground-distance radius falls short in longitude.
        let ranked = engine
            .evaluate_corridor(
                Coordinate::from_lat_lon(50.0, 10.0),
                Coordinate::from_lat_lon(50.0, 10.6),
                TravelMode::Driving,
            )
            .unwrap();
        let direct = ranked.iter().find(|r| r.route_number == 1).unwrap();
        assert_eq!(direct.samples_taken, 17);
        assert_eq!(direct.samples_matched, direct.samples_taken);
    }

    #[test]
    fn live_strategy_counts_facilities_on_direct_route() {
        let csv = "id,kind,lat,lon\nmid,police,23.01,72.525\n";
        let dir = CsvFacilityDirectory::from_reader(csv.as_bytes()).unwrap();
        let engine = SafetyEngine::new(
            EngineConfig::default(),
            StraightLineRouter::default(),
            LiteralGeocoder,
            FacilityStrategy::Live(Box::new(dir)),
        )
        .unwrap();

        let ranked = engine
            .evaluate_corridor(
                Coordinate::from_lat_lon(23.0, 72.5),
                Coordinate::from_lat_lon(23.02, 72.55),
                TravelMode::Driving,
            )
            .unwrap();
        let direct = ranked.iter().find(|r| r.route_number == 1).unwrap();
        assert_eq!(direct.facility_counts.get(FacilityKind::Police), 1);
        assert!(direct.score > 0.0);
    }

    #[test]
    fn invalid_config_is_rejected_at_construction() {
        let mut config = EngineConfig::default();
        config.max_workers = 0;
        let built = SafetyEngine::new(
            config,
            StraightLineRouter::default(),
            LiteralGeocoder,
            FacilityStrategy::Simulated,
        );
        assert!(matches!(built, Err(EngineError::Config(_))));
    }
}
