//! Unit tests for sr-core primitives.

#[cfg(test)]
mod geo {
    use crate::Coordinate;

    #[test]
    fn zero_distance() {
        let p = Coordinate::from_lat_lon(23.0, 72.5);
        assert!(p.distance_m(p) < 0.01);
    }

    #[test]
    fn one_degree_of_latitude() {
        let a = Coordinate::from_lat_lon(23.0, 72.5);
        let b = Coordinate::from_lat_lon(24.0, 72.5);
        let d = a.distance_m(b);
        assert!((d - 111_195.0).abs() < 500.0, "got {d}");
    }

    #[test]
    fn lat_lon_constructor_orders_fields() {
        let p = Coordinate::from_lat_lon(23.0, 72.5);
        assert_eq!(p, Coordinate::new(72.5, 23.0));
        assert_eq!(p.to_string(), "23.000000,72.500000");
    }

    #[test]
    fn midpoint_and_offset() {
        let a = Coordinate::new(72.5, 23.0);
        let b = Coordinate::new(72.55, 23.02);
        let m = a.midpoint(b);
        assert!((m.lon - 72.525).abs() < 1e-12);
        assert!((m.lat - 23.01).abs() < 1e-12);
        assert_eq!(a.offset(0.1, -0.1), Coordinate::new(72.6, 22.9));
    }
}

#[cfg(test)]
mod geometry {
    use crate::{Coordinate, hexagon_vertices, is_simple_polygon, km_to_degrees, point_in_polygon};

    fn unit_square() -> Vec<Coordinate> {
        vec![
            Coordinate::new(0.0, 0.0),
            Coordinate::new(1.0, 0.0),
            Coordinate::new(1.0, 1.0),
            Coordinate::new(0.0, 1.0),
        ]
    }

    #[test]
    fn km_to_degrees_at_equator_is_isotropic() {
        let d = km_to_degrees(111.0, 0.0);
        assert!((d.d_lat - 1.0).abs() < 1e-12);
        assert!((d.d_lon - 1.0).abs() < 1e-12);
    }

    #[test]
    fn km_to_degrees_widens_longitude_polewards() {
        let d = km_to_degrees(1.0, 60.0);
        // cos(60°) = 0.5 → twice as many longitude degrees per km.
        assert!((d.d_lon / d.d_lat - 2.0).abs() < 1e-9);
    }

    #[test]
    fn hexagon_has_six_vertices_at_radius() {
        let center = Coordinate::new(72.5, 23.0);
        let verts = hexagon_vertices(center, 0.01, 0.02);
        assert_eq!(verts.len(), 6);
        for v in verts {
            assert!((v.degree_distance(center) - 0.01).abs() < 1e-12);
        }
        // Vertex 0 points east, vertex 1 sits 60° counter-clockwise.
        assert!((verts[0].lon - 72.51).abs() < 1e-12);
        assert!((verts[0].lat - 23.0).abs() < 1e-12);
        assert!(verts[1].lat > center.lat);
        assert!(is_simple_polygon(&verts));
    }

    #[test]
    fn hexagon_contains_its_center() {
        let center = Coordinate::new(72.5, 23.0);
        let verts = hexagon_vertices(center, 0.01, 0.01);
        assert!(point_in_polygon(center, &verts));
        assert!(!point_in_polygon(center.offset(0.02, 0.0), &verts));
    }

    #[test]
    fn square_inside_and_outside() {
        let sq = unit_square();
        assert!(point_in_polygon(Coordinate::new(0.5, 0.5), &sq));
        assert!(!point_in_polygon(Coordinate::new(1.5, 0.5), &sq));
        assert!(!point_in_polygon(Coordinate::new(0.5, -0.5), &sq));
    }

    #[test]
    fn on_edge_resolution_is_half_open() {
        let sq = unit_square();
        // West and south edges count as inside; east and north as outside.
        assert!(point_in_polygon(Coordinate::new(0.0, 0.5), &sq));
        assert!(point_in_polygon(Coordinate::new(0.5, 0.0), &sq));
        assert!(!point_in_polygon(Coordinate::new(1.0, 0.5), &sq));
        assert!(!point_in_polygon(Coordinate::new(0.5, 1.0), &sq));
    }

    #[test]
    fn invariant_under_rotation() {
        let ring = hexagon_vertices(Coordinate::new(10.0, 50.0), 0.02, 0.02).to_vec();
        let probes = [
            Coordinate::new(10.0, 50.0),
            Coordinate::new(10.019, 50.0),
            Coordinate::new(10.02, 50.0),
            Coordinate::new(10.0, 50.0173),
            Coordinate::new(10.03, 50.03),
            ring[2],
            ring[4],
        ];
        for shift in 0..ring.len() {
            let mut rotated = ring.clone();
            rotated.rotate_left(shift);
            for &p in &probes {
                assert_eq!(
                    point_in_polygon(p, &ring),
                    point_in_polygon(p, &rotated),
                    "rotation {shift} changed answer for {p:?}"
                );
            }
        }
    }

    #[test]
    fn degenerate_rings_contain_nothing() {
        let p = Coordinate::new(0.0, 0.0);
        assert!(!point_in_polygon(p, &[]));
        assert!(!point_in_polygon(p, &[Coordinate::new(1.0, 1.0), Coordinate::new(-1.0, -1.0)]));
    }

    #[test]
    fn bow_tie_is_not_simple() {
        let bow_tie = [
            Coordinate::new(0.0, 0.0),
            Coordinate::new(1.0, 1.0),
            Coordinate::new(1.0, 0.0),
            Coordinate::new(0.0, 1.0),
        ];
        assert!(!is_simple_polygon(&bow_tie));
        assert!(is_simple_polygon(&unit_square()));
    }

    #[test]
    fn repeated_vertex_is_not_simple() {
        let ring = [
            Coordinate::new(0.0, 0.0),
            Coordinate::new(1.0, 0.0),
            Coordinate::new(1.0, 0.0),
            Coordinate::new(0.0, 1.0),
        ];
        assert!(!is_simple_polygon(&ring));
    }
}

#[cfg(test)]
mod facility {
    use crate::{FacilityCounts, FacilityKind, WeightTable};

    #[test]
    fn names_roundtrip_through_from_str() {
        for kind in FacilityKind::ALL {
            assert_eq!(kind.as_str().parse::<FacilityKind>().unwrap(), kind);
        }
        assert!("casino".parse::<FacilityKind>().is_err());
    }

    #[test]
    fn points_of_interest_exclude_area_descriptors() {
        assert!(FacilityKind::points_of_interest().all(|k| !k.is_area_descriptor()));
        assert_eq!(FacilityKind::points_of_interest().count(), 19);
    }

    #[test]
    fn counts_skip_zero_and_merge() {
        let mut a = FacilityCounts::new();
        a.add(FacilityKind::Police, 0);
        assert!(a.is_empty());
        a.add(FacilityKind::Police, 2);
        let b: FacilityCounts = [(FacilityKind::Police, 1), (FacilityKind::Park, 3)]
            .into_iter()
            .collect();
        a.merge(&b);
        assert_eq!(a.get(FacilityKind::Police), 3);
        assert_eq!(a.get(FacilityKind::Park), 3);
        assert_eq!(a.get(FacilityKind::Bank), 0);
        assert_eq!(a.total(), 6);
        assert_eq!(a.sum_of(&[FacilityKind::Police, FacilityKind::Bank]), 3);
    }

    #[test]
    fn weighted_sum_uses_default_for_missing_kinds() {
        let weights = WeightTable::from_pairs([(FacilityKind::Police, 10)]);
        let counts: FacilityCounts = [(FacilityKind::Police, 2), (FacilityKind::Hotel, 3)]
            .into_iter()
            .collect();
        // 2·10 + 3·1
        assert_eq!(counts.weighted_sum(&weights), 23.0);
    }
}

#[cfg(test)]
mod scale {
    use crate::ScoreScale;

    #[test]
    fn score_is_clamped() {
        let s = ScoreScale::HUNDRED;
        assert_eq!(s.score(30.0), 10.0);
        assert_eq!(s.score(3_000.0), 100.0);
        assert_eq!(s.score(-5.0), 0.0);
        assert_eq!(s.clamp(f64::NAN), 0.0);
    }

    #[test]
    fn ten_scale() {
        let s = ScoreScale::TEN;
        assert_eq!(s.score(75.0), 5.0);
        assert_eq!(s.density_score(2.0), 4.0);
        assert!(s.contains(10.0));
        assert!(!s.contains(10.5));
    }

    #[test]
    fn validate_rejects_zero_normalizer() {
        let mut s = ScoreScale::TEN;
        assert!(s.validate().is_ok());
        s.normalizer = 0.0;
        assert!(s.validate().is_err());
    }
}

#[cfg(test)]
mod mode {
    use crate::TravelMode;

    #[test]
    fn walking_is_tighter_than_driving() {
        let (walk, drive) = (TravelMode::Walking, TravelMode::Driving);
        assert!(walk.waypoint_offset_deg() < drive.waypoint_offset_deg());
        assert!(TravelMode::Walking.search_radius_m() < TravelMode::Driving.search_radius_m());
    }

    #[test]
    fn parse_and_display() {
        assert_eq!("Walking".parse::<TravelMode>().unwrap(), TravelMode::Walking);
        assert_eq!("bike".parse::<TravelMode>().unwrap(), TravelMode::Cycling);
        assert!("teleport".parse::<TravelMode>().is_err());
        assert_eq!(TravelMode::Driving.to_string(), "driving");
    }
}

#[cfg(test)]
mod rng {
    use crate::{Coordinate, FacilityRng};

    #[test]
    fn deterministic_same_seed_and_location() {
        let at = Coordinate::new(72.5, 23.0);
        let mut r1 = FacilityRng::for_location(7, at);
        let mut r2 = FacilityRng::for_location(7, at);
        for _ in 0..100 {
            assert_eq!(r1.gen_range(0..1_000_000u32), r2.gen_range(0..1_000_000u32));
            assert_eq!(r1.gen_bool(0.5), r2.gen_bool(0.5));
        }
    }

    #[test]
    fn different_locations_differ() {
        let mut r0 = FacilityRng::for_location(1, Coordinate::new(72.5, 23.0));
        let mut r1 = FacilityRng::for_location(1, Coordinate::new(72.5, 23.01));
        let a: Vec<u64> = (0..8).map(|_| r0.gen_range(0..u64::MAX)).collect();
        let b: Vec<u64> = (0..8).map(|_| r1.gen_range(0..u64::MAX)).collect();
        assert_ne!(a, b);
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = FacilityRng::for_location(0, Coordinate::new(0.0, 0.0));
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
        assert!(rng.gen_bool(2.5));
    }
}
