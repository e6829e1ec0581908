//! Unit tests for wd-plan.

#[cfg(test)]
mod helpers {
    use wd_core::{Bssid, Coordinate, Encryption, TargetPoint};

    pub fn coord(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon).unwrap()
    }

    pub fn tp(bssid: u64, lat: f64, lon: f64) -> TargetPoint {
        TargetPoint::new(Bssid(bssid), coord(lat, lon), -70, Encryption::Open)
    }
}

// ── Point store ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod store {
    use super::helpers::{coord, tp};
    use crate::{PlanError, PointStore};
    use wd_core::Bssid;

    #[test]
    fn dedup_first_occurrence_wins() {
        let dup = tp(1, 9.0, 9.0); // same BSSID as the first, different spot
        let store = PointStore::load(
            coord(0.0, 0.0),
            vec![tp(1, 0.0, 1.0), tp(2, 0.0, 2.0), dup],
            None,
        );
        assert_eq!(store.len(), 2);
        let first = store.get(Bssid(1)).unwrap();
        assert_eq!(first.pos, coord(0.0, 1.0));
    }

    #[test]
    fn truncates_to_max_points() {
        let points: Vec<_> = (0..10).map(|i| tp(i, 0.0, i as f64 * 0.01)).collect();
        let store = PointStore::load(coord(0.0, 0.0), points, Some(4));
        assert_eq!(store.len(), 4);
        assert_eq!(store.remaining_count(), 4);
        // The first four in load order survive.
        let kept: Vec<_> = store.remaining().map(|p| p.bssid).collect();
        assert_eq!(kept, vec![Bssid(0), Bssid(1), Bssid(2), Bssid(3)]);
    }

    #[test]
    fn dedup_runs_before_truncation() {
        let points = vec![tp(1, 0.0, 0.1), tp(1, 0.0, 0.2), tp(2, 0.0, 0.3)];
        let store = PointStore::load(coord(0.0, 0.0), points, Some(2));
        let kept: Vec<_> = store.remaining().map(|p| p.bssid).collect();
        assert_eq!(kept, vec![Bssid(1), Bssid(2)]);
    }

    #[test]
    fn mark_visited_shrinks_remaining() {
        let mut store = PointStore::load(
            coord(0.0, 0.0),
            vec![tp(1, 0.0, 1.0), tp(2, 0.0, 2.0)],
            None,
        );
        assert_eq!(store.remaining_count(), 2);
        store.mark_visited(Bssid(1)).unwrap();
        assert_eq!(store.remaining_count(), 1);
        let left: Vec<_> = store.remaining().map(|p| p.bssid).collect();
        assert_eq!(left, vec![Bssid(2)]);
        // Lookup still works after visiting.
        assert!(store.get(Bssid(1)).is_some());
    }

    #[test]
    fn mark_visited_unknown_errors() {
        let mut store = PointStore::load(coord(0.0, 0.0), vec![tp(1, 0.0, 1.0)], None);
        let err = store.mark_visited(Bssid(99)).unwrap_err();
        assert!(matches!(err, PlanError::PointNotFound(Bssid(99))));
    }

    #[test]
    fn mark_visited_twice_errors() {
        let mut store = PointStore::load(coord(0.0, 0.0), vec![tp(1, 0.0, 1.0)], None);
        store.mark_visited(Bssid(1)).unwrap();
        assert!(store.mark_visited(Bssid(1)).is_err());
    }

    #[test]
    fn empty_store() {
        let store = PointStore::load(coord(0.0, 0.0), vec![], None);
        assert!(store.is_empty());
        assert_eq!(store.remaining_count(), 0);
        assert_eq!(store.remaining().count(), 0);
    }
}

// ── Greedy planner ────────────────────────────────────────────────────────────

#[cfg(test)]
mod planner {
    use super::helpers::{coord, tp};
    use crate::{GreedyPlanner, PointStore, RoutePlanner};
    use wd_core::{Bssid, Coordinate, TargetPoint};

    fn plan(
        start: Coordinate,
        points: Vec<TargetPoint>,
        max_points: Option<usize>,
    ) -> crate::PlannedRoute {
        let mut store = PointStore::load(start, points, max_points);
        GreedyPlanner::default().plan(&mut store).unwrap()
    }

    #[test]
    fn empty_set_is_trivial_route() {
        // Downtown Las Vegas, nothing nearby.
        let start = coord(36.1699, -115.1398);
        let route = plan(start, vec![], None);
        assert!(route.is_trivial());
        assert_eq!(route.waypoints(), vec![start]);
        assert_eq!(route.total_km(), 0.0);
    }

    #[test]
    fn single_point() {
        let start = coord(0.0, 0.0);
        let route = plan(start, vec![tp(1, 0.0, 1.0)], None);
        assert_eq!(route.stops().len(), 1);
        assert_eq!(route.waypoints().len(), 2);
        let expected = start.distance_km(coord(0.0, 1.0));
        assert!((route.total_km() - expected).abs() < 1e-9);
    }

    /// Replays the greedy selection independently: at every step the chosen
    /// stop must be the true argmin over the points not yet taken.
    #[test]
    fn each_step_selects_true_nearest() {
        let start = coord(0.0, 0.0);
        let candidates = vec![tp(1, 0.0, 1.0), tp(2, 0.0, 2.0), tp(3, 1.0, 0.0)];
        let route = plan(start, candidates.clone(), None);
        assert_eq!(route.stops().len(), 3);

        let mut current = start;
        let mut unvisited: Vec<&TargetPoint> = candidates.iter().collect();
        for stop in route.stops() {
            let nearest = unvisited
                .iter()
                .map(|p| p.pos.distance_km(current))
                .fold(f64::INFINITY, f64::min);
            let chosen = current.distance_km(stop.pos);
            assert!(
                (chosen - nearest).abs() < 1e-9,
                "stop {} at {:.6} km but nearest unvisited is {:.6} km",
                stop.bssid,
                chosen,
                nearest
            );
            unvisited.retain(|p| p.bssid != stop.bssid);
            current = stop.pos;
        }
        assert!(unvisited.is_empty());
    }

    #[test]
    fn total_distance_is_sum_of_legs() {
        let start = coord(0.0, 0.0);
        let route = plan(
            start,
            vec![tp(1, 0.0, 1.0), tp(2, 0.0, 2.0), tp(3, 1.0, 0.0)],
            None,
        );
        let legs: f64 = route
            .waypoints()
            .windows(2)
            .map(|w| w[0].distance_km(w[1]))
            .sum();
        assert!((route.total_km() - legs).abs() < 1e-9);
        assert!(route.total_km() > 0.0);
    }

    #[test]
    fn every_point_visited_exactly_once() {
        let start = coord(0.0, 0.0);
        let points: Vec<_> = (0..20)
            .map(|i| tp(i, (i as f64) * 0.01, 1.0 - (i as f64) * 0.013))
            .collect();
        let route = plan(start, points, None);
        assert_eq!(route.stops().len(), 20);
        assert_eq!(route.waypoints().len(), 21);

        let mut ids: Vec<Bssid> = route.stops().iter().map(|p| p.bssid).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 20, "duplicate or missing stops");
    }

    #[test]
    fn idempotent_across_runs() {
        let start = coord(36.1699, -115.1398);
        let points: Vec<_> = (0..50)
            .map(|i| tp(i * 7 + 3, 36.1699 + (i as f64) * 0.002, -115.1398 - (i as f64) * 0.003))
            .collect();

        let a = plan(start, points.clone(), None);
        let b = plan(start, points, None);

        let ids_a: Vec<_> = a.stops().iter().map(|p| p.bssid).collect();
        let ids_b: Vec<_> = b.stops().iter().map(|p| p.bssid).collect();
        assert_eq!(ids_a, ids_b);
        assert_eq!(a.total_km(), b.total_km());
    }

    #[test]
    fn exact_tie_prefers_lower_bssid() {
        let start = coord(0.0, 0.0);
        // Mirror images across the equator: identical haversine distance.
        let east = tp(20, 0.0, 1.0);
        let west = tp(10, 0.0, -1.0);
        for points in [vec![east.clone(), west.clone()], vec![west.clone(), east.clone()]] {
            let route = plan(start, points, None);
            assert_eq!(route.stops()[0].bssid, Bssid(10), "lower BSSID wins the tie");
            assert_eq!(route.stops()[1].bssid, Bssid(20));
        }
    }

    #[test]
    fn max_points_caps_visits() {
        let start = coord(0.0, 0.0);
        let points: Vec<_> = (0..10).map(|i| tp(i, 0.0, 0.1 + i as f64 * 0.1)).collect();
        let route = plan(start, points, Some(3));
        assert_eq!(route.stops().len(), 3);
    }

    #[test]
    fn trivial_route_zero_distance_iff_no_stops() {
        let start = coord(10.0, 10.0);
        let trivial = plan(start, vec![], None);
        assert_eq!(trivial.total_km(), 0.0);

        let nontrivial = plan(start, vec![tp(1, 10.0, 10.1)], None);
        assert!(nontrivial.total_km() > 0.0);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_path_matches_sequential() {
        let start = coord(36.0, -115.0);
        let points: Vec<_> = (0..600)
            .map(|i| {
                tp(
                    i * 13 + 1,
                    36.0 + ((i * 31) % 97) as f64 * 0.001,
                    -115.0 - ((i * 17) % 89) as f64 * 0.001,
                )
            })
            .collect();

        let sequential = GreedyPlanner {
            parallel_threshold: usize::MAX,
        };
        let parallel = GreedyPlanner {
            parallel_threshold: 1,
        };

        let mut s1 = PointStore::load(start, points.clone(), None);
        let mut s2 = PointStore::load(start, points, None);
        let a = sequential.plan(&mut s1).unwrap();
        let b = parallel.plan(&mut s2).unwrap();

        let ids_a: Vec<_> = a.stops().iter().map(|p| p.bssid).collect();
        let ids_b: Vec<_> = b.stops().iter().map(|p| p.bssid).collect();
        assert_eq!(ids_a, ids_b);
        assert_eq!(a.total_km(), b.total_km());
    }
}
