use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use trashroute::constructive::{nearest_neighbor, order_path, PathOrderConfig};
use trashroute::evaluation::path_length;
use trashroute::models::Point;

fn points_strategy(min: usize, max: usize) -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((-90.0f64..90.0, -180.0f64..180.0), min..=max)
        .prop_map(|coords| coords.into_iter().map(Point::from).collect())
}

fn assert_permutation(order: &[usize], n: usize) {
    let mut sorted = order.to_vec();
    sorted.sort_unstable();
    assert_eq!(sorted, (0..n).collect::<Vec<_>>());
}

proptest! {
    #[test]
    fn nearest_neighbor_is_permutation_with_fixed_start(points in points_strategy(1, 15)) {
        let tour = nearest_neighbor(&points).unwrap();
        prop_assert_eq!(tour.len(), points.len());
        assert_permutation(tour.order(), points.len());
        prop_assert_eq!(tour.points()[0], points[0]);
        for (k, &i) in tour.order().iter().enumerate() {
            prop_assert_eq!(tour.points()[k], points[i]);
        }
    }

    #[test]
    fn order_path_never_longer_than_input(points in points_strategy(3, 12)) {
        let tour = order_path(&points, &PathOrderConfig::default()).unwrap();
        prop_assert!(tour.length() <= path_length(&points) + 1e-9);
        prop_assert_eq!(tour.order()[0], 0);
        assert_permutation(tour.order(), points.len());
    }

    #[test]
    fn two_opt_refinement_keeps_invariants(points in points_strategy(1, 12)) {
        let config = PathOrderConfig::default().with_two_opt(true).with_input_fallback(false);
        let refined = order_path(&points, &config).unwrap();
        let greedy = nearest_neighbor(&points).unwrap();
        prop_assert!(refined.length() <= greedy.length() + 1e-9);
        prop_assert_eq!(refined.points()[0], points[0]);
        assert_permutation(refined.order(), points.len());
    }
}

#[test]
fn single_point_is_unchanged() {
    let p = Point::new(6.9271, 79.8612);
    for config in [
        PathOrderConfig::default(),
        PathOrderConfig::default().with_two_opt(true),
    ] {
        let tour = order_path(&[p], &config).unwrap();
        assert_eq!(tour.points(), &[p]);
    }
}

#[test]
fn empty_input_gives_empty_tour() {
    assert!(nearest_neighbor(&[]).unwrap().is_empty());
    assert!(order_path(&[], &PathOrderConfig::default()).unwrap().is_empty());
}

#[test]
fn greedy_beats_input_order_on_shuffled_city_stops() {
    // Collection stops scattered around Colombo, in arbitrary order
    let mut rng = StdRng::seed_from_u64(42);
    let mut better = 0;
    for _ in 0..50 {
        let points: Vec<Point> = (0..10)
            .map(|_| Point::new(rng.random_range(6.85..7.00), rng.random_range(79.83..79.95)))
            .collect();
        let greedy = nearest_neighbor(&points).unwrap();
        if greedy.length() < path_length(&points) {
            better += 1;
        }
    }
    // Random orders are long; the greedy tour should win nearly always
    assert!(better >= 45, "greedy won only {better} of 50");
}

#[test]
fn non_finite_coordinates_are_rejected() {
    let cases = [
        Point::new(f64::NAN, 0.0),
        Point::new(0.0, f64::INFINITY),
        Point::new(f64::NEG_INFINITY, 1.0),
    ];
    for bad in cases {
        let points = vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0), bad];
        let err = order_path(&points, &PathOrderConfig::default()).unwrap_err();
        assert!(err.to_string().contains("point 2"));
    }
}
